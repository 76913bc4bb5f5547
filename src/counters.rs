use std::time::Duration;

pub const COUNTER_DURATION: Duration = Duration::from_millis(2_000);
pub const COUNTER_TICK: Duration = Duration::from_millis(16);
pub const SKILL_BAR_DELAY: Duration = Duration::from_millis(300);
pub const VISIBILITY_THRESHOLD: f64 = 0.5;
pub const SKILL_BAR_ROOT_MARGIN: &str = "0px 0px -100px 0px";

#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    target: i64,
    step: f64,
    current: f64,
    suffix: char,
    finished: bool,
}

impl Counter {
    /// Only an attribute of exactly `100` gets the `%` suffix.
    pub fn from_attribute(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let target = trimmed.parse::<i64>().ok()?;
        let ticks = COUNTER_DURATION.as_millis() as f64 / COUNTER_TICK.as_millis() as f64;
        let suffix = if raw == "100" { '%' } else { '+' };

        Some(Self {
            target,
            step: target as f64 / ticks,
            current: 0.0,
            suffix,
            finished: false,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> String {
        self.current += self.step;

        if self.current >= self.target as f64 || self.step <= 0.0 {
            self.finished = true;
            format!("{}{}", self.target, self.suffix)
        } else {
            format!("{}{}", self.current.floor() as i64, self.suffix)
        }
    }

    pub fn run_to_end(mut self) -> String {
        loop {
            let text = self.tick();
            if self.finished {
                return text;
            }
        }
    }
}

pub fn parse_skill_width(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().trim_end_matches('%').parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 100.0))
}

pub fn skill_width_style(width: f64) -> String {
    format!("width: {width}%;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_marker_ends_with_percent() {
        let counter = Counter::from_attribute("100").expect("numeric target");
        assert_eq!(counter.run_to_end(), "100%");
    }

    #[test]
    fn other_targets_end_with_plus() {
        let counter = Counter::from_attribute("50").expect("numeric target");
        assert_eq!(counter.run_to_end(), "50+");

        let counter = Counter::from_attribute("1000").expect("numeric target");
        assert_eq!(counter.run_to_end(), "1000+");
    }

    #[test]
    fn padded_hundred_counts_with_plus() {
        let counter = Counter::from_attribute(" 100").expect("numeric target");
        assert_eq!(counter.run_to_end(), "100+");

        let counter = Counter::from_attribute("100 ").expect("numeric target");
        assert_eq!(counter.run_to_end(), "100+");
    }

    #[test]
    fn intermediate_values_are_floored() {
        let mut counter = Counter::from_attribute("250").expect("numeric target");
        assert_eq!(counter.tick(), "2+");
        assert!(!counter.is_finished());
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = Counter::from_attribute("0").expect("numeric target");
        assert_eq!(counter.tick(), "0+");
        assert!(counter.is_finished());
    }

    #[test]
    fn malformed_targets_disable_the_counter() {
        assert!(Counter::from_attribute("lots").is_none());
        assert!(Counter::from_attribute("").is_none());
    }

    #[test]
    fn skill_width_is_clamped_percentage() {
        assert_eq!(parse_skill_width(Some("85")), Some(85.0));
        assert_eq!(parse_skill_width(Some("120%")), Some(100.0));
        assert_eq!(parse_skill_width(Some("wide")), None);
        assert_eq!(skill_width_style(85.0), "width: 85%;");
    }
}
