pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const REDUCED_MOTION_STYLE_ID: &str = "reduced-motion-override";
pub const PAUSED_CLASS: &str = "animations-paused";
pub const NEAR_ZERO_DURATION: &str = "0.001ms";

pub fn reduced_motion_stylesheet() -> String {
    format!(
        "*, *::before, *::after {{ \
         animation-duration: {NEAR_ZERO_DURATION} !important; \
         animation-iteration-count: 1 !important; \
         transition-duration: {NEAR_ZERO_DURATION} !important; \
         scroll-behavior: auto !important; }}"
    )
}

pub fn paused_stylesheet() -> String {
    format!(
        ".{PAUSED_CLASS} *, .{PAUSED_CLASS} *::before, .{PAUSED_CLASS} *::after {{ \
         animation-play-state: paused !important; }}"
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            Self::Hidden
        } else {
            Self::Visible
        }
    }

    pub fn pauses_animations(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css_time_ms(value: &str) -> Option<f64> {
        let value = value.trim().trim_end_matches("!important").trim();
        if let Some(ms) = value.strip_suffix("ms") {
            return ms.trim().parse::<f64>().ok();
        }
        value
            .strip_suffix('s')
            .and_then(|seconds| seconds.trim().parse::<f64>().ok())
            .map(|seconds| seconds * 1_000.0)
    }

    fn declared_durations(stylesheet: &str) -> Vec<f64> {
        stylesheet
            .split(';')
            .map(|segment| segment.rsplit_once('{').map_or(segment, |(_, declaration)| declaration))
            .filter_map(|declaration| declaration.split_once(':'))
            .filter(|(property, _)| property.trim().ends_with("-duration"))
            .filter_map(|(_, value)| css_time_ms(value))
            .collect()
    }

    #[test]
    fn reduced_motion_overrides_every_duration_to_near_zero() {
        let stylesheet = reduced_motion_stylesheet();
        let durations = declared_durations(&stylesheet);

        assert_eq!(durations.len(), 2);
        let ceiling = css_time_ms(NEAR_ZERO_DURATION).expect("valid css time");
        assert!(durations.iter().all(|duration| *duration <= ceiling));
        assert!(stylesheet.starts_with("*, *::before, *::after"));
    }

    #[test]
    fn hidden_tab_pauses() {
        assert!(Visibility::from_hidden(true).pauses_animations());
        assert!(!Visibility::from_hidden(false).pauses_animations());
        assert!(paused_stylesheet().contains("animation-play-state: paused"));
    }

    #[test]
    fn css_time_units() {
        assert_eq!(css_time_ms("0.3s"), Some(300.0));
        assert_eq!(css_time_ms("800ms"), Some(800.0));
        assert_eq!(css_time_ms("0.001ms !important"), Some(0.001));
        assert_eq!(css_time_ms("fast"), None);
    }
}
