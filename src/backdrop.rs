use std::time::Duration;

pub const PARTICLE_COUNT: usize = 50;
pub const FLOATING_SHAPE_COUNT: usize = 8;
pub const SPLIT_TEXT_STAGGER_SECONDS: f64 = 0.1;
pub const TYPEWRITER_START: Duration = Duration::from_millis(1_000);
pub const TYPEWRITER_STEP: Duration = Duration::from_millis(100);
pub const DEFAULT_SCROLL_ANIMATION: &str = "fadeInUp";
pub const SCROLL_ANIMATION_THRESHOLD: f64 = 0.1;
pub const SCROLL_ANIMATION_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub trait Sampler {
    fn sample(&mut self) -> f64;
}

impl<F> Sampler for F
where
    F: FnMut() -> f64,
{
    fn sample(&mut self) -> f64 {
        self()
    }
}

fn channel(sampler: &mut dyn Sampler) -> u8 {
    (sampler.sample() * 255.0).floor().clamp(0.0, 255.0) as u8
}

fn random_gradient(sampler: &mut dyn Sampler) -> String {
    let from = (channel(sampler), channel(sampler), channel(sampler));
    let to = (channel(sampler), channel(sampler), channel(sampler));
    format!(
        "linear-gradient(45deg, rgba({}, {}, {}, 0.3), rgba({}, {}, {}, 0.1))",
        from.0, from.1, from.2, to.0, to.1, to.2
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub duration: f64,
    pub delay: f64,
    pub background: String,
}

impl Particle {
    pub fn style(&self, scroll_y: f64, index: usize) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}%; top: {top}%; \
             animation-duration: {duration}s; animation-delay: {delay}s; background: {background}; \
             transform: translateY({offset}px);",
            size = self.size,
            left = self.left,
            top = self.top,
            duration = self.duration,
            delay = self.delay,
            background = self.background,
            offset = particle_offset(scroll_y, index),
        )
    }
}

pub fn generate_particles(count: usize, sampler: &mut dyn Sampler) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            size: sampler.sample() * 20.0 + 5.0,
            left: sampler.sample() * 100.0,
            top: sampler.sample() * 100.0,
            duration: sampler.sample() * 20.0 + 10.0,
            delay: sampler.sample() * 5.0,
            background: random_gradient(sampler),
        })
        .collect()
}

pub fn particle_offset(scroll_y: f64, index: usize) -> f64 {
    let speed = ((index % 3) + 1) as f64 * 0.5;
    scroll_y * speed * 0.1
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingShape {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub duration: f64,
    pub delay: f64,
    pub opacity: f64,
    pub background: String,
}

impl FloatingShape {
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}%; top: {top}%; \
             animation: floatShape {duration}s infinite linear {delay}s; opacity: {opacity}; \
             background: {background};",
            size = self.size,
            left = self.left,
            top = self.top,
            duration = self.duration,
            delay = self.delay,
            opacity = self.opacity,
            background = self.background,
        )
    }
}

pub fn generate_shapes(count: usize, sampler: &mut dyn Sampler) -> Vec<FloatingShape> {
    (0..count)
        .map(|_| FloatingShape {
            size: sampler.sample() * 100.0 + 50.0,
            left: sampler.sample() * 100.0,
            top: sampler.sample() * 100.0,
            duration: sampler.sample() * 20.0 + 10.0,
            delay: sampler.sample() * 5.0,
            opacity: sampler.sample() * 0.1 + 0.05,
            background: random_gradient(sampler),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GradientCycle {
    hue: f64,
}

impl GradientCycle {
    pub fn advance(&mut self) -> String {
        self.hue = (self.hue + 0.5) % 360.0;
        let hue = self.hue;
        format!(
            "linear-gradient(45deg, hsl({hue}, 100%, 50%), hsl({}, 100%, 50%), hsl({}, 100%, 50%))",
            (hue + 90.0) % 360.0,
            (hue + 180.0) % 360.0
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PatternDrift {
    x: f64,
    y: f64,
}

impl PatternDrift {
    pub fn advance(&mut self) -> String {
        self.x = (self.x + 0.5) % 100.0;
        self.y = (self.y + 0.3) % 100.0;
        format!("{}% {}%", self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SplitGlyph {
    pub text: String,
    pub style: String,
}

pub fn split_text(text: &str) -> Vec<SplitGlyph> {
    text.chars()
        .enumerate()
        .map(|(index, character)| SplitGlyph {
            text: if character == ' ' {
                '\u{a0}'.to_string()
            } else {
                character.to_string()
            },
            style: format!(
                "display: inline-block; opacity: 0; animation: fadeInUp 0.5s ease {}s forwards;",
                index as f64 * SPLIT_TEXT_STAGGER_SECONDS
            ),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterReveal {
    revealed: usize,
    total: usize,
}

impl TypewriterReveal {
    pub fn new(text: &str) -> Self {
        Self {
            revealed: 0,
            total: text.chars().count(),
        }
    }

    pub fn step(&mut self) -> usize {
        self.revealed = (self.revealed + 1).min(self.total);
        self.revealed
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.total
    }
}

pub fn typewriter_frame(text: &str, revealed: usize) -> (String, f64) {
    let total = text.chars().count();
    if total == 0 {
        return (String::new(), 100.0);
    }

    let revealed = revealed.min(total);
    let visible: String = text.chars().take(revealed).collect();
    (visible, revealed as f64 / total as f64 * 100.0)
}

pub fn skeleton_style(width: Option<&str>, height: Option<&str>) -> String {
    format!(
        "position: relative; overflow: hidden; width: {}; height: {}; \
         background: linear-gradient(90deg, #f0f0f0 25%, #e0e0e0 50%, #f0f0f0 75%); \
         background-size: 200% 100%; animation: loading 1.5s infinite; border-radius: 4px;",
        width.unwrap_or("100%"),
        height.unwrap_or("20px")
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollAnimation {
    pub name: String,
    pub delay: Duration,
}

impl ScrollAnimation {
    pub fn from_attributes(animation: Option<&str>, delay: Option<&str>) -> Self {
        let name = animation
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_SCROLL_ANIMATION)
            .to_string();
        let delay = delay
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or_default();

        Self { name, delay }
    }

    pub fn style(&self) -> String {
        format!("animation: {} 1s ease forwards; opacity: 1;", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn particles_respect_ranges() {
        let mut low = constant(0.0);
        let mut high = constant(0.999);

        let small = generate_particles(PARTICLE_COUNT, &mut low);
        let large = generate_particles(3, &mut high);

        assert_eq!(small.len(), PARTICLE_COUNT);
        assert_eq!(small[0].size, 5.0);
        assert!(large.iter().all(|particle| particle.size < 25.0 && particle.duration < 30.0));
        assert_eq!(
            small[0].background,
            "linear-gradient(45deg, rgba(0, 0, 0, 0.3), rgba(0, 0, 0, 0.1))"
        );
    }

    #[test]
    fn particle_speed_cycles_every_three() {
        assert!((particle_offset(100.0, 0) - 5.0).abs() < 1e-9);
        assert!((particle_offset(100.0, 2) - 15.0).abs() < 1e-9);
        assert_eq!(particle_offset(100.0, 3), particle_offset(100.0, 0));
    }

    #[test]
    fn shapes_stay_faint() {
        let mut high = constant(0.999);
        let shapes = generate_shapes(FLOATING_SHAPE_COUNT, &mut high);
        assert_eq!(shapes.len(), FLOATING_SHAPE_COUNT);
        assert!(shapes.iter().all(|shape| shape.opacity < 0.15 && shape.size < 150.0));
    }

    #[test]
    fn gradient_hue_wraps() {
        let mut cycle = GradientCycle::default();
        let first = cycle.advance();
        assert!(first.starts_with("linear-gradient(45deg, hsl(0.5, 100%, 50%), hsl(90.5"));

        for _ in 0..719 {
            cycle.advance();
        }
        assert!(cycle.advance().contains("hsl(0.5, 100%, 50%)"));
    }

    #[test]
    fn split_text_preserves_spaces() {
        let glyphs = split_text("a b");
        assert_eq!(glyphs.len(), 3);
        assert_eq!(glyphs[1].text, "\u{a0}");
        assert!(glyphs[2].style.contains("0.2s forwards"));
    }

    #[test]
    fn typewriter_width_is_proportional() {
        assert_eq!(typewriter_frame("abcd", 1), ("a".to_string(), 25.0));
        assert_eq!(typewriter_frame("abcd", 9), ("abcd".to_string(), 100.0));
    }

    #[test]
    fn typewriter_reveal_finishes_after_last_character() {
        let mut reveal = TypewriterReveal::new("abc");
        assert_eq!(reveal.step(), 1);
        assert_eq!(reveal.step(), 2);
        assert!(!reveal.is_finished());
        assert_eq!(reveal.step(), 3);
        assert!(reveal.is_finished());
        assert_eq!(reveal.step(), 3);

        let mut empty = TypewriterReveal::new("");
        assert_eq!(empty.step(), 0);
        assert!(empty.is_finished());
    }

    #[test]
    fn scroll_animation_defaults() {
        let animation = ScrollAnimation::from_attributes(None, Some("oops"));
        assert_eq!(animation.name, DEFAULT_SCROLL_ANIMATION);
        assert_eq!(animation.delay, Duration::ZERO);

        let animation = ScrollAnimation::from_attributes(Some("zoomIn"), Some("200"));
        assert_eq!(animation.delay, Duration::from_millis(200));
        assert_eq!(animation.style(), "animation: zoomIn 1s ease forwards; opacity: 1;");
    }

    #[test]
    fn skeleton_uses_default_dimensions() {
        let style = skeleton_style(None, Some("2rem"));
        assert!(style.contains("width: 100%;"));
        assert!(style.contains("height: 2rem;"));
    }
}
