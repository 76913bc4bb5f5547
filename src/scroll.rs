pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.9;
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_THRESHOLD
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// The id of the section under the scroll position. When ranges overlap the
/// later section wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.offset_top - SECTION_ACTIVATION_OFFSET;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

pub fn nav_link_is_active(href: &str, active_id: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active_id) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top <= viewport_height * REVEAL_VIEWPORT_FRACTION
}

pub fn scroll_progress(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }

    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn parse_parallax_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    let offset = -(scroll_y * speed);
    format!("translate3d(0, {offset}px, 0)")
}

pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    offset_top - ANCHOR_SCROLL_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, offset_top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            offset_top,
            height,
        }
    }

    #[test]
    fn thresholds_are_strict() {
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }

    #[test]
    fn active_section_uses_activation_offset() {
        let sections = vec![
            section("home", 0.0, 600.0),
            section("about", 600.0, 800.0),
            section("contact", 1400.0, 500.0),
        ];

        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 499.0), Some("home"));
        assert_eq!(active_section(&sections, 500.0), Some("about"));
        assert_eq!(active_section(&sections, 1300.0), Some("contact"));
        assert_eq!(active_section(&sections, 5000.0), None);
    }

    #[test]
    fn only_matching_link_is_active() {
        assert!(nav_link_is_active("#about", Some("about")));
        assert!(!nav_link_is_active("#home", Some("about")));
        assert!(!nav_link_is_active("/about", Some("about")));
        assert!(!nav_link_is_active("#about", None));
    }

    #[test]
    fn reveal_threshold_is_ninety_percent() {
        assert!(should_reveal(900.0, 1000.0));
        assert!(!should_reveal(901.0, 1000.0));
    }

    #[test]
    fn progress_handles_short_documents() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn parallax_speed_defaults_when_missing_or_malformed() {
        assert_eq!(parse_parallax_speed(None), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parse_parallax_speed(Some("fast")), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parse_parallax_speed(Some("0.2")), 0.2);
        assert_eq!(parallax_transform(100.0, 0.5), "translate3d(0, -50px, 0)");
    }
}
