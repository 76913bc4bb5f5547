use std::time::Duration;

pub const CURSOR_EASING: f64 = 0.1;
pub const TILT_MAX_DEGREES: f64 = 10.0;
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);
pub const CLICK_BURST_LIFETIME: Duration = Duration::from_millis(500);
pub const TOOLTIP_FADE: Duration = Duration::from_millis(300);
pub const TOOLTIP_SHOW_DELAY: Duration = Duration::from_millis(10);
pub const DRAG_Z_INDEX: &str = "10000";
pub const GRABBING_CURSOR: &str = "grabbing";
/// Empty values clear the inline declaration.
pub const RELEASED_DRAG_STYLES: [(&str, &str); 3] = [("cursor", "grab"), ("position", ""), ("z-index", "")];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorTrail {
    pub pointer: Point,
    pub ring: Point,
    pub hovering: bool,
}

impl CursorTrail {
    pub fn step(&mut self) {
        self.ring.x += (self.pointer.x - self.ring.x) * CURSOR_EASING;
        self.ring.y += (self.pointer.y - self.ring.y) * CURSOR_EASING;
    }

    pub fn ring_style(&self) -> String {
        let (scale, color) = if self.hovering {
            (1.5, "var(--secondary)")
        } else {
            (1.0, "var(--primary)")
        };
        format!(
            "left: {}px; top: {}px; transform: translate(-50%, -50%) scale({scale}); border-color: {color};",
            self.ring.x, self.ring.y
        )
    }

    pub fn dot_style(&self) -> String {
        let (scale, color) = if self.hovering {
            (0.5, "var(--secondary)")
        } else {
            (1.0, "var(--primary)")
        };
        format!(
            "left: {}px; top: {}px; transform: translate(-50%, -50%) scale({scale}); background-color: {color};",
            self.pointer.x, self.pointer.y
        )
    }
}

pub fn tilt_transform(rect: Rect, pointer: Point) -> String {
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    if center_x <= 0.0 || center_y <= 0.0 {
        return TILT_RESET.to_string();
    }

    let x = pointer.x - rect.left;
    let y = pointer.y - rect.top;
    let rotate_y = ((x - center_x) / center_x) * TILT_MAX_DEGREES;
    let rotate_x = ((center_y - y) / center_y) * TILT_MAX_DEGREES;

    format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) scale3d(1.05, 1.05, 1.05)")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(rect: Rect, pointer: Point) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: pointer.x - rect.left - size / 2.0,
            top: pointer.y - rect.top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.5); \
             transform: scale(0); animation: ripple-animation 0.6s linear; width: {size}px; \
             height: {size}px; top: {top}px; left: {left}px; pointer-events: none;",
            size = self.size,
            top = self.top,
            left = self.left
        )
    }
}

pub fn click_burst_style(pointer: Point) -> String {
    format!(
        "position: fixed; width: 20px; height: 20px; border-radius: 50%; \
         background: rgba(67, 97, 238, 0.5); pointer-events: none; z-index: 99999; \
         transform: translate(-50%, -50%) scale(0); animation: click-animation 0.5s ease-out; \
         left: {}px; top: {}px;",
        pointer.x, pointer.y
    )
}

/// Leading-edge throttle: the first event is admitted, later ones are dropped
/// until `reopen`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThrottleGate {
    closed: bool,
}

impl ThrottleGate {
    pub fn admit(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }

    pub fn reopen(&mut self) {
        self.closed = false;
    }
}

pub fn tooltip_anchor(rect: Rect) -> Point {
    Point::new(rect.left + rect.width / 2.0, rect.top)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    grab_offset: Option<Point>,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }

    pub fn start(&mut self, rect: Rect, pointer: Point) {
        self.grab_offset = Some(Point::new(pointer.x - rect.left, pointer.y - rect.top));
    }

    pub fn drag_to(&self, pointer: Point) -> Option<Point> {
        self.grab_offset
            .map(|offset| Point::new(pointer.x - offset.x, pointer.y - offset.y))
    }

    pub fn drag_styles(&self, pointer: Point) -> Option<[(&'static str, String); 4]> {
        let corner = self.drag_to(pointer)?;
        Some([
            ("position", "fixed".to_string()),
            ("left", format!("{}px", corner.x)),
            ("top", format!("{}px", corner.y)),
            ("z-index", DRAG_Z_INDEX.to_string()),
        ])
    }

    pub fn release(&mut self) {
        self.grab_offset = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn ring_eases_ten_percent_per_frame() {
        let mut trail = CursorTrail {
            pointer: Point::new(100.0, 50.0),
            ..CursorTrail::default()
        };
        trail.step();
        assert_eq!(trail.ring, Point::new(10.0, 5.0));
        assert!(trail.dot_style().starts_with("left: 100px; top: 50px;"));
    }

    #[test]
    fn hover_scales_ring_up_and_dot_down() {
        let trail = CursorTrail {
            hovering: true,
            ..CursorTrail::default()
        };
        assert!(trail.ring_style().contains("scale(1.5)"));
        assert!(trail.dot_style().contains("scale(0.5)"));
    }

    #[test]
    fn tilt_is_zero_at_center_and_max_at_corner() {
        assert_eq!(
            tilt_transform(CARD, Point::new(200.0, 100.0)),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1.05, 1.05, 1.05)"
        );
        assert_eq!(
            tilt_transform(CARD, Point::new(300.0, 50.0)),
            "perspective(1000px) rotateX(10deg) rotateY(10deg) scale3d(1.05, 1.05, 1.05)"
        );
        assert_eq!(tilt_transform(Rect::default(), Point::default()), TILT_RESET);
    }

    #[test]
    fn ripple_is_centred_on_pointer() {
        let ripple = Ripple::at(CARD, Point::new(150.0, 75.0));
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.left, -50.0);
        assert_eq!(ripple.top, -75.0);
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let mut drag = DragState::default();
        assert_eq!(drag.drag_to(Point::new(10.0, 10.0)), None);

        drag.start(CARD, Point::new(110.0, 60.0));
        assert_eq!(drag.drag_to(Point::new(510.0, 460.0)), Some(Point::new(500.0, 450.0)));

        drag.release();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn dragged_element_is_lifted_and_released() {
        let mut drag = DragState::default();
        assert!(drag.drag_styles(Point::new(0.0, 0.0)).is_none());

        drag.start(CARD, Point::new(110.0, 60.0));
        let styles = drag.drag_styles(Point::new(210.0, 160.0)).expect("drag is active");
        assert!(styles.contains(&("position", "fixed".to_string())));
        assert!(styles.contains(&("left", "200px".to_string())));
        assert!(styles.contains(&("top", "150px".to_string())));
        assert!(styles.contains(&("z-index", "10000".to_string())));

        drag.release();
        assert!(drag.drag_styles(Point::new(210.0, 160.0)).is_none());
        assert!(RELEASED_DRAG_STYLES.contains(&("position", "")));
        assert!(RELEASED_DRAG_STYLES.contains(&("z-index", "")));
        assert!(RELEASED_DRAG_STYLES.contains(&("cursor", "grab")));
    }

    #[test]
    fn throttle_fires_on_the_leading_edge() {
        let mut gate = ThrottleGate::default();
        assert!(gate.admit());
        assert!(!gate.admit());
        assert!(!gate.admit());

        gate.reopen();
        assert!(gate.admit());
    }

    #[test]
    fn tooltip_sits_above_host_center() {
        assert_eq!(tooltip_anchor(CARD), Point::new(200.0, 50.0));
    }
}
