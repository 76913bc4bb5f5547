use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

use crate::config::EffectsConfig;
use crate::frontend::dom::{
    document, event_closest, event_point, millis, pointer_left, viewport_size, AnimationFrameLoop,
    Subscriptions,
};
use crate::pointer::{CursorTrail, ThrottleGate};

const INTERACTIVE: &str = "a, button, .project-card, .skill-item, .filter-btn, input, textarea";
const RESIZE_THROTTLE: Duration = Duration::from_millis(200);

fn cursor_element(selector: &str) -> Option<HtmlElement> {
    document()?.query_selector(selector).ok()??.dyn_into::<HtmlElement>().ok()
}

pub fn install(config: &Rc<EffectsConfig>) -> Subscriptions {
    let mut subscriptions = Subscriptions::default();
    let (Some(ring), Some(dot), Some(document), Some(win)) = (
        cursor_element(".custom-cursor"),
        cursor_element(".cursor-dot"),
        document(),
        window(),
    ) else {
        return subscriptions;
    };

    let trail = Rc::new(RefCell::new(CursorTrail::default()));
    let enabled = Rc::new(Cell::new(!config.is_mobile_width(viewport_size().0)));

    {
        let trail = trail.clone();
        subscriptions.hold(EventListener::new(&document, "mousemove", move |event| {
            if let Some(point) = event_point(event) {
                trail.borrow_mut().pointer = point;
            }
        }));
    }

    {
        let trail = trail.clone();
        subscriptions.hold(EventListener::new(&document, "mouseover", move |event| {
            if event_closest(event, INTERACTIVE).is_some() {
                trail.borrow_mut().hovering = true;
            }
        }));
    }

    {
        let trail = trail.clone();
        subscriptions.hold(EventListener::new(&document, "mouseout", move |event| {
            if let Some(element) = event_closest(event, INTERACTIVE) {
                if pointer_left(event, &element) {
                    trail.borrow_mut().hovering = false;
                }
            }
        }));
    }

    {
        let enabled = enabled.clone();
        let config = config.clone();
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let gate = Rc::new(RefCell::new(ThrottleGate::default()));
        subscriptions.hold(EventListener::new(&win, "resize", move |_| {
            if !gate.borrow_mut().admit() {
                return;
            }
            enabled.set(!config.is_mobile_width(viewport_size().0));
            let gate = gate.clone();
            *pending.borrow_mut() = Some(Timeout::new(millis(RESIZE_THROTTLE), move || {
                gate.borrow_mut().reopen();
            }));
        }));
    }

    subscriptions.hold(AnimationFrameLoop::start(move || {
        if !enabled.get() {
            let _ = ring.style().set_property("display", "none");
            let _ = dot.style().set_property("display", "none");
            return;
        }

        let mut trail = trail.borrow_mut();
        trail.step();
        ring.style().set_css_text(&trail.ring_style());
        dot.style().set_css_text(&trail.dot_style());
    }));

    subscriptions
}
