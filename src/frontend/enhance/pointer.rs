use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

use crate::frontend::dom::{
    append_css, body, create_element, document, element_rect, event_closest, event_point, millis,
    pointer_left, remove_after, set_style, Subscriptions,
};
use crate::pointer::{
    click_burst_style, tilt_transform, tooltip_anchor, DragState, Ripple, CLICK_BURST_LIFETIME,
    GRABBING_CURSOR, RELEASED_DRAG_STYLES, RIPPLE_LIFETIME, TILT_RESET, TOOLTIP_FADE,
    TOOLTIP_SHOW_DELAY,
};

const RIPPLE_HOSTS: &str = ".btn, .nav-link, .project-link, .social-link";
const TOOLTIP_GAP: f64 = 10.0;

fn spawn_ripple(event: &Event) {
    let (Some(host), Some(point)) = (event_closest(event, RIPPLE_HOSTS), event_point(event)) else {
        return;
    };
    let Some(ripple) = create_element("span", "ripple") else {
        return;
    };

    ripple
        .style()
        .set_css_text(&Ripple::at(element_rect(&host), point).style());
    if host.append_child(&ripple).is_ok() {
        remove_after(ripple.into(), RIPPLE_LIFETIME);
    }
}

fn spawn_click_burst(event: &Event) {
    let (Some(point), Some(body)) = (event_point(event), body()) else {
        return;
    };
    let Some(burst) = create_element("div", "click-effect") else {
        return;
    };

    burst.style().set_css_text(&click_burst_style(point));
    if body.append_child(&burst).is_ok() {
        remove_after(burst.into(), CLICK_BURST_LIFETIME);
    }
}

fn show_tooltip(host: &Element) -> Option<HtmlElement> {
    let text = host.get_attribute("data-tooltip")?;
    let tooltip = create_element("div", "tooltip")?;
    tooltip.set_text_content(Some(&text));
    body()?.append_child(&tooltip).ok()?;

    let anchor = tooltip_anchor(element_rect(host));
    let left = anchor.x - f64::from(tooltip.offset_width()) / 2.0;
    let top = anchor.y - f64::from(tooltip.offset_height()) - TOOLTIP_GAP;
    append_css(&tooltip, &format!("position: fixed; left: {left}px; top: {top}px;"));

    let fading_in = tooltip.clone();
    Timeout::new(millis(TOOLTIP_SHOW_DELAY), move || {
        set_style(&fading_in, "opacity", "1");
    })
    .forget();

    Some(tooltip)
}

fn hide_tooltip(tooltip: HtmlElement) {
    set_style(&tooltip, "opacity", "0");
    remove_after(tooltip.into(), TOOLTIP_FADE);
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    let class_list = element.class_list();
    let _ = if on {
        class_list.add_1(class)
    } else {
        class_list.remove_1(class)
    };
}

pub fn install() -> Subscriptions {
    let mut subscriptions = Subscriptions::default();
    let Some(document) = document() else {
        return subscriptions;
    };

    subscriptions.hold(EventListener::new(&document, "click", |event| {
        spawn_ripple(event);
        spawn_click_burst(event);
    }));

    let tooltip: Rc<RefCell<Option<HtmlElement>>> = Rc::new(RefCell::new(None));

    {
        let tooltip = tooltip.clone();
        subscriptions.hold(EventListener::new(&document, "mouseover", move |event| {
            if let Some(glow) = event_closest(event, ".glow-on-hover") {
                toggle_class(&glow, "glow", true);
            }

            if let Some(host) = event_closest(event, "[data-tooltip]") {
                let mut current = tooltip.borrow_mut();
                if current.is_none() {
                    *current = show_tooltip(&host);
                }
            }
        }));
    }

    subscriptions.hold(EventListener::new(&document, "mouseout", move |event| {
        if let Some(glow) = event_closest(event, ".glow-on-hover") {
            if pointer_left(event, &glow) {
                toggle_class(&glow, "glow", false);
            }
        }

        if let Some(card) = event_closest(event, ".tilt-effect") {
            if pointer_left(event, &card) {
                if let Ok(card) = card.dyn_into::<HtmlElement>() {
                    set_style(&card, "transform", TILT_RESET);
                }
            }
        }

        if let Some(host) = event_closest(event, "[data-tooltip]") {
            if pointer_left(event, &host) {
                if let Some(current) = tooltip.borrow_mut().take() {
                    hide_tooltip(current);
                }
            }
        }
    }));

    let drag = Rc::new(RefCell::new(DragState::default()));
    let dragged: Rc<RefCell<Option<HtmlElement>>> = Rc::new(RefCell::new(None));

    {
        let drag = drag.clone();
        let dragged = dragged.clone();
        subscriptions.hold(EventListener::new(&document, "mousedown", move |event| {
            let Some(element) = event_closest(event, ".draggable") else {
                return;
            };
            let (Some(point), Ok(element)) = (event_point(event), element.dyn_into::<HtmlElement>()) else {
                return;
            };
            drag.borrow_mut().start(element_rect(&element), point);
            set_style(&element, "cursor", GRABBING_CURSOR);
            *dragged.borrow_mut() = Some(element);
        }));
    }

    {
        let drag = drag.clone();
        let dragged = dragged.clone();
        subscriptions.hold(EventListener::new(&document, "mousemove", move |event| {
            if let Some(card) = event_closest(event, ".tilt-effect") {
                if let (Some(point), Ok(card)) = (event_point(event), card.dyn_into::<HtmlElement>()) {
                    set_style(&card, "transform", &tilt_transform(element_rect(&card), point));
                }
            }

            let Some(point) = event_point(event) else {
                return;
            };
            let (Some(styles), Some(element)) = (drag.borrow().drag_styles(point), dragged.borrow().clone()) else {
                return;
            };
            for (property, value) in &styles {
                set_style(&element, property, value);
            }
        }));
    }

    subscriptions.hold(EventListener::new(&document, "mouseup", move |_| {
        drag.borrow_mut().release();
        if let Some(element) = dragged.borrow_mut().take() {
            for (property, value) in RELEASED_DRAG_STYLES {
                set_style(&element, property, value);
            }
        }
    }));

    subscriptions
}
