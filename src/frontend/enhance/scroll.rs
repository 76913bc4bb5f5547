use gloo_events::EventListener;
use web_sys::{window, HtmlElement};

use crate::backdrop::{skeleton_style, GradientCycle, PatternDrift};
use crate::frontend::dom::{
    query_all, scroll_y, set_style, viewport_size, AnimationFrameLoop, Subscriptions,
};
use crate::scroll::{parallax_transform, parse_parallax_speed, should_reveal};

fn update_parallax(scroll: f64) {
    for element in query_all::<HtmlElement>(".parallax") {
        let speed = parse_parallax_speed(element.get_attribute("data-speed").as_deref());
        set_style(&element, "transform", &parallax_transform(scroll, speed));
    }
}

fn update_reveals() {
    let (_, viewport_height) = viewport_size();
    for element in query_all::<HtmlElement>(".scroll-reveal") {
        let top = element.get_bounding_client_rect().top();
        let class_list = element.class_list();
        let _ = if should_reveal(top, viewport_height) {
            class_list.add_1("loaded")
        } else {
            class_list.remove_1("loaded")
        };
    }
}

fn apply_skeletons() {
    for element in query_all::<HtmlElement>(".skeleton") {
        let style = skeleton_style(
            element.get_attribute("data-width").as_deref(),
            element.get_attribute("data-height").as_deref(),
        );
        element.style().set_css_text(&style);
    }
}

fn background_loop(selector: &str, mut paint: impl FnMut(&[HtmlElement]) + 'static) -> Option<AnimationFrameLoop> {
    let elements = query_all::<HtmlElement>(selector);
    if elements.is_empty() {
        return None;
    }
    Some(AnimationFrameLoop::start(move || paint(&elements)))
}

pub fn install() -> Subscriptions {
    let mut subscriptions = Subscriptions::default();

    apply_skeletons();
    update_parallax(scroll_y());
    update_reveals();

    if let Some(win) = window() {
        subscriptions.hold(EventListener::new(&win, "scroll", |_| {
            update_parallax(scroll_y());
            update_reveals();
        }));
    }

    let mut gradient = GradientCycle::default();
    if let Some(frames) = background_loop(".gradient-bg", move |elements| {
        let background = gradient.advance();
        for element in elements {
            set_style(element, "background", &background);
        }
    }) {
        subscriptions.hold(frames);
    }

    let mut drift = PatternDrift::default();
    if let Some(frames) = background_loop(".pattern-bg", move |elements| {
        let position = drift.advance();
        for element in elements {
            set_style(element, "background-position", &position);
        }
    }) {
        subscriptions.hold(frames);
    }

    subscriptions
}
