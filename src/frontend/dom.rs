use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Node, ScrollBehavior, ScrollToOptions,
    Storage,
};
use yew::prelude::*;

use crate::pointer::{Point, Rect};
use crate::theme::{PreferenceStore, DARK_THEME_CLASS};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn random() -> f64 {
    js_sys::Math::random()
}

pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

pub fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn append_css(element: &HtmlElement, css: &str) {
    let style = element.style();
    let merged = format!("{} {css}", style.css_text());
    style.set_css_text(merged.trim());
}

pub fn create_element(tag: &str, class: &str) -> Option<HtmlElement> {
    let element = document()?.create_element(tag).ok()?.dyn_into::<HtmlElement>().ok()?;
    element.set_class_name(class);
    Some(element)
}

pub fn remove_after(element: Element, delay: Duration) {
    gloo_timers::callback::Timeout::new(millis(delay), move || element.remove()).forget();
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = body() {
        set_style(&body, "overflow", value);
    }
}

pub fn body_has_dark_theme() -> bool {
    body()
        .map(|body| body.class_list().contains(DARK_THEME_CLASS))
        .unwrap_or(false)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn event_point(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<web_sys::MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

pub fn event_closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

pub fn event_target_node(event: &Event) -> Option<Node> {
    event.target()?.dyn_into::<Node>().ok()
}

/// True when a `mouseout` leaves `element` for something outside it.
pub fn pointer_left(event: &Event, element: &Element) -> bool {
    let related = event
        .dyn_ref::<web_sys::MouseEvent>()
        .and_then(|mouse| mouse.related_target())
        .and_then(|target| target.dyn_into::<Node>().ok());
    !element.contains(related.as_ref())
}

pub struct AnimationFrameLoop {
    _pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl AnimationFrameLoop {
    pub fn start<F>(frame: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let pending = Rc::new(RefCell::new(None));
        schedule_frame(Rc::downgrade(&pending), frame);
        Self { _pending: pending }
    }
}

fn schedule_frame<F>(pending: Weak<RefCell<Option<AnimationFrame>>>, mut frame: F)
where
    F: FnMut() + 'static,
{
    let Some(slot) = pending.upgrade() else {
        return;
    };
    let handle = request_animation_frame(move |_| {
        frame();
        schedule_frame(pending, frame);
    });
    *slot.borrow_mut() = Some(handle);
}

pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    pub fn once<F>(element: &Element, threshold: f64, root_margin: &str, on_visible: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut on_visible = Some(on_visible);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }

                    observer.unobserve(&entry.target());
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Default)]
pub struct Subscriptions {
    items: Vec<Box<dyn Any>>,
}

impl Subscriptions {
    pub fn hold<T: 'static>(&mut self, item: T) {
        self.items.push(Box::new(item));
    }

    pub fn extend(&mut self, other: Subscriptions) {
        self.items.extend(other.items);
    }
}

#[hook]
pub fn use_scroll_y() -> f64 {
    let position = use_state(scroll_y);

    {
        let position = position.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| position.set(scroll_y()))
            });
            move || drop(listener)
        });
    }

    *position
}
