use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, Document, HtmlElement, ServiceWorkerRegistration};

use crate::config::EffectsConfig;
use crate::frontend::dom::{
    body, create_element, document, event_closest, media_matches, millis, smooth_scroll_to,
    Subscriptions,
};
use crate::links::{
    classify_href, resolve_internal, LinkTarget, TRANSITION_ACTIVATE_DELAY,
    TRANSITION_NAVIGATE_DELAY,
};
use crate::log::{log_event, LogLevel};
use crate::motion::{
    paused_stylesheet, reduced_motion_stylesheet, Visibility, PAUSED_CLASS, REDUCED_MOTION_QUERY,
    REDUCED_MOTION_STYLE_ID,
};
use crate::scroll::anchor_scroll_target;

const PAUSED_STYLE_ID: &str = "animation-pause-rules";

fn inject_stylesheet(document: &Document, id: &str, css: &str) {
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) else {
        return;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    let _ = head.append_child(&style);
}

fn sync_paused_class(document: &Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let class_list = root.class_list();
    let _ = if Visibility::from_hidden(document.hidden()).pauses_animations() {
        class_list.add_1(PAUSED_CLASS)
    } else {
        class_list.remove_1(PAUSED_CLASS)
    };
}

fn register_service_worker(config: &Rc<EffectsConfig>) {
    let (Some(path), Some(win)) = (config.service_worker_path.clone(), window()) else {
        return;
    };
    let navigator = win.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        return;
    }

    let promise = navigator.service_worker().register(&path);
    let config = config.clone();
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(registration) => {
                let scope = registration
                    .dyn_into::<ServiceWorkerRegistration>()
                    .map(|registration| registration.scope())
                    .unwrap_or_default();
                log_event(
                    &config,
                    LogLevel::Info,
                    "service_worker_registered",
                    serde_json::json!({ "path": path, "scope": scope }),
                );
            }
            Err(err) => {
                log_event(
                    &config,
                    LogLevel::Warn,
                    "service_worker_failed",
                    serde_json::json!({ "path": path, "error": format!("{err:?}") }),
                );
            }
        }
    });
}

fn scroll_to_section(id: &str) {
    let section = document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    if let Some(section) = section {
        smooth_scroll_to(anchor_scroll_target(f64::from(section.offset_top())));
    }
}

fn start_page_transition(config: &EffectsConfig, path: &str) {
    let Some(win) = window() else {
        return;
    };
    let Some(target) = win
        .location()
        .href()
        .ok()
        .and_then(|current| resolve_internal(&current, path))
    else {
        return;
    };
    let (Some(overlay), Some(body)) = (create_element("div", "page-transition"), body()) else {
        return;
    };
    if body.append_child(&overlay).is_err() {
        return;
    }

    log_event(
        config,
        LogLevel::Debug,
        "page_transition",
        serde_json::json!({ "path": target.path() }),
    );

    Timeout::new(millis(TRANSITION_ACTIVATE_DELAY), move || {
        let _ = overlay.class_list().add_1("active");
    })
    .forget();
    Timeout::new(millis(TRANSITION_NAVIGATE_DELAY), move || {
        let _ = win.location().set_href(target.as_str());
    })
    .forget();
}

pub fn install(config: &Rc<EffectsConfig>) -> Subscriptions {
    let mut subscriptions = Subscriptions::default();
    let Some(document) = document() else {
        return subscriptions;
    };

    if media_matches(REDUCED_MOTION_QUERY) {
        inject_stylesheet(&document, REDUCED_MOTION_STYLE_ID, &reduced_motion_stylesheet());
        log_event(config, LogLevel::Info, "reduced_motion_applied", serde_json::json!({}));
    }
    inject_stylesheet(&document, PAUSED_STYLE_ID, &paused_stylesheet());
    sync_paused_class(&document);

    {
        let watched = document.clone();
        subscriptions.hold(EventListener::new(&document, "visibilitychange", move |_| {
            sync_paused_class(&watched);
        }));
    }

    {
        let config = config.clone();
        subscriptions.hold(EventListener::new(&document, "click", move |event| {
            let Some(link) = event_closest(event, "a[href]") else {
                return;
            };
            let Some(href) = link.get_attribute("href") else {
                return;
            };

            match classify_href(&href) {
                LinkTarget::Ignore => event.prevent_default(),
                LinkTarget::Section(id) => {
                    event.prevent_default();
                    scroll_to_section(&id);
                }
                LinkTarget::InternalPage(path) => {
                    event.prevent_default();
                    start_page_transition(&config, &path);
                }
                LinkTarget::External => {}
            }
        }));
    }

    register_service_worker(config);

    subscriptions
}
