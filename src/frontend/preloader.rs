use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use super::dom::{millis, query_all, random, set_body_overflow};
use super::use_config;
use crate::log::{log_event, LogLevel};
use crate::preloader::{status_text, Preloader, PreloaderTick, FADE_DELAY, TICK_INTERVAL};

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Loading { progress: f64, status: &'static str },
    Finishing,
    Hidden,
}

fn reveal_sections() {
    set_body_overflow("auto");
    for section in query_all::<web_sys::Element>(".section") {
        let _ = section.class_list().add_1("loaded");
    }
}

#[function_component(PreloaderOverlay)]
pub fn preloader_overlay() -> Html {
    let config = use_config();
    let phase = use_state(|| Phase::Loading {
        progress: 0.0,
        status: status_text(0.0),
    });

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let mut preloader = Preloader::default();
            let fade: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

            let tick_fade = fade.clone();
            let tick_interval = interval.clone();
            *interval.borrow_mut() = Some(Interval::new(millis(TICK_INTERVAL), move || {
                if preloader.is_complete() {
                    return;
                }

                match preloader.advance(random()) {
                    PreloaderTick::Loading { progress, status } => {
                        phase.set(Phase::Loading { progress, status });
                    }
                    PreloaderTick::Complete => {
                        phase.set(Phase::Finishing);

                        let phase = phase.clone();
                        let config = config.clone();
                        let finished_interval = tick_interval.clone();
                        *tick_fade.borrow_mut() = Some(Timeout::new(millis(FADE_DELAY), move || {
                            finished_interval.borrow_mut().take();
                            phase.set(Phase::Hidden);
                            reveal_sections();
                            log_event(&config, LogLevel::Debug, "preloader_finished", serde_json::json!({}));
                        }));
                    }
                }
            }));

            move || {
                interval.borrow_mut().take();
                fade.borrow_mut().take();
            }
        });
    }

    let (progress, status) = match *phase {
        Phase::Loading { progress, status } => (progress, status),
        Phase::Finishing | Phase::Hidden => (100.0, status_text(100.0)),
    };
    let overlay_style = matches!(*phase, Phase::Hidden).then_some("opacity: 0; visibility: hidden;");

    html! {
        <div class="preloader" style={overlay_style} aria-hidden={matches!(*phase, Phase::Hidden).to_string()}>
            <div class="loader">
                <div class="progress-bar">
                    <div class="progress-fill" style={format!("width: {progress}%;")}></div>
                </div>
                <p class="loading-text">{status}</p>
            </div>
        </div>
    }
}
