use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use yew::prelude::*;

use super::dom::{body, document, media_matches, LocalStorage};
use super::use_config;
use crate::log::{log_event, LogLevel};
use crate::motion::REDUCED_MOTION_QUERY;
use crate::theme::{resolve_theme, toggle_theme, Theme, DARK_THEME_CLASS};

fn system_prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

fn apply_theme(theme: Theme) {
    if let Some(body) = body() {
        let class_list = body.class_list();
        let _ = if theme.is_dark() {
            class_list.add_1(DARK_THEME_CLASS)
        } else {
            class_list.remove_1(DARK_THEME_CLASS)
        };
    }
}

fn apply_theme_with_transition(theme: Theme) {
    if media_matches(REDUCED_MOTION_QUERY) {
        apply_theme(theme);
        return;
    }

    let Some(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || {
        apply_theme(theme);
    });

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let config = use_config();
    let theme = use_state(|| resolve_theme(&LocalStorage, system_prefers_dark()));

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = toggle_theme(&LocalStorage, *theme);
            apply_theme_with_transition(next);
            log_event(
                &config,
                LogLevel::Info,
                "theme_changed",
                serde_json::json!({ "theme": next.as_str() }),
            );
            theme.set(next);
        })
    };

    html! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            aria-label={(*theme).toggle_label()}
            aria-pressed={(*theme).is_dark().to_string()}
            onclick={on_toggle}
        >
            <i class={classes!("fas", (*theme).icon_class())} aria-hidden="true"></i>
        </button>
    }
}
