use yew::prelude::*;

use super::dom::{document, smooth_scroll_to, use_scroll_y};
use crate::scroll::{back_to_top_visible, scroll_progress};

fn document_heights() -> (f64, f64) {
    document()
        .and_then(|document| document.document_element())
        .map(|root| (f64::from(root.scroll_height()), f64::from(root.client_height())))
        .unwrap_or((0.0, 0.0))
}

#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let scroll = use_scroll_y();
    let (scroll_height, client_height) = document_heights();
    let progress = scroll_progress(scroll, scroll_height, client_height);

    html! {
        <div
            class="scroll-progress"
            style={format!("transform: scaleX({progress}); transform-origin: left;")}
            aria-hidden="true"
        ></div>
    }
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let scroll = use_scroll_y();
    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    html! {
        <button
            id="backToTop"
            class={classes!("back-to-top", back_to_top_visible(scroll).then_some("show"))}
            type="button"
            aria-label="Back to top"
            onclick={onclick}
        >
            <i class="fas fa-arrow-up" aria-hidden="true"></i>
        </button>
    }
}

#[function_component(CurrentYear)]
pub fn current_year() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! { <span id="currentYear">{year.to_string()}</span> }
}
