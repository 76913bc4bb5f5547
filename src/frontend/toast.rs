use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::dom::{body_has_dark_theme, millis};
use super::use_config;
use crate::toast::{Toast, ToastKind, ToastQueue, EXIT_ANIMATION};

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u64),
    Remove(u64),
}

#[derive(Clone, Default, PartialEq)]
pub struct ToastState {
    queue: ToastQueue,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.queue.push(kind, message);
            }
            ToastAction::Dismiss(id) => {
                if !next.queue.dismiss(id) {
                    return self;
                }
            }
            ToastAction::Remove(id) => next.queue.remove(id),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastState>,
}

impl ToastHandle {
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        self.dispatcher.dispatch(ToastAction::Push(kind, message.into()));
    }
}

#[hook]
pub fn use_toast() -> Option<ToastHandle> {
    use_context::<ToastHandle>()
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
    on_remove: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let config = use_config();
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        let duration = config.toast_duration;
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(millis(duration), move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    {
        let on_remove = props.on_remove.clone();
        use_effect_with(props.toast.leaving, move |leaving| {
            let timeout = leaving.then(|| Timeout::new(millis(EXIT_ANIMATION), move || on_remove.emit(id)));
            move || drop(timeout)
        });
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let kind = props.toast.kind;
    html! {
        <div
            class={classes!(
                "toast",
                format!("toast-{}", kind.as_str()),
                body_has_dark_theme().then_some("dark"),
                props.toast.leaving.then_some("removing"),
            )}
            role="status"
        >
            <div class="toast-icon">
                <i class={classes!("fas", kind.icon())} aria-hidden="true"></i>
            </div>
            <div class="toast-content">
                <div class="toast-title">{kind.title()}</div>
                <div class="toast-message">{props.toast.message.clone()}</div>
            </div>
            <button class="toast-close" type="button" aria-label="Dismiss notification" onclick={on_close}>
                <i class="fas fa-times" aria-hidden="true"></i>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let state = use_reducer(ToastState::default);
    let handle = ToastHandle {
        dispatcher: state.dispatcher(),
    };

    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };
    let on_remove = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            {props.children.clone()}
            <div class="toast-container" aria-live="polite">
                { for state.queue.toasts().iter().map(|toast| html! {
                    <ToastItem
                        key={toast.id}
                        toast={toast.clone()}
                        on_dismiss={on_dismiss.clone()}
                        on_remove={on_remove.clone()}
                    />
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}
