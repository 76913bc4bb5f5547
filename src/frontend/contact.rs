use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use gloo_net::http::Request;
use url::Url;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::toast::use_toast;
use super::use_config;
use crate::config::EffectsConfig;
use crate::contact::{
    submit, ContactError, ContactForm as FormValues, ContactResponse, ContactSubmission,
    ContactTransport, Field, FieldFeedback, SimulatedTransport, SENDING_LABEL,
};
use crate::log::{log_event, LogLevel};
use crate::toast::ToastKind;

struct HttpTransport {
    endpoint: Url,
}

impl ContactTransport for HttpTransport {
    fn send<'a>(&'a self, submission: &'a ContactSubmission) -> LocalBoxFuture<'a, Result<ContactResponse, ContactError>> {
        Box::pin(async move {
            let response = Request::post(self.endpoint.as_str())
                .json(submission)
                .map_err(|err| ContactError::Network(err.to_string()))?
                .send()
                .await
                .map_err(|err| ContactError::Network(err.to_string()))?;

            if !response.ok() {
                return Err(ContactError::Status(response.status()));
            }

            response
                .json::<ContactResponse>()
                .await
                .map_err(|err| ContactError::Decode(err.to_string()))
        })
    }
}

fn transport_for(config: &EffectsConfig) -> Rc<dyn ContactTransport> {
    match config.contact_endpoint.clone() {
        Some(endpoint) => Rc::new(HttpTransport { endpoint }),
        None => Rc::new(SimulatedTransport::new(
            config.simulated_delay,
            gloo_timers::future::sleep,
        )),
    }
}

#[derive(Properties, PartialEq)]
struct FormFieldProps {
    field: Field,
    label: AttrValue,
    value: AttrValue,
    #[prop_or_default]
    multiline: bool,
    #[prop_or(AttrValue::Static("text"))]
    input_type: AttrValue,
    on_change: Callback<(Field, String)>,
}

#[function_component(FormField)]
fn form_field(props: &FormFieldProps) -> Html {
    let feedback = use_state(FieldFeedback::default);
    let field = props.field;
    let name = field.as_str();

    let onblur = {
        let feedback = feedback.clone();
        let value = props.value.clone();
        Callback::from(move |_: FocusEvent| feedback.set(FieldFeedback::on_blur(&value)))
    };
    let style = feedback
        .border_color()
        .map(|color| format!("border-color: {color};"));

    let control = if props.multiline {
        let oninput = {
            let feedback = feedback.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |event: InputEvent| {
                let area: HtmlTextAreaElement = event.target_unchecked_into();
                feedback.set(FieldFeedback::on_input());
                on_change.emit((field, area.value()));
            })
        };
        html! {
            <textarea
                id={name}
                name={name}
                rows="5"
                required={field.is_required()}
                value={props.value.clone()}
                style={style}
                oninput={oninput}
                onblur={onblur}
            />
        }
    } else {
        let oninput = {
            let feedback = feedback.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                feedback.set(FieldFeedback::on_input());
                on_change.emit((field, input.value()));
            })
        };
        html! {
            <input
                id={name}
                name={name}
                type={props.input_type.clone()}
                required={field.is_required()}
                value={props.value.clone()}
                style={style}
                oninput={oninput}
                onblur={onblur}
            />
        }
    };

    html! {
        <div class="form-group">
            <label for={name}>{props.label.clone()}</label>
            {control}
        </div>
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let config = use_config();
    let toast = use_toast();
    let values = use_state(FormValues::default);
    let sending = use_state(|| false);
    // Remounting the fields clears their blur feedback after a successful send.
    let generation = use_state(|| 0_u32);
    let transport = use_memo(config.clone(), |config| transport_for(config));

    let on_change = {
        let values = values.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*values).clone();
            *next.field_mut(field) = value;
            values.set(next);
        })
    };

    let onsubmit = {
        let values = values.clone();
        let sending = sending.clone();
        let generation = generation.clone();
        let config = config.clone();
        let transport = transport.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *sending {
                return;
            }

            let form = (*values).clone();
            if let Err(err) = form.validate() {
                log_event(
                    &config,
                    LogLevel::Debug,
                    "contact_invalid",
                    serde_json::json!({ "kind": err.kind() }),
                );
                if let Some(toast) = toast.as_ref() {
                    toast.notify(ToastKind::Error, err.user_message());
                }
                return;
            }

            sending.set(true);
            let values = values.clone();
            let sending = sending.clone();
            let generation = generation.clone();
            let config = config.clone();
            let transport = (*transport).clone();
            let toast = toast.clone();
            spawn_local(async move {
                let deadline = gloo_timers::future::sleep(config.contact_timeout);
                match submit(&form, transport.as_ref(), deadline).await {
                    Ok(submission) => {
                        log_event(
                            &config,
                            LogLevel::Info,
                            "contact_sent",
                            serde_json::json!({ "email_domain": submission.email_domain() }),
                        );
                        if let Some(toast) = toast.as_ref() {
                            toast.notify(ToastKind::Success, submission.success_message());
                        }
                        values.set(FormValues::default());
                        generation.set(generation.wrapping_add(1));
                    }
                    Err(err) => {
                        log_event(
                            &config,
                            LogLevel::Warn,
                            "contact_failed",
                            serde_json::json!({ "kind": err.kind(), "error": err.to_string() }),
                        );
                        if let Some(toast) = toast.as_ref() {
                            toast.notify(ToastKind::Error, err.user_message());
                        }
                    }
                }
                sending.set(false);
            });
        })
    };

    let field = |field: Field, label: &'static str| {
        html! {
            <FormField
                key={format!("{}-{}", field.as_str(), *generation)}
                field={field}
                label={label}
                value={values.field(field).to_string()}
                on_change={on_change.clone()}
            />
        }
    };

    html! {
        <form class="contact-form" id="contactForm" novalidate={true} onsubmit={onsubmit}>
            {field(Field::Name, "Name")}
            <FormField
                key={format!("email-{}", *generation)}
                field={Field::Email}
                label="Email"
                input_type="email"
                value={values.email.clone()}
                on_change={on_change.clone()}
            />
            {field(Field::Subject, "Subject")}
            <FormField
                key={format!("message-{}", *generation)}
                field={Field::Message}
                label="Message"
                multiline={true}
                value={values.message.clone()}
                on_change={on_change.clone()}
            />
            <button type="submit" class="btn btn-primary submit-btn" disabled={*sending}>
                if *sending {
                    <i class="fas fa-spinner fa-spin" aria-hidden="true"></i>
                    {" "}{SENDING_LABEL}
                } else {
                    <i class="fas fa-paper-plane" aria-hidden="true"></i>
                    {" Send Message"}
                }
            </button>
        </form>
    }
}
