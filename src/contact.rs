use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;

use futures_util::future::{self, Either, LocalBoxFuture};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub const SENDING_LABEL: &str = "Sending...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Subject)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let submission = ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        for field in [Field::Name, Field::Email, Field::Message] {
            if submission.field(field).is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        if !is_valid_email(&submission.email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(submission)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Domain part of the sender address, safe to log.
    pub fn email_domain(&self) -> &str {
        self.email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("unknown")
    }

    pub fn success_message(&self) -> String {
        format!(
            "Thank you, {}! Your message has been sent successfully. I'll get back to you soon.",
            self.name
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingField(Field),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("contact request timed out")]
    Timeout,
    #[error("contact request failed: {0}")]
    Network(String),
    #[error("contact endpoint responded with status {0}")]
    Status(u16),
    #[error("contact endpoint returned an unreadable body: {0}")]
    Decode(String),
    #[error("contact endpoint rejected the message")]
    Rejected,
}

impl ContactError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::InvalidEmail => "invalid_email",
            Self::Timeout => "timeout",
            Self::Network(_) => "network",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::InvalidEmail)
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField(_) | Self::InvalidEmail => self.to_string(),
            Self::Rejected => "Something went wrong. Please try again.".to_string(),
            Self::Timeout | Self::Network(_) | Self::Status(_) | Self::Decode(_) => {
                "An error occurred. Please try again later.".to_string()
            }
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub trait ContactTransport {
    fn send<'a>(&'a self, submission: &'a ContactSubmission) -> LocalBoxFuture<'a, Result<ContactResponse, ContactError>>;
}

pub struct SimulatedTransport<S> {
    delay: Duration,
    sleep: S,
}

impl<S, F> SimulatedTransport<S>
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()> + 'static,
{
    pub fn new(delay: Duration, sleep: S) -> Self {
        Self { delay, sleep }
    }
}

impl<S, F> ContactTransport for SimulatedTransport<S>
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()> + 'static,
{
    fn send<'a>(&'a self, _submission: &'a ContactSubmission) -> LocalBoxFuture<'a, Result<ContactResponse, ContactError>> {
        let wait = (self.sleep)(self.delay);
        Box::pin(async move {
            wait.await;
            Ok(ContactResponse { success: true })
        })
    }
}

/// Sends `submission`, giving up with [`ContactError::Timeout`] once
/// `deadline` resolves first.
pub async fn send_with_deadline<T, D>(
    transport: &T,
    submission: &ContactSubmission,
    deadline: D,
) -> Result<ContactResponse, ContactError>
where
    T: ContactTransport + ?Sized,
    D: Future<Output = ()>,
{
    let send = transport.send(submission);
    futures_util::pin_mut!(deadline);

    let response = match future::select(send, deadline).await {
        Either::Left((result, _)) => result?,
        Either::Right(((), _)) => return Err(ContactError::Timeout),
    };

    if response.success {
        Ok(response)
    } else {
        Err(ContactError::Rejected)
    }
}

pub async fn submit<T, D>(form: &ContactForm, transport: &T, deadline: D) -> Result<ContactSubmission, ContactError>
where
    T: ContactTransport + ?Sized,
    D: Future<Output = ()>,
{
    let submission = form.validate()?;
    send_with_deadline(transport, &submission, deadline).await?;
    Ok(submission)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldFeedback {
    #[default]
    Neutral,
    Empty,
    Filled,
}

impl FieldFeedback {
    pub fn on_blur(value: &str) -> Self {
        if value.trim().is_empty() {
            Self::Empty
        } else {
            Self::Filled
        }
    }

    pub fn on_input() -> Self {
        Self::Neutral
    }

    pub fn border_color(self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Empty => Some("#ef4444"),
            Self::Filled => Some("#10b981"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingTransport {
        calls: Cell<usize>,
        response: Result<ContactResponse, ContactError>,
    }

    impl CountingTransport {
        fn replying(response: Result<ContactResponse, ContactError>) -> Self {
            Self {
                calls: Cell::new(0),
                response,
            }
        }
    }

    impl ContactTransport for CountingTransport {
        fn send<'a>(&'a self, _submission: &'a ContactSubmission) -> LocalBoxFuture<'a, Result<ContactResponse, ContactError>> {
            self.calls.set(self.calls.get() + 1);
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }

    struct HangingTransport;

    impl ContactTransport for HangingTransport {
        fn send<'a>(&'a self, _submission: &'a ContactSubmission) -> LocalBoxFuture<'a, Result<ContactResponse, ContactError>> {
            Box::pin(future::pending())
        }
    }

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: String::new(),
            message: message.to_string(),
        }
    }

    fn no_deadline() -> future::Pending<()> {
        future::pending()
    }

    #[tokio::test]
    async fn empty_required_field_never_reaches_transport() {
        let transport = CountingTransport::replying(Ok(ContactResponse { success: true }));

        let result = submit(&form("Ada", "a@b.com", "   "), &transport, no_deadline()).await;

        assert_eq!(result, Err(ContactError::MissingField(Field::Message)));
        assert_eq!(transport.calls.get(), 0);
        assert!(result.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_before_sending() {
        let transport = CountingTransport::replying(Ok(ContactResponse { success: true }));

        let result = submit(&form("Ada", "abc", "Hello"), &transport, no_deadline()).await;

        assert_eq!(result, Err(ContactError::InvalidEmail));
        assert_eq!(transport.calls.get(), 0);
    }

    #[tokio::test]
    async fn valid_form_is_sent_exactly_once() {
        let transport = CountingTransport::replying(Ok(ContactResponse { success: true }));

        let submission = submit(&form("  Ada ", "a@b.com", "Hello"), &transport, no_deadline())
            .await
            .expect("valid form is accepted");

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email_domain(), "b.com");
        assert!(submission.success_message().starts_with("Thank you, Ada!"));
    }

    #[tokio::test]
    async fn unsuccessful_response_is_reported_as_rejected() {
        let transport = CountingTransport::replying(Ok(ContactResponse { success: false }));

        let error = submit(&form("Ada", "a@b.com", "Hello"), &transport, no_deadline())
            .await
            .expect_err("server said no");

        assert_eq!(error, ContactError::Rejected);
        assert_eq!(error.user_message(), "Something went wrong. Please try again.");
    }

    #[tokio::test]
    async fn hung_transport_times_out() {
        let error = submit(&form("Ada", "a@b.com", "Hello"), &HangingTransport, future::ready(()))
            .await
            .expect_err("deadline fires first");

        assert_eq!(error.kind(), "timeout");
        assert_eq!(error.user_message(), "An error occurred. Please try again later.");
    }

    #[tokio::test]
    async fn simulated_transport_always_succeeds() {
        let transport = SimulatedTransport::new(Duration::from_millis(1_500), |_: Duration| future::ready(()));
        let submission = form("Ada", "a@b.com", "Hello").validate().expect("valid form");

        let response = send_with_deadline(&transport, &submission, no_deadline())
            .await
            .expect("simulated send succeeds");

        assert!(response.success);
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@bcom"));
    }

    #[test]
    fn blur_feedback_tracks_emptiness() {
        assert_eq!(FieldFeedback::on_blur("  "), FieldFeedback::Empty);
        assert_eq!(FieldFeedback::on_blur("Ada").border_color(), Some("#10b981"));
        assert_eq!(FieldFeedback::default().border_color(), None);
    }

    #[test]
    fn typing_after_blur_clears_the_border() {
        let after_blur = FieldFeedback::on_blur("");
        assert_eq!(after_blur.border_color(), Some("#ef4444"));

        let typing = FieldFeedback::on_input();
        assert_eq!(typing, FieldFeedback::Neutral);
        assert_eq!(typing.border_color(), None);
    }

    #[test]
    fn optional_subject_gets_blur_feedback_too() {
        assert!(!Field::Subject.is_required());
        assert_eq!(FieldFeedback::on_blur("Hello").border_color(), Some("#10b981"));
        assert_eq!(FieldFeedback::on_blur("").border_color(), Some("#ef4444"));
    }
}
