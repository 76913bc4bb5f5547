use std::time::Duration;

pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    /// Unknown names fall back to `Info`.
    pub fn from_name(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Info => "Info",
            Self::Warning => "Warning",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Info => "fa-info-circle",
            Self::Warning => "fa-exclamation-triangle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub leaving: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            leaving: false,
        });
        id
    }

    /// Starts the exit animation. Returns `false` if the toast is gone or
    /// already leaving, so a close click and the auto-dismiss timer never
    /// schedule two removals.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|toast| toast.id == id) {
            Some(toast) if !toast.leaving => {
                toast.leaving = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_keep_insertion_order_and_unique_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "sent");
        let second = queue.push(ToastKind::Success, "sent");

        assert_ne!(first, second);
        let messages: Vec<&str> = queue.toasts().iter().map(|toast| toast.message.as_str()).collect();
        assert_eq!(messages, ["sent", "sent"]);
    }

    #[test]
    fn dismiss_is_one_shot() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Error, "oops");

        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.toasts()[0].leaving);

        queue.remove(id);
        assert!(queue.toasts().is_empty());
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn unknown_kind_falls_back_to_info() {
        let kind = ToastKind::from_name("celebration");
        assert_eq!(kind, ToastKind::Info);
        assert_eq!(kind.icon(), "fa-info-circle");
        assert_eq!(ToastKind::Warning.title(), "Warning");
    }
}
