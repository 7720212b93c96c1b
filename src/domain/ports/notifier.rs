//! Notifier Port
//!
//! User-facing notices (info, success, error) and blocking confirmations.

/// A notice shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Trait for surfacing notices
///
/// Implementations can be:
/// - ConsoleNotifier: terminal output
/// - JsonNotifier: NDJSON event stream
/// - NoopNotifier: silent operation
pub trait Notifier {
    fn notify(&self, notice: Notice);

    /// Ask the user to confirm an action. `false` cancels it.
    fn confirm(&self, text: &str) -> bool;

    fn info(&self, text: &str) {
        self.notify(Notice::Info(text.to_string()));
    }

    fn success(&self, text: &str) {
        self.notify(Notice::Success(text.to_string()));
    }

    fn error(&self, text: &str) {
        self.notify(Notice::Error(text.to_string()));
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }

    fn confirm(&self, text: &str) -> bool {
        (**self).confirm(text)
    }
}

/// No-op notifier; declines every confirmation
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notice: Notice) {}

    fn confirm(&self, _text: &str) -> bool {
        false
    }
}
