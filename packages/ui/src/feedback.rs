//! User-visible outcome of a form submission.

use std::time::Duration;

use crate::forms::ValidationError;
use crate::platform::sleep;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Inline message rendered under a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            MessageKind::Success => "form-message success",
            MessageKind::Error => "form-message error",
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}

/// Wait out a success message. Errors stay until replaced, so this returns
/// `false` for them at once.
pub async fn expire(message: &FormMessage, after: Duration) -> bool {
    if !message.is_success() {
        return false;
    }
    sleep(after).await;
    true
}

/// Clear `slot` if it still shows `shown`. A newer message is left alone.
pub fn clear_if_current(slot: &mut Option<FormMessage>, shown: &FormMessage) -> bool {
    if slot.as_ref() == Some(shown) {
        *slot = None;
        true
    } else {
        false
    }
}

/// What happened when a form was submitted.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<T> {
    /// Rejected locally, nothing was sent.
    Invalid(ValidationError),
    /// Sent, but the backend refused or could not be reached.
    Failed(String),
    Done(T),
}

impl<T> Submission<T> {
    /// The inline message for this outcome, using `success` for [`Submission::Done`].
    pub fn message(&self, success: &str) -> FormMessage {
        match self {
            Self::Invalid(e) => FormMessage::error(e.to_string()),
            Self::Failed(text) => FormMessage::error(text.clone()),
            Self::Done(_) => FormMessage::success(success),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}
