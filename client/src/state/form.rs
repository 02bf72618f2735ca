//! Submission form model.
//!
//! DESIGN
//! ======
//! Taking a submission clears the content field but keeps the nickname, so
//! the next message can be typed immediately under the same name. The
//! dispatch strategy is decided here, once per submission, so a message is
//! either posted or echoed and never both.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use wire::ChatMessage;

use crate::config::DispatchMode;

/// Current values of the two form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageForm {
    pub nickname: String,
    pub content: String,
}

/// What to do with one submitted message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Send to the server; the message is rendered when it comes back.
    Post(ChatMessage),
    /// Render locally; no network.
    Echo(ChatMessage),
}

impl Submission {
    #[must_use]
    pub fn message(&self) -> &ChatMessage {
        match self {
            Self::Post(message) | Self::Echo(message) => message,
        }
    }
}

impl MessageForm {
    /// Build the message from the current inputs and clear the content field.
    pub fn take_submission(&mut self, mode: DispatchMode) -> Submission {
        let message = ChatMessage::new(self.nickname.clone(), std::mem::take(&mut self.content));
        match mode {
            DispatchMode::Remote => Submission::Post(message),
            DispatchMode::LocalEcho => Submission::Echo(message),
        }
    }
}
