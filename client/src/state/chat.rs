#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::fmt::Display;

use wire::ChatMessage;

/// Label shown in place of a nickname on error rows.
pub const ERROR_LABEL: &str = "Error";

/// One row of the message table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedRow {
    Message(ChatMessage),
    Error(String),
}

impl RenderedRow {
    /// First column: the sender nickname, or [`ERROR_LABEL`].
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Message(message) => &message.nickname,
            Self::Error(_) => ERROR_LABEL,
        }
    }

    /// Second column: the message content or error detail.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Message(message) => &message.content,
            Self::Error(detail) => detail,
        }
    }

    /// Row class used to style error rows apart from messages.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::Error(_) => "error",
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Append-only log behind the message table.
///
/// Rows are never removed or edited once pushed, and there is no cap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    rows: Vec<RenderedRow>,
}

impl ChatState {
    pub fn push_message(&mut self, message: ChatMessage) {
        self.rows.push(RenderedRow::Message(message));
    }

    pub fn push_error(&mut self, detail: impl Display) {
        self.rows.push(RenderedRow::Error(detail.to_string()));
    }

    #[must_use]
    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
