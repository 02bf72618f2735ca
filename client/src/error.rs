//! Client-side failure taxonomy.
//!
//! Every variant ends up as one inline error row; `Display` is the row text.

/// Failures surfaced to the user as error rows.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// A non-empty notification frame could not be parsed.
    #[error("Invalid notification message")]
    InvalidNotification,
    /// The notification channel reported a connection-level error.
    #[error("Notification connection error: {0}")]
    Connection(String),
    /// The notification channel closed; it is never reopened automatically.
    #[error("Notification connection closed unexpectedly, try reloading the page.")]
    ConnectionClosed,
    /// The message POST failed. The detail is only logged.
    #[error("Failed to send message. Server may be down.")]
    SubmitFailed(String),
}

impl From<wire::CodecError> for ClientError {
    fn from(_: wire::CodecError) -> Self {
        Self::InvalidNotification
    }
}
