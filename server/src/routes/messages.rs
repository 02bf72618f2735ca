//! Message submission endpoint.
//!
//! Accepts a form-encoded POST on the room path and publishes it to the
//! room's notification sockets. The sender sees its own message when it comes
//! back on the socket, never from this response.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};
use wire::ChatMessage;

use crate::state::AppState;

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

/// Form body of a new message. Older pages used `name`/`message`.
#[derive(Debug, Deserialize)]
pub struct SubmittedMessage {
    #[serde(alias = "name")]
    pub nickname: String,
    #[serde(alias = "message")]
    pub content: String,
}

impl From<SubmittedMessage> for ChatMessage {
    fn from(form: SubmittedMessage) -> Self {
        ChatMessage::new(form.nickname, form.content)
    }
}

pub async fn post_message(
    State(state): State<AppState>,
    Path(room): Path<String>,
    Form(form): Form<SubmittedMessage>,
) -> StatusCode {
    let message = ChatMessage::from(form);
    debug!(%room, nickname = %message.nickname, "message received");

    let reached = state.publish(&room, message).await;
    info!(%room, reached, "message published");

    StatusCode::NO_CONTENT
}
