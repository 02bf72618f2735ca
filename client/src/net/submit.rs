//! Message submission.
//!
//! Remote dispatch is fire-and-forget: the POST has no timeout and cannot be
//! cancelled, and success renders nothing because the message returns on the
//! notification channel. Local echo renders straight into the table.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-success statuses become one error row; the
//! underlying detail only goes to the console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use wire::ChatMessage;

use crate::error::ClientError;
use crate::state::chat::ChatState;
use crate::state::form::Submission;

/// Form fields in the order they are encoded into the POST body.
#[must_use]
pub fn form_fields(message: &ChatMessage) -> [(&'static str, &str); 2] {
    [
        (wire::FIELD_NICKNAME, message.nickname.as_str()),
        (wire::FIELD_CONTENT, message.content.as_str()),
    ]
}

/// Apply the synchronous half of a submission to the log.
///
/// Only [`Submission::Echo`] touches the table; a [`Submission::Post`] is
/// handed back so the caller can send it.
pub fn apply_local(submission: Submission, chat: &mut ChatState) -> Option<ChatMessage> {
    match submission {
        Submission::Echo(message) => {
            chat.push_message(message);
            None
        }
        Submission::Post(message) => Some(message),
    }
}

/// POST `message` form-encoded to `path`.
///
/// # Errors
///
/// Returns [`ClientError::SubmitFailed`] on transport failure or a
/// non-success status.
pub async fn post_message(path: &str, message: &ChatMessage) -> Result<(), ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new().map_err(|e| ClientError::SubmitFailed(format!("{e:?}")))?;
        for (name, value) in form_fields(message) {
            params.append(name, value);
        }

        let resp = gloo_net::http::Request::post(path)
            .body(params)
            .map_err(|e| ClientError::SubmitFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::SubmitFailed(e.to_string()))?;
        if !resp.ok() {
            return Err(ClientError::SubmitFailed(format!("status {}", resp.status())));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, message);
        Err(ClientError::SubmitFailed("not available on server".to_owned()))
    }
}

/// Dispatch one submission from the form handler.
#[cfg(feature = "hydrate")]
pub fn dispatch(submission: Submission, chat: leptos::prelude::RwSignal<ChatState>) {
    use leptos::prelude::Update;

    match submission {
        Submission::Post(message) => spawn_post(message, chat),
        echo @ Submission::Echo(_) => chat.update(|c| {
            let _ = apply_local(echo, c);
        }),
    }
}

#[cfg(feature = "hydrate")]
fn spawn_post(message: ChatMessage, chat: leptos::prelude::RwSignal<ChatState>) {
    use leptos::prelude::Update;

    let path = crate::util::location::current_path().unwrap_or_else(|| "/".to_owned());
    leptos::task::spawn_local(async move {
        if let Err(err) = post_message(&path, &message).await {
            if let ClientError::SubmitFailed(detail) = &err {
                leptos::logging::warn!("submit: {detail}");
            }
            chat.update(|c| c.push_error(err));
        }
    });
}
