//! One-way notification receiver.
//!
//! DESIGN
//! ======
//! `NotificationChannel` is a pure state machine fed with socket lifecycle
//! events. Each transition returns at most one [`Delivery`] for the message
//! table, which keeps the browser loop trivial and the rules testable:
//! - empty text frames are pings and never render;
//! - bad payloads render one "Invalid notification message" row;
//! - errors render a row but do not close the channel;
//! - the first close renders one row, later closes render nothing.
//!
//! LIFECYCLE
//! =========
//! One socket per page load. There is no reconnect and no backoff: once the
//! channel closes the user reloads the page.
//!
//! The websocket loop is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "notifier_test.rs"]
mod notifier_test;

use wire::{ChatMessage, Notification};

use crate::error::ClientError;
use crate::state::chat::ChatState;

/// Lifecycle position of the notification channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Open,
    /// An error was reported; the socket may or may not still deliver frames.
    Erroring,
    /// Terminal. Nothing reopens the channel.
    Closed,
}

/// Something the message table must append.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Render(ChatMessage),
    Error(ClientError),
}

impl Delivery {
    /// Append this delivery to the message log.
    pub fn apply(self, chat: &mut ChatState) {
        match self {
            Self::Render(message) => chat.push_message(message),
            Self::Error(err) => chat.push_error(err),
        }
    }
}

/// Notification channel state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationChannel {
    state: ConnectionState,
}

impl NotificationChannel {
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn on_open(&mut self) -> Option<Delivery> {
        if self.state == ConnectionState::Closed {
            return None;
        }
        self.state = ConnectionState::Open;
        None
    }

    pub fn on_error(&mut self, detail: impl Into<String>) -> Option<Delivery> {
        if self.state == ConnectionState::Closed {
            return None;
        }
        self.state = ConnectionState::Erroring;
        Some(Delivery::Error(ClientError::Connection(detail.into())))
    }

    pub fn on_text(&mut self, text: &str) -> Option<Delivery> {
        if self.state == ConnectionState::Closed {
            return None;
        }
        match wire::decode_notification(text) {
            Ok(Notification::Ping) => None,
            Ok(Notification::Message(message)) => Some(Delivery::Render(message)),
            Err(err) => Some(Delivery::Error(err.into())),
        }
    }

    pub fn on_binary(&mut self) -> Option<Delivery> {
        if self.state == ConnectionState::Closed {
            return None;
        }
        Some(Delivery::Error(wire::CodecError::Binary.into()))
    }

    pub fn on_close(&mut self) -> Option<Delivery> {
        if self.state == ConnectionState::Closed {
            return None;
        }
        self.state = ConnectionState::Closed;
        Some(Delivery::Error(ClientError::ConnectionClosed))
    }
}

/// Spawn the notification receiver for the current page as a local async task.
#[cfg(feature = "hydrate")]
pub fn spawn_notifier(chat: leptos::prelude::RwSignal<ChatState>) {
    leptos::task::spawn_local(notifier_loop(chat));
}

#[cfg(feature = "hydrate")]
fn deliver(chat: leptos::prelude::RwSignal<ChatState>, delivery: Option<Delivery>) {
    use leptos::prelude::Update;

    if let Some(delivery) = delivery {
        chat.update(|c| delivery.apply(c));
    }
}

/// Receive frames until the socket closes. Runs exactly once per page.
#[cfg(feature = "hydrate")]
async fn notifier_loop(chat: leptos::prelude::RwSignal<ChatState>) {
    use futures::StreamExt;
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, WebSocketError};

    let mut channel = NotificationChannel::default();

    let Some(url) = crate::util::location::current_notify_url() else {
        deliver(chat, channel.on_error("page location unavailable"));
        deliver(chat, channel.on_close());
        return;
    };

    let mut ws = match WebSocket::open_with_protocol(&url, wire::PROTOCOL) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::warn!("notify: open failed: {e}");
            deliver(chat, channel.on_error(e.to_string()));
            deliver(chat, channel.on_close());
            return;
        }
    };

    deliver(chat, channel.on_open());
    leptos::logging::log!("notify: listening on {url}");

    while let Some(msg) = ws.next().await {
        let delivery = match msg {
            Ok(Message::Text(text)) => channel.on_text(&text),
            Ok(Message::Bytes(_)) => channel.on_binary(),
            Err(WebSocketError::ConnectionClose(event)) => {
                leptos::logging::warn!("notify: closed code={} reason={}", event.code, event.reason);
                channel.on_close()
            }
            Err(e) => {
                leptos::logging::warn!("notify: error: {e}");
                channel.on_error(e.to_string())
            }
        };
        deliver(chat, delivery);
    }

    // The stream ending without a close event is still a close.
    deliver(chat, channel.on_close());
}
