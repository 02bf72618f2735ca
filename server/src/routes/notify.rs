//! WebSocket handler for the one-way notification channel.
//!
//! DESIGN
//! ======
//! The socket only ever carries server-to-client text frames: one JSON
//! message per published chat message, and an empty frame every ping
//! interval. Inbound frames are ignored apart from close.
//!
//! LIFECYCLE
//! =========
//! 1. Request must offer the `meowww` sub-protocol, otherwise 400
//! 2. Subscribe to the room before upgrading, so nothing published after
//!    the handshake is missed
//! 3. `select!` over room broadcasts, ping ticks and inbound frames
//! 4. Any send failure or client close ends the task
//! 5. The receiver is dropped, then the room is released if it was the last one

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tokio::sync::broadcast;
use tokio::time::{Duration, Instant, interval_at};
use tracing::{info, warn};
use wire::{ChatMessage, Notification};

use crate::state::AppState;

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_notify(
    State(state): State<AppState>,
    Path(room): Path<String>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Response {
    if !offers_protocol(&headers, wire::PROTOCOL) {
        return (StatusCode::BAD_REQUEST, "missing meowww sub-protocol").into_response();
    }

    let rx = state.subscribe(&room).await;
    let ping_interval = state.settings.ping_interval;

    ws.protocols([wire::PROTOCOL])
        .on_upgrade(move |socket| async move {
            run_notify(socket, &room, rx, ping_interval).await;
            state.release(&room).await;
        })
}

/// Whether the `Sec-WebSocket-Protocol` request headers list `protocol`.
fn offers_protocol(headers: &HeaderMap, protocol: &str) -> bool {
    headers
        .get_all(header::SEC_WEBSOCKET_PROTOCOL)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|candidate| candidate.trim() == protocol)
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_notify(
    mut socket: WebSocket,
    room: &str,
    mut rx: broadcast::Receiver<ChatMessage>,
    ping_interval: Duration,
) {
    info!(%room, "notify: client connected");

    let mut pings = interval_at(Instant::now() + ping_interval, ping_interval);

    loop {
        tokio::select! {
            received = rx.recv() => {
                let message = match received {
                    Ok(message) => message,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(%room, skipped, "notify: client lagging, messages skipped");
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                if send_notification(&mut socket, &Notification::Message(message)).await.is_err() {
                    break;
                }
            }
            _ = pings.tick() => {
                if send_notification(&mut socket, &Notification::Ping).await.is_err() {
                    break;
                }
            }
            inbound = socket.recv() => {
                match inbound {
                    None | Some(Err(_) | Ok(Message::Close(_))) => break,
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    info!(%room, "notify: client disconnected");
}

async fn send_notification(socket: &mut WebSocket, notification: &Notification) -> Result<(), axum::Error> {
    let text = wire::encode_notification(notification);
    socket.send(Message::Text(text.into())).await
}
