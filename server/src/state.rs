//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one broadcast channel per room. Rooms are created lazily by the first
//! subscriber and dropped when its last subscriber leaves or a publish finds
//! nobody listening.
//! Nothing is persisted: a message published to an empty room is gone.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};
use wire::ChatMessage;

use crate::config::Settings;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub rooms: Arc<RwLock<HashMap<String, broadcast::Sender<ChatMessage>>>>,
}

impl AppState {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings, rooms: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Subscribe to new messages of `room`, creating it if needed.
    pub async fn subscribe(&self, room: &str) -> broadcast::Receiver<ChatMessage> {
        if let Some(tx) = self.rooms.read().await.get(room) {
            return tx.subscribe();
        }

        let mut rooms = self.rooms.write().await;
        rooms
            .entry(room.to_owned())
            .or_insert_with(|| broadcast::channel(self.settings.room_capacity).0)
            .subscribe()
    }

    /// Fan `message` out to every subscriber of `room`.
    ///
    /// Returns the number of subscribers reached. A room without subscribers
    /// is removed.
    pub async fn publish(&self, room: &str, message: ChatMessage) -> usize {
        let mut rooms = self.rooms.write().await;
        let Some(tx) = rooms.get(room) else {
            return 0;
        };

        if let Ok(count) = tx.send(message) {
            count
        } else {
            rooms.remove(room);
            0
        }
    }

    /// Drop `room` once its last subscriber is gone.
    ///
    /// Called by each notification socket after it releases its receiver.
    /// Returns whether the room was removed.
    pub async fn release(&self, room: &str) -> bool {
        let mut rooms = self.rooms.write().await;
        if rooms.get(room).is_some_and(|tx| tx.receiver_count() == 0) {
            rooms.remove(room);
            return true;
        }
        false
    }

    /// Number of rooms with a live channel.
    pub async fn room_count(&self) -> usize {
        self.rooms.read().await.len()
    }
}
