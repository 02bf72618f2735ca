use super::*;
use crate::config::Settings;
use crate::routes::test_helpers::{NotifySocket, connect_notify, spawn_app};
use axum::http::HeaderValue;
use futures::StreamExt;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite;

async fn next_text(socket: &mut NotifySocket) -> String {
    let msg = timeout(Duration::from_millis(500), socket.next())
        .await
        .expect("notification receive timed out")
        .expect("socket closed unexpectedly")
        .expect("socket error");
    msg.to_text().expect("text frame").to_owned()
}

async fn assert_no_frame(socket: &mut NotifySocket) {
    assert!(
        timeout(Duration::from_millis(80), socket.next()).await.is_err(),
        "expected no notification frame"
    );
}

// =============================================================================
// Sub-protocol negotiation
// =============================================================================

#[test]
fn offers_protocol_matches_single_value() {
    let mut headers = HeaderMap::new();
    headers.insert(header::SEC_WEBSOCKET_PROTOCOL, HeaderValue::from_static("meowww"));
    assert!(offers_protocol(&headers, "meowww"));
}

#[test]
fn offers_protocol_matches_inside_list() {
    let mut headers = HeaderMap::new();
    headers.insert(header::SEC_WEBSOCKET_PROTOCOL, HeaderValue::from_static("chat, meowww"));
    assert!(offers_protocol(&headers, "meowww"));
}

#[test]
fn offers_protocol_rejects_missing_or_other() {
    let mut headers = HeaderMap::new();
    assert!(!offers_protocol(&headers, "meowww"));
    headers.insert(header::SEC_WEBSOCKET_PROTOCOL, HeaderValue::from_static("meow"));
    assert!(!offers_protocol(&headers, "meowww"));
}

#[tokio::test]
async fn handshake_without_protocol_is_rejected() {
    let (addr, _state) = spawn_app(Settings::default()).await;

    let err = tokio_tungstenite::connect_async(format!("ws://{addr}/lobby/notify"))
        .await
        .expect_err("handshake should fail");

    let tungstenite::Error::Http(resp) = err else {
        panic!("expected http rejection, got {err:?}");
    };
    assert_eq!(resp.status(), tungstenite::http::StatusCode::BAD_REQUEST);
}

// =============================================================================
// Delivery
// =============================================================================

#[tokio::test]
async fn published_message_arrives_as_json_text_frame() {
    let (addr, state) = spawn_app(Settings::default()).await;
    let mut socket = connect_notify(addr, "lobby").await;

    state.publish("lobby", ChatMessage::new("Alice", "Hi")).await;

    let text = next_text(&mut socket).await;
    assert_eq!(
        wire::decode_notification(&text).expect("decodable frame"),
        Notification::Message(ChatMessage::new("Alice", "Hi"))
    );
}

#[tokio::test]
async fn every_socket_of_room_receives_message_once() {
    let (addr, state) = spawn_app(Settings::default()).await;
    let mut a = connect_notify(addr, "lobby").await;
    let mut b = connect_notify(addr, "lobby").await;

    assert_eq!(state.publish("lobby", ChatMessage::new("Alice", "Hi")).await, 2);

    for socket in [&mut a, &mut b] {
        let text = next_text(socket).await;
        assert!(text.contains("\"Alice\""));
        assert_no_frame(socket).await;
    }
}

#[tokio::test]
async fn other_rooms_do_not_receive_message() {
    let (addr, state) = spawn_app(Settings::default()).await;
    let mut cats = connect_notify(addr, "cats").await;
    let _dogs = connect_notify(addr, "dogs").await;

    state.publish("dogs", ChatMessage::new("Rex", "woof")).await;

    assert_no_frame(&mut cats).await;
}

#[tokio::test]
async fn idle_socket_receives_empty_ping_frames() {
    let settings = Settings { ping_interval: Duration::from_millis(50), ..Settings::default() };
    let (addr, _state) = spawn_app(settings).await;
    let mut socket = connect_notify(addr, "lobby").await;

    assert_eq!(next_text(&mut socket).await, "");
    assert_eq!(next_text(&mut socket).await, "");
}

#[tokio::test]
async fn client_frames_are_ignored() {
    use futures::SinkExt;

    let (addr, state) = spawn_app(Settings::default()).await;
    let mut socket = connect_notify(addr, "lobby").await;

    socket
        .send(tungstenite::Message::text("hello server"))
        .await
        .expect("client send");
    state.publish("lobby", ChatMessage::new("Alice", "still open")).await;

    assert!(next_text(&mut socket).await.contains("still open"));
}

// =============================================================================
// Cleanup
// =============================================================================

async fn wait_for_room_count(state: &AppState, expected: usize) {
    for _ in 0..50 {
        if state.room_count().await == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(state.room_count().await, expected);
}

#[tokio::test]
async fn rooms_are_dropped_when_their_sockets_disconnect() {
    let (addr, state) = spawn_app(Settings::default()).await;

    for i in 0..20 {
        let mut socket = connect_notify(addr, &format!("room-{i}")).await;
        socket.close(None).await.expect("client close");
    }

    wait_for_room_count(&state, 0).await;
}

#[tokio::test]
async fn room_survives_while_one_socket_remains() {
    let (addr, state) = spawn_app(Settings::default()).await;
    let mut first = connect_notify(addr, "lobby").await;
    let mut second = connect_notify(addr, "lobby").await;

    first.close(None).await.expect("client close");
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(state.room_count().await, 1);

    state.publish("lobby", ChatMessage::new("Alice", "still here")).await;
    assert!(next_text(&mut second).await.contains("still here"));

    second.close(None).await.expect("client close");
    wait_for_room_count(&state, 0).await;
}
