use super::*;

fn open_channel() -> NotificationChannel {
    let mut channel = NotificationChannel::default();
    assert!(channel.on_open().is_none());
    channel
}

/// Feed deliveries into a fresh log, mirroring the browser loop.
fn render_all(deliveries: impl IntoIterator<Item = Option<Delivery>>) -> ChatState {
    let mut chat = ChatState::default();
    for delivery in deliveries.into_iter().flatten() {
        delivery.apply(&mut chat);
    }
    chat
}

#[test]
fn starts_connecting_then_open() {
    let mut channel = NotificationChannel::default();
    assert_eq!(channel.state(), ConnectionState::Connecting);
    channel.on_open();
    assert_eq!(channel.state(), ConnectionState::Open);
}

#[test]
fn valid_payload_renders_exactly_one_row_verbatim() {
    let mut channel = open_channel();
    let chat = render_all([channel.on_text(r#"{"nickname":"Alice","content":"<b>Hi</b>"}"#)]);

    assert_eq!(chat.len(), 1);
    let row = &chat.rows()[0];
    assert!(!row.is_error());
    assert_eq!(row.label(), "Alice");
    assert_eq!(row.text(), "<b>Hi</b>");
}

#[test]
fn empty_payloads_never_render() {
    let mut channel = open_channel();
    let chat = render_all((0..10).map(|_| channel.on_text("")));
    assert!(chat.is_empty());
}

#[test]
fn malformed_payload_renders_one_invalid_row() {
    let mut channel = open_channel();
    let chat = render_all([channel.on_text("not json")]);

    assert_eq!(chat.len(), 1);
    assert!(chat.rows()[0].is_error());
    assert_eq!(chat.rows()[0].text(), "Invalid notification message");
    assert_eq!(channel.state(), ConnectionState::Open);
}

#[test]
fn schema_mismatch_renders_one_invalid_row() {
    let mut channel = open_channel();
    let delivery = channel.on_text(r#"{"name":"Alice","message":"Hi"}"#);
    assert_eq!(delivery, Some(Delivery::Error(ClientError::InvalidNotification)));
}

#[test]
fn binary_frame_is_invalid() {
    let mut channel = open_channel();
    assert_eq!(channel.on_binary(), Some(Delivery::Error(ClientError::InvalidNotification)));
}

#[test]
fn channel_keeps_delivering_after_bad_payload() {
    let mut channel = open_channel();
    let chat = render_all([
        channel.on_text("{"),
        channel.on_text(r#"{"nickname":"Bob","content":"still here"}"#),
    ]);

    assert_eq!(chat.len(), 2);
    assert_eq!(chat.rows()[1].text(), "still here");
}

#[test]
fn error_renders_row_without_closing() {
    let mut channel = open_channel();
    let delivery = channel.on_error("boom");

    assert_eq!(
        delivery.map(|d| match d {
            Delivery::Error(err) => err.to_string(),
            Delivery::Render(_) => String::new(),
        }),
        Some("Notification connection error: boom".to_owned())
    );
    assert_eq!(channel.state(), ConnectionState::Erroring);
    assert!(channel.on_text(r#"{"nickname":"a","content":"b"}"#).is_some());
}

#[test]
fn close_renders_exactly_one_row() {
    let mut channel = open_channel();
    let chat = render_all([channel.on_close(), channel.on_close(), channel.on_close()]);

    assert_eq!(chat.len(), 1);
    assert_eq!(
        chat.rows()[0].text(),
        "Notification connection closed unexpectedly, try reloading the page."
    );
    assert_eq!(channel.state(), ConnectionState::Closed);
}

#[test]
fn closed_channel_never_reopens() {
    let mut channel = open_channel();
    channel.on_close();

    assert!(channel.on_open().is_none());
    assert_eq!(channel.state(), ConnectionState::Closed);
    assert!(channel.on_error("late").is_none());
    assert!(channel.on_text(r#"{"nickname":"a","content":"b"}"#).is_none());
}

#[test]
fn error_then_close_renders_two_rows() {
    let mut channel = open_channel();
    let chat = render_all([channel.on_error("reset"), channel.on_close(), channel.on_close()]);

    assert_eq!(chat.len(), 2);
    assert!(chat.rows().iter().all(crate::state::chat::RenderedRow::is_error));
}
