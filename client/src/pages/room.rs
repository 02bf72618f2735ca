//! Chat room page.
//!
//! ARCHITECTURE
//! ============
//! The page owns the message log and wires the three event sources into it:
//! the notification receiver, the compose form, and window focus. Each source
//! runs to completion on the browser event loop, so no locking is needed.
//!
//! In local echo mode no notification channel is opened: the form is then the
//! only writer to the table and a message can never be rendered twice.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::components::compose_form::ComposeForm;
use crate::components::message_table::MessageTable;
use crate::config::ClientConfig;
use crate::state::attention::AttentionState;
use crate::state::chat::ChatState;

/// Meta tag carrying the room name for scripts and the title.
pub const META_ROOM_NAME: &str = "room_name";

#[component]
pub fn RoomPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let room = move || params.read().get("room").unwrap_or_default();

    let chat = RwSignal::new(ChatState::default());
    let attention = RwSignal::new(AttentionState::default());
    let seen_rows = StoredValue::new(0_usize);

    // Open the notification channel once, in the browser only.
    Effect::new(move || {
        if !config.dispatch.uses_notifications() {
            return;
        }
        #[cfg(feature = "hydrate")]
        crate::net::notifier::spawn_notifier(chat);
    });

    // Any appended row while unfocused raises the attention title.
    Effect::new(move || {
        let len = chat.read().len();
        if len <= seen_rows.get_value() {
            return;
        }
        seen_rows.set_value(len);
        let has_focus = crate::util::focus::document_has_focus();
        attention.maybe_update(|a| a.on_new_content(has_focus));
    });

    let focus_handle = window_event_listener(leptos::ev::focus, move |_| {
        attention.maybe_update(AttentionState::on_focus);
    });
    on_cleanup(move || focus_handle.remove());

    view! {
        <Title text=move || attention.get().title(&room())/>
        <Meta name=META_ROOM_NAME content=room/>
        <h1>{room}</h1>
        <MessageTable chat/>
        <ComposeForm chat dispatch=config.dispatch/>
    }
}
