//! Landing page explaining how to reach a room.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Meowww"/>
        <p>"Go to http://<server>/<chat_room_name> to access a chat room."</p>
    }
}
