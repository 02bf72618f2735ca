//! Append-only message table.
//!
//! Nickname and content are inserted as text nodes, so chat content is never
//! interpreted as markup. Error rows carry the `error` class and the fixed
//! "Error" label.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Table rendering every row of `chat`, scrolled to the newest one.
#[component]
pub fn MessageTable(chat: RwSignal<ChatState>) -> impl IntoView {
    // Keep the newest row in view after every append.
    Effect::new(move || {
        let _ = chat.read().len();
        crate::util::scroll::scroll_to_bottom();
    });

    view! {
        <table class="messages">
            <tbody>
                // Rows are never removed or edited, so the index is a stable key.
                <For
                    each={move || chat.read().rows().iter().cloned().enumerate().collect::<Vec<_>>()}
                    key=|(index, _)| *index
                    children=move |(_, row)| {
                        view! {
                            <tr class=row.css_class()>
                                <td>{row.label().to_owned()}</td>
                                <td>{row.text().to_owned()}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
