//! Nickname + content form that submits new messages.

use leptos::prelude::*;

use crate::config::DispatchMode;
use crate::state::chat::ChatState;
use crate::state::form::MessageForm;

/// Submission form. The browser's default form submission is always
/// prevented; the message goes out through `dispatch` instead.
#[component]
pub fn ComposeForm(chat: RwSignal<ChatState>, dispatch: DispatchMode) -> impl IntoView {
    let form = RwSignal::new(MessageForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(submission) = form.try_update(|f| f.take_submission(dispatch)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        crate::net::submit::dispatch(submission, chat);
        #[cfg(not(feature = "hydrate"))]
        let _ = (submission, chat);
    };

    view! {
        <form class="message-form" on:submit=on_submit>
            <input
                type="text"
                name={wire::FIELD_NICKNAME}
                placeholder="Nickname"
                prop:value=move || form.read().nickname.clone()
                on:input=move |ev| form.update(|f| f.nickname = event_target_value(&ev))
            />
            <input
                type="text"
                name={wire::FIELD_CONTENT}
                placeholder="Message"
                autocomplete="off"
                prop:value=move || form.read().content.clone()
                on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
            />
            <input type="submit" value="Send"/>
        </form>
    }
}
