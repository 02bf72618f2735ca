//! Title-based unread signal.
//!
//! While the document lacks focus, the first new row switches the title to
//! the attention variant. Further rows change nothing until focus returns,
//! which restores the normal title. This is a flag, not an unread counter.

#[cfg(test)]
#[path = "attention_test.rs"]
mod attention_test;

const APP_NAME: &str = "Meowww";

/// Whether the page title currently carries the attention marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttentionState {
    signaled: bool,
}

impl AttentionState {
    /// Record a newly appended row. Returns `true` when the title must change.
    pub fn on_new_content(&mut self, has_focus: bool) -> bool {
        if self.signaled || has_focus {
            return false;
        }
        self.signaled = true;
        true
    }

    /// Record the document regaining focus. Returns `true` when the title must change.
    pub fn on_focus(&mut self) -> bool {
        if !self.signaled {
            return false;
        }
        self.signaled = false;
        true
    }

    #[must_use]
    pub fn is_signaled(self) -> bool {
        self.signaled
    }

    /// Page title for `room` in the current state.
    #[must_use]
    pub fn title(self, room: &str) -> String {
        if self.signaled { attention_title(room) } else { normal_title(room) }
    }
}

#[must_use]
pub fn normal_title(room: &str) -> String {
    format!("{APP_NAME} - {room}")
}

#[must_use]
pub fn attention_title(room: &str) -> String {
    format!("{APP_NAME} !! - {room}")
}
