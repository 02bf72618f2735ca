//! Reusable UI components for the chat room page.

pub mod compose_form;
pub mod message_table;
