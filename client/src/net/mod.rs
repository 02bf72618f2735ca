//! Networking modules for the notification channel and message submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `notifier` owns the one-way websocket lifecycle (server to client) and
//! `submit` posts new messages back to the page path. The wire schema lives in
//! the shared `wire` crate.

pub mod notifier;
pub mod submit;
