//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `attention`, `form`) so components can
//! depend on small focused models. All of it is plain data with pure update
//! methods; components wrap it in `RwSignal`s.

pub mod attention;
pub mod chat;
pub mod form;
