//! Browser helpers shared across components.
//!
//! Each helper compiles to a no-op (or `None`) without the `hydrate` feature
//! so server rendering and unit tests never touch `web_sys`.

pub mod focus;
pub mod location;
pub mod meta;
pub mod scroll;
