//! Startup configuration shared by the server render and the hydrated client.
//!
//! The server provides [`ClientConfig`] as Leptos context and also writes it
//! into a `<meta name="dispatch_mode">` tag so the browser can recover the
//! same value during hydration.

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the meta tag carrying the dispatch mode.
pub const META_DISPATCH_MODE: &str = "dispatch_mode";

/// How the submission form delivers a new message.
///
/// The two strategies are mutually exclusive: combining them would render
/// every message twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchMode {
    /// POST to the page path; the message comes back on the notification channel.
    #[default]
    Remote,
    /// Render directly without any network round trip (no backend).
    LocalEcho,
}

impl DispatchMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::LocalEcho => "local-echo",
        }
    }

    /// Whether this mode listens on the notification channel.
    #[must_use]
    pub fn uses_notifications(self) -> bool {
        self == Self::Remote
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown dispatch mode.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown dispatch mode: {0}")]
pub struct UnknownDispatchMode(pub String);

impl FromStr for DispatchMode {
    type Err = UnknownDispatchMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "remote" => Ok(Self::Remote),
            "local-echo" => Ok(Self::LocalEcho),
            other => Err(UnknownDispatchMode(other.to_owned())),
        }
    }
}

/// Client settings chosen at server startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub dispatch: DispatchMode,
}

impl ClientConfig {
    #[must_use]
    pub fn new(dispatch: DispatchMode) -> Self {
        Self { dispatch }
    }

    /// Recover the configuration from the rendered document.
    ///
    /// Falls back to the default when the meta tag is missing or unreadable,
    /// and always on the server.
    #[must_use]
    pub fn from_document() -> Self {
        let dispatch = crate::util::meta::read_meta(META_DISPATCH_MODE)
            .and_then(|value| value.parse::<DispatchMode>().ok())
            .unwrap_or_default();
        Self { dispatch }
    }
}
