//! Startup and serve failures.

/// Errors that stop the server process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The `[package.metadata.leptos]` / `[[workspace.metadata.leptos]]` section is missing or malformed.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
