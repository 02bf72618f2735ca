//! Document focus query used by the attention signal.

/// Whether the document currently has input focus.
///
/// Assumes focus when it cannot be determined, so the title is left alone.
pub fn document_has_focus() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.has_focus().ok())
            .unwrap_or(true)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}
