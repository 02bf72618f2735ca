//! Read `<meta name=... content=...>` values from the rendered document.

/// Content of the first `<meta name="{name}">` tag, if any.
pub fn read_meta(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window()?.document()?;
        let el = doc.query_selector(&format!("meta[name=\"{name}\"]")).ok()??;
        el.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}
