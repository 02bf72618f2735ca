//! Page location helpers.
//!
//! The notification channel and the submission endpoint are both scoped to
//! the current page path, so the same room path serves the page, accepts
//! POSTs, and exposes `<path>/notify`.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Build the notification websocket URL for a page location.
///
/// `protocol` is `window.location.protocol` (with trailing colon). Secure
/// pages get `wss`, everything else `ws`.
#[must_use]
pub fn notify_url(protocol: &str, host: &str, pathname: &str) -> String {
    let scheme = if protocol == "https:" { "wss" } else { "ws" };
    let path = pathname.trim_end_matches('/');
    format!("{scheme}://{host}{path}/{}", wire::NOTIFY_SEGMENT)
}

/// Submission endpoint for a page path: trailing slashes dropped, so it
/// matches the path `notify_url` derives the socket from. The site root stays `/`.
#[must_use]
pub fn room_path(pathname: &str) -> &str {
    match pathname.trim_end_matches('/') {
        "" => "/",
        path => path,
    }
}

/// Notification URL for the current page. `None` outside the browser.
pub fn current_notify_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let location = web_sys::window()?.location();
        let protocol = location.protocol().ok()?;
        let host = location.host().ok()?;
        let pathname = location.pathname().ok()?;
        Some(notify_url(&protocol, &host, &pathname))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Normalized path of the current page, used as the submission endpoint.
pub fn current_path() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let pathname = web_sys::window()?.location().pathname().ok()?;
        Some(room_path(&pathname).to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
