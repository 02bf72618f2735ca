//! Keep the viewport pinned to the newest row.
//!
//! Scroll root detection: prefer `document.scrollingElement`; otherwise use
//! `document.body` when it has a non-zero scroll offset; otherwise do nothing.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Which element owns the page scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollRoot {
    ScrollingElement,
    Body,
    None,
}

#[must_use]
pub fn pick_scroll_root(has_scrolling_element: bool, body_scroll_top: Option<i32>) -> ScrollRoot {
    if has_scrolling_element {
        ScrollRoot::ScrollingElement
    } else if body_scroll_top.is_some_and(|top| top != 0) {
        ScrollRoot::Body
    } else {
        ScrollRoot::None
    }
}

/// Force the scroll position of the page to its maximum.
pub fn scroll_to_bottom() {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let scrolling = doc.scrolling_element();
        let body = doc.body();
        let root = pick_scroll_root(scrolling.is_some(), body.as_ref().map(|b| b.scroll_top()));
        let el: Option<web_sys::Element> = match root {
            ScrollRoot::ScrollingElement => scrolling,
            ScrollRoot::Body => body.map(Into::into),
            ScrollRoot::None => None,
        };
        if let Some(el) = el {
            el.set_scroll_top(el.scroll_height());
        }
    }
}
