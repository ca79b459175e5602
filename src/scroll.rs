//! Fragment-target parsing for in-page anchor links.
//!
//! Anchors are selected on the raw `href` attribute, never the resolved
//! `href` property, so a link to `#projects` stays `#projects` instead of
//! becoming an absolute URL. This module turns that raw attribute into the
//! id the DOM layer looks up before scrolling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Extract the element id an in-page anchor points at.
///
/// Returns `None` unless the href starts with `#` and names a non-empty
/// fragment, so a bare `href="#"` never triggers a lookup.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}
