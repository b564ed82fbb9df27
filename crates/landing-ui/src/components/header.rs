//! Header background change once the page scrolls past a threshold

use web_sys::Document;

use crate::config::HeaderConfig;
use crate::dom;
use crate::error::Result;

/// Whether the header should be in its `scrolled` state at `offset`
#[must_use]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Toggle `.header.scrolled` on every window scroll.
///
/// # Errors
///
/// Returns `LandingError::MissingElement` if `.header` is absent.
pub fn init(document: &Document, config: &HeaderConfig) -> Result<()> {
    let header = dom::require(document, ".header")?;
    let window = dom::window()?;
    let threshold = config.scrolled_threshold;

    let win = window.clone();
    dom::listen(&window, "scroll", move |_| {
        if let Ok(offset) = win.page_y_offset() {
            dom::set_class(&header, "scrolled", is_scrolled(offset, threshold)).ok();
        }
    })
}
