//! One-way reveal animation for content blocks entering the viewport

use web_sys::Document;

use crate::config::RevealConfig;
use crate::dom;
use crate::error::Result;
use crate::observer::{self, VisibilityOptions};

/// Marks an element as a reveal candidate (hidden until revealed)
pub const CANDIDATE_CLASS: &str = "animate-on-scroll";
/// Applied once, permanently, when the element is first seen
pub const REVEALED_CLASS: &str = "animated";

/// Mark configured elements and reveal each the first time it is 10% visible.
///
/// # Errors
///
/// Returns `LandingError::Dom` if a selector is invalid or the observer
/// cannot be created.
pub fn init(document: &Document, config: &RevealConfig) -> Result<()> {
    if config.selectors.is_empty() {
        return Ok(());
    }
    let elements = dom::query_all(document, &config.selector_list())?;
    if elements.is_empty() {
        return Ok(());
    }

    for element in &elements {
        dom::set_class(element, CANDIDATE_CLASS, true)?;
    }

    // Without an observer nothing would ever reveal them
    if !observer::is_supported() {
        for element in &elements {
            dom::set_class(element, REVEALED_CLASS, true)?;
        }
        return Ok(());
    }

    observer::observe_once(
        &elements,
        VisibilityOptions::with_threshold(config.threshold),
        |element| {
            dom::set_class(element, REVEALED_CLASS, true).ok();
        },
    )?;
    Ok(())
}
