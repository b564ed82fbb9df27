//! Smooth scrolling for in-page anchors, offset by the fixed header

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::error::{LandingError, Result};

/// Selector for the fragment of `href`, or `None` for a bare `#` or a
/// link that leaves the page
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Document-space scroll position that puts the target just below the header
#[must_use]
pub fn scroll_destination(rect_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    rect_top + page_y_offset - header_height
}

fn scroll_to_fragment(selector: &str, header: &HtmlElement) -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    let Some(target) = dom::query(&document, selector)? else {
        return Ok(());
    };

    let page_y_offset = window
        .page_y_offset()
        .map_err(|e| LandingError::from_js(&e))?;
    let top = scroll_destination(
        target.get_bounding_client_rect().top(),
        page_y_offset,
        f64::from(header.offset_height()),
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    Ok(())
}

/// Bind every `a[href^="#"]` currently in the document.
///
/// # Errors
///
/// Returns `LandingError::MissingElement` if `.header` is absent.
pub fn init(document: &Document) -> Result<()> {
    let header = dom::require(document, ".header")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| LandingError::MissingElement(".header".to_string()))?;

    for anchor in dom::query_all(document, r##"a[href^="#"]"##)? {
        let header = header.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = fragment_target(&href) else {
                return;
            };
            event.prevent_default();
            // Unknown or malformed fragments are ignored
            scroll_to_fragment(selector, &header).ok();
        })?;
    }

    Ok(())
}
