//! Deferred image loading for `img[data-src]`

use web_sys::{Document, Element};

use crate::dom;
use crate::error::{LandingError, Result};
use crate::observer::{self, VisibilityOptions};

pub const DEFERRED_SOURCE_ATTR: &str = "data-src";

/// Promote `data-src` to `src`. Returns `false` if the image was already
/// loaded.
///
/// # Errors
///
/// Returns `LandingError::Dom` if an attribute cannot be written.
pub fn load_deferred(image: &Element) -> Result<bool> {
    let Some(source) = image.get_attribute(DEFERRED_SOURCE_ATTR) else {
        return Ok(false);
    };
    image
        .set_attribute("src", &source)
        .and_then(|()| image.remove_attribute(DEFERRED_SOURCE_ATTR))
        .map_err(|e| LandingError::from_js(&e))?;
    Ok(true)
}

/// Load each deferred image when it scrolls into view, or right away on
/// browsers without `IntersectionObserver`.
///
/// # Errors
///
/// Returns `LandingError::Dom` if the observer cannot be created. Images
/// that fail to load eagerly are logged and skipped.
pub fn init(document: &Document) -> Result<()> {
    let images = dom::query_all(document, "img[data-src]")?;
    if images.is_empty() {
        return Ok(());
    }

    if !observer::is_supported() {
        for image in &images {
            if let Err(e) = load_deferred(image) {
                e.log("lazy image");
            }
        }
        return Ok(());
    }

    observer::observe_once(&images, VisibilityOptions::browser_default(), |image| {
        if let Err(e) = load_deferred(image) {
            e.log("lazy image");
        }
    })?;
    Ok(())
}
