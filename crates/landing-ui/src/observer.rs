//! One-shot viewport visibility watching
//!
//! Reveal, lazy-loading and counter components all want the same thing:
//! run a callback the first time an element becomes visible, then stop
//! watching it.

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;
use crate::error::{LandingError, Result};

/// Visibility options for [`observe_once`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element's area that must be visible, `None` for the
    /// browser default (any pixel)
    pub threshold: Option<f64>,
    /// Apply a `0px` root margin explicitly
    pub zero_margin: bool,
}

impl VisibilityOptions {
    /// Browser defaults: viewport root, no threshold, no margin
    #[must_use]
    pub const fn browser_default() -> Self {
        Self {
            threshold: None,
            zero_margin: false,
        }
    }

    #[must_use]
    pub const fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: Some(threshold),
            zero_margin: true,
        }
    }
}

/// Whether the running browser exposes `IntersectionObserver`
pub fn is_supported() -> bool {
    dom::window()
        .ok()
        .and_then(|window| {
            Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok()
        })
        .unwrap_or(false)
}

/// Call `on_visible` once per target, the first time it intersects the viewport.
/// Each target is unobserved right after its callback runs.
///
/// # Errors
///
/// Returns `LandingError::Dom` if the observer cannot be constructed.
pub fn observe_once<F>(
    targets: &[Element],
    options: VisibilityOptions,
    mut on_visible: F,
) -> Result<IntersectionObserver>
where
    F: FnMut(&Element) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    if let Some(threshold) = options.threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }
    if options.zero_margin {
        init.set_root_margin("0px");
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| LandingError::from_js(&e))?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }

    Ok(observer)
}
