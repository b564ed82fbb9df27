//! Page bootstrap
//!
//! Runs every component initializer once the document has been parsed.
//! A component that fails to initialize is logged and skipped; the rest
//! of the page keeps working.

use web_sys::Document;

use crate::components::{
    NotificationCenter, carousel, counter, header, lazy_images, menu, newsletter, reveal,
    scroll_nav, search, video,
};
use crate::config::LandingConfig;
use crate::dom;
use crate::error::Result;

/// Initialize every component, in page order, returning the names of the
/// ones that failed
pub fn init_components(document: &Document, config: &LandingConfig) -> Vec<&'static str> {
    let notifications = NotificationCenter::new(config.notification);

    // Smooth scroll binds before the search dropdown exists, so the
    // dropdown's placeholder links are left alone.
    let results = [
        ("menu", menu::init(document)),
        ("smooth scroll", scroll_nav::init(document)),
        ("carousel", carousel::init(document, &config.carousel)),
        (
            "newsletter",
            newsletter::init(document, &config.newsletter, notifications),
        ),
        ("reveal", reveal::init(document, &config.reveal)),
        ("search", search::init(document, &config.search, notifications)),
        ("video preview", video::init(document, notifications)),
        ("header scroll", header::init(document, &config.header)),
        ("lazy images", lazy_images::init(document)),
        ("stat counters", counter::init(document, &config.counter)),
    ];

    results
        .into_iter()
        .filter_map(|(name, result)| {
            result.err().map(|e| {
                e.log(name);
                name
            })
        })
        .collect()
}

/// Read configuration and bring up all components
pub fn initialize_page() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            e.log("startup");
            return;
        }
    };

    let config = LandingConfig::from_document(&document).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Ignoring landing config, using defaults: {e}").into());
        LandingConfig::default()
    });

    let failed = init_components(&document, &config);
    if failed.is_empty() {
        web_sys::console::log_1(&"Landing page ready".into());
    } else {
        web_sys::console::warn_1(
            &format!(
                "Landing page ready; {} component(s) failed: {}",
                failed.len(),
                failed.join(", ")
            )
            .into(),
        );
    }
}

/// Entry point: initialize now, or on `DOMContentLoaded` if the document
/// is still loading.
///
/// # Errors
///
/// Returns an error if there is no document or the load listener cannot
/// be attached.
pub fn start() -> Result<()> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_| initialize_page())
    } else {
        initialize_page();
        Ok(())
    }
}
