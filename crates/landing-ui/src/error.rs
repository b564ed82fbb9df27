//! Error types for the landing page components
//!
//! Initializers only fail on broken markup contracts or DOM call failures.
//! Missing optional sections are not errors; those initializers return `Ok(())`.

use wasm_bindgen::JsValue;

/// Errors that can occur while wiring up landing page components
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LandingError {
    /// Failed to get window object
    #[error("window is not available")]
    WindowNotAvailable,

    /// Failed to get document object
    #[error("document is not available")]
    DocumentNotAvailable,

    /// A structural element the page markup must provide is absent
    #[error("required element not found: {0}")]
    MissingElement(String),

    /// A DOM call returned a JS exception
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The embedded configuration could not be used
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LandingError {
    /// Wrap a JS exception value
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }

    /// Report to the browser console
    pub fn log(&self, context: &str) {
        web_sys::console::error_1(&format!("{context}: {self}").into());
    }
}

/// Result type alias for landing page operations
pub type Result<T> = std::result::Result<T, LandingError>;
