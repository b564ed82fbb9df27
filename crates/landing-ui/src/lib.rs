//! Client-side interactivity for the Math800 landing page
//!
//! The page markup is rendered by the server; this crate compiles to WASM
//! and enhances it in place: mobile menu, smooth anchor scrolling, the books
//! carousel, newsletter signup, toasts, scroll reveals, topic search, lazy
//! images, the sticky header and count-up stats.
//!
//! ## Module Structure
//! - `app`: bootstrap that runs every component once the DOM is ready
//! - `components`: one module per page surface
//! - `config`: defaults and the optional `#landing-config` JSON override
//! - `dom`: panic-free web-sys helpers and listener registration
//! - `observer`: one-shot `IntersectionObserver` wrapper
//! - `error`: error types and handling
//!
//! CSS class names and data attributes used here are the contract with the
//! stylesheet and must not be renamed on one side only.

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod observer;

pub use app::start;
pub use config::LandingConfig;
pub use error::{LandingError, Result};
