//! Landing page components
//!
//! Each module owns one surface of the page and exposes an `init` that
//! binds its handlers once. Initializers for optional sections return
//! `Ok(())` when their markup is missing.

pub mod carousel;
pub mod counter;
pub mod header;
pub mod lazy_images;
pub mod menu;
pub mod newsletter;
pub mod notification;
pub mod reveal;
pub mod scroll_nav;
pub mod search;
pub mod video;

pub use notification::{NotificationCenter, Severity};

#[cfg(all(test, target_arch = "wasm32"))]
mod carousel_test;
#[cfg(all(test, target_arch = "wasm32"))]
mod menu_test;
