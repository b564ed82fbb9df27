//! Toast notifications
//!
//! The page shows at most one toast. The slot holding it is owned here;
//! callers only ever go through [`NotificationCenter::notify`].

use std::cell::RefCell;
use std::fmt;

use gloo_timers::callback::Timeout;
use web_sys::{Element, Node};

use crate::config::NotificationConfig;
use crate::dom;
use crate::error::{LandingError, Result};

thread_local! {
    static ACTIVE_TOAST: RefCell<Option<Element>> = const { RefCell::new(None) };
}

/// Notification category, mapped 1:1 onto a CSS class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Error,
    Success,
}

impl Severity {
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

/// Class attribute for a toast of the given severity
#[must_use]
pub fn toast_class_name(severity: Severity) -> String {
    format!("notification {}", severity.as_class())
}

/// Handle for showing toasts. Cheap to copy into event handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    timings: NotificationConfig,
}

impl NotificationCenter {
    #[must_use]
    pub const fn new(timings: NotificationConfig) -> Self {
        Self { timings }
    }

    /// Show `message`, evicting whatever toast is currently up.
    ///
    /// # Errors
    ///
    /// Returns an error if the document or body is unavailable or a DOM
    /// mutation fails.
    pub fn notify(&self, message: &str, severity: Severity) -> Result<Element> {
        let document = dom::document()?;
        let body = dom::body(&document)?;

        if let Some(previous) = take_active() {
            previous.remove();
        }

        let toast = dom::create(&document, "div", &toast_class_name(severity))?;

        let text = dom::create(&document, "span", "notification-message")?;
        text.set_text_content(Some(message));

        let close = dom::create(&document, "button", "notification-close")?;
        close
            .set_attribute("type", "button")
            .map_err(|e| LandingError::from_js(&e))?;
        close
            .set_attribute("aria-label", "Dismiss notification")
            .map_err(|e| LandingError::from_js(&e))?;
        close.set_text_content(Some("×"));

        toast
            .append_child(&text)
            .and_then(|_| toast.append_child(&close))
            .and_then(|_| body.append_child(&toast))
            .map_err(|e| LandingError::from_js(&e))?;

        ACTIVE_TOAST.with(|slot| *slot.borrow_mut() = Some(toast.clone()));

        let transition_ms = self.timings.transition_ms;

        // Deferred so the hidden state paints before the transition starts
        {
            let toast = toast.clone();
            Timeout::new(self.timings.show_delay_ms, move || {
                dom::set_class(&toast, "show", true).ok();
            })
            .forget();
        }

        {
            let toast = toast.clone();
            dom::listen(&close, "click", move |_| dismiss(&toast, transition_ms))?;
        }

        {
            let toast = toast.clone();
            Timeout::new(self.timings.auto_dismiss_ms, move || {
                if toast.parent_node().is_some() {
                    dismiss(&toast, transition_ms);
                }
            })
            .forget();
        }

        Ok(toast)
    }

    /// The toast currently occupying the slot, if any
    #[must_use]
    pub fn active() -> Option<Element> {
        ACTIVE_TOAST.with(|slot| slot.borrow().clone())
    }
}

fn take_active() -> Option<Element> {
    ACTIVE_TOAST.with(|slot| slot.borrow_mut().take())
}

/// Start the hide transition, then detach once it has played
fn dismiss(toast: &Element, transition_ms: u32) {
    dom::set_class(toast, "show", false).ok();
    let toast = toast.clone();
    Timeout::new(transition_ms, move || destroy(&toast)).forget();
}

/// Detach `toast` and free the slot if it still holds this node.
/// Safe to call more than once.
fn destroy(toast: &Element) {
    toast.remove();
    let node: &Node = toast;
    ACTIVE_TOAST.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot
            .as_ref()
            .is_some_and(|active| active.is_same_node(Some(node)))
        {
            *slot = None;
        }
    });
}
