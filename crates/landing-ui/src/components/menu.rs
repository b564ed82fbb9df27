//! Mobile navigation menu
//!
//! One open/closed flag drives three classes: `active` on the toggle,
//! `active` on `.nav-links`, and `menu-open` on `<body>`. They are always
//! written together from that flag, never toggled one by one.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, Node};

use crate::dom;
use crate::error::{LandingError, Result};

/// Open/closed state of the mobile menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the state, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu, returning whether anything changed
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

struct MenuParts {
    toggle: Element,
    panel: Element,
    body: HtmlElement,
}

impl MenuParts {
    fn apply(&self, state: MenuState) -> Result<()> {
        let open = state.is_open();
        dom::set_class(&self.toggle, "active", open)?;
        dom::set_class(&self.panel, "active", open)?;
        dom::set_class(&self.body, "menu-open", open)
    }
}

fn build_toggle(document: &Document) -> Result<Element> {
    let button = dom::create(document, "button", "mobile-menu-btn")?;
    button
        .set_attribute("type", "button")
        .and_then(|()| button.set_attribute("aria-label", "Toggle navigation menu"))
        .map_err(|e| LandingError::from_js(&e))?;

    for _ in 0..3 {
        let line = dom::create(document, "span", "menu-line")?;
        button
            .append_child(&line)
            .map_err(|e| LandingError::from_js(&e))?;
    }

    Ok(button)
}

/// Insert the hamburger toggle into the header and wire it to the nav panel.
///
/// # Errors
///
/// Returns `LandingError::MissingElement` if `.header`, `.header-container`
/// or `.nav-links` is absent, or `LandingError::Dom` if a DOM call fails.
pub fn init(document: &Document) -> Result<()> {
    dom::require(document, ".header")?;
    let container = dom::require(document, ".header-container")?;
    let panel = dom::require(document, ".nav-links")?;
    let body = dom::body(document)?;

    let toggle = build_toggle(document)?;

    // Sit just before the auth buttons when they live in the same container
    let container_node: &Node = &container;
    let anchor = dom::query(document, ".auth-buttons")?.filter(|auth| {
        auth.parent_node()
            .is_some_and(|parent| parent.is_same_node(Some(container_node)))
    });
    container
        .insert_before(&toggle, anchor.as_deref())
        .map_err(|e| LandingError::from_js(&e))?;

    let state = Rc::new(Cell::new(MenuState::default()));
    let parts = Rc::new(MenuParts {
        toggle: toggle.clone(),
        panel: panel.clone(),
        body,
    });

    {
        let state = Rc::clone(&state);
        let parts = Rc::clone(&parts);
        dom::listen(&toggle, "click", move |_| {
            let mut next = state.get();
            next.toggle();
            state.set(next);
            if let Err(e) = parts.apply(next) {
                e.log("menu toggle");
            }
        })?;
    }

    let close = {
        let state = Rc::clone(&state);
        let parts = Rc::clone(&parts);
        move || {
            let mut next = state.get();
            if next.close() {
                state.set(next);
                if let Err(e) = parts.apply(next) {
                    e.log("menu close");
                }
            }
        }
    };

    {
        let close = close.clone();
        let parts = Rc::clone(&parts);
        dom::listen(document, "click", move |event| {
            if !dom::event_within(&parts.toggle, &event) && !dom::event_within(&parts.panel, &event)
            {
                close();
            }
        })?;
    }

    for link in dom::query_all_within(&panel, ".nav-link")? {
        let close = close.clone();
        dom::listen(&link, "click", move |_| close())?;
    }

    Ok(())
}
