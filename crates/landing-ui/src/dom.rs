//! Thin, panic-free wrappers over the web-sys DOM calls the components share
//!
//! Every handler is registered for the page's lifetime, so closures are
//! handed to the JS side with `Closure::forget`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent,
    Node, Window,
};

use crate::error::{LandingError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(LandingError::WindowNotAvailable)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(LandingError::DocumentNotAvailable)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document
        .body()
        .ok_or_else(|| LandingError::MissingElement("body".to_string()))
}

/// First match for `selector`, or `None` when the page has no such section
///
/// # Errors
///
/// Returns `LandingError::Dom` if the selector is not valid CSS.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| LandingError::from_js(&e))
}

/// Like [`query`] but scoped to the descendants of `root`
///
/// # Errors
///
/// Returns `LandingError::Dom` if the selector is not valid CSS.
pub fn query_within(root: &Element, selector: &str) -> Result<Option<Element>> {
    root.query_selector(selector)
        .map_err(|e| LandingError::from_js(&e))
}

/// Element the markup contract guarantees; absence is an error
///
/// # Errors
///
/// Returns `LandingError::MissingElement` when nothing matches.
pub fn require(document: &Document, selector: &str) -> Result<Element> {
    query(document, selector)?.ok_or_else(|| LandingError::MissingElement(selector.to_string()))
}

/// Like [`query`] but downcast to a concrete element type.
/// A match of the wrong type is treated as absent.
///
/// # Errors
///
/// Returns `LandingError::Dom` if the selector is not valid CSS.
pub fn query_as<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>> {
    Ok(query(document, selector)?.and_then(|el| el.dyn_into::<T>().ok()))
}

/// All matches for `selector`, in document order
///
/// # Errors
///
/// Returns `LandingError::Dom` if the selector is not valid CSS.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| LandingError::from_js(&e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Like [`query_all`] but scoped to the descendants of `root`
///
/// # Errors
///
/// Returns `LandingError::Dom` if the selector is not valid CSS.
pub fn query_all_within(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = root
        .query_selector_all(selector)
        .map_err(|e| LandingError::from_js(&e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Create `<tag class="...">`
///
/// # Errors
///
/// Returns `LandingError::Dom` if the element cannot be created.
pub fn create(document: &Document, tag: &str, class: &str) -> Result<Element> {
    let element = document
        .create_element(tag)
        .map_err(|e| LandingError::from_js(&e))?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Create an element that needs `HtmlElement` APIs (style, click, focus)
///
/// # Errors
///
/// Returns `LandingError::Dom` if creation or the downcast fails.
pub fn create_html(document: &Document, tag: &str, class: &str) -> Result<HtmlElement> {
    create(document, tag, class)?
        .dyn_into::<HtmlElement>()
        .map_err(|e| LandingError::Dom(format!("<{tag}> is not an HtmlElement: {e:?}")))
}

/// Force `class` on or off
///
/// # Errors
///
/// Returns `LandingError::Dom` if the class token is rejected.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(|e| LandingError::from_js(&e))
}

/// Flip `class`, returning whether it is now present
///
/// # Errors
///
/// Returns `LandingError::Dom` if the class token is rejected.
pub fn toggle_class(element: &Element, class: &str) -> Result<bool> {
    element
        .class_list()
        .toggle(class)
        .map_err(|e| LandingError::from_js(&e))
}

/// Set an inline style property
///
/// # Errors
///
/// Returns `LandingError::Dom` if the style declaration is read-only.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| LandingError::from_js(&e))
}

/// Whether the event's target sits inside `container` (inclusive)
pub fn event_within(container: &Node, event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

/// Whether a keyboard event is the Enter activation key
pub fn is_enter_key(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .is_some_and(|key| key.key() == "Enter")
}

/// Register `handler` for `event` on `target` for the rest of the page's life
///
/// # Errors
///
/// Returns `LandingError::Dom` if the listener cannot be attached.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| LandingError::from_js(&e))?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], marked passive so touch scrolling is never blocked
///
/// # Errors
///
/// Returns `LandingError::Dom` if the listener cannot be attached.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| LandingError::from_js(&e))?;
    closure.forget();
    Ok(())
}
