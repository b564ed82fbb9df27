//! Books carousel: mouse and touch drag scrolling, prev/next buttons,
//! and edge-aware button opacity

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, MouseEvent, Node, ScrollBehavior, ScrollToOptions, TouchEvent,
};

use crate::config::CarouselConfig;
use crate::dom;
use crate::error::{LandingError, Result};

/// One drag gesture's bookkeeping. Reset on every gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    dragging: bool,
    anchor_x: f64,
    start_offset: f64,
}

impl DragState {
    /// Start a gesture at pointer `x` with the carousel at `offset`
    pub fn begin(&mut self, x: f64, offset: f64) {
        *self = Self {
            dragging: true,
            anchor_x: x,
            start_offset: offset,
        };
    }

    /// Scroll offset for pointer `x`, or `None` outside a gesture
    #[must_use]
    pub fn drag_to(&self, x: f64, multiplier: f64) -> Option<f64> {
        self.dragging
            .then(|| self.start_offset - (x - self.anchor_x) * multiplier)
    }

    pub fn end(&mut self) {
        self.dragging = false;
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Visual state of a prev/next button. Dimmed buttons stay clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Dimmed,
    Full,
}

impl Affordance {
    #[must_use]
    pub const fn opacity(self) -> &'static str {
        match self {
            Self::Dimmed => "0.3",
            Self::Full => "1",
        }
    }
}

/// `(prev, next)` affordances for the current scroll position
#[must_use]
pub fn edge_affordance(
    offset: f64,
    scroll_width: f64,
    client_width: f64,
    tolerance: f64,
) -> (Affordance, Affordance) {
    let prev = if offset <= 0.0 {
        Affordance::Dimmed
    } else {
        Affordance::Full
    };
    let next = if offset >= scroll_width - client_width - tolerance {
        Affordance::Dimmed
    } else {
        Affordance::Full
    };
    (prev, next)
}

fn pointer_x(carousel: &HtmlElement, page_x: i32) -> f64 {
    f64::from(page_x) - f64::from(carousel.offset_left())
}

fn scroll_offset(carousel: &HtmlElement) -> f64 {
    f64::from(carousel.scroll_left())
}

fn bind_mouse_drag(carousel: &HtmlElement, multiplier: f64) -> Result<()> {
    let drag = Rc::new(Cell::new(DragState::default()));

    {
        let drag = Rc::clone(&drag);
        let el = carousel.clone();
        dom::listen(carousel, "mousedown", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let mut state = drag.get();
            state.begin(pointer_x(&el, mouse.page_x()), scroll_offset(&el));
            drag.set(state);
            dom::set_class(&el, "active", true).ok();
        })?;
    }

    for end_event in ["mouseleave", "mouseup"] {
        let drag = Rc::clone(&drag);
        let el = carousel.clone();
        dom::listen(carousel, end_event, move |_| {
            let mut state = drag.get();
            state.end();
            drag.set(state);
            dom::set_class(&el, "active", false).ok();
        })?;
    }

    {
        let el = carousel.clone();
        dom::listen(carousel, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Some(offset) = drag
                .get()
                .drag_to(pointer_x(&el, mouse.page_x()), multiplier)
            {
                event.prevent_default();
                el.set_scroll_left(offset.round() as i32);
            }
        })?;
    }

    Ok(())
}

fn first_touch_x(carousel: &HtmlElement, event: &web_sys::Event) -> Option<f64> {
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|touch| touch.touches().get(0))
        .map(|touch| pointer_x(carousel, touch.page_x()))
}

fn bind_touch_drag(carousel: &HtmlElement, multiplier: f64) -> Result<()> {
    let drag = Rc::new(Cell::new(DragState::default()));

    {
        let drag = Rc::clone(&drag);
        let el = carousel.clone();
        dom::listen_passive(carousel, "touchstart", move |event| {
            if let Some(x) = first_touch_x(&el, &event) {
                let mut state = drag.get();
                state.begin(x, scroll_offset(&el));
                drag.set(state);
            }
        })?;
    }

    {
        let drag = Rc::clone(&drag);
        let el = carousel.clone();
        dom::listen_passive(carousel, "touchmove", move |event| {
            if let Some(offset) =
                first_touch_x(&el, &event).and_then(|x| drag.get().drag_to(x, multiplier))
            {
                el.set_scroll_left(offset.round() as i32);
            }
        })?;
    }

    for end_event in ["touchend", "touchcancel"] {
        let drag = Rc::clone(&drag);
        dom::listen_passive(carousel, end_event, move |_| {
            let mut state = drag.get();
            state.end();
            drag.set(state);
        })?;
    }

    Ok(())
}

fn step_button(document: &Document, class: &str, label: &str, glyph: &str) -> Result<HtmlElement> {
    let button = dom::create_html(document, "button", class)?;
    button
        .set_attribute("type", "button")
        .and_then(|()| button.set_attribute("aria-label", label))
        .map_err(|e| LandingError::from_js(&e))?;
    button.set_text_content(Some(glyph));
    Ok(button)
}

/// Move the carousel into a `.carousel-wrapper` and add the step buttons
fn wrap_with_buttons(
    document: &Document,
    carousel: &HtmlElement,
) -> Result<(HtmlElement, HtmlElement)> {
    let parent = carousel
        .parent_node()
        .ok_or_else(|| LandingError::MissingElement(".books-carousel parent".to_string()))?;

    let wrapper = dom::create(document, "div", "carousel-wrapper")?;
    let carousel_node: &Node = carousel;
    parent
        .insert_before(&wrapper, Some(carousel_node))
        .and_then(|_| wrapper.append_child(carousel_node))
        .map_err(|e| LandingError::from_js(&e))?;

    let prev = step_button(document, "carousel-btn prev", "Previous books", "‹")?;
    let next = step_button(document, "carousel-btn next", "Next books", "›")?;
    wrapper
        .append_child(&prev)
        .and_then(|_| wrapper.append_child(&next))
        .map_err(|e| LandingError::from_js(&e))?;

    Ok((prev, next))
}

fn bind_step(button: &HtmlElement, carousel: &HtmlElement, delta: f64) -> Result<()> {
    let el = carousel.clone();
    dom::listen(button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_left(delta);
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&options);
    })
}

fn update_edge_buttons(
    carousel: &HtmlElement,
    prev: &HtmlElement,
    next: &HtmlElement,
    tolerance: f64,
) -> Result<()> {
    let (prev_state, next_state) = edge_affordance(
        scroll_offset(carousel),
        f64::from(carousel.scroll_width()),
        f64::from(carousel.client_width()),
        tolerance,
    );
    dom::set_style(prev, "opacity", prev_state.opacity())?;
    dom::set_style(next, "opacity", next_state.opacity())
}

/// Enhance `.books-carousel` if the page has one.
///
/// # Errors
///
/// Returns `LandingError::Dom` if listeners or the wrapper cannot be attached.
pub fn init(document: &Document, config: &CarouselConfig) -> Result<()> {
    let Some(carousel) = dom::query_as::<HtmlElement>(document, ".books-carousel")? else {
        return Ok(());
    };

    bind_mouse_drag(&carousel, config.drag_multiplier)?;
    bind_touch_drag(&carousel, config.drag_multiplier)?;

    let (prev, next) = wrap_with_buttons(document, &carousel)?;
    bind_step(&prev, &carousel, -config.scroll_step)?;
    bind_step(&next, &carousel, config.scroll_step)?;

    let tolerance = config.edge_tolerance;
    {
        let el = carousel.clone();
        let (prev, next) = (prev.clone(), next.clone());
        dom::listen(&carousel, "scroll", move |_| {
            update_edge_buttons(&el, &prev, &next, tolerance).ok();
        })?;
    }
    update_edge_buttons(&carousel, &prev, &next, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MULTIPLIER: f64 = 2.0;

    #[test]
    fn test_idle_state_does_not_scroll() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert_eq!(state.drag_to(150.0, MULTIPLIER), None);
    }

    #[test]
    fn test_drag_right_scrolls_back_twice_as_far() {
        let mut state = DragState::default();
        state.begin(100.0, 500.0);
        assert_eq!(state.drag_to(150.0, MULTIPLIER), Some(400.0));
    }

    #[test]
    fn test_drag_left_scrolls_forward() {
        let mut state = DragState::default();
        state.begin(300.0, 0.0);
        assert_eq!(state.drag_to(250.0, MULTIPLIER), Some(100.0));
    }

    #[test]
    fn test_end_stops_gesture() {
        let mut state = DragState::default();
        state.begin(10.0, 10.0);
        state.end();
        assert_eq!(state.drag_to(50.0, MULTIPLIER), None);
    }

    #[test]
    fn test_new_gesture_resets_anchor() {
        let mut state = DragState::default();
        state.begin(10.0, 100.0);
        state.end();
        state.begin(200.0, 40.0);
        assert_eq!(state.drag_to(200.0, MULTIPLIER), Some(40.0));
    }

    #[test]
    fn test_start_edge_dims_prev() {
        let (prev, next) = edge_affordance(0.0, 1000.0, 400.0, 10.0);
        assert_eq!(prev, Affordance::Dimmed);
        assert_eq!(next, Affordance::Full);
    }

    #[test]
    fn test_end_edge_dims_next_within_tolerance() {
        // max scroll is 600; anything from 590 on counts as the end
        let (prev, next) = edge_affordance(590.0, 1000.0, 400.0, 10.0);
        assert_eq!(prev, Affordance::Full);
        assert_eq!(next, Affordance::Dimmed);

        let (_, next) = edge_affordance(589.0, 1000.0, 400.0, 10.0);
        assert_eq!(next, Affordance::Full);
    }

    #[test]
    fn test_middle_is_fully_opaque() {
        assert_eq!(
            edge_affordance(300.0, 1000.0, 400.0, 10.0),
            (Affordance::Full, Affordance::Full)
        );
    }

    #[test]
    fn test_content_narrower_than_viewport_dims_both() {
        assert_eq!(
            edge_affordance(0.0, 300.0, 400.0, 10.0),
            (Affordance::Dimmed, Affordance::Dimmed)
        );
    }

    #[test]
    fn test_opacity_values() {
        assert_eq!(Affordance::Dimmed.opacity(), "0.3");
        assert_eq!(Affordance::Full.opacity(), "1");
    }
}
