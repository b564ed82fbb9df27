//! Browser tests for the books carousel

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, MouseEvent, MouseEventInit};

use super::carousel;
use crate::config::CarouselConfig;
use crate::dom;

wasm_bindgen_test_configure!(run_in_browser);

const CAROUSEL_FIXTURE: &str = r#"
<section class="books">
  <div class="books-carousel" style="width:200px;overflow-x:auto;white-space:nowrap">
    <div style="display:inline-block;width:1000px;height:10px"></div>
  </div>
</section>
"#;

fn find(root: &Element, selector: &str) -> HtmlElement {
    dom::query_within(root, selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} in fixture"))
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn opacity(button: &HtmlElement) -> String {
    button.style().get_property_value("opacity").unwrap()
}

fn mount_carousel() -> Element {
    let document = dom::document().unwrap();
    let fixture = dom::create(&document, "div", "carousel-fixture").unwrap();
    fixture.set_inner_html(CAROUSEL_FIXTURE);
    dom::body(&document).unwrap().append_child(&fixture).unwrap();
    carousel::init(&document, &CarouselConfig::default()).unwrap();
    fixture
}

fn mouse(target: &HtmlElement, kind: &str, client_x: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(client_x);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn test_carousel_is_wrapped_with_step_buttons() {
    let fixture = mount_carousel();

    let carousel = find(&fixture, ".books-carousel");
    let wrapper = carousel.parent_element().expect("wrapped");
    assert!(wrapper.class_list().contains("carousel-wrapper"));
    assert!(wrapper
        .parent_element()
        .is_some_and(|section| section.class_list().contains("books")));

    let prev = find(&fixture, ".carousel-wrapper > .carousel-btn.prev");
    let next = find(&fixture, ".carousel-wrapper > .carousel-btn.next");
    assert_eq!(prev.text_content().as_deref(), Some("‹"));
    assert_eq!(next.text_content().as_deref(), Some("›"));
    assert!(prev.has_attribute("aria-label"));

    // At rest on the left edge
    assert_eq!(opacity(&prev), "0.3");
    assert_eq!(opacity(&next), "1");

    // Jump to the right edge and report the scroll
    carousel.set_scroll_left(carousel.scroll_width());
    carousel.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert_eq!(opacity(&prev), "1");
    assert_eq!(opacity(&next), "0.3");

    fixture.remove();
}

#[wasm_bindgen_test]
fn test_mouse_drag_scrolls_at_double_speed() {
    let fixture = mount_carousel();
    let carousel = find(&fixture, ".books-carousel");
    assert_eq!(carousel.scroll_left(), 0);

    mouse(&carousel, "mousedown", 150);
    assert!(carousel.class_list().contains("active"));

    // 50px left with the default multiplier of 2
    mouse(&carousel, "mousemove", 100);
    assert_eq!(carousel.scroll_left(), 100);

    mouse(&carousel, "mouseup", 100);
    assert!(!carousel.class_list().contains("active"));

    // Moves after release are ignored
    mouse(&carousel, "mousemove", 20);
    assert_eq!(carousel.scroll_left(), 100);

    fixture.remove();
}

#[wasm_bindgen_test]
async fn test_next_button_scrolls_one_step() {
    let fixture = mount_carousel();
    let carousel = find(&fixture, ".books-carousel");

    find(&fixture, ".carousel-btn.next").click();
    TimeoutFuture::new(1500).await;

    assert!(
        (carousel.scroll_left() - 200).abs() <= 1,
        "scrolled to {}",
        carousel.scroll_left()
    );

    find(&fixture, ".carousel-btn.prev").click();
    TimeoutFuture::new(1500).await;
    assert_eq!(carousel.scroll_left(), 0);

    fixture.remove();
}
