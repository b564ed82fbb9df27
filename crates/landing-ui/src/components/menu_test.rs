//! Browser tests for the mobile menu

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

use super::menu;
use crate::dom;
use crate::error::LandingError;

wasm_bindgen_test_configure!(run_in_browser);

const HEADER_FIXTURE: &str = r#"
<header class="header">
  <div class="header-container">
    <a class="logo">Math800</a>
    <nav class="nav-links">
      <a class="nav-link">Courses</a>
      <a class="nav-link">Books</a>
    </nav>
    <div class="auth-buttons"></div>
  </div>
</header>
<div class="menu-outside">elsewhere</div>
"#;

fn mount_fixture(html: &str) -> Element {
    let document = dom::document().expect("document");
    let fixture = dom::create(&document, "div", "menu-fixture").expect("fixture");
    fixture.set_inner_html(html);
    dom::body(&document)
        .expect("body")
        .append_child(&fixture)
        .expect("append fixture");
    fixture
}

fn click(root: &Element, selector: &str) {
    dom::query_within(root, selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} in fixture"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn menu_classes(root: &Element) -> (bool, bool, bool) {
    let toggle = dom::query_within(root, ".mobile-menu-btn").unwrap().unwrap();
    let panel = dom::query_within(root, ".nav-links").unwrap().unwrap();
    let body = dom::body(&dom::document().unwrap()).unwrap();
    (
        toggle.class_list().contains("active"),
        panel.class_list().contains("active"),
        body.class_list().contains("menu-open"),
    )
}

#[wasm_bindgen_test]
fn test_missing_header_is_an_error() {
    let document = dom::document().unwrap();
    assert!(dom::query(&document, ".header").unwrap().is_none());
    assert_eq!(
        menu::init(&document).err(),
        Some(LandingError::MissingElement(".header".to_string()))
    );
}

#[wasm_bindgen_test]
fn test_menu_lifecycle() {
    let fixture = mount_fixture(HEADER_FIXTURE);
    let document = dom::document().unwrap();
    menu::init(&document).unwrap();

    // Toggle lands right before the auth buttons with three bars
    let toggle = dom::query_within(&fixture, ".mobile-menu-btn").unwrap().unwrap();
    assert!(toggle
        .next_element_sibling()
        .is_some_and(|sibling| sibling.class_list().contains("auth-buttons")));
    assert_eq!(dom::query_all_within(&toggle, ".menu-line").unwrap().len(), 3);
    assert_eq!(menu_classes(&fixture), (false, false, false));

    // Classes follow click parity, always together
    for clicks in 1..=4 {
        click(&fixture, ".mobile-menu-btn");
        let open = clicks % 2 == 1;
        assert_eq!(menu_classes(&fixture), (open, open, open), "after {clicks} clicks");
    }

    // Header clicks outside the panel close it
    click(&fixture, ".mobile-menu-btn");
    click(&fixture, ".logo");
    assert_eq!(menu_classes(&fixture), (false, false, false));

    // Clicks inside the panel keep it open
    click(&fixture, ".mobile-menu-btn");
    click(&fixture, ".nav-links");
    assert_eq!(menu_classes(&fixture), (true, true, true));

    // Any nav link closes it
    click(&fixture, ".nav-link");
    assert_eq!(menu_classes(&fixture), (false, false, false));

    // So does a click elsewhere on the page
    click(&fixture, ".mobile-menu-btn");
    click(&fixture, ".menu-outside");
    assert_eq!(menu_classes(&fixture), (false, false, false));

    fixture.remove();
}
