//! Hero search box with a filterable "Popular Topics" dropdown
//!
//! Submitting only announces the query; there is no results page yet.

use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::components::notification::{NotificationCenter, Severity};
use crate::config::SearchConfig;
use crate::dom;
use crate::error::{LandingError, Result};

/// Case-insensitive substring match of `query` against a topic's text
#[must_use]
pub fn topic_matches(topic: &str, query: &str) -> bool {
    topic.to_lowercase().contains(&query.to_lowercase())
}

/// Notice for a submitted query, or `None` when there is nothing to search
#[must_use]
pub fn search_notice(query: &str) -> Option<String> {
    let query = query.trim();
    (!query.is_empty()).then(|| format!("Searching for \"{query}\"..."))
}

fn build_dropdown(document: &Document, config: &SearchConfig) -> Result<(Element, Vec<HtmlElement>)> {
    let dropdown = dom::create(document, "div", "search-dropdown")?;
    let category = dom::create(document, "div", "dropdown-category")?;
    let heading = dom::create(document, "h4", "")?;
    heading.set_text_content(Some(&config.heading));
    let list = dom::create(document, "ul", "")?;

    let mut items = Vec::with_capacity(config.topics.len());
    for topic in &config.topics {
        let item = dom::create_html(document, "li", "")?;
        let link = dom::create(document, "a", "")?;
        link.set_attribute("href", "#")
            .map_err(|e| LandingError::from_js(&e))?;
        link.set_text_content(Some(topic));
        item.append_child(&link)
            .and_then(|_| list.append_child(&item))
            .map_err(|e| LandingError::from_js(&e))?;
        items.push(item);
    }

    category
        .append_child(&heading)
        .and_then(|_| category.append_child(&list))
        .and_then(|_| dropdown.append_child(&category))
        .map_err(|e| LandingError::from_js(&e))?;

    Ok((dropdown, items))
}

fn filter_items(items: &[HtmlElement], query: &str) {
    for item in items {
        let text = item.text_content().unwrap_or_default();
        let display = if topic_matches(&text, query) {
            "block"
        } else {
            "none"
        };
        dom::set_style(item, "display", display).ok();
    }
}

/// Attach the dropdown and its handlers if the search box is on the page.
///
/// # Errors
///
/// Returns `LandingError::Dom` if the dropdown cannot be built or attached.
pub fn init(
    document: &Document,
    config: &SearchConfig,
    notifications: NotificationCenter,
) -> Result<()> {
    let Some(input) = dom::query_as::<HtmlInputElement>(document, ".search-input")? else {
        return Ok(());
    };
    let Some(explore) = dom::query(document, ".explore-btn")? else {
        return Ok(());
    };
    let Some(search_box) = dom::query(document, ".search-box")? else {
        return Ok(());
    };

    let (dropdown, items) = build_dropdown(document, config)?;
    search_box
        .append_child(&dropdown)
        .map_err(|e| LandingError::from_js(&e))?;

    {
        let dropdown = dropdown.clone();
        let button = explore.clone();
        dom::listen(&explore, "click", move |event| {
            event.stop_propagation();
            dom::toggle_class(&dropdown, "show").ok();
            dom::toggle_class(&button, "active").ok();
        })?;
    }

    {
        let dropdown = dropdown.clone();
        let button = explore.clone();
        let search_box = search_box.clone();
        dom::listen(document, "click", move |event| {
            if !dom::event_within(&search_box, &event) {
                dom::set_class(&dropdown, "show", false).ok();
                dom::set_class(&button, "active", false).ok();
            }
        })?;
    }

    {
        let field = input.clone();
        dom::listen(&input, "input", move |_| {
            let query = field.value().to_lowercase();
            filter_items(&items, &query);
            if !query.is_empty() {
                dom::set_class(&dropdown, "show", true).ok();
            }
        })?;
    }

    let field = input.clone();
    dom::listen(&input, "keypress", move |event| {
        if !dom::is_enter_key(&event) {
            return;
        }
        let Some(notice) = search_notice(&field.value()) else {
            return;
        };
        if let Err(e) = notifications.notify(&notice, Severity::Info) {
            e.log("search");
        }
    })?;

    Ok(())
}
