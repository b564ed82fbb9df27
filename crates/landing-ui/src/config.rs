//! Page-level configuration
//!
//! Every knob has a default matching the shipped stylesheet. A page can
//! override any subset by embedding
//! `<script type="application/json" id="landing-config">{ ... }</script>`.

use serde::Deserialize;
use web_sys::Document;

use crate::error::{LandingError, Result};

/// Id of the optional JSON configuration element
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Root configuration for all components
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub notification: NotificationConfig,
    pub newsletter: NewsletterConfig,
    pub carousel: CarouselConfig,
    pub header: HeaderConfig,
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub search: SearchConfig,
}

/// Toast timings in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Delay between insertion and the `show` class, so the hidden state paints first
    pub show_delay_ms: u32,
    /// Length of the hide transition before the node is removed
    pub transition_ms: u32,
    /// Lifetime of a toast nobody dismisses
    pub auto_dismiss_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 10,
            transition_ms: 300,
            auto_dismiss_ms: 5000,
        }
    }
}

/// Newsletter submission simulation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewsletterConfig {
    pub submit_delay_ms: u32,
    /// Button text while the submit is pending. The original text comes back afterwards.
    pub busy_label: String,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            busy_label: "Subscribing...".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Drag sensitivity, shared by mouse and touch
    pub drag_multiplier: f64,
    /// Distance scrolled by the prev/next buttons
    pub scroll_step: f64,
    /// Slack before the end edge counts as reached
    pub edge_tolerance: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_multiplier: 2.0,
            scroll_step: 200.0,
            edge_tolerance: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub scrolled_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: [
                ".feature-card",
                ".stat-item",
                ".feature-row",
                ".book-card",
                ".video-preview",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            threshold: 0.1,
        }
    }
}

impl RevealConfig {
    /// Comma-joined selector list for `querySelectorAll`
    #[must_use]
    pub fn selector_list(&self) -> String {
        self.selectors.join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub tick_ms: u32,
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            tick_ms: 16,
            threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub heading: String,
    pub topics: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heading: "Popular Topics".to_string(),
            topics: [
                "Algebra Basics",
                "Geometry",
                "Quadratic Equations",
                "Data Analysis",
                "Trigonometry",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

fn valid_threshold(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

impl LandingConfig {
    /// Parse a JSON override document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `LandingError::InvalidConfig` if the JSON is malformed or
    /// the resulting values fail [`LandingConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LandingError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read the optional `#landing-config` element from the document.
    ///
    /// # Errors
    ///
    /// Returns `LandingError::InvalidConfig` if the element exists but its
    /// contents cannot be used.
    pub fn from_document(document: &Document) -> Result<Self> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }

    /// Reject values that would stall timers or break observers.
    ///
    /// # Errors
    ///
    /// Returns `LandingError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &str| Err(LandingError::InvalidConfig(field.to_string()));

        if self.counter.tick_ms == 0 {
            return invalid("counter.tick_ms must be positive");
        }
        if self.counter.duration_ms == 0 {
            return invalid("counter.duration_ms must be positive");
        }
        if !valid_threshold(self.counter.threshold) {
            return invalid("counter.threshold must be within 0..=1");
        }
        if !valid_threshold(self.reveal.threshold) {
            return invalid("reveal.threshold must be within 0..=1");
        }
        if !(self.carousel.scroll_step.is_finite() && self.carousel.scroll_step > 0.0) {
            return invalid("carousel.scroll_step must be positive");
        }
        if !self.carousel.drag_multiplier.is_finite() {
            return invalid("carousel.drag_multiplier must be finite");
        }
        if !self.carousel.edge_tolerance.is_finite() {
            return invalid("carousel.edge_tolerance must be finite");
        }
        if !self.header.scrolled_threshold.is_finite() {
            return invalid("header.scrolled_threshold must be finite");
        }
        Ok(())
    }
}
