//! Count-up animation for `.stat-number` figures
//!
//! "1234+" counts 0, 9, 19, ... and lands exactly on "1234+". Text around
//! the number is kept as written.

use futures::StreamExt;
use gloo_timers::future::IntervalStream;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::config::CounterConfig;
use crate::dom;
use crate::error::Result;
use crate::observer::{self, VisibilityOptions};

/// A stat's text split around its first run of digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterText {
    prefix: String,
    target: u64,
    suffix: String,
}

impl CounterText {
    /// `None` when the text holds no digits or the number overflows `u64`
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let rest = text.get(start..)?;
        let len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let target = rest.get(..len)?.parse::<u64>().ok()?;

        Some(Self {
            prefix: text.get(..start)?.to_string(),
            target,
            suffix: rest.get(len..)?.to_string(),
        })
    }

    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The stat text showing `value`
    #[must_use]
    pub fn render(&self, value: u64) -> String {
        format!("{}{value}{}", self.prefix, self.suffix)
    }
}

/// Fixed-step progress from 0 to a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / f64::from(tick_ms.max(1));
        let target_f = target as f64;
        let step = if ticks > 0.0 { target_f / ticks } else { target_f };
        Self {
            target,
            step,
            current: 0.0,
            done: false,
        }
    }

    /// Advance one tick and return the value to display.
    /// The final tick snaps exactly to the target.
    pub fn tick(&mut self) -> u64 {
        if self.done {
            return self.target;
        }
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.done = true;
            self.target
        } else {
            self.current.floor() as u64
        }
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }
}

/// Run the count-up on `element`. The interval is dropped, and therefore
/// cleared, as soon as the target is shown.
pub fn animate(element: Element, text: CounterText, config: CounterConfig) {
    let mut animation = CounterAnimation::new(text.target(), config.duration_ms, config.tick_ms);
    spawn_local(async move {
        let mut ticks = IntervalStream::new(config.tick_ms);
        while ticks.next().await.is_some() {
            let value = animation.tick();
            element.set_text_content(Some(&text.render(value)));
            if animation.is_done() {
                break;
            }
        }
    });
}

fn start(element: &Element, config: CounterConfig) {
    if let Some(text) = element.text_content().as_deref().and_then(CounterText::parse) {
        animate(element.clone(), text, config);
    }
}

/// Animate each `.stat-number` the first time it is half visible.
///
/// # Errors
///
/// Returns `LandingError::Dom` if the observer cannot be created.
pub fn init(document: &Document, config: &CounterConfig) -> Result<()> {
    let counters = dom::query_all(document, ".stat-number")?;
    if counters.is_empty() {
        return Ok(());
    }

    let config = *config;
    if !observer::is_supported() {
        for counter in &counters {
            start(counter, config);
        }
        return Ok(());
    }

    observer::observe_once(
        &counters,
        VisibilityOptions::with_threshold(config.threshold),
        move |counter| start(counter, config),
    )?;
    Ok(())
}
