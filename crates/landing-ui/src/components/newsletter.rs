//! Newsletter signup: inline email validation and a simulated submit
//!
//! Nothing is sent anywhere. A successful submit waits out a fixed delay
//! and then reports success.

use std::sync::LazyLock;

use gloo_timers::future::TimeoutFuture;
use regex::Regex;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlButtonElement, HtmlInputElement};

use crate::components::notification::{NotificationCenter, Severity};
use crate::config::NewsletterConfig;
use crate::dom;
use crate::error::Result;

pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter your email address";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing!";

// The browser's whitespace set: ECMAScript WhiteSpace plus LineTerminator.
// Differs from Unicode White_Space on U+0085 and U+FEFF.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// Shape check only: something@something.something, no whitespace, single @
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let part = format!("[^@{WHITESPACE_CLASS}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).ok()
});

/// Whitespace as the browser's `trim()` and `\s` see it
#[must_use]
pub const fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Minimal syntactic email check. Not RFC 5322.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

/// Whether the field should carry the `invalid` mark while typing
#[must_use]
pub fn needs_invalid_mark(raw: &str) -> bool {
    !raw.is_empty() && !is_valid_email(raw)
}

/// Outcome of the submit gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionCheck<'a> {
    Empty,
    Invalid,
    Accepted(&'a str),
}

impl SubmissionCheck<'_> {
    /// Message shown to the user when the submit is refused
    #[must_use]
    pub const fn rejection_message(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(EMPTY_EMAIL_MESSAGE),
            Self::Invalid => Some(INVALID_EMAIL_MESSAGE),
            Self::Accepted(_) => None,
        }
    }
}

/// Gate a submit on the raw field value. Checks run on the trimmed text.
#[must_use]
pub fn evaluate_submission(raw: &str) -> SubmissionCheck<'_> {
    let email = raw.trim_matches(is_form_whitespace);
    if email.is_empty() {
        SubmissionCheck::Empty
    } else if !is_valid_email(email) {
        SubmissionCheck::Invalid
    } else {
        SubmissionCheck::Accepted(email)
    }
}

#[derive(Clone)]
struct SignupForm {
    input: HtmlInputElement,
    button: HtmlButtonElement,
    config: NewsletterConfig,
    notifications: NotificationCenter,
}

impl SignupForm {
    fn refresh_invalid_mark(&self) {
        dom::set_class(&self.input, "invalid", needs_invalid_mark(&self.input.value())).ok();
    }

    fn submit(&self) {
        let raw = self.input.value();
        let check = evaluate_submission(&raw);

        if let Some(message) = check.rejection_message() {
            if let Err(e) = self.notifications.notify(message, Severity::Error) {
                e.log("newsletter");
            }
            self.input.focus().ok();
            return;
        }

        let label = self.button.text_content();
        self.button.set_disabled(true);
        self.button.set_text_content(Some(&self.config.busy_label));

        let form = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(form.config.submit_delay_ms).await;
            form.finish(label.as_deref());
        });
    }

    fn finish(&self, label: Option<&str>) {
        web_sys::console::log_1(&"Newsletter subscription simulated".into());
        if let Err(e) = self
            .notifications
            .notify(SUBSCRIBED_MESSAGE, Severity::Success)
        {
            e.log("newsletter");
        }
        self.input.set_value("");
        self.button.set_disabled(false);
        self.button.set_text_content(label);
    }
}

/// Wire the newsletter form if all of its parts are on the page.
///
/// # Errors
///
/// Returns `LandingError::Dom` if a listener cannot be attached.
pub fn init(
    document: &Document,
    config: &NewsletterConfig,
    notifications: NotificationCenter,
) -> Result<()> {
    if dom::query(document, ".newsletter-form")?.is_none() {
        return Ok(());
    }
    let Some(input) = dom::query_as::<HtmlInputElement>(document, ".newsletter-input")? else {
        return Ok(());
    };
    let Some(button) = dom::query_as::<HtmlButtonElement>(document, ".newsletter-btn")? else {
        return Ok(());
    };

    let form = SignupForm {
        input: input.clone(),
        button: button.clone(),
        config: config.clone(),
        notifications,
    };

    {
        let form = form.clone();
        dom::listen(&input, "input", move |_| form.refresh_invalid_mark())?;
    }

    dom::listen(&button, "click", move |event| {
        event.prevent_default();
        form.submit();
    })?;

    // Enter goes through the button so both paths stay identical
    dom::listen(&input, "keypress", move |event| {
        if dom::is_enter_key(&event) {
            button.click();
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_address_is_valid() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("student@math800.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_missing_at_is_invalid() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("example.com"));
    }

    #[test]
    fn test_missing_dot_after_at_is_invalid() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.b@c"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_whitespace_and_double_at_are_invalid() {
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email(" a@b.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_whitespace_follows_browser_rules() {
        // BOM counts as whitespace in the browser, NEL does not
        assert!(!is_valid_email("a\u{FEFF}@b.c"));
        assert!(!is_valid_email("a@b\u{3000}.c"));
        assert!(is_valid_email("a\u{85}b@c.d"));
        assert!(is_form_whitespace('\u{FEFF}'));
        assert!(!is_form_whitespace('\u{85}'));
    }

    #[test]
    fn test_invalid_mark_only_for_non_empty_bad_input() {
        assert!(!needs_invalid_mark(""));
        assert!(!needs_invalid_mark("a@b.co"));
        assert!(needs_invalid_mark("a@"));
        // Live check uses the raw value, so padding counts against it
        assert!(needs_invalid_mark("a@b.co "));
    }

    #[test]
    fn test_empty_submission() {
        assert_eq!(evaluate_submission(""), SubmissionCheck::Empty);
        assert_eq!(evaluate_submission("   \t"), SubmissionCheck::Empty);
        assert_eq!(
            evaluate_submission("  ").rejection_message(),
            Some(EMPTY_EMAIL_MESSAGE)
        );
    }

    #[test]
    fn test_invalid_submission() {
        let check = evaluate_submission("not-an-email");
        assert_eq!(check, SubmissionCheck::Invalid);
        assert_eq!(check.rejection_message(), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_accepted_submission_is_trimmed() {
        let check = evaluate_submission("  a@b.co ");
        assert_eq!(check, SubmissionCheck::Accepted("a@b.co"));
        assert_eq!(check.rejection_message(), None);
    }

    #[test]
    fn test_trim_uses_browser_whitespace() {
        assert_eq!(
            evaluate_submission("\u{FEFF}a@b.co\u{3000}"),
            SubmissionCheck::Accepted("a@b.co")
        );
        assert_eq!(
            evaluate_submission("\u{85}a@b.co"),
            SubmissionCheck::Accepted("\u{85}a@b.co")
        );
        assert_eq!(evaluate_submission("\u{FEFF}\u{A0}"), SubmissionCheck::Empty);
    }
}
