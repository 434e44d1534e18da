use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SiteError;

pub const SUBSCRIBE_LABEL: &str = "Subscribe";
pub const SUBSCRIBING_LABEL: &str = "Subscribing...";
pub const SUCCESS_MESSAGE: &str =
    "Thank you! You've been subscribed to Ancient Tech Decoded updates.";

// U+FEFF counts as whitespace in browsers but not in `char::is_whitespace`.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid")
});

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Trims and validates the raw field value.
pub fn validate_email(raw: &str) -> Result<String, SiteError> {
    let email = raw.trim_matches(is_blank);
    if email.is_empty() || !is_valid_email(email) {
        return Err(SiteError::InvalidEmail);
    }
    Ok(email.to_string())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the field is left as typed.
    Rejected(SiteError),
    /// Validation passed; the simulated request is in flight.
    Pending(String),
    /// A submission is already in flight.
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterState {
    email: String,
    submitting: bool,
}

impl NewsletterState {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            SUBSCRIBING_LABEL
        } else {
            SUBSCRIBE_LABEL
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Ignored;
        }
        match validate_email(&self.email) {
            Ok(email) => {
                self.submitting = true;
                SubmitOutcome::Pending(email)
            }
            Err(e) => SubmitOutcome::Rejected(e),
        }
    }

    /// The simulated delay elapsed: clear the field and re-enable the form.
    pub fn complete(&mut self) -> &'static str {
        self.email.clear();
        self.submitting = false;
        SUCCESS_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("a@b.com", true)]
    #[case("bad", false)]
    #[case("a@b", false)]
    #[case("a b@c.com", false)]
    #[case("a@@b.com", false)]
    #[case("first.last@sub.example.org", true)]
    #[case("", false)]
    #[case("a\u{FEFF}b@c.com", false)]
    #[case("a@b\u{FEFF}.com", false)]
    fn email_pattern(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert!(!is_valid_email(" a@b.com "));
        assert_eq!(validate_email(" a@b.com "), Ok("a@b.com".to_string()));
    }

    #[test]
    fn byte_order_mark_is_trimmed() {
        assert_eq!(validate_email("\u{FEFF}a@b.com"), Ok("a@b.com".to_string()));
        assert_eq!(validate_email("a@b.com\u{FEFF}\n"), Ok("a@b.com".to_string()));
        assert_eq!(validate_email("\u{FEFF}"), Err(SiteError::InvalidEmail));
    }

    #[test]
    fn invalid_submit_keeps_field() {
        let mut form = NewsletterState::default();
        form.set_email("not-an-email");
        assert_eq!(form.submit(), SubmitOutcome::Rejected(SiteError::InvalidEmail));
        assert_eq!(form.email(), "not-an-email");
        assert!(!form.is_submitting());
        assert_eq!(form.button_label(), SUBSCRIBE_LABEL);
    }

    #[test]
    fn valid_submit_disables_until_complete() {
        let mut form = NewsletterState::default();
        form.set_email("  reader@example.com ");
        assert_eq!(form.submit(), SubmitOutcome::Pending("reader@example.com".to_string()));
        assert!(form.is_submitting());
        assert_eq!(form.button_label(), SUBSCRIBING_LABEL);
        assert_eq!(form.submit(), SubmitOutcome::Ignored);

        assert_eq!(form.complete(), SUCCESS_MESSAGE);
        assert_eq!(form.email(), "");
        assert!(!form.is_submitting());
        assert_eq!(form.button_label(), SUBSCRIBE_LABEL);
    }

    #[test]
    fn rejection_message_is_user_facing() {
        assert_eq!(SiteError::InvalidEmail.to_string(), "Please enter a valid email address");
    }
}
