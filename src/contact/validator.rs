use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

const FALLBACK_MESSAGE: &str = "Invalid input";

/// The three inputs of the contact form, in focus priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Message,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Name, FieldKind::Email, FieldKind::Message];

    /// The `name`/`id` the input carries in the document.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Message => "message",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            FieldKind::Name => 0,
            FieldKind::Email => 1,
            FieldKind::Message => 2,
        }
    }

    pub fn accepts(self, value: &str) -> bool {
        match self {
            FieldKind::Name => validate_name(value),
            FieldKind::Email => validate_email(value),
            FieldKind::Message => validate_message(value),
        }
    }

    pub fn error_message(self) -> &'static str {
        error_message_for(self.as_str())
    }
}

/// Length of `value` as the browser measures `value.trim().length`: the BOM
/// is trimmed like whitespace and the rest counts UTF-16 code units.
pub fn trimmed_length(value: &str) -> usize {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .encode_utf16()
        .count()
}

pub fn validate_name(value: &str) -> bool {
    trimmed_length(value) >= 2
}

pub fn validate_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn validate_message(value: &str) -> bool {
    trimmed_length(value) >= 10
}

/// Message shown under an input that failed validation.
pub fn error_message_for(field_name: &str) -> &'static str {
    match field_name {
        "name" => "Name must be at least 2 characters",
        "email" => "Please enter a valid email address",
        "message" => "Message must be at least 10 characters",
        _ => FALLBACK_MESSAGE,
    }
}

/// Result of evaluating one field. Built on blur or submit and thrown away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl FieldState {
    /// Empty input is never reported as an error; the user simply hasn't typed yet.
    pub fn evaluate(kind: FieldKind, value: &str) -> Self {
        let is_valid = value.is_empty() || kind.accepts(value);
        Self {
            value: value.to_string(),
            is_valid,
            error_message: (!is_valid).then(|| kind.error_message().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn name_needs_two_trimmed_characters() {
        assert!(validate_name("Jo"));
        assert!(!validate_name("J"));
        assert!(!validate_name("  J  "));
        assert!(validate_name("  Jo  "));
        // One astral character is two UTF-16 units.
        assert!(validate_name("😀"));
        assert!(!validate_name("\u{feff}J"));
        assert!(!validate_name("J\u{feff}"));
    }

    #[test]
    fn email_accepts_simple_addresses() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("jo@x.com"));
        assert!(validate_email("first.last@mail.example.org"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("bad"));
        assert!(!validate_email("a@@b.com"));
        assert!(!validate_email("@b.com"));
    }

    #[test]
    fn message_length_boundary() {
        assert!(validate_message("0123456789"));
        assert!(validate_message("   0123456789   "));
        assert!(!validate_message("012345678"));
        assert!(validate_message("01234567😀"));
        assert!(!validate_message("\u{feff}012345678\u{feff}"));
    }

    #[test]
    fn unknown_field_falls_back_to_generic_message() {
        assert_eq!(error_message_for("phone"), "Invalid input");
        assert_eq!(FieldKind::Email.error_message(), "Please enter a valid email address");
    }

    #[test]
    fn empty_value_shows_no_error() {
        for kind in FieldKind::ALL {
            let state = FieldState::evaluate(kind, "");
            assert!(state.is_valid);
            assert_eq!(state.error_message, None);
        }
    }

    #[test]
    fn invalid_value_carries_its_message() {
        let state = FieldState::evaluate(FieldKind::Message, "hi");
        assert_eq!(
            state,
            FieldState {
                value: "hi".to_string(),
                is_valid: false,
                error_message: Some("Message must be at least 10 characters".to_string()),
            }
        );
    }

    proptest! {
        #[test]
        fn name_rule_matches_trimmed_length(s in "\\PC{1,12}") {
            let state = FieldState::evaluate(FieldKind::Name, &s);
            let trimmed = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
            prop_assert_eq!(state.is_valid, trimmed.encode_utf16().count() >= 2);
        }

        #[test]
        fn error_shown_only_for_nonempty_invalid_values(s in "\\PC{0,24}") {
            for kind in FieldKind::ALL {
                let state = FieldState::evaluate(kind, &s);
                let should_flag = !s.is_empty() && !kind.accepts(&s);
                prop_assert_eq!(state.error_message.is_some(), should_flag);
            }
        }

        #[test]
        fn whitespace_never_passes_email(local in "[a-z]{1,5}", host in "[a-z]{1,5}") {
            let spaced = format!("{} x@{}.com", local, host);
            prop_assert!(!validate_email(&spaced));
        }
    }
}
