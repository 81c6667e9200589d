//! Syntactic email check used before submitting registration/comment forms.
//!
//! Deliberately approximate: one local part of `[a-z0-9.-_]`, one host label,
//! then one to four dotted suffix labels. Not an RFC 5322 validator.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9.\-_]+@[a-z0-9\-_]+(\.[a-z0-9\-_]+){1,4}$").expect("email pattern compiles")
});

/// Returns `true` when the lower-cased input matches the email pattern.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}
