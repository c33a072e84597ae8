//! Rule Evaluator - Per-Field Verdicts
//!
//! Pure, stateless, deterministic functions over a single string input.
//! Each failure carries the exact user-facing message through `Display`,
//! so the aggregator never formats text itself.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern is valid"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").expect("email pattern is valid"));

/// Characters that count as "special" for the password rules.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length in characters.
const MIN_PASSWORD_LEN: usize = 6;

/// A failed field rule. `Display` yields the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("Full name is required.")]
    NameRequired,
    #[error("Name can only contain letters and spaces.")]
    NameCharset,
    #[error("Username is required.")]
    UsernameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Please enter a valid email.")]
    EmailFormat,
    #[error("Password is required.")]
    PasswordRequired,
    #[error("Password must contain {0}.")]
    PasswordUnmet(String),
}

/// The three password sub-rules, purely derived from the current value.
///
/// This never fails by itself; it is a building block for
/// [`check_password`] and for live requirement hints in a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRules {
    pub has_upper_case: bool,
    pub has_special_char: bool,
    pub is_min_length: bool,
}

impl PasswordRules {
    /// Evaluate all three sub-rules against `value`.
    pub fn check(value: &str) -> Self {
        Self {
            has_upper_case: value.chars().any(|c| c.is_ascii_uppercase()),
            has_special_char: value.chars().any(|c| SPECIAL_CHARS.contains(c)),
            is_min_length: value.chars().count() >= MIN_PASSWORD_LEN,
        }
    }

    pub fn all_met(&self) -> bool {
        self.has_upper_case && self.has_special_char && self.is_min_length
    }

    /// Descriptions of the unmet sub-rules, in fixed display order.
    pub fn unmet(&self) -> Vec<&'static str> {
        let mut unmet = Vec::new();
        if !self.has_upper_case {
            unmet.push("1 uppercase letter");
        }
        if !self.has_special_char {
            unmet.push("1 special character");
        }
        if !self.is_min_length {
            unmet.push("at least 6 characters");
        }
        unmet
    }
}

/// Join unmet-rule descriptions: one item stands alone, two or more are
/// joined with ", " and a final ", and " before the last.
fn join_with_and(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{}, and {}", head.join(", "), last),
    }
}

/// Full name: required after trimming; letters and whitespace only.
pub fn check_name(value: &str) -> Result<(), RuleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RuleError::NameRequired);
    }
    if !NAME_RE.is_match(trimmed) {
        return Err(RuleError::NameCharset);
    }
    Ok(())
}

/// Username: required after trimming, nothing else.
pub fn check_username(value: &str) -> Result<(), RuleError> {
    if value.trim().is_empty() {
        return Err(RuleError::UsernameRequired);
    }
    Ok(())
}

/// Email: required after trimming, then a single format check. All format
/// failures share one message.
pub fn check_email(value: &str) -> Result<(), RuleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RuleError::EmailRequired);
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Err(RuleError::EmailFormat);
    }
    Ok(())
}

/// Password: `required` governs the empty case; a non-empty value must
/// satisfy every sub-rule or the error names exactly the unmet ones.
pub fn check_password(value: &str, required: bool) -> Result<(), RuleError> {
    if value.is_empty() {
        return if required {
            Err(RuleError::PasswordRequired)
        } else {
            Ok(())
        };
    }

    let rules = PasswordRules::check(value);
    if rules.all_met() {
        Ok(())
    } else {
        Err(RuleError::PasswordUnmet(join_with_and(&rules.unmet())))
    }
}
