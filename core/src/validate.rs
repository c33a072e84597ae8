//! Validation Aggregator
//!
//! Runs every field rule and collects the failures into a `FieldErrors`
//! map. The map is fully recomputed on every pass; callers must never
//! reuse a stale map from an earlier attempt.

use crate::fields::{Field, FormFields};
use crate::rules;
use std::collections::BTreeMap;
use std::fmt;

/// Whether an empty password fails validation.
///
/// Signup requires one; profile update treats an empty password as
/// "leave unchanged" but still checks a non-empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPolicy {
    Required,
    Optional,
}

impl PasswordPolicy {
    fn is_required(self) -> bool {
        matches!(self, PasswordPolicy::Required)
    }
}

/// Field name to user-facing message, for the fields that failed.
///
/// Empty map = the form may submit. This is the sole gate for contacting
/// the transport collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    /// True iff no field carries a message.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for one field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate failed fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, msg)| (*f, msg.as_str()))
    }

    fn record(&mut self, field: Field, result: Result<(), rules::RuleError>) {
        if let Err(err) = result {
            self.errors.insert(field, err.to_string());
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

/// Run every rule against `fields` and collect the failures.
///
/// Pure function of its inputs: identical inputs yield identical output.
pub fn validate(fields: &FormFields, policy: PasswordPolicy) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.record(Field::Name, rules::check_name(&fields.name));
    errors.record(Field::Username, rules::check_username(&fields.username));
    errors.record(Field::Email, rules::check_email(&fields.email));
    errors.record(
        Field::Password,
        rules::check_password(&fields.password, policy.is_required()),
    );
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        let mut fields = FormFields::new();
        fields.set(Field::Name, "Jane Doe");
        fields.set(Field::Username, "jane");
        fields.set(Field::Email, "jane@x.com");
        fields.set(Field::Password, "Abc!234");
        fields
    }

    #[test]
    fn valid_form_has_no_errors() {
        let errors = validate(&filled(), PasswordPolicy::Required);
        assert!(errors.is_valid());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn collects_every_failed_field() {
        let fields = FormFields::new();
        let errors = validate(&fields, PasswordPolicy::Required);

        assert!(!errors.is_valid());
        assert_eq!(errors.get(Field::Name), Some("Full name is required."));
        assert_eq!(errors.get(Field::Username), Some("Username is required."));
        assert_eq!(errors.get(Field::Email), Some("Email is required."));
        assert_eq!(errors.get(Field::Password), Some("Password is required."));
    }

    #[test]
    fn empty_password_passes_when_optional() {
        let mut fields = filled();
        fields.set(Field::Password, "");

        assert!(!validate(&fields, PasswordPolicy::Required).is_valid());
        assert!(validate(&fields, PasswordPolicy::Optional).is_valid());
    }

    #[test]
    fn validate_is_idempotent() {
        let mut fields = filled();
        fields.set(Field::Email, "broken");

        let first = validate(&fields, PasswordPolicy::Required);
        let second = validate(&fields, PasswordPolicy::Required);
        assert_eq!(first, second);
    }

    #[test]
    fn bio_never_fails_validation() {
        let mut fields = filled();
        fields.set(Field::Bio, "!!! anything at all !!!");
        assert!(validate(&fields, PasswordPolicy::Required).is_valid());
    }
}
