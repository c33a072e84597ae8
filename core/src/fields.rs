//! FormFields - The Named Field Store
//!
//! One `FormFields` value is the mutable editing state of a single form
//! instance. Fields are fixed by name; `bio` is only present on the
//! profile-update flow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of field names an account form can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Username,
    Email,
    Password,
    Bio,
}

impl Field {
    /// The wire/key name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::Bio => "bio",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of the named text fields for one form instance.
///
/// Owned exclusively by one form; reset only when the form goes away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl FormFields {
    /// Create an empty field store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field by name.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::Bio => self.bio = Some(value),
        }
    }

    /// Read one field by name. An absent `bio` reads as empty.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Bio => self.bio.as_deref().unwrap_or(""),
        }
    }

    /// Serialize the current values into a JSON request body.
    ///
    /// The body is a snapshot: later edits do not affect an already
    /// serialized submission.
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("field values serialize infallibly")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_round_trip() {
        let mut fields = FormFields::new();
        fields.set(Field::Name, "Jane Doe");
        fields.set(Field::Bio, "hello");

        assert_eq!(fields.get(Field::Name), "Jane Doe");
        assert_eq!(fields.get(Field::Bio), "hello");
        assert_eq!(fields.get(Field::Password), "");
    }

    #[test]
    fn body_omits_absent_bio() {
        let mut fields = FormFields::new();
        fields.set(Field::Username, "jane");

        let body = fields.to_body();
        assert_eq!(body["username"], "jane");
        assert!(body.get("bio").is_none());
    }

    #[test]
    fn body_keeps_bio_when_set() {
        let mut fields = FormFields::new();
        fields.set(Field::Bio, "");

        let body = fields.to_body();
        assert_eq!(body["bio"], "");
    }
}
