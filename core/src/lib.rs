//! Formwork Core - Pure Form Layer
//!
//! This crate defines the **synchronous** aspects of Formwork:
//! - `FormFields`: The named field store for one form instance
//! - `rules`: Per-field pass/fail verdicts and password sub-rules
//! - `validate`: The aggregator that gates submission
//! - `SubmissionState`: The submission lifecycle enum
//!
//! **IMPORTANT**: This layer is Pure Rust - no HTTP, no IO, no Async.

pub mod fields;
pub mod rules;
pub mod state;
pub mod validate;

pub mod prelude {
    pub use crate::fields::{Field, FormFields};
    pub use crate::state::SubmissionState;
    pub use crate::validate::{FieldErrors, PasswordPolicy, validate};
}

pub use fields::{Field, FormFields};
pub use rules::{PasswordRules, RuleError};
pub use state::SubmissionState;
pub use validate::{FieldErrors, PasswordPolicy, validate};
