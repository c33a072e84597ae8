//! Formwork facade crate.
//!
//! Re-exports the pure core and the async runtime with a single entry
//! point, plus the small cosmetic helpers that sit outside both layers.

pub use formwork_core as core;
pub use formwork_runtime as runtime;

pub mod feed;

pub use formwork_core::{
    Field, FieldErrors, FormFields, PasswordPolicy, PasswordRules, RuleError, SubmissionState,
    validate,
};
pub use formwork_runtime::{
    Endpoint, InMemorySession, MemoryCache, NotificationSink, ProfileCache, RecordingSink,
    SessionHandle, Severity, SubmissionController, SubmitFault, SubmitOutcome, TracingSink,
    Transport, TransportError, UserRecord, Wiring,
};

pub mod prelude {
    pub use crate::feed::suggested_slot;
    pub use formwork_core::prelude::*;
    pub use formwork_runtime::prelude::*;
}
