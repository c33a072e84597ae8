//! Formwork Runtime - Async Submission Engine
//!
//! Drives the pure layer from `formwork-core`: collaborators (transport,
//! session, notifications, cache) are wired through a type-safe container
//! and consumed by the submission controller state machine.

pub mod controller;
pub mod notify;
pub mod session;
pub mod transport;
pub mod wiring;

pub mod prelude {
    pub use crate::controller::{SubmissionController, SubmitFault, SubmitOutcome};
    pub use crate::notify::{NotificationSink, Severity};
    pub use crate::session::{InMemorySession, SessionHandle, UserRecord};
    pub use crate::transport::{Endpoint, Transport, TransportError};
    pub use crate::wiring::Wiring;
}

pub use controller::{SubmissionController, SubmitFault, SubmitOutcome};
pub use notify::{NotificationSink, RecordingSink, Severity, TracingSink};
pub use session::{InMemorySession, MemoryCache, ProfileCache, SessionHandle, UserRecord};
pub use transport::{Endpoint, Transport, TransportError};
pub use wiring::Wiring;
