//! # SubmissionController: The Submission State Machine
//!
//! Drives one form instance through `Idle -> InFlight -> {Succeeded,
//! Failed}` and back. Every submit attempt re-runs validation; the
//! transport is contacted exactly once per pass that validates, and at
//! most one session-state commit happens per call.
//!
//! All failure kinds are terminal here: the caller observes a
//! [`SubmitOutcome`], never a propagated error.

use crate::notify::Severity;
use crate::session::{CACHE_KEY, UserRecord};
use crate::transport::{Endpoint, TransportError};
use crate::wiring::Wiring;
use formwork_core::{FieldErrors, FormFields, PasswordPolicy, SubmissionState, validate};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

/// Generic alert emitted when validation blocks a submission.
const VALIDATION_ALERT: &str = "Please fix the errors in the form before submitting.";

/// A submission that got past validation but did not commit.
#[derive(Debug, Error)]
pub enum SubmitFault {
    /// The call succeeded but the backend answered with an `error` field.
    #[error("{0}")]
    Rejected(String),
    /// Network or decode fault below the application level.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A required collaborator was never wired.
    #[error("collaborator not wired: {0}")]
    MissingResource(&'static str),
}

/// Control flow as data: every submit trigger resolves to exactly one of
/// these, and nothing propagates past the controller.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A submission was already in flight; this trigger was a no-op.
    Ignored,
    /// Validation failed; the transport was never contacted.
    Invalid(FieldErrors),
    /// The backend accepted and the record was committed.
    Completed(UserRecord),
    /// Dispatched but not committed; see the fault.
    Failed(SubmitFault),
}

impl SubmitOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, SubmitOutcome::Ignored)
    }

    /// The committed record, if the submission completed.
    pub fn completed(&self) -> Option<&UserRecord> {
        match self {
            SubmitOutcome::Completed(record) => Some(record),
            _ => None,
        }
    }

    /// The per-field messages, if validation blocked the submission.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitOutcome::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// One form instance's submission controller.
///
/// Construct per flow: [`signup`](Self::signup) requires a password,
/// [`update_profile`](Self::update_profile) treats an empty one as
/// "leave unchanged". State changes are published on a watch channel so
/// an embedding UI can disable its submit control while in flight.
pub struct SubmissionController {
    id: Uuid,
    endpoint: Endpoint,
    policy: PasswordPolicy,
    extra: serde_json::Map<String, Value>,
    state: watch::Sender<SubmissionState>,
}

impl SubmissionController {
    fn new(endpoint: Endpoint, policy: PasswordPolicy) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            id: Uuid::new_v4(),
            endpoint,
            policy,
            extra: serde_json::Map::new(),
            state,
        }
    }

    /// Controller for the account-creation flow.
    pub fn signup() -> Self {
        Self::new(Endpoint::Signup, PasswordPolicy::Required)
    }

    /// Controller for the profile-update flow of an existing account.
    pub fn update_profile(account_id: impl Into<String>) -> Self {
        Self::new(
            Endpoint::UpdateProfile {
                account_id: account_id.into(),
            },
            PasswordPolicy::Optional,
        )
    }

    /// Merge an externally supplied value into every request body, e.g.
    /// an uploaded-image URL under `profilePic`.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Watch state changes, e.g. to disable a submit button while
    /// in flight.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Return a terminal state to `Idle`. No-op otherwise.
    pub fn acknowledge(&self) {
        let mut acknowledged = false;
        self.state.send_if_modified(|state| {
            if state.is_terminal() {
                *state = SubmissionState::Idle;
                acknowledged = true;
            }
            acknowledged
        });
        if acknowledged {
            tracing::debug!(form.id = %self.id, "terminal state acknowledged");
        }
    }

    /// Validate and, if valid, dispatch one request to the backend.
    ///
    /// The body is serialized before the call; field edits made while the
    /// request is in flight do not affect it. A trigger that arrives while
    /// a submission is in flight returns [`SubmitOutcome::Ignored`]
    /// without a second transport call.
    pub async fn submit(&self, fields: &FormFields, wiring: &Wiring) -> SubmitOutcome {
        // A fresh trigger is the acknowledging interaction for a terminal
        // state from the previous attempt.
        self.acknowledge();

        if self.state.borrow().is_in_flight() {
            tracing::debug!(form.id = %self.id, "submit ignored, already in flight");
            return SubmitOutcome::Ignored;
        }

        let errors = validate(fields, self.policy);
        if !errors.is_valid() {
            tracing::debug!(form.id = %self.id, failed_fields = errors.len(), "validation blocked submission");
            if let Some(sink) = wiring.notifications() {
                sink.notify("Validation Error", VALIDATION_ALERT, Severity::Error);
            }
            return SubmitOutcome::Invalid(errors);
        }

        let Some(transport) = wiring.transport() else {
            return self.fail(wiring, SubmitFault::MissingResource("transport"));
        };
        let Some(session) = wiring.session() else {
            return self.fail(wiring, SubmitFault::MissingResource("session"));
        };

        let mut body = fields.to_body();
        if let Value::Object(map) = &mut body {
            for (key, value) in &self.extra {
                map.insert(key.clone(), value.clone());
            }
        }

        self.state.send_replace(SubmissionState::InFlight);

        let span = tracing::info_span!("submission", form.id = %self.id, endpoint = %self.endpoint);
        let response = transport.call(&self.endpoint, body).instrument(span).await;

        let body = match response {
            Ok(body) => body,
            Err(err) => return self.fail(wiring, SubmitFault::Transport(err)),
        };

        // An `error` field in an otherwise successful response is an
        // application-level rejection.
        if let Some(error) = body.get("error") {
            let message = error
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            return self.fail(wiring, SubmitFault::Rejected(message));
        }

        let record: UserRecord = match serde_json::from_value(body) {
            Ok(record) => record,
            Err(err) => {
                return self.fail(
                    wiring,
                    SubmitFault::Transport(TransportError::Decode(err.to_string())),
                );
            }
        };

        session.replace(record.clone());
        if let Some(cache) = wiring.cache() {
            cache.store(CACHE_KEY, &record);
        }
        if matches!(self.endpoint, Endpoint::UpdateProfile { .. }) {
            if let Some(sink) = wiring.notifications() {
                sink.notify("Success", "Profile updated successfully", Severity::Success);
            }
        }

        self.state.send_replace(SubmissionState::Succeeded);
        tracing::debug!(form.id = %self.id, user = %record.username, "submission committed");
        SubmitOutcome::Completed(record)
    }

    fn fail(&self, wiring: &Wiring, fault: SubmitFault) -> SubmitOutcome {
        let reason = fault.to_string();
        tracing::warn!(form.id = %self.id, %reason, "submission failed");
        if let Some(sink) = wiring.notifications() {
            sink.notify("Error", &reason, Severity::Error);
        }
        self.state.send_replace(SubmissionState::Failed(reason));
        SubmitOutcome::Failed(fault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_the_flow() {
        let signup = SubmissionController::signup();
        assert_eq!(signup.endpoint(), &Endpoint::Signup);
        assert!(signup.state().is_idle());

        let update = SubmissionController::update_profile("u-1");
        assert_eq!(
            update.endpoint(),
            &Endpoint::UpdateProfile {
                account_id: "u-1".into()
            }
        );
    }

    #[test]
    fn acknowledge_resets_only_terminal_states() {
        let controller = SubmissionController::signup();
        controller
            .state
            .send_replace(SubmissionState::Failed("nope".into()));
        controller.acknowledge();
        assert!(controller.state().is_idle());

        controller.state.send_replace(SubmissionState::InFlight);
        controller.acknowledge();
        assert!(controller.state().is_in_flight());
    }
}
