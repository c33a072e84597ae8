//! SubmissionState - The Submission Lifecycle
//!
//! One submission moves `Idle -> InFlight -> {Succeeded, Failed}` and back
//! to `Idle` once the caller acknowledges the terminal state. Transitions
//! are owned by the runtime controller; this type only models them.

/// Lifecycle of one form instance's submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing dispatched; the form accepts a submit trigger.
    #[default]
    Idle,
    /// Exactly one request is awaiting its response. Re-entrant submit
    /// triggers are ignored while here.
    InFlight,
    /// The last submission committed a record.
    Succeeded,
    /// The last submission failed with a user-facing reason.
    Failed(String),
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }

    /// Terminal states await acknowledgement before the next attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded | SubmissionState::Failed(_)
        )
    }

    /// The failure reason, if the last submission failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert!(SubmissionState::default().is_idle());
    }

    #[test]
    fn terminal_states() {
        assert!(SubmissionState::Succeeded.is_terminal());
        assert!(SubmissionState::Failed("nope".into()).is_terminal());
        assert!(!SubmissionState::InFlight.is_terminal());
        assert_eq!(
            SubmissionState::Failed("nope".into()).failure(),
            Some("nope")
        );
    }
}
