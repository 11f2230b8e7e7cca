/// Lifecycle of a login submission.
///
/// Replaces the original screen's loose `loading` flag plus error string with
/// one state machine, so "in flight", "refused" and "done" cannot be observed
/// at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// No request in flight and nothing to report.
    #[default]
    Idle,
    /// The authentication request is in flight.
    Submitting,
    /// The service issued a token; the user is being navigated away.
    Succeeded,
    /// The service refused the login.
    Failed {
        /// Banner text shown above the form.
        message: String,
    },
}

impl SubmissionState {
    /// True while the authentication request is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// A submit was attempted while another one is in flight.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("A login request is already in progress")]
pub struct SubmitInProgressError;
