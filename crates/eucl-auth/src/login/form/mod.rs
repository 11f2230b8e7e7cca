//! The headless login form controller and its state machine.

mod credentials;
mod login_form;
mod submission;

pub use credentials::Credentials;
pub use login_form::{LoginForm, SubmitError};
pub use submission::{SubmissionState, SubmitInProgressError};

/// Fields of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    /// The email input.
    Email,
    /// The password input.
    Password,
}

impl LoginField {
    /// The schema name of the field, matching the struct field on
    /// [`Credentials`].
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}
