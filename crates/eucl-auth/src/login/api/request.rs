use serde::Serialize;

use crate::login::form::Credentials;

/// JSON body for the password login endpoint.
#[derive(Serialize, Debug)]
pub(crate) struct PasswordLoginPayload {
    /// Account email address.
    pub email: String,
    /// Account password, sent as entered.
    pub password: String,
}

impl From<&Credentials> for PasswordLoginPayload {
    fn from(credentials: &Credentials) -> Self {
        Self {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        }
    }
}
