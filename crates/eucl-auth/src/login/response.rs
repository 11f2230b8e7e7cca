use crate::login::AuthToken;

/// Outcome of a login call, already tagged by the API layer.
///
/// This replaces the loosely shaped `{ token?, message? }` body the service
/// answers with: by the time a response reaches the controller it is either
/// authenticated or rejected, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResponse {
    /// The service accepted the credentials and issued a token.
    Authenticated(LoginSuccessResponse),
    /// The service refused to issue a token.
    Rejected {
        /// Server-provided reason, when the service gave one.
        message: Option<String>,
    },
}

/// Payload of an accepted login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccessResponse {
    /// Token to persist and to attach to authenticated API calls.
    pub token: AuthToken,
}
