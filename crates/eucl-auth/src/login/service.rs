use eucl_core::ApiError;

use crate::login::{LoginResponse, form::Credentials};

/// The remote authentication call, as seen by the form controller.
///
/// [`crate::login::LoginClient`] implements this over the real API; tests
/// substitute stubs to drive the controller without a network.
#[async_trait::async_trait]
pub trait LoginService: Send + Sync {
    /// Exchanges credentials for a token.
    ///
    /// A service-level refusal (bad credentials, no token issued) is a
    /// [`LoginResponse::Rejected`], not an error; `Err` is reserved for
    /// transport and decoding failures.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
}
