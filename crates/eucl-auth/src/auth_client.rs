use std::sync::Arc;

use eucl_core::Client;
use eucl_state::Repository;

use crate::{
    login::{AuthToken, LoginClient, form::LoginForm},
    navigation::Navigator,
};

/// Subclient containing auth functionality.
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Constructs a new `AuthClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Client for the login API.
    pub fn login(&self) -> LoginClient {
        LoginClient::new(self.client.clone())
    }

    /// A login form controller wired against the real login API, with the
    /// host-provided secure store and router.
    pub fn login_form(
        &self,
        token_repository: Arc<dyn Repository<AuthToken>>,
        navigator: Arc<dyn Navigator>,
    ) -> LoginForm {
        LoginForm::new(Arc::new(self.login()), token_repository, navigator)
    }
}

/// Extension trait for `Client` to provide access to the `AuthClient`.
pub trait AuthClientExt {
    /// Creates a new `AuthClient` instance.
    fn auth(&self) -> AuthClient;
}

impl AuthClientExt for Client {
    fn auth(&self) -> AuthClient {
        AuthClient {
            client: self.clone(),
        }
    }
}
