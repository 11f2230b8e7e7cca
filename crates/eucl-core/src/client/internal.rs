use std::sync::{Arc, RwLock};

use crate::client::client_settings::DeviceType;

/// Everything needed to reach the EUCL API: the base url and a shared HTTP
/// client carrying the default headers.
pub struct ApiConfiguration {
    /// Base url of the API, without a trailing slash.
    pub base_path: String,
    /// Shared HTTP client.
    pub client: reqwest::Client,
    /// Which client binary is talking.
    pub device_type: DeviceType,
}

impl std::fmt::Debug for ApiConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfiguration")
            .field("base_path", &self.base_path)
            .field("device_type", &self.device_type)
            .finish_non_exhaustive()
    }
}

/// Mutable state shared by all clones of a [`crate::Client`].
pub struct InternalClient {
    // SDK-managed bearer token, installed after a successful login.
    tokens: RwLock<Option<String>>,
    api_config: RwLock<Arc<ApiConfiguration>>,
}

impl InternalClient {
    pub(crate) fn new(config: ApiConfiguration) -> Self {
        Self {
            tokens: RwLock::new(None),
            api_config: RwLock::new(Arc::new(config)),
        }
    }

    /// Returns a snapshot of the current API configuration.
    pub fn get_api_configuration(&self) -> Arc<ApiConfiguration> {
        self.api_config
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    /// Installs the access token used for authenticated API calls.
    pub fn set_tokens(&self, token: String) {
        *self.tokens.write().expect("RwLock is not poisoned") = Some(token);
    }

    /// The currently installed access token, if the client has logged in.
    pub fn get_access_token(&self) -> Option<String> {
        self.tokens.read().expect("RwLock is not poisoned").clone()
    }
}

impl std::fmt::Debug for InternalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token.
        f.debug_struct("InternalClient").finish_non_exhaustive()
    }
}
