use std::sync::Arc;

use reqwest::header::{self, HeaderValue};

use super::internal::{ApiConfiguration, InternalClient};
use crate::ClientSettings;

/// The main struct to interact with the EUCL mobile SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance. This is required to properly use the FFI API, where we can't
    // just use normal Rust references effectively. For this to happen, any mutable state needs
    // to be behind an Arc, as part of the [`InternalClient`] struct.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new EUCL client, using the default settings when none are given.
    pub fn new(settings: Option<ClientSettings>) -> Self {
        let settings = settings.unwrap_or_default();

        let headers = build_default_headers(&settings);
        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("HTTP client build should not fail");

        let config = ApiConfiguration {
            base_path: settings.api_url,
            client: http_client,
            device_type: settings.device_type,
        };

        Self {
            internal: Arc::new(InternalClient::new(config)),
        }
    }
}

fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    // A user agent with invalid header characters falls back to the SDK default.
    let user_agent = HeaderValue::from_str(&settings.user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("EUCL Rust-SDK"));
    headers.insert(header::USER_AGENT, user_agent);
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeviceType;

    #[test]
    fn client_uses_provided_settings() {
        let client = Client::new(Some(ClientSettings {
            api_url: "https://api.example.com".into(),
            user_agent: "test-agent".into(),
            device_type: DeviceType::Android,
        }));

        let config = client.internal.get_api_configuration();
        assert_eq!(config.base_path, "https://api.example.com");
        assert_eq!(config.device_type, DeviceType::Android);
    }
}
