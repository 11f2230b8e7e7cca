use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the target and behavior of the
/// EUCL client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use eucl_core::{ClientSettings, DeviceType};
/// let settings = ClientSettings {
///     api_url: "https://api.eucl.rw".to_string(),
///     user_agent: "EUCL Rust-SDK".to_string(),
///     device_type: DeviceType::Sdk,
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The api url of the targeted EUCL instance. Defaults to `https://api.eucl.rw`
    pub api_url: String,
    /// The user_agent to send to EUCL. Defaults to `EUCL Rust-SDK`
    pub user_agent: String,
    /// Device type to send to EUCL. Defaults to SDK
    pub device_type: DeviceType,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.eucl.rw".into(),
            user_agent: "EUCL Rust-SDK".into(),
            device_type: DeviceType::Sdk,
        }
    }
}

/// The client binary talking to the API.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub enum DeviceType {
    Android = 0,
    Ios = 1,
    Sdk = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_deserialize_with_defaults() {
        let settings: ClientSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.api_url, "https://api.eucl.rw");
        assert_eq!(settings.user_agent, "EUCL Rust-SDK");
        assert_eq!(settings.device_type, DeviceType::Sdk);
    }

    #[test]
    fn settings_reject_unknown_fields() {
        let result: Result<ClientSettings, _> =
            serde_json::from_str(r#"{"identityUrl": "https://example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn settings_roundtrip() {
        let settings = ClientSettings {
            api_url: "https://api.example.com".into(),
            user_agent: "EUCL Android/3.1".into(),
            device_type: DeviceType::Android,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: ClientSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api_url, settings.api_url);
        assert_eq!(parsed.device_type, DeviceType::Android);
    }
}
