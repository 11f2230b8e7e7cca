use serde::{Deserialize, Serialize};

/// Storage key the secure store files the auth token under.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Opaque bearer token issued by a successful login.
///
/// The controller holds it only long enough to hand it to the injected secure
/// store; it is not retained in form state afterwards.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps the raw token string returned by the service.
    pub fn new(token: String) -> Self {
        Self(token)
    }

    /// The raw token string, for handing to the API layer or the store.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens must never end up in logs.
impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

eucl_state::register_repository_item!(AuthToken, "auth_token");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let token = AuthToken::new("super-secret".to_string());
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let token = AuthToken::new("t1".to_string());
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"t1\"");
    }
}
