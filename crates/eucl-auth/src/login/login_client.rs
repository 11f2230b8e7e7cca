use eucl_core::{ApiError, Client};

use crate::login::{
    LoginResponse, LoginService,
    api::{PasswordLoginPayload, send_login_request},
    form::Credentials,
};

/// Client for authenticating EUCL users against the real auth API.
///
/// Obtained through [`crate::AuthClient::login`]. After a successful login it
/// installs the issued token on the shared [`Client`] so follow-up API calls
/// are authenticated.
#[derive(Clone)]
pub struct LoginClient {
    pub(crate) client: Client,
}

impl LoginClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl LoginService for LoginClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let configuration = self.client.internal.get_api_configuration();
        let payload = PasswordLoginPayload::from(credentials);
        let response = send_login_request(&configuration, &payload).await?;

        if let LoginResponse::Authenticated(success) = &response {
            self.client
                .internal
                .set_tokens(success.token.as_str().to_string());
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use eucl_core::Client;
    use eucl_test::start_api_mock;
    use wiremock::{Mock, ResponseTemplate, matchers};

    use super::*;

    #[tokio::test]
    async fn successful_login_installs_the_access_token() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "t1",
            })));
        let (_server, settings) = start_api_mock(vec![mock]).await;

        let client = Client::new(Some(settings));
        let login_client = LoginClient::new(client.clone());

        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        };
        let response = login_client.login(&credentials).await.unwrap();

        assert!(matches!(response, LoginResponse::Authenticated(_)));
        assert_eq!(client.internal.get_access_token(), Some("t1".to_string()));
    }

    #[tokio::test]
    async fn rejected_login_leaves_the_client_unauthenticated() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Invalid credentials",
            })));
        let (_server, settings) = start_api_mock(vec![mock]).await;

        let client = Client::new(Some(settings));
        let login_client = LoginClient::new(client.clone());

        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        };
        let response = login_client.login(&credentials).await.unwrap();

        assert!(matches!(response, LoginResponse::Rejected { .. }));
        assert_eq!(client.internal.get_access_token(), None);
    }
}
