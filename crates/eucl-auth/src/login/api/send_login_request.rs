use eucl_core::{ApiConfiguration, ApiError};

use crate::login::{
    LoginResponse,
    api::{LoginApiResponse, LoginErrorApiResponse, PasswordLoginPayload},
};

/// Sends a password login request to the EUCL auth endpoint and tags the
/// response.
///
/// Service-level refusals (a 2xx body without a token, or a non-2xx JSON body)
/// come back as [`LoginResponse::Rejected`]; only transport and decoding
/// failures are `Err`.
pub(crate) async fn send_login_request(
    configuration: &ApiConfiguration,
    payload: &PasswordLoginPayload,
) -> Result<LoginResponse, ApiError> {
    let url = format!("{}/auth/login", configuration.base_path);
    log::debug!("sending login request to {url}");

    let response = configuration
        .client
        .post(url)
        .header(reqwest::header::ACCEPT, "application/json")
        // token responses must not be cached by any intermediary
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        let body: LoginApiResponse = response.json().await?;
        return Ok(body.into());
    }

    // Auth refusals come back as JSON with an optional message; anything else
    // surfaces as a response content error.
    let text = response.text().await?;
    match serde_json::from_str::<LoginErrorApiResponse>(&text) {
        Ok(body) => Ok(body.into()),
        Err(_) => Err(ApiError::ResponseContent {
            status,
            message: text,
        }),
    }
}
