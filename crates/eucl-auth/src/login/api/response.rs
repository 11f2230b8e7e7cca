use serde::Deserialize;

use crate::login::{
    AuthToken,
    response::{LoginResponse, LoginSuccessResponse},
};

/// 2xx body of the login endpoint.
///
/// The service reports a refusal either here, by leaving out the token, or as
/// a non-2xx [`LoginErrorApiResponse`]; both tag to [`LoginResponse::Rejected`].
#[derive(Deserialize, Debug)]
pub(crate) struct LoginApiResponse {
    pub token: Option<String>,
    pub message: Option<String>,
}

impl From<LoginApiResponse> for LoginResponse {
    fn from(api: LoginApiResponse) -> Self {
        match api.token.filter(|token| !token.is_empty()) {
            Some(token) => LoginResponse::Authenticated(LoginSuccessResponse {
                token: AuthToken::new(token),
            }),
            None => LoginResponse::Rejected {
                message: api.message,
            },
        }
    }
}

/// Non-2xx JSON body of the login endpoint.
#[derive(Deserialize, Debug)]
pub(crate) struct LoginErrorApiResponse {
    pub message: Option<String>,
}

impl From<LoginErrorApiResponse> for LoginResponse {
    fn from(api: LoginErrorApiResponse) -> Self {
        LoginResponse::Rejected {
            message: api.message,
        }
    }
}
