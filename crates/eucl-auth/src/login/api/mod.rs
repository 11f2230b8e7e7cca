mod request;
mod response;
mod send_login_request;

pub(crate) use request::PasswordLoginPayload;
pub(crate) use response::{LoginApiResponse, LoginErrorApiResponse};
pub(crate) use send_login_request::send_login_request;
