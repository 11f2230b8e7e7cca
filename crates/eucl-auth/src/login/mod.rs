//! Login: the form controller, API models and the transport call backing the
//! app's login screen.

pub(crate) mod api;
pub mod form;

mod login_client;
mod response;
mod service;
mod token;

pub use login_client::LoginClient;
pub use response::{LoginResponse, LoginSuccessResponse};
pub use service::LoginService;
pub use token::{AuthToken, TOKEN_STORAGE_KEY};
