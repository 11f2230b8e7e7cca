#[allow(clippy::module_inception)]
mod client;
mod client_settings;
mod internal;

pub use client::Client;
pub use client_settings::{ClientSettings, DeviceType};
pub use internal::{ApiConfiguration, InternalClient};
