#![doc = include_str!("../README.md")]

mod client;
pub mod error;

pub use client::{ApiConfiguration, Client, ClientSettings, DeviceType, InternalClient};
pub use error::ApiError;
