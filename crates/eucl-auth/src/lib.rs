#![doc = include_str!("../README.md")]

mod auth_client;

pub mod login;
pub mod navigation;

pub use auth_client::{AuthClient, AuthClientExt};
