#![doc = include_str!("../README.md")]

mod api;
mod repository;

pub use api::start_api_mock;
pub use repository::MemoryRepository;
