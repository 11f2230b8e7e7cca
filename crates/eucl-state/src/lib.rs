#![doc = include_str!("../README.md")]

/// This module provides a generic repository interface for storing and retrieving items.
pub mod repository;

pub use repository::{Repository, RepositoryError, RepositoryItem};
