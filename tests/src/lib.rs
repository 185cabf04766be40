//! Shared fixtures for the cipherkit integration tests
pub mod adapters;
pub mod error;
pub mod vectors;
