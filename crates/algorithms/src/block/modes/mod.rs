//! Block cipher modes of operation

pub mod ctr;

// Re-exports
pub use ctr::Ctr;
