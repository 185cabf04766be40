//! Internal utilities shared by the cipherkit crates
//!
//! Nothing in here is part of the supported public API; the helpers are
//! public only so sibling crates in the workspace can reach them.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
