//! Block cipher abstractions and modes of operation
//!
//! This crate does not ship a block cipher. Callers supply one by
//! implementing [`BlockCipher`], and the modes here borrow it.

use crate::error::Result;

pub mod modes;

pub use modes::Ctr;

/// The encrypt-one-block capability that the modes and MACs need
///
/// Implementations are borrowed, never owned, by the constructions built on
/// them, so one keyed cipher can back several instances at once.
pub trait BlockCipher {
    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Encrypt exactly one block in place
    ///
    /// `block.len()` is always `self.block_size()` when called from this
    /// crate; implementations should reject other lengths with an error.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod test_utils;
