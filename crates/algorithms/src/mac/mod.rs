//! Message Authentication Code (MAC) algorithms
//!
//! Only block-cipher MACs live here; the block cipher is supplied by the
//! caller through [`BlockCipher`](crate::block::BlockCipher).

use crate::error::Result;

pub mod cmac;

pub use cmac::Cmac;

/// Trait for incremental MAC computation
pub trait Mac {
    /// Block size of the underlying primitive in bytes
    fn block_size(&self) -> usize;

    /// Tag size in bytes
    fn output_size(&self) -> usize;

    /// Absorb more message bytes
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Write the tag for everything absorbed so far into `out` and reset
    ///
    /// `out` must be exactly [`output_size`](Mac::output_size) bytes.
    fn finalize_into_reset(&mut self, out: &mut [u8]) -> Result<()>;

    /// Discard absorbed input, keeping the key
    fn reset(&mut self);
}
