//! Block ciphers used by the unit tests

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};

use super::BlockCipher;
use crate::error::{validate, Result};

/// AES-128 from the RustCrypto `aes` crate
pub(crate) struct TestAes128(aes::Aes128);

impl TestAes128 {
    pub(crate) fn new(key: &[u8; 16]) -> Self {
        Self(aes::Aes128::new(GenericArray::from_slice(key)))
    }

    pub(crate) fn from_hex(key: &str) -> Self {
        let key: [u8; 16] = hex::decode(key)
            .unwrap()
            .try_into()
            .expect("AES-128 key must be 16 bytes");
        Self::new(&key)
    }
}

impl BlockCipher for TestAes128 {
    fn block_size(&self) -> usize {
        16
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES-128 block", block.len(), 16)?;
        self.0.encrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }
}

/// Identity permutation with an arbitrary block size
///
/// `E(x) = x`, so counter mode emits its counter register verbatim and the
/// register's progression can be read straight off the output.
pub(crate) struct Identity(pub(crate) usize);

impl BlockCipher for Identity {
    fn block_size(&self) -> usize {
        self.0
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("identity block", block.len(), self.0)
    }
}
