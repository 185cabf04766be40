//! Block ciphers plugged into the EAX and CMAC constructions

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use cipherkit_algorithms::block::BlockCipher;
use cipherkit_algorithms::error::{validate, Result as AlgoResult};

use crate::error::{Result, VectorError};

/// AES-128 from the RustCrypto `aes` crate
pub struct Aes128(aes::Aes128);

impl Aes128 {
    /// Key the cipher from a 16-byte array
    pub fn new(key: &[u8; 16]) -> Self {
        Self(aes::Aes128::new(GenericArray::from_slice(key)))
    }

    /// Key the cipher from a slice, rejecting other AES key sizes
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        let key: &[u8; 16] = key
            .try_into()
            .map_err(|_| VectorError::KeySize(key.len()))?;
        Ok(Self::new(key))
    }

    /// Key the cipher from hex
    pub fn from_hex(key: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(key)?)
    }
}

impl BlockCipher for Aes128 {
    fn block_size(&self) -> usize {
        16
    }

    fn encrypt_block(&self, block: &mut [u8]) -> AlgoResult<()> {
        validate::length("AES-128 block", block.len(), 16)?;
        self.0.encrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }
}
