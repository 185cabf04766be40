//! EAX authenticated encryption
//!
//! EAX (Bellare, Rogaway, Wagner) combines counter mode with OMAC over any
//! block cipher that CMAC supports. The nonce must be exactly one block
//! long and the tag may be truncated to anything from 1 byte to a full
//! block.
//!
//! ```text
//! N   = OMAC_0(nonce)
//! H   = OMAC_1(associated data)
//! C   = CTR_N(plaintext)
//! tag = (N ^ H ^ OMAC_2(C))[..tag_size]
//! ```
//!
//! where `OMAC_t(x) = CMAC(0^(bs-1) || t || x)`.
//!
//! ## Constant-Time Guarantees
//!
//! The tag is compared with [`ct_eq`] and decryption only runs once it has
//! verified, so a rejected message never produces plaintext.

use alloc::vec;
use alloc::vec::Vec;

use cipherkit_api::{AuthenticatedCipher, Result as CoreResult};
use cipherkit_internal::constant_time::ct_eq;
use zeroize::Zeroizing;

use crate::block::{BlockCipher, Ctr};
use crate::error::{to_core_result, validate, Result};
use crate::mac::{Cmac, Mac};

/// Domain tag for the nonce OMAC
pub const NONCE_TAG: u8 = 0x00;
/// Domain tag for the associated data OMAC
pub const HEADER_TAG: u8 = 0x01;
/// Domain tag for the ciphertext OMAC
pub const CIPHERTEXT_TAG: u8 = 0x02;

/// Zero bytes preceding the domain tag; CMAC caps the block size at 128
const ZERO_PREFIX: [u8; 128] = [0u8; 128];

const ALGORITHM: &str = "EAX";

/// EAX over a borrowed block cipher
///
/// One instance can seal and open any number of messages, each under its
/// own nonce. Scratch state is reused between calls, hence `&mut self`.
pub struct Eax<'a, B: BlockCipher + ?Sized> {
    mac: Cmac<'a, B>,
    ctr: Ctr<'a, B>,
    tag_size: usize,
}

impl<'a, B: BlockCipher + ?Sized> Eax<'a, B> {
    /// Create an EAX instance producing `tag_size`-byte tags
    ///
    /// Fails with an unsupported-cipher error if CMAC has no polynomial for
    /// the cipher's block size, or a parameter error unless
    /// `1 <= tag_size <= block_size`.
    pub fn new(cipher: &'a B, tag_size: usize) -> Result<Self> {
        let mac = Cmac::new(cipher)?;
        validate::parameter(
            tag_size >= 1 && tag_size <= mac.block_size(),
            "tag_size",
            "EAX tag size must be between 1 and the block size",
        )?;
        let ctr = Ctr::new(cipher)?;

        Ok(Self { mac, ctr, tag_size })
    }

    /// Block size of the underlying cipher
    pub fn block_size(&self) -> usize {
        self.mac.block_size()
    }

    /// Required nonce length, equal to the block size
    pub fn nonce_size(&self) -> usize {
        self.block_size()
    }

    /// Tag length in bytes
    pub fn tag_size(&self) -> usize {
        self.tag_size
    }

    /// Bytes added by sealing
    pub fn overhead(&self) -> usize {
        self.tag_size
    }

    /// `OMAC_t(data)` into `out`
    fn omac(&mut self, domain: u8, data: &[u8], out: &mut [u8]) -> Result<()> {
        let prefix = self.block_size() - 1;

        self.mac.reset();
        self.mac.update(&ZERO_PREFIX[..prefix])?;
        self.mac.update(&[domain])?;
        self.mac.update(data)?;
        self.mac.finalize_into_reset(out)
    }

    /// `N = OMAC_0(nonce)`, the initial counter register
    fn nonce_omac(&mut self, nonce: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let mut n = Zeroizing::new(vec![0u8; self.block_size()]);
        self.omac(NONCE_TAG, nonce, &mut n)?;
        Ok(n)
    }

    /// Full-width `N ^ H ^ C` for `ciphertext`
    fn full_tag(
        &mut self,
        n: &[u8],
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>> {
        let block_size = self.block_size();
        let mut h = Zeroizing::new(vec![0u8; block_size]);
        let mut tag = Zeroizing::new(vec![0u8; block_size]);

        self.omac(HEADER_TAG, associated_data, &mut h)?;
        self.omac(CIPHERTEXT_TAG, ciphertext, &mut tag)?;

        for ((t, n), h) in tag.iter_mut().zip(n).zip(h.iter()) {
            *t ^= n ^ h;
        }

        Ok(tag)
    }

    /// Seal `plaintext` into `dst` as `ciphertext || tag`
    ///
    /// Returns the number of bytes written, `plaintext.len() + tag_size`.
    /// Bytes of `dst` past that point are left alone.
    pub fn seal_into(
        &mut self,
        dst: &mut [u8],
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> Result<usize> {
        validate::length("EAX nonce", nonce.len(), self.nonce_size())?;
        let sealed_len = plaintext.len() + self.tag_size;
        validate::min_length("EAX destination", dst.len(), sealed_len)?;

        let (body, rest) = dst.split_at_mut(plaintext.len());

        let n = self.nonce_omac(nonce)?;
        self.ctr.set_counter(&n)?;
        self.ctr.xor(body, plaintext)?;

        let tag = self.full_tag(&n, body, associated_data)?;
        rest[..self.tag_size].copy_from_slice(&tag[..self.tag_size]);

        Ok(sealed_len)
    }

    /// Seal `plaintext` into a new `ciphertext || tag` buffer
    pub fn seal(
        &mut self,
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>> {
        let mut out = vec![0u8; plaintext.len() + self.tag_size];
        self.seal_into(&mut out, nonce, plaintext, associated_data)?;
        Ok(out)
    }

    /// Verify `ciphertext || tag` and decrypt the body into `dst`
    ///
    /// Returns the plaintext length. On an authentication failure `dst` is
    /// not written.
    pub fn open_into(
        &mut self,
        dst: &mut [u8],
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> Result<usize> {
        validate::length("EAX nonce", nonce.len(), self.nonce_size())?;
        validate::authentication(ciphertext.len() >= self.tag_size, ALGORITHM)?;

        let (body, tag) = ciphertext.split_at(ciphertext.len() - self.tag_size);
        validate::min_length("EAX destination", dst.len(), body.len())?;

        let n = self.nonce_omac(nonce)?;
        let expected = self.full_tag(&n, body, associated_data)?;
        validate::authentication(ct_eq(&expected[..self.tag_size], tag), ALGORITHM)?;

        self.ctr.set_counter(&n)?;
        self.ctr.xor(dst, body)?;

        Ok(body.len())
    }

    /// Verify `ciphertext || tag` and return the plaintext
    ///
    /// Errors are the same as for [`open_into`](Eax::open_into).
    pub fn open(
        &mut self,
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>> {
        let mut out = vec![0u8; ciphertext.len().saturating_sub(self.tag_size)];
        self.open_into(&mut out, nonce, ciphertext, associated_data)?;
        Ok(out)
    }
}

impl<B: BlockCipher + ?Sized> AuthenticatedCipher for Eax<'_, B> {
    const ALGORITHM_ID: &'static str = ALGORITHM;

    fn nonce_size(&self) -> usize {
        Eax::nonce_size(self)
    }

    fn overhead(&self) -> usize {
        Eax::overhead(self)
    }

    fn seal(
        &mut self,
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> CoreResult<Vec<u8>> {
        to_core_result(
            Eax::seal(self, nonce, plaintext, associated_data),
            Self::ALGORITHM_ID,
        )
    }

    fn open(
        &mut self,
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> CoreResult<Vec<u8>> {
        to_core_result(
            Eax::open(self, nonce, ciphertext, associated_data),
            Self::ALGORITHM_ID,
        )
    }
}
