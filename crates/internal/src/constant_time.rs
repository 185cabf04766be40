//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// The running time depends only on the lengths, never on the contents.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// XOR `keystream` into `buf` in place
///
/// Returns the number of bytes processed, `min(buf.len(), keystream.len())`.
pub fn xor_in_place(buf: &mut [u8], keystream: &[u8]) -> usize {
    let n = buf.len().min(keystream.len());
    for (b, k) in buf[..n].iter_mut().zip(&keystream[..n]) {
        *b ^= k;
    }
    n
}
