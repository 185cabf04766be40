//! Property-based tests for the ChaCha stream cipher

use cipherkit::algorithms::stream::chacha::{apply_key_stream, xor_key_stream};
use cipherkit::prelude::*;
use proptest::prelude::*;

fn rounds() -> impl Strategy<Value = usize> {
    prop_oneof![Just(CHACHA20_ROUNDS), Just(CHACHA12_ROUNDS), Just(CHACHA8_ROUNDS)]
}

proptest! {
    #[test]
    fn chacha_xor_is_involution(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        counter in any::<u32>(),
        rounds in rounds(),
        data in prop::collection::vec(any::<u8>(), 0..=300)
    ) {
        let mut ct = vec![0u8; data.len()];
        xor_key_stream(&mut ct, &data, &nonce, &key, counter, rounds).unwrap();

        let mut pt = ct.clone();
        apply_key_stream(&mut pt, &nonce, &key, counter, rounds).unwrap();

        prop_assert_eq!(pt, data);
    }

    #[test]
    fn chacha_chunking_does_not_change_output(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        rounds in rounds(),
        data in prop::collection::vec(any::<u8>(), 0..=400),
        cuts in prop::collection::vec(0usize..=400, 0..6)
    ) {
        let mut expected = vec![0u8; data.len()];
        xor_key_stream(&mut expected, &data, &nonce, &key, 0, rounds).unwrap();

        let mut cuts: Vec<usize> = cuts.into_iter().map(|c| c.min(data.len())).collect();
        cuts.sort_unstable();

        let mut cipher = ChaCha::new(&nonce, &key, rounds).unwrap();
        let mut out = vec![0u8; data.len()];
        let mut start = 0;
        for end in cuts.into_iter().chain(std::iter::once(data.len())) {
            cipher.xor_key_stream(&mut out[start..end], &data[start..end]).unwrap();
            start = end;
        }

        prop_assert_eq!(out, expected);
    }

    #[test]
    fn chacha_counter_offsets_the_keystream(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        blocks in 0usize..4,
        len in 0usize..200
    ) {
        // Keystream from counter k equals the keystream from 0 skipped by k blocks
        let mut long = vec![0u8; blocks * 64 + len];
        apply_key_stream(&mut long, &nonce, &key, 0, CHACHA20_ROUNDS).unwrap();

        let mut short = vec![0u8; len];
        apply_key_stream(&mut short, &nonce, &key, blocks as u32, CHACHA20_ROUNDS).unwrap();

        prop_assert_eq!(&long[blocks * 64..], &short[..]);
    }

    #[test]
    fn chacha_rejects_odd_rounds(rounds in (0usize..64).prop_filter("odd or zero", |r| *r == 0 || r % 2 == 1)) {
        let result = ChaCha::new(&[0u8; 12], &[0u8; 32], rounds);
        prop_assert!(result.is_err());
    }
}
