// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Keystream derivation and the XOR stream transform.
//!
//! The cipher is a repeating-key XOR: the password bytes are cycled out to a
//! fixed-length keystream, and each payload byte is XORed against
//! `key[i % key.len()]`. The same call encrypts and decrypts (involution).
//!
//! This is deliberately **not** a secure cipher — no salt, no nonce, no
//! key-stretching, no authentication. Identical passwords always produce
//! identical keystreams, so the only wrong-password signal is downstream
//! (the message-mode tag check, or an implausible image header). Callers
//! wanting real confidentiality should encrypt before handing the payload
//! to this crate.

use crate::error::StegoError;
use zeroize::Zeroizing;

/// Canonical keystream length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Derive a fixed-length keystream from a password.
///
/// The password's UTF-8 bytes are repeated until at least `len` bytes are
/// available, then truncated to exactly `len`. Deterministic: the decoder
/// re-derives the identical keystream from the password alone.
///
/// # Errors
/// [`StegoError::InvalidKey`] if the password is empty.
pub fn derive_keystream(password: &str, len: usize) -> Result<Zeroizing<Vec<u8>>, StegoError> {
    let bytes = password.as_bytes();
    if bytes.is_empty() {
        return Err(StegoError::InvalidKey);
    }
    let mut key = Zeroizing::new(Vec::with_capacity(len));
    while key.len() < len {
        let take = (len - key.len()).min(bytes.len());
        key.extend_from_slice(&bytes[..take]);
    }
    Ok(key)
}

/// XOR-transform `data` against a repeating `key`.
///
/// Same-length output; applying the transform twice with the same key
/// returns the original data.
///
/// # Errors
/// [`StegoError::InvalidKey`] if `key` is empty. The guard is explicit so
/// the index `i % key.len()` can never divide by zero.
pub fn xor_transform(data: &[u8], key: &[u8]) -> Result<Vec<u8>, StegoError> {
    if key.is_empty() {
        return Err(StegoError::InvalidKey);
    }
    Ok(data
        .iter()
        .enumerate()
        .map(|(i, &d)| d ^ key[i % key.len()])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keystream_repeats_and_truncates() {
        // "swordfish" is 9 bytes; 32 = 3 full repeats + 5 bytes.
        let key = derive_keystream("swordfish", KEY_LEN).unwrap();
        assert_eq!(key.len(), KEY_LEN);
        let mut expected = b"swordfish".repeat(4);
        expected.truncate(KEY_LEN);
        assert_eq!(&key[..], &expected[..]);
    }

    #[test]
    fn keystream_exact_multiple() {
        let key = derive_keystream("abcd", 32).unwrap();
        assert_eq!(&key[..], b"abcd".repeat(8).as_slice());
    }

    #[test]
    fn keystream_longer_than_requested() {
        let key = derive_keystream("a-password-well-over-thirty-two-bytes-long", 32).unwrap();
        assert_eq!(key.len(), 32);
        assert_eq!(&key[..], &b"a-password-well-over-thirty-two-bytes-long"[..32]);
    }

    #[test]
    fn keystream_deterministic() {
        let a = derive_keystream("same", KEY_LEN).unwrap();
        let b = derive_keystream("same", KEY_LEN).unwrap();
        assert_eq!(&a[..], &b[..]);
    }

    #[test]
    fn empty_password_rejected() {
        assert!(matches!(
            derive_keystream("", KEY_LEN),
            Err(StegoError::InvalidKey)
        ));
    }

    #[test]
    fn transform_is_involution() {
        let data = b"The quick brown fox jumps over the lazy dog".to_vec();
        let key = derive_keystream("pass", KEY_LEN).unwrap();
        let once = xor_transform(&data, &key).unwrap();
        assert_ne!(once, data);
        let twice = xor_transform(&once, &key).unwrap();
        assert_eq!(twice, data);
    }

    #[test]
    fn transform_short_key_cycles() {
        let out = xor_transform(&[0x01, 0x02, 0x03, 0x04], &[0xFF]).unwrap();
        assert_eq!(out, vec![0xFE, 0xFD, 0xFC, 0xFB]);
    }

    #[test]
    fn transform_empty_key_rejected() {
        assert_eq!(xor_transform(b"data", &[]), Err(StegoError::InvalidKey));
    }

    #[test]
    fn transform_empty_data() {
        assert_eq!(xor_transform(&[], &[0x42]).unwrap(), Vec::<u8>::new());
    }
}
