// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Round-trip integration tests for text-message hide/reveal.

use image::{Rgba, RgbaImage};
use rand::{Rng, SeedableRng};
use veil_core::{hide_message, psnr, reveal_message, StegoError};

/// Deterministic noise carrier so failures reproduce.
fn noise_cover(w: u32, h: u32, seed: u64) -> RgbaImage {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let raw: Vec<u8> = (0..w as usize * h as usize * 4).map(|_| rng.gen()).collect();
    RgbaImage::from_raw(w, h, raw).unwrap()
}

#[test]
fn roundtrip_basic() {
    let cover = noise_cover(64, 64, 1);
    let stego = hide_message(&cover, "Hello, steganography!", "test-passphrase-123").unwrap();
    let decoded = reveal_message(&stego, "test-passphrase-123").unwrap();
    assert_eq!(decoded, "Hello, steganography!");
}

#[test]
fn roundtrip_empty_message() {
    let cover = noise_cover(32, 32, 2);
    let stego = hide_message(&cover, "", "pass").unwrap();
    assert_eq!(reveal_message(&stego, "pass").unwrap(), "");
}

#[test]
fn roundtrip_unicode() {
    let cover = noise_cover(64, 64, 3);
    let msg = "中文, émojis 🦀, and line\nbreaks";
    let stego = hide_message(&cover, msg, "pässwörd").unwrap();
    assert_eq!(reveal_message(&stego, "pässwörd").unwrap(), msg);
}

#[test]
fn roundtrip_long_message() {
    // 256x256 carrier: 24,576 bytes of capacity.
    let cover = noise_cover(256, 256, 4);
    let msg = "lorem ipsum dolor sit amet ".repeat(500);
    let stego = hide_message(&cover, &msg, "pass").unwrap();
    assert_eq!(reveal_message(&stego, "pass").unwrap(), msg);
}

#[test]
fn roundtrip_password_lengths() {
    // Shorter, equal and longer than the 32-byte keystream.
    let cover = noise_cover(64, 64, 5);
    for password in ["x", "exactly-thirty-two-bytes-long!!!", &"long".repeat(40)] {
        let stego = hide_message(&cover, "same message", password).unwrap();
        assert_eq!(reveal_message(&stego, password).unwrap(), "same message");
    }
}

#[test]
fn wrong_password_detected() {
    let cover = noise_cover(64, 64, 6);
    let stego = hide_message(&cover, "hi", "swordfish").unwrap();
    match reveal_message(&stego, "tunafish") {
        Err(StegoError::InvalidPadding) | Err(StegoError::WrongPassword) => {}
        other => panic!("wrong password must not reveal the message, got {other:?}"),
    }
}

#[test]
fn swordfish_scenario_end_to_end() {
    // "hi" under "swordfish" needs a 20-byte frame (160 bits), which
    // fits a 54-pixel carrier at 3 bits/pixel.
    let cover = noise_cover(9, 6, 7);
    let stego = hide_message(&cover, "hi", "swordfish").unwrap();
    assert_eq!(reveal_message(&stego, "swordfish").unwrap(), "hi");
    assert!(reveal_message(&stego, "not-swordfish").is_err());
}

#[test]
fn uniform_cover_roundtrip() {
    // All-zero and all-0xFF covers exercise both LSB polarities.
    for fill in [0u8, 0xFF] {
        let cover = RgbaImage::from_pixel(32, 32, Rgba([fill; 4]));
        let stego = hide_message(&cover, "polarity", "pass").unwrap();
        assert_eq!(reveal_message(&stego, "pass").unwrap(), "polarity");
    }
}

#[test]
fn stego_distortion_is_marginal() {
    let cover = noise_cover(128, 128, 8);
    let stego = hide_message(&cover, &"m".repeat(1000), "pass").unwrap();
    // Each channel moves by at most 1, so PSNR stays far above the 40 dB
    // "excellent" threshold.
    assert!(psnr(&cover, &stego).unwrap() > 40.0);
}

#[test]
fn alpha_untouched_end_to_end() {
    let cover = noise_cover(32, 32, 9);
    let stego = hide_message(&cover, &"a".repeat(300), "pass").unwrap();
    for (c, s) in cover.pixels().zip(stego.pixels()) {
        assert_eq!(c.0[3], s.0[3]);
    }
}
