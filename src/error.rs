// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from key derivation through
//! frame extraction.
//!
//! The reveal path deliberately reports one collapsed user-visible message,
//! "incorrect password or corrupted data", for [`FrameTruncated`],
//! [`InvalidPadding`] and [`WrongPassword`]. The variants stay distinct so
//! callers and tests can match on them, but the `Display` strings do not
//! distinguish a wrong password from a damaged image — the XOR scheme has no
//! authentication tag beyond the message-mode prefix, and a finer-grained
//! message would only pretend to know more than the format does.
//!
//! [`FrameTruncated`]: StegoError::FrameTruncated
//! [`InvalidPadding`]: StegoError::InvalidPadding
//! [`WrongPassword`]: StegoError::WrongPassword

use core::fmt;

/// Errors that can occur during steganographic hiding or revealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The password (and therefore the derived keystream) is empty.
    InvalidKey,
    /// The framed payload does not fit in the carrier's RGB bit-plane.
    PayloadTooLarge,
    /// A secret image's width or height exceeds the u16 header field.
    SecretTooLarge,
    /// The extracted frame is shorter than its header declares, or the
    /// header itself is implausible.
    FrameTruncated,
    /// Message-mode unpadding found an inconsistent pad.
    InvalidPadding,
    /// The message-mode tag is missing after decryption, or the plaintext
    /// is not valid UTF-8.
    WrongPassword,
    /// Cover and stego images have different dimensions (analysis only).
    DimensionMismatch,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "password must not be empty"),
            Self::PayloadTooLarge => write!(f, "payload too large for this carrier image"),
            Self::SecretTooLarge => write!(f, "secret image exceeds 65535px in width or height"),
            Self::FrameTruncated
            | Self::InvalidPadding
            | Self::WrongPassword => write!(f, "incorrect password or corrupted data"),
            Self::DimensionMismatch => write!(f, "images have different dimensions"),
        }
    }
}

impl std::error::Error for StegoError {}
