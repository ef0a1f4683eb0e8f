// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! # veil-core
//!
//! LSB steganography engine for hiding a secondary payload — a short text
//! message or a whole image — in the least-significant bits of an RGBA
//! carrier's color channels, shielded by a password-derived XOR keystream.
//!
//! Payloads are framed (self-describing length/dimension headers, the
//! `SECRET:` tag and block padding for text), encrypted with a repeating-key
//! XOR, and written bit by bit into the R, G and B LSBs in row-major order.
//! Alpha is never touched. The carrier must be stored losslessly (PNG or
//! similar) — the payload lives in exact channel values.
//!
//! This is hiding, not cryptography: the XOR keystream has no salt, nonce or
//! authentication, and the wrong-password signal is a plausibility check,
//! not a MAC. See [`crypto`] for the fine print.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use veil_core::{hide_message, reveal_message};
//!
//! let cover = image::open("photo.png").unwrap().to_rgba8();
//! let stego = hide_message(&cover, "meet at dawn", "swordfish").unwrap();
//! stego.save("photo_stego.png").unwrap();
//! let message = reveal_message(&stego, "swordfish").unwrap();
//! assert_eq!(message, "meet at dawn");
//! ```

pub mod analysis;
pub mod capacity;
pub mod crypto;
pub mod error;
pub mod frame;
pub mod lsb;
mod pipeline;

pub use analysis::{channel_histograms, mse, psnr, ChannelHistograms, ChannelMse};
pub use capacity::{available_bits, available_bytes, check_capacity};
pub use error::StegoError;
pub use frame::Payload;
pub use pipeline::{hide, hide_image, hide_message, reveal_image, reveal_message};
