// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Stego-quality analysis: channel histograms and MSE/PSNR between a cover
//! image and its stego counterpart.
//!
//! These helpers are independent of the codec's wire format — they consume
//! plain pixel grids. Alpha is excluded throughout: the embedder never
//! touches it, so it carries no distortion signal.

use crate::error::StegoError;
use image::RgbaImage;

/// 256-bin value histograms for the R, G and B channels of one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistograms {
    pub red: [u32; 256],
    pub green: [u32; 256],
    pub blue: [u32; 256],
}

impl ChannelHistograms {
    /// Sum of absolute per-bin differences against another histogram set,
    /// as `(red, green, blue)` totals. A rough visibility measure: LSB
    /// embedding only moves counts between adjacent even/odd bins, so the
    /// totals stay small relative to the pixel count.
    pub fn total_difference(&self, other: &ChannelHistograms) -> (u64, u64, u64) {
        let diff = |a: &[u32; 256], b: &[u32; 256]| {
            a.iter()
                .zip(b)
                .map(|(&x, &y)| u64::from(x.abs_diff(y)))
                .sum()
        };
        (
            diff(&self.red, &other.red),
            diff(&self.green, &other.green),
            diff(&self.blue, &other.blue),
        )
    }
}

/// Compute per-channel value histograms.
pub fn channel_histograms(img: &RgbaImage) -> ChannelHistograms {
    let mut h = ChannelHistograms {
        red: [0; 256],
        green: [0; 256],
        blue: [0; 256],
    };
    for p in img.pixels() {
        h.red[p.0[0] as usize] += 1;
        h.green[p.0[1] as usize] += 1;
        h.blue[p.0[2] as usize] += 1;
    }
    h
}

/// Per-channel and averaged mean squared error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMse {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ChannelMse {
    /// Average MSE across the three color channels.
    pub fn average(&self) -> f64 {
        (self.red + self.green + self.blue) / 3.0
    }
}

/// Mean squared error between two same-sized images, per RGB channel.
///
/// # Errors
/// [`StegoError::DimensionMismatch`] if the images differ in size.
pub fn mse(cover: &RgbaImage, stego: &RgbaImage) -> Result<ChannelMse, StegoError> {
    if cover.dimensions() != stego.dimensions() {
        return Err(StegoError::DimensionMismatch);
    }
    let (w, h) = cover.dimensions();
    let n = w as u64 * h as u64;
    if n == 0 {
        return Ok(ChannelMse { red: 0.0, green: 0.0, blue: 0.0 });
    }

    let mut sq = [0u64; 3];
    for (a, b) in cover.pixels().zip(stego.pixels()) {
        for c in 0..3 {
            let d = i32::from(a.0[c]) - i32::from(b.0[c]);
            sq[c] += (d * d) as u64;
        }
    }
    Ok(ChannelMse {
        red: sq[0] as f64 / n as f64,
        green: sq[1] as f64 / n as f64,
        blue: sq[2] as f64 / n as f64,
    })
}

/// Peak signal-to-noise ratio in dB between two same-sized images.
///
/// `20 * log10(255 / sqrt(mse))` over the channel-averaged MSE. Returns
/// `f64::INFINITY` for identical images. LSB embedding perturbs each channel
/// by at most 1, so typical values sit well above 50 dB.
///
/// # Errors
/// [`StegoError::DimensionMismatch`] if the images differ in size.
pub fn psnr(cover: &RgbaImage, stego: &RgbaImage) -> Result<f64, StegoError> {
    let avg = mse(cover, stego)?.average();
    if avg == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(20.0 * (255.0 / avg.sqrt()).log10())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn identical_images_zero_mse_infinite_psnr() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 255]));
        let m = mse(&img, &img).unwrap();
        assert_eq!(m.average(), 0.0);
        assert_eq!(psnr(&img, &img).unwrap(), f64::INFINITY);
    }

    #[test]
    fn single_lsb_flip_mse() {
        let a = RgbaImage::from_pixel(2, 2, Rgba([100, 100, 100, 255]));
        let mut b = a.clone();
        b.get_pixel_mut(0, 0).0[0] = 101;
        let m = mse(&a, &b).unwrap();
        // One squared-1 difference over 4 pixels, red channel only.
        assert_eq!(m.red, 0.25);
        assert_eq!(m.green, 0.0);
        assert_eq!(m.blue, 0.0);
    }

    #[test]
    fn psnr_of_uniform_unit_error() {
        // Every channel off by exactly 1: MSE = 1, PSNR = 20*log10(255).
        let a = RgbaImage::from_pixel(4, 4, Rgba([50, 60, 70, 255]));
        let b = RgbaImage::from_pixel(4, 4, Rgba([51, 61, 71, 255]));
        let p = psnr(&a, &b).unwrap();
        assert!((p - 20.0 * 255f64.log10()).abs() < 1e-9);
    }

    #[test]
    fn dimension_mismatch_rejected() {
        let a = RgbaImage::new(4, 4);
        let b = RgbaImage::new(4, 5);
        assert_eq!(mse(&a, &b), Err(StegoError::DimensionMismatch));
        assert_eq!(psnr(&a, &b).unwrap_err(), StegoError::DimensionMismatch);
    }

    #[test]
    fn histogram_counts_pixels() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([5, 6, 7, 255]));
        let h = channel_histograms(&img);
        assert_eq!(h.red[5], 9);
        assert_eq!(h.green[6], 9);
        assert_eq!(h.blue[7], 9);
        assert_eq!(h.red.iter().sum::<u32>(), 9);
    }

    #[test]
    fn histogram_difference_tracks_lsb_changes() {
        let a = RgbaImage::from_pixel(4, 4, Rgba([10, 10, 10, 255]));
        let mut b = a.clone();
        // Flip the red LSB of two pixels: two counts move from bin 10 to 11.
        b.get_pixel_mut(0, 0).0[0] = 11;
        b.get_pixel_mut(1, 0).0[0] = 11;
        let (dr, dg, db) = channel_histograms(&a).total_difference(&channel_histograms(&b));
        assert_eq!((dr, dg, db), (4, 0, 0)); // 2 gone from bin 10 + 2 added to bin 11
    }
}
