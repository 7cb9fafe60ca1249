//! Packing of raster images into the controller's 1-bit frame format
//!
//! The panel only knows black and white, so every source pixel has to be
//! collapsed to one bit before transmission. [`pack_frame`] walks the image
//! row by row in groups of 8 pixels and emits one buffer byte per group,
//! most significant bit first (the leftmost pixel of the group). A set bit is
//! a black pixel, matching [`Color`](crate::color::Color) and the all-zero
//! white frame produced by [`Epd7in5::clear`](crate::Epd7in5::clear).
//!
//! Known boundary limitation: when the image width is not a multiple of 8,
//! the trailing pixels of each row beyond the last full group are dropped.

use embedded_graphics_core::pixelcolor::Rgb888;
use embedded_graphics_core::prelude::*;

/// Number of pixels packed into one buffer byte
pub const PIXELS_PER_BYTE: u32 = 8;

/// Luminance cut-off used by the convenience image helpers of the reference
/// driver
pub const DEFAULT_THRESHOLD: u8 = 199;

/// How a source pixel is collapsed to black or white
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinaryMode {
    /// A pixel is white when its luminance is at least the given threshold.
    /// Suited for grayscale or dithered sources.
    Threshold(u8),
    /// A pixel is black only when all color channels are zero; anything else
    /// is white. Suited for sources that are already pure black and white.
    Channels,
}

impl BinaryMode {
    /// Decides whether the pixel ends up white on the panel
    pub fn is_white(&self, color: Rgb888) -> bool {
        match *self {
            BinaryMode::Threshold(threshold) => luminance(color) >= threshold,
            BinaryMode::Channels => color.r() != 0 || color.g() != 0 || color.b() != 0,
        }
    }
}

/// ITU-R 601 luma, the same weighting the reference driver's gray conversion
/// uses
pub fn luminance(color: Rgb888) -> u8 {
    let y = 299 * color.r() as u32 + 587 * color.g() as u32 + 114 * color.b() as u32;
    (y / 1000) as u8
}

/// Error of [`pack_frame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
    /// The output buffer does not hold exactly `width / 8 * height` bytes
    BufferSize {
        /// Required buffer length in bytes
        expected: usize,
        /// Provided buffer length in bytes
        actual: usize,
    },
}

/// Packs an image into `out`, sampling one pixel at a time
///
/// `pixel` is called exactly once for every packed coordinate, row by row,
/// left to right. The output must be exactly `width / 8 * height` bytes;
/// anything else is rejected before any pixel is sampled.
pub fn pack_frame<F>(
    out: &mut [u8],
    width: u32,
    height: u32,
    mode: BinaryMode,
    mut pixel: F,
) -> Result<(), PackError>
where
    F: FnMut(u32, u32) -> Rgb888,
{
    let groups_per_row = width / PIXELS_PER_BYTE;
    let bytes_per_row = groups_per_row as usize;
    let expected = bytes_per_row * height as usize;
    if out.len() != expected {
        return Err(PackError::BufferSize {
            expected,
            actual: out.len(),
        });
    }

    for y in 0..height {
        for group in 0..groups_per_row {
            let mut byte = 0x00u8;
            for px in 0..PIXELS_PER_BYTE {
                let x = group * PIXELS_PER_BYTE + px;
                if !mode.is_white(pixel(x, y)) {
                    byte |= 0x80 >> px;
                }
            }
            out[y as usize * bytes_per_row + group as usize] = byte;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;

    #[test]
    fn white_image_packs_to_zero_bytes() {
        let mut out = vec![0xAA; 100 / 8 * 10];
        pack_frame(&mut out, 100, 10, BinaryMode::Threshold(DEFAULT_THRESHOLD), |_, _| {
            Rgb888::new(255, 255, 255)
        })
        .unwrap();
        assert!(out.iter().all(|&b| b == 0x00));
    }

    #[test]
    fn black_image_packs_to_ff_bytes() {
        let mut out = vec![0u8; 100 / 8 * 10];
        pack_frame(&mut out, 100, 10, BinaryMode::Threshold(DEFAULT_THRESHOLD), |_, _| {
            Rgb888::new(0, 0, 0)
        })
        .unwrap();
        assert!(out.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn output_length_is_checked_first() {
        let mut out = vec![0u8; 10];
        let result = pack_frame(&mut out, 800, 480, BinaryMode::Channels, |_, _| {
            panic!("must not sample any pixel")
        });
        assert_eq!(
            result,
            Err(PackError::BufferSize {
                expected: 48_000,
                actual: 10
            })
        );
    }

    #[test]
    fn msb_is_the_leftmost_pixel() {
        let mut out = vec![0u8; 1];
        // only x == 0 is black
        pack_frame(&mut out, 8, 1, BinaryMode::Channels, |x, _| {
            if x == 0 {
                Rgb888::new(0, 0, 0)
            } else {
                Rgb888::new(255, 255, 255)
            }
        })
        .unwrap();
        assert_eq!(out[0], 0x80);
    }

    #[test]
    fn alternating_pixels_pack_to_aa() {
        let mut out = vec![0u8; 2];
        pack_frame(&mut out, 16, 1, BinaryMode::Channels, |x, _| {
            if x % 2 == 0 {
                Rgb888::new(0, 0, 0)
            } else {
                Rgb888::new(255, 255, 255)
            }
        })
        .unwrap();
        assert_eq!(out, vec![0xAA, 0xAA]);
    }

    #[test]
    fn luminance_at_threshold_is_white() {
        let gray = Rgb888::new(199, 199, 199);
        assert_eq!(luminance(gray), 199);
        assert!(BinaryMode::Threshold(199).is_white(gray));
        assert!(!BinaryMode::Threshold(200).is_white(gray));
    }

    #[test]
    fn channels_mode_treats_any_color_as_white() {
        assert!(BinaryMode::Channels.is_white(Rgb888::new(255, 0, 0)));
        assert!(BinaryMode::Channels.is_white(Rgb888::new(0, 0, 1)));
        assert!(!BinaryMode::Channels.is_white(Rgb888::new(0, 0, 0)));
    }

    #[test]
    fn trailing_pixels_of_partial_groups_are_dropped() {
        // width 13: one full group per row, 5 trailing pixels ignored
        let mut out = vec![0u8; 2];
        let mut sampled = std::vec::Vec::new();
        pack_frame(&mut out, 13, 2, BinaryMode::Channels, |x, y| {
            sampled.push((x, y));
            Rgb888::new(255, 255, 255)
        })
        .unwrap();
        assert!(sampled.iter().all(|&(x, _)| x < 8));
        assert_eq!(sampled.len(), 16);
    }
}
