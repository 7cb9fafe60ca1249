//! A driver for the Waveshare 7.5" E-Ink Display (V2) via SPI
//!
//! This driver was built using [`embedded-hal`] traits and follows the
//! command sequences of the official Waveshare C/Python examples.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/~1
//!
//! # Requirements
//!
//! ### SPI
//!
//! - MISO is not connected/available
//! - SPI_MODE_0 is used (CPHL = 0, CPOL = 0)
//! - 8 bits per word, MSB first
//! - The driver drives the chip select line itself, so hand it the raw
//!   [`SpiBus`](embedded_hal::spi::SpiBus) and the CS pin separately
//!
//! ### Other....
//!
//! - Buffersize: Wherever a buffer is used it always needs to be of the size
//!   `width / 8 * height`, see [`buffer_len`]
//! - The panel must be re-initialised with [`Epd7in5::wake_up`] after
//!   [`Epd7in5::sleep`]
//!
//! # Examples
//!
//! ```ignore
//! use epd7in5_v2::prelude::*;
//!
//! let mut epd = Epd7in5::new(cs, busy, dc, rst, RefreshMode::Otp);
//! epd.init(&mut spi, &mut delay)?;
//!
//! let mut display = Display7in5::default();
//!
//! // draw something into the display buffer ...
//!
//! epd.update_and_refresh(&mut spi, &mut delay, display.buffer())?;
//!
//! // wait and look at the image
//!
//! epd.clear(&mut spi, &mut delay)?;
//! epd.sleep(&mut spi, &mut delay)?;
//! ```
#![no_std]

pub mod color;

mod command;

/// Interface for the physical connection between display and the controlling device
mod interface;

mod epd;
mod lut;
mod timing;

mod error;

#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(feature = "graphics")]
pub mod packer;

pub use crate::epd::{Epd7in5, RefreshMode, DEFAULT_BACKGROUND_COLOR, HEIGHT, WIDTH};
pub use crate::error::Error;
pub use crate::timing::Timings;

pub mod prelude {
    //! The commonly used types, re-exported
    pub use crate::color::Color;
    pub use crate::epd::{Epd7in5, RefreshMode, HEIGHT, WIDTH};
    pub use crate::error::Error;
    pub use crate::timing::Timings;
    pub use crate::SPI_MODE;

    #[cfg(feature = "graphics")]
    pub use crate::graphics::{Display7in5, DisplayRotation};
    #[cfg(feature = "graphics")]
    pub use crate::packer::{pack_frame, BinaryMode};
}

use embedded_hal::spi::{Mode, Phase, Polarity};

/// SPI mode -
/// For more infos see [Requirements: SPI](index.html#spi)
pub const SPI_MODE: Mode = Mode {
    phase: Phase::CaptureOnFirstTransition,
    polarity: Polarity::IdleLow,
};

/// Computes the needed buffer length. Takes care of rounding issues
pub const fn buffer_len(width: usize, height: usize) -> usize {
    width / 8 * height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_frame_buffer_len() {
        assert_eq!(buffer_len(WIDTH as usize, HEIGHT as usize), 48_000);
    }
}
