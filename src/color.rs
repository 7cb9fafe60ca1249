//! B/W color for the display

/// Only two colors are supported by the panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Black color
    Black,
    /// White color
    #[default]
    White,
}

impl Color {
    /// Get the color encoding of the color for one bit
    ///
    /// The controller's buffer encodes white as a cleared bit, so a fully
    /// white frame is all 0x00 bytes.
    pub fn get_bit_value(self) -> u8 {
        match self {
            Color::White => 0u8,
            Color::Black => 1u8,
        }
    }

    /// Gets a full byte of black or white pixels
    pub fn get_byte_value(self) -> u8 {
        match self {
            Color::White => 0x00,
            Color::Black => 0xff,
        }
    }

    /// Returns the inverse of the color
    pub fn inverse(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        match value {
            0 => Color::White,
            1 => Color::Black,
            e => panic!("Color only parses 0 and 1 (White and Black) and not `{}`", e),
        }
    }
}

#[cfg(feature = "graphics")]
mod graphics {
    use super::Color;
    use embedded_graphics_core::pixelcolor::BinaryColor;
    use embedded_graphics_core::prelude::*;

    impl PixelColor for Color {
        type Raw = ();
    }

    impl From<BinaryColor> for Color {
        /// `BinaryColor::On` is the drawn ("ink") color, which is black on
        /// this panel
        fn from(binary: BinaryColor) -> Self {
            match binary {
                BinaryColor::On => Color::Black,
                BinaryColor::Off => Color::White,
            }
        }
    }

    impl From<Color> for BinaryColor {
        fn from(color: Color) -> Self {
            match color {
                Color::Black => BinaryColor::On,
                Color::White => BinaryColor::Off,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8() {
        assert_eq!(Color::White, Color::from(0u8));
        assert_eq!(Color::Black, Color::from(1u8));
    }

    // all values aside from 0 and 1 should panic
    #[test]
    fn from_u8_panic() {
        extern crate std;
        for val in 2..=u8::MAX {
            let result = std::panic::catch_unwind(|| Color::from(val));
            assert!(result.is_err());
        }
    }

    #[test]
    fn byte_values() {
        assert_eq!(Color::White.get_byte_value(), 0x00);
        assert_eq!(Color::Black.get_byte_value(), 0xff);
    }

    #[test]
    fn bit_values_roundtrip() {
        assert_eq!(Color::from(Color::White.get_bit_value()), Color::White);
        assert_eq!(Color::from(Color::Black.get_bit_value()), Color::Black);
    }

    #[test]
    fn inverse() {
        assert_eq!(Color::White.inverse(), Color::Black);
        assert_eq!(Color::Black.inverse(), Color::White);
    }
}
