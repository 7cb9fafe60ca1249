//! Graphics Support for EPDs
//!
//! A full-frame drawing surface for use with [`embedded-graphics`], holding
//! the packed 1-bit buffer on the host. Requires the `graphics` feature
//! (on by default).
//!
//! [`embedded-graphics`]: https://crates.io/crates/embedded-graphics

use embedded_graphics_core::prelude::*;

use crate::buffer_len;
use crate::color::Color;
use crate::epd::{DEFAULT_BACKGROUND_COLOR, HEIGHT, WIDTH};

/// Displayrotation
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DisplayRotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Full size buffered display for the 7.5" panel
///
/// Holds the packed frame (48 kB) inline, so on small targets it should live
/// in a static rather than on the stack.
pub struct Display7in5 {
    buffer: [u8; buffer_len(WIDTH as usize, HEIGHT as usize)],
    rotation: DisplayRotation,
}

impl Default for Display7in5 {
    /// A white frame without rotation
    fn default() -> Self {
        Display7in5 {
            buffer: [DEFAULT_BACKGROUND_COLOR.get_byte_value();
                buffer_len(WIDTH as usize, HEIGHT as usize)],
            rotation: DisplayRotation::default(),
        }
    }
}

impl Display7in5 {
    /// The packed framebuffer, ready for
    /// [`Epd7in5::update_frame`](crate::Epd7in5::update_frame)
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Sets the rotation applied to subsequent drawing
    pub fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
    }

    /// The active rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    /// Fills the whole buffer with the given color
    pub fn clear_buffer(&mut self, color: Color) {
        self.buffer.fill(color.get_byte_value());
    }

    /// Sets one pixel, applying the active rotation. Coordinates outside of
    /// the rotated dimensions are ignored.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        // bounds check in rotated coordinates, before the mapping below can
        // underflow
        let (max_x, max_y) = match self.rotation {
            DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => (WIDTH, HEIGHT),
            DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => (HEIGHT, WIDTH),
        };
        if x >= max_x || y >= max_y {
            return;
        }

        let (x, y) = match self.rotation {
            DisplayRotation::Rotate0 => (x, y),
            DisplayRotation::Rotate90 => (WIDTH - 1 - y, x),
            DisplayRotation::Rotate180 => (WIDTH - 1 - x, HEIGHT - 1 - y),
            DisplayRotation::Rotate270 => (y, HEIGHT - 1 - x),
        };

        let index = (x / 8 + y * (WIDTH / 8)) as usize;
        let mask = 0x80 >> (x % 8);
        match color {
            Color::Black => self.buffer[index] |= mask,
            Color::White => self.buffer[index] &= !mask,
        }
    }
}

impl DrawTarget for Display7in5 {
    type Color = Color;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as u32, point.y as u32, color);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Display7in5 {
    fn size(&self) -> Size {
        match self.rotation {
            DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => Size::new(WIDTH, HEIGHT),
            DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => Size::new(HEIGHT, WIDTH),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use embedded_graphics::primitives::{Line, PrimitiveStyle};
    use embedded_graphics::prelude::*;

    use super::*;

    #[test]
    fn default_is_a_white_frame() {
        let display = Display7in5::default();
        assert_eq!(display.buffer().len(), 48_000);
        assert!(display.buffer().iter().all(|&b| b == 0x00));
        assert_eq!(display.rotation(), DisplayRotation::Rotate0);
    }

    #[test]
    fn first_pixel_is_the_msb_of_the_first_byte() {
        let mut display = Display7in5::default();
        display.set_pixel(0, 0, Color::Black);
        assert_eq!(display.buffer()[0], 0x80);

        display.set_pixel(0, 0, Color::White);
        assert_eq!(display.buffer()[0], 0x00);
    }

    #[test]
    fn pixels_land_row_major() {
        let mut display = Display7in5::default();
        display.set_pixel(9, 1, Color::Black);
        // row 1 starts at byte 100, x 9 is bit 1 of its second byte
        assert_eq!(display.buffer()[101], 0x40);
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored() {
        let mut display = Display7in5::default();
        display.set_pixel(WIDTH, 0, Color::Black);
        display.set_pixel(0, HEIGHT, Color::Black);
        assert!(display.buffer().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored_when_rotated() {
        // past the rotated dimensions, where an unchecked coordinate
        // mapping would underflow
        let mut display = Display7in5::default();
        display.set_rotation(DisplayRotation::Rotate90);
        display.set_pixel(HEIGHT, 0, Color::Black);
        display.set_pixel(0, WIDTH, Color::Black);

        display.set_rotation(DisplayRotation::Rotate270);
        display.set_pixel(HEIGHT, 0, Color::Black);
        display.set_pixel(0, WIDTH, Color::Black);

        display.set_rotation(DisplayRotation::Rotate180);
        display.set_pixel(WIDTH, 0, Color::Black);
        display.set_pixel(0, HEIGHT, Color::Black);

        assert!(display.buffer().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn rotated_line_crossing_the_edge_clips() {
        let mut display = Display7in5::default();
        display.set_rotation(DisplayRotation::Rotate90);
        Line::new(Point::new(0, 790), Point::new(0, 810))
            .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
            .draw(&mut display)
            .unwrap();
        // x 0 rotated 90 degrees is the panel's rightmost column; only the
        // ten in-bounds pixels of the line may land
        let black: u32 = display.buffer().iter().map(|b| b.count_ones()).sum();
        assert_eq!(black, 10);
    }

    #[test]
    fn rotation_90_maps_onto_the_panel() {
        let mut display = Display7in5::default();
        display.set_rotation(DisplayRotation::Rotate90);
        assert_eq!(display.size(), Size::new(HEIGHT, WIDTH));

        // (0, 0) rotated 90 degrees lands in the panel's top-right corner
        display.set_pixel(0, 0, Color::Black);
        assert_eq!(display.buffer()[(WIDTH / 8 - 1) as usize], 0x01);
    }

    #[test]
    fn rotation_180_maps_onto_the_panel() {
        let mut display = Display7in5::default();
        display.set_rotation(DisplayRotation::Rotate180);

        display.set_pixel(0, 0, Color::Black);
        assert_eq!(display.buffer()[48_000 - 1], 0x01);
    }

    #[test]
    fn graphics_line_draws_black_pixels() {
        let mut display = Display7in5::default();
        Line::new(Point::new(0, 0), Point::new(7, 0))
            .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
            .draw(&mut display)
            .unwrap();
        assert_eq!(display.buffer()[0], 0xFF);
    }

    #[test]
    fn clear_buffer_fills_with_the_given_color() {
        let mut display = Display7in5::default();
        display.clear_buffer(Color::Black);
        assert!(display.buffer().iter().all(|&b| b == 0xFF));
        display.clear_buffer(Color::White);
        assert!(display.buffer().iter().all(|&b| b == 0x00));
    }
}
