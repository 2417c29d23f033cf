//! RGB565 colour values
//!
//! The ILI9341 is configured for 16 bits per pixel: 5 bits red, 6 bits
//! green, 5 bits blue. Pixels go over the wire most significant byte first.
//!
//! | Bits  | Channel |
//! |-------|---------|
//! | 15-11 | Red     |
//! | 10-5  | Green   |
//! | 4-0   | Blue    |
//!
//! ## Example
//!
//! ```
//! use ili9341::Color;
//!
//! assert_eq!(Color::RED.raw(), 0xF800);
//! assert_eq!(Color::RED.to_be_bytes(), [0xF8, 0x00]);
//! assert_eq!(Color::from_rgb(0, 63, 0), Color::GREEN);
//! ```

/// A 16-bit RGB565 pixel value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(u16);

impl Color {
    /// Black
    pub const BLACK: Self = Self(0x0000);
    /// White
    pub const WHITE: Self = Self(0xFFFF);
    /// Red
    pub const RED: Self = Self(0xF800);
    /// Green
    pub const GREEN: Self = Self(0x07E0);
    /// Blue
    pub const BLUE: Self = Self(0x001F);

    /// Wrap a raw RGB565 value
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack channel values; excess high bits of each channel are dropped
    ///
    /// * `r` - red, 0..=31
    /// * `g` - green, 0..=63
    /// * `b` - blue, 0..=31
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = (r & 0x1F) as u16;
        let g = (g & 0x3F) as u16;
        let b = (b & 0x1F) as u16;
        Self((r << 11) | (g << 5) | b)
    }

    /// Raw RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire encoding, MSB first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Self(color.into_storage())
    }
}
