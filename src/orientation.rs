//! Display orientation
//!
//! The ILI9341 rotates its frame memory in hardware. Each [`Orientation`]
//! maps to a fixed Memory Access Control (MADCTL) byte and to the logical
//! width/height pair seen by the caller.
//!
//! | Orientation | MADCTL bits     | Width x Height |
//! |-------------|-----------------|----------------|
//! | Rotate0     | MY              | 240 x 320      |
//! | Rotate90    | MV              | 320 x 240      |
//! | Rotate180   | MX              | 240 x 320      |
//! | Rotate270   | MX \| MY \| MV  | 320 x 240      |
//!
//! The colour order bit ([`ColorOrder`]) is ORed in on top.
//!
//! ## Example
//!
//! ```
//! use ili9341::{ColorOrder, Orientation};
//!
//! assert_eq!(Orientation::Rotate90.dimensions(), (320, 240));
//! assert_eq!(Orientation::Rotate0.madctl(ColorOrder::Bgr), 0x88);
//!
//! // Unrecognized values fall back to the default orientation
//! assert_eq!(Orientation::from_degrees(45), Orientation::Rotate0);
//! ```

use crate::command::{MADCTL_BGR, MADCTL_MV, MADCTL_MX, MADCTL_MY};

/// Native panel width in pixels (portrait)
pub const WIDTH: u16 = 240;

/// Native panel height in pixels (portrait)
pub const HEIGHT: u16 = 320;

/// Display orientation relative to the native portrait layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Portrait
    #[default]
    Rotate0,
    /// Landscape, rotated 90 degrees
    Rotate90,
    /// Portrait, rotated 180 degrees
    Rotate180,
    /// Landscape, rotated 270 degrees
    Rotate270,
}

/// Sub-pixel colour order of the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorOrder {
    /// Red-green-blue
    Rgb,
    /// Blue-green-red (most ILI9341 modules)
    #[default]
    Bgr,
}

impl ColorOrder {
    /// MADCTL bit for this colour order
    pub const fn bits(self) -> u8 {
        match self {
            Self::Rgb => 0x00,
            Self::Bgr => MADCTL_BGR,
        }
    }
}

impl Orientation {
    /// All orientations, in rotation order
    pub const ALL: [Self; 4] = [
        Self::Rotate0,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
    ];

    /// Orientation for a rotation in degrees
    ///
    /// Anything other than 0, 90, 180 or 270 yields [`Orientation::Rotate0`].
    pub const fn from_degrees(degrees: u16) -> Self {
        match degrees {
            90 => Self::Rotate90,
            180 => Self::Rotate180,
            270 => Self::Rotate270,
            _ => Self::Rotate0,
        }
    }

    /// Rotation in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    /// Scan direction bits, without the colour order bit
    pub const fn scan_bits(self) -> u8 {
        match self {
            Self::Rotate0 => MADCTL_MY,
            Self::Rotate90 => MADCTL_MV,
            Self::Rotate180 => MADCTL_MX,
            Self::Rotate270 => MADCTL_MX | MADCTL_MY | MADCTL_MV,
        }
    }

    /// Full Memory Access Control byte
    pub const fn madctl(self, order: ColorOrder) -> u8 {
        self.scan_bits() | order.bits()
    }

    /// Whether width and height are exchanged
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }

    /// Logical `(width, height)` in this orientation
    pub const fn dimensions(self) -> (u16, u16) {
        if self.is_landscape() {
            (HEIGHT, WIDTH)
        } else {
            (WIDTH, HEIGHT)
        }
    }
}

/// Index form used by C-style enums (0 = 0°, 1 = 90°, 2 = 180°, 3 = 270°)
///
/// Out-of-range indices yield [`Orientation::Rotate0`].
impl From<u8> for Orientation {
    fn from(index: u8) -> Self {
        match index {
            1 => Self::Rotate90,
            2 => Self::Rotate180,
            3 => Self::Rotate270,
            _ => Self::Rotate0,
        }
    }
}
