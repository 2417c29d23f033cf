//! Address window
//!
//! Pixel writes land in a rectangular window set with the column and row
//! address commands. Both take the start and end coordinate as big-endian
//! 16-bit values. The window is recomputed for every draw call.

/// Inclusive rectangle in controller coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// First column
    pub x_start: u16,
    /// First row
    pub y_start: u16,
    /// Last column (inclusive)
    pub x_end: u16,
    /// Last row (inclusive)
    pub y_end: u16,
}

impl Window {
    /// Create a new window
    pub const fn new(x_start: u16, y_start: u16, x_end: u16, y_end: u16) -> Self {
        Self {
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }

    /// A 1x1 window at `(x, y)`
    pub const fn pixel(x: u16, y: u16) -> Self {
        Self::new(x, y, x, y)
    }

    /// Column address set parameters: `[x_start hi, lo, x_end hi, lo]`
    pub const fn column_payload(&self) -> [u8; 4] {
        range_payload(self.x_start, self.x_end)
    }

    /// Row address set parameters: `[y_start hi, lo, y_end hi, lo]`
    pub const fn row_payload(&self) -> [u8; 4] {
        range_payload(self.y_start, self.y_end)
    }
}

const fn range_payload(start: u16, end: u16) -> [u8; 4] {
    let [start_hi, start_lo] = start.to_be_bytes();
    let [end_hi, end_lo] = end.to_be_bytes();
    [start_hi, start_lo, end_hi, end_lo]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_portrait_window_payloads() {
        let window = Window::new(0, 0, 239, 319);
        assert_eq!(window.column_payload(), [0x00, 0x00, 0x00, 0xEF]);
        assert_eq!(window.row_payload(), [0x00, 0x00, 0x01, 0x3F]);
    }

    #[test]
    fn test_pixel_window_is_degenerate() {
        let window = Window::pixel(300, 5);
        assert_eq!(window.column_payload(), [0x01, 0x2C, 0x01, 0x2C]);
        assert_eq!(window.row_payload(), [0x00, 0x05, 0x00, 0x05]);
    }
}
