//! Power-on initialization table
//!
//! The ILI9341 is brought out of reset by replaying a vendor command table.
//! Each entry keeps the compact encoding found in vendor sample code so
//! tables can be copied from datasheets verbatim:
//!
//! | Length byte bits | Meaning                                  |
//! |------------------|------------------------------------------|
//! | 0-4              | payload length (0..=16)                  |
//! | 5-6              | unused                                   |
//! | 7                | settle delay requested after the command |
//! | `0xFF`           | end of table                             |
//!
//! [`InitSequence`] decodes a table into [`InitStep`]s, stopping at the
//! end-of-table entry.
//!
//! ## Example
//!
//! ```
//! use ili9341::init::{InitCommand, InitSequence};
//!
//! static TABLE: [InitCommand; 3] = [
//!     InitCommand::new(0x3A, &[0x55]),
//!     InitCommand::delayed(0x11, &[]),
//!     InitCommand::end(),
//! ];
//!
//! let steps: Vec<_> = InitSequence::new(&TABLE).collect();
//! assert_eq!(steps.len(), 2);
//! assert_eq!(steps[0].payload, &[0x55]);
//! assert!(steps[1].delay_after);
//! ```

use crate::command::*;

/// Maximum number of parameter bytes in one table entry
pub const MAX_PAYLOAD: usize = 16;

/// Bits of the length byte holding the payload length
pub const LENGTH_MASK: u8 = 0x1F;

/// Bit of the length byte requesting a settle delay
pub const DELAY_FLAG: u8 = 0x80;

/// Length byte marking the end of a table
pub const END_OF_TABLE: u8 = 0xFF;

/// One entry of a packed initialization table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitCommand {
    opcode: u8,
    data: [u8; MAX_PAYLOAD],
    length: u8,
}

impl InitCommand {
    /// Build an entry from its raw datasheet form
    ///
    /// `length` is the packed length byte, flags included.
    pub const fn raw(opcode: u8, data: [u8; MAX_PAYLOAD], length: u8) -> Self {
        Self {
            opcode,
            data,
            length,
        }
    }

    /// Build an entry without a settle delay
    ///
    /// # Panics
    ///
    /// Panics if `payload` is longer than [`MAX_PAYLOAD`]. In a `static`
    /// or `const` table this is a compile error.
    pub const fn new(opcode: u8, payload: &[u8]) -> Self {
        Self::pack(opcode, payload, 0)
    }

    /// Build an entry followed by a settle delay
    ///
    /// # Panics
    ///
    /// Panics if `payload` is longer than [`MAX_PAYLOAD`].
    pub const fn delayed(opcode: u8, payload: &[u8]) -> Self {
        Self::pack(opcode, payload, DELAY_FLAG)
    }

    /// The end-of-table entry
    pub const fn end() -> Self {
        Self {
            opcode: 0x00,
            data: [0; MAX_PAYLOAD],
            length: END_OF_TABLE,
        }
    }

    const fn pack(opcode: u8, payload: &[u8], flags: u8) -> Self {
        assert!(
            payload.len() <= MAX_PAYLOAD,
            "init command payload exceeds 16 bytes"
        );
        let mut data = [0u8; MAX_PAYLOAD];
        let mut i = 0;
        while i < payload.len() {
            data[i] = payload[i];
            i += 1;
        }
        Self {
            opcode,
            data,
            length: ((payload.len() as u8) & LENGTH_MASK) | flags,
        }
    }

    /// Command opcode
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Packed length byte, flags included
    pub const fn length_byte(&self) -> u8 {
        self.length
    }

    /// Decoded payload length (lower 5 bits of the length byte)
    pub const fn payload_len(&self) -> usize {
        (self.length & LENGTH_MASK) as usize
    }

    /// Payload bytes
    ///
    /// A length field larger than [`MAX_PAYLOAD`] is clamped; such entries
    /// are rejected by [`Builder::build`](crate::config::Builder::build).
    pub fn payload(&self) -> &[u8] {
        let len = self.payload_len().min(MAX_PAYLOAD);
        &self.data[..len]
    }

    /// Whether a settle delay follows this command
    pub const fn delay_after(&self) -> bool {
        !self.is_end() && self.length & DELAY_FLAG != 0
    }

    /// Whether this is the end-of-table entry
    pub const fn is_end(&self) -> bool {
        self.length == END_OF_TABLE
    }

    /// Decode into an [`InitStep`]
    pub fn step(&self) -> InitStep<'_> {
        InitStep {
            opcode: self.opcode,
            payload: self.payload(),
            delay_after: self.delay_after(),
        }
    }
}

/// A decoded table entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitStep<'a> {
    /// Command opcode
    pub opcode: u8,
    /// Parameter bytes sent after the opcode
    pub payload: &'a [u8],
    /// Whether a settle delay follows
    pub delay_after: bool,
}

/// Index of the first end-of-table entry, if any
pub const fn end_position(table: &[InitCommand]) -> Option<usize> {
    let mut i = 0;
    while i < table.len() {
        if table[i].is_end() {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Iterator over the steps of a table, up to the end-of-table entry
///
/// The end-of-table entry is consumed but never yielded. Iteration also
/// stops at the end of the slice if no end-of-table entry exists.
#[derive(Clone, Debug)]
pub struct InitSequence<'a> {
    table: &'a [InitCommand],
    index: usize,
    finished: bool,
}

impl<'a> InitSequence<'a> {
    /// Create an iterator over `table`
    pub fn new(table: &'a [InitCommand]) -> Self {
        Self {
            table,
            index: 0,
            finished: false,
        }
    }

    /// Number of entries read so far, end-of-table entry included
    pub fn visited(&self) -> usize {
        self.index
    }
}

impl<'a> Iterator for InitSequence<'a> {
    type Item = InitStep<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let Some(entry) = self.table.get(self.index) else {
            self.finished = true;
            return None;
        };
        self.index += 1;
        if entry.is_end() {
            self.finished = true;
            return None;
        }
        Some(entry.step())
    }
}

/// Stock ILI9341 bring-up table
///
/// Power, VCOM and gamma values suit the common 2.4"/2.8" 240x320 modules.
/// Ends with sleep out and display on, each followed by a settle delay.
pub const INIT_SEQUENCE: &[InitCommand] = &[
    InitCommand::new(UNDOCUMENTED_EF, &[0x03, 0x80, 0x02]),
    // power control = 0, DC_ENA = 1
    InitCommand::new(POWER_CONTROL_B, &[0x00, 0x83, 0x30]),
    // cp1 keeps 1 frame, vcl = 0, ddvdh = 3, vgh = 1, vgl = 2
    InitCommand::new(POWER_ON_SEQUENCE_CONTROL, &[0x64, 0x03, 0x12, 0x81]),
    InitCommand::new(DRIVER_TIMING_CONTROL_A, &[0x85, 0x01, 0x79]),
    // Vcore = 1.6V, DDVDH = 5.6V
    InitCommand::new(POWER_CONTROL_A, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    // DDVDH = 2xVCI
    InitCommand::new(PUMP_RATIO_CONTROL, &[0x20]),
    InitCommand::new(DRIVER_TIMING_CONTROL_B, &[0x00, 0x00]),
    // GVDD = 4.75V
    InitCommand::new(POWER_CONTROL_1, &[0x26]),
    // DDVDH = VCI*2, VGH = VCI*7, VGL = -VCI*3
    InitCommand::new(POWER_CONTROL_2, &[0x11]),
    // VCOMH = 4.025V, VCOML = -0.950V
    InitCommand::new(VCOM_CONTROL_1, &[0x35, 0x3E]),
    InitCommand::new(VCOM_CONTROL_2, &[0xBE]),
    // MV | BGR
    InitCommand::new(MEMORY_ACCESS_CONTROL, &[0x28]),
    // 16 bits per pixel
    InitCommand::new(PIXEL_FORMAT_SET, &[0x55]),
    // 70Hz
    InitCommand::new(FRAME_RATE_CONTROL, &[0x00, 0x1B]),
    InitCommand::new(ENABLE_3G, &[0x08]),
    // Gamma curve 1
    InitCommand::new(GAMMA_SET, &[0x01]),
    InitCommand::new(
        POSITIVE_GAMMA_CORRECTION,
        &[
            0x1F, 0x1A, 0x18, 0x0A, 0x0F, 0x06, 0x45, 0x87, 0x32, 0x0A, 0x07, 0x02, 0x07, 0x05,
            0x00,
        ],
    ),
    InitCommand::new(
        NEGATIVE_GAMMA_CORRECTION,
        &[
            0x00, 0x25, 0x27, 0x05, 0x10, 0x09, 0x3A, 0x78, 0x4D, 0x05, 0x18, 0x0D, 0x38, 0x3A,
            0x1F,
        ],
    ),
    // Full window, 0..=239 x 0..=319
    InitCommand::new(COLUMN_ADDRESS_SET, &[0x00, 0x00, 0x00, 0xEF]),
    InitCommand::new(ROW_ADDRESS_SET, &[0x00, 0x00, 0x01, 0x3F]),
    InitCommand::new(MEMORY_WRITE, &[]),
    // Low voltage detect off, normal display
    InitCommand::new(ENTRY_MODE_SET, &[0x07]),
    InitCommand::new(DISPLAY_FUNCTION_CONTROL, &[0x0A, 0x82, 0x27, 0x00]),
    // MX | BGR
    InitCommand::new(MEMORY_ACCESS_CONTROL, &[0x48]),
    InitCommand::delayed(SLEEP_OUT, &[]),
    InitCommand::delayed(DISPLAY_ON, &[]),
    InitCommand::end(),
];

const _: () = assert!(
    end_position(INIT_SEQUENCE).is_some(),
    "INIT_SEQUENCE is missing its end-of-table entry"
);
