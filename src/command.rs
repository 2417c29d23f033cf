//! ILI9341 command definitions
//!
//! This module defines the command bytes used to control the ILI9341
//! TFT display controller. Commands are sent over SPI with the DC pin
//! low for commands and high for data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Set DC high (data mode)
//! 4. Send parameter bytes (if any)
//!
//! ## Example
//!
//! ```rust,no_run
//! use ili9341::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Software reset
//! let _ = interface.send_command(command::SOFTWARE_RESET);
//!
//! // Write one red pixel at the current window
//! let _ = interface.send_command(command::MEMORY_WRITE);
//! let _ = interface.send_data(&[0xF8, 0x00]);
//! ```

// System control commands

/// Software reset command (0x01)
///
/// Resets the controller registers to their default values.
/// The controller needs a settle period before accepting further commands.
pub const SOFTWARE_RESET: u8 = 0x01;

/// Sleep out command (0x11)
///
/// Turns off sleep mode. Needs 120ms before the next command.
pub const SLEEP_OUT: u8 = 0x11;

/// Gamma set command (0x26)
pub const GAMMA_SET: u8 = 0x26;

/// Display on command (0x29)
pub const DISPLAY_ON: u8 = 0x29;

// Addressing and memory commands

/// Column address set command (0x2A)
///
/// Defines the column range of the frame memory window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;

/// Row (page) address set command (0x2B)
///
/// Defines the row range of the frame memory window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const ROW_ADDRESS_SET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Bytes following this command are written into the current window
/// as RGB565 pixels, two bytes per pixel, MSB first.
pub const MEMORY_WRITE: u8 = 0x2C;

/// Memory access control command (0x36)
///
/// Selects scan direction, row/column exchange and RGB/BGR order.
/// Requires 1 byte built from the `MADCTL_*` bits below.
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;

/// Pixel format set command (0x3A)
///
/// Requires 1 byte: 0x55 = 16 bits/pixel for both RGB and MCU interfaces.
pub const PIXEL_FORMAT_SET: u8 = 0x3A;

// Panel control commands

/// Frame rate control (normal mode) command (0xB1)
pub const FRAME_RATE_CONTROL: u8 = 0xB1;

/// Display function control command (0xB6)
pub const DISPLAY_FUNCTION_CONTROL: u8 = 0xB6;

/// Entry mode set command (0xB7)
pub const ENTRY_MODE_SET: u8 = 0xB7;

/// Power control 1 command (0xC0)
pub const POWER_CONTROL_1: u8 = 0xC0;

/// Power control 2 command (0xC1)
pub const POWER_CONTROL_2: u8 = 0xC1;

/// VCOM control 1 command (0xC5)
pub const VCOM_CONTROL_1: u8 = 0xC5;

/// VCOM control 2 command (0xC7)
pub const VCOM_CONTROL_2: u8 = 0xC7;

/// Power control A command (0xCB)
pub const POWER_CONTROL_A: u8 = 0xCB;

/// Power control B command (0xCF)
pub const POWER_CONTROL_B: u8 = 0xCF;

/// Positive gamma correction command (0xE0)
///
/// Requires 15 bytes.
pub const POSITIVE_GAMMA_CORRECTION: u8 = 0xE0;

/// Negative gamma correction command (0xE1)
///
/// Requires 15 bytes.
pub const NEGATIVE_GAMMA_CORRECTION: u8 = 0xE1;

/// Driver timing control A command (0xE8)
pub const DRIVER_TIMING_CONTROL_A: u8 = 0xE8;

/// Driver timing control B command (0xEA)
pub const DRIVER_TIMING_CONTROL_B: u8 = 0xEA;

/// Power on sequence control command (0xED)
pub const POWER_ON_SEQUENCE_CONTROL: u8 = 0xED;

/// Undocumented vendor command (0xEF)
///
/// Present in most vendor bring-up sequences; its parameters are not
/// described in the datasheet.
pub const UNDOCUMENTED_EF: u8 = 0xEF;

/// Enable 3 gamma control command (0xF2)
pub const ENABLE_3G: u8 = 0xF2;

/// Pump ratio control command (0xF7)
pub const PUMP_RATIO_CONTROL: u8 = 0xF7;

// Memory access control bits

/// Row address order: bottom to top
pub const MADCTL_MY: u8 = 0x80;

/// Column address order: right to left
pub const MADCTL_MX: u8 = 0x40;

/// Row/column exchange
pub const MADCTL_MV: u8 = 0x20;

/// Vertical refresh order: bottom to top
pub const MADCTL_ML: u8 = 0x10;

/// Blue-green-red pixel order (cleared = red-green-blue)
pub const MADCTL_BGR: u8 = 0x08;

/// Horizontal refresh order: right to left
pub const MADCTL_MH: u8 = 0x04;
