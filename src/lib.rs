//! ILI9341 TFT Display Driver
//!
//! A driver for the ILI9341 TFT display controller (240x320, RGB565) over SPI.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Vendor init table replayed verbatim, or a custom one
//! - Hardware orientation (0/90/180/270 degrees)
//! - Single-pixel drawing with explicit address windows
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ili9341::{Builder, Color, Display, Interface, Orientation};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let config = match Builder::new().orientation(Orientation::Rotate90).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.initialize(&mut delay);
//! let _ = display.draw_pixel(5, 10, Color::RED);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB565 colour values
pub mod color;
/// ILI9341 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Power-on initialization table
pub mod init;
/// Hardware interface abstraction
pub mod interface;
/// Display orientation and Memory Access Control mapping
pub mod orientation;
/// Address window encoding
pub mod window;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use color::Color;
pub use config::{Builder, Config, MIN_COMMAND_SETTLE_MS, MIN_RESET_SETTLE_MS};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use init::{INIT_SEQUENCE, InitCommand};
pub use interface::{DisplayInterface, Interface, InterfaceError, NoResetPin};
pub use orientation::{ColorOrder, HEIGHT, Orientation, WIDTH};
pub use window::Window;
