//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ILI9341 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The ILI9341 requires:
//! - SPI bus (MOSI + SCK, chip select owned by the [`SpiDevice`])
//! - 1 or 2 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low, optional, see [`Interface::without_reset`])
//!
//! The controller has no acknowledgement channel. Every transfer is
//! fire-and-forget; only bus and pin errors are reported.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ili9341::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI, DC and RST
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse the reset line
//! let _ = interface.reset(&mut delay);
//!
//! // Send command, then its parameters
//! let _ = interface.send_command(0x3A); // Pixel format set
//! let _ = interface.send_data(&[0x55]);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use core::marker::PhantomData;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the command transport to the ILI9341 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// link that can transmit a byte buffer and drive a command/data select line.
///
/// The state of the select line is implied by the method called, never
/// passed explicitly.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a parallel bus, inverted DC polarity),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Put the command/data select line into its idle (data) state
    ///
    /// Called once at the start of initialization, before any reset.
    ///
    /// # Errors
    ///
    /// Returns an error if driving the GPIO fails.
    fn configure(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC low (command mode)
    /// 2. Send the command byte
    /// 3. Set DC high again
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC high (data mode)
    /// 2. Send the data bytes
    ///
    /// # Arguments
    ///
    /// * `data` - Slice of bytes to send
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform a hardware reset
    ///
    /// The software reset command is issued separately by the driver.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    ///
    /// # Errors
    ///
    /// Returns an error if driving the reset GPIO fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Time the reset line is held low, in milliseconds
pub const RESET_PULSE_MS: u32 = 10;

/// Time to wait after releasing the reset line, in milliseconds
pub const RESET_RECOVERY_MS: u32 = 10;

/// Placeholder for boards that do not wire the RST line
///
/// All operations succeed without touching hardware. The error type
/// matches the DC pin so both pins share one [`InterfaceError`].
pub struct NoResetPin<E = Infallible>(PhantomData<E>);

impl<E> NoResetPin<E> {
    /// Create a new placeholder pin
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for NoResetPin<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: digital::Error> digital::ErrorType for NoResetPin<E> {
    type Error = E;
}

impl<E: digital::Error> OutputPin for NoResetPin<E> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Hardware interface implementation for ILI9341
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
/// Each [`send_command`](DisplayInterface::send_command) and
/// [`send_data`](DisplayInterface::send_data) call is one SPI transaction, so
/// chip select is asserted only for the duration of that transfer.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC> Interface<SPI, DC, NoResetPin<DC::Error>>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create an Interface for a board without a reset line
    ///
    /// The driver still issues the software reset command during
    /// initialization.
    pub fn without_reset(spi: SPI, dc: DC) -> Self {
        Self {
            spi,
            dc,
            rst: NoResetPin::new(),
        }
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn configure(&mut self) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        if data.is_empty() {
            return Ok(());
        }
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        // Reset sequence: LOW -> wait 10ms -> HIGH -> wait 10ms
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_RECOVERY_MS);
        Ok(())
    }
}
