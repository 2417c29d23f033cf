//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! The controller never reports failures itself. Runtime errors only come
//! from the transport (SPI bus or GPIO).
//!
//! ## Example
//!
//! ```
//! use ili9341::init::InitCommand;
//! use ili9341::{Builder, BuilderError};
//!
//! // Custom table without an end-of-table entry
//! static TABLE: [InitCommand; 1] = [InitCommand::new(0x11, &[])];
//! let result = Builder::new().init_sequence(&TABLE).build();
//! assert!(matches!(result, Err(BuilderError::MissingEndOfTable)));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
pub enum Error<I: DisplayInterface> {
    /// Transport error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Transport(I::Error),
}

impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(e) => f.debug_tuple("Transport").field(e).finish(),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// The init table has no end-of-table entry
    MissingEndOfTable,
    /// An init table entry declares more bytes than an entry can hold
    PayloadTooLong {
        /// Position of the entry in the table
        index: usize,
        /// Decoded payload length
        length: usize,
    },
    /// Settle delay shorter than the controller needs
    SettleTooShort {
        /// Requested delay in milliseconds
        requested: u32,
        /// Minimum delay in milliseconds
        minimum: u32,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingEndOfTable => write!(f, "Init table has no end-of-table entry"),
            Self::PayloadTooLong { index, length } => write!(
                f,
                "Init table entry {index} declares {length} payload bytes (max {})",
                crate::init::MAX_PAYLOAD
            ),
            Self::SettleTooShort { requested, minimum } => write!(
                f,
                "Settle delay of {requested}ms is below the {minimum}ms minimum"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
