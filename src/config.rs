//! Display configuration types and builder

pub use crate::error::BuilderError;
use crate::init::{INIT_SEQUENCE, InitCommand, MAX_PAYLOAD, end_position};
use crate::orientation::{ColorOrder, Orientation};

/// Minimum wait after the software reset, in milliseconds
pub const MIN_RESET_SETTLE_MS: u32 = 500;

/// Minimum wait after an init table entry flagged for delay, in milliseconds
pub const MIN_COMMAND_SETTLE_MS: u32 = 200;

/// Display configuration
///
/// Use `Builder` to create a Config, or `Config::default()` for the stock
/// panel setup.
///
/// The fields are public, so a struct literal skips the checks done by
/// [`Builder::build`]: the end-of-table entry, the payload lengths and the
/// minimum settle delays are then the caller's responsibility.
#[derive(Clone, Debug)]
pub struct Config {
    /// Orientation applied at the end of initialization
    ///
    /// `None` keeps whatever the init table programmed.
    pub orientation: Option<Orientation>,
    /// Sub-pixel colour order of the panel
    pub color_order: ColorOrder,
    /// Wait after the software reset
    pub reset_settle_ms: u32,
    /// Wait after init table entries flagged for delay
    pub command_settle_ms: u32,
    /// Init table replayed by `Display::initialize`
    pub init_sequence: &'static [InitCommand],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: None,
            color_order: ColorOrder::Bgr,
            reset_settle_ms: MIN_RESET_SETTLE_MS,
            command_settle_ms: MIN_COMMAND_SETTLE_MS,
            init_sequence: INIT_SEQUENCE,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use ili9341::{Builder, Orientation};
///
/// let config = match Builder::new().orientation(Orientation::Rotate90).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Orientation applied after the init table
    orientation: Option<Orientation>,
    /// Sub-pixel colour order
    color_order: ColorOrder,
    /// Wait after the software reset
    reset_settle_ms: u32,
    /// Wait after flagged init entries
    command_settle_ms: u32,
    /// Init table
    init_sequence: &'static [InitCommand],
}

impl Default for Builder {
    fn default() -> Self {
        let config = Config::default();
        Self {
            orientation: config.orientation,
            color_order: config.color_order,
            reset_settle_ms: config.reset_settle_ms,
            command_settle_ms: config.command_settle_ms,
            init_sequence: config.init_sequence,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the orientation applied at the end of initialization
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Set the panel colour order
    pub fn color_order(mut self, order: ColorOrder) -> Self {
        self.color_order = order;
        self
    }

    /// Set the wait after the software reset (at least 500ms)
    pub fn reset_settle_ms(mut self, ms: u32) -> Self {
        self.reset_settle_ms = ms;
        self
    }

    /// Set the wait after flagged init entries (at least 200ms)
    pub fn command_settle_ms(mut self, ms: u32) -> Self {
        self.command_settle_ms = ms;
        self
    }

    /// Replace the stock init table
    ///
    /// The table must contain an end-of-table entry. Entries after it are
    /// never read.
    pub fn init_sequence(mut self, table: &'static [InitCommand]) -> Self {
        self.init_sequence = table;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::MissingEndOfTable` if the init table has no end entry
    /// - `BuilderError::PayloadTooLong` if an entry before it declares more
    ///   than 16 payload bytes
    /// - `BuilderError::SettleTooShort` if a settle delay is below its minimum
    pub fn build(self) -> Result<Config, BuilderError> {
        let end = end_position(self.init_sequence).ok_or(BuilderError::MissingEndOfTable)?;
        if let Some((index, entry)) = self.init_sequence[..end]
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.payload_len() > MAX_PAYLOAD)
        {
            return Err(BuilderError::PayloadTooLong {
                index,
                length: entry.payload_len(),
            });
        }
        check_settle(self.reset_settle_ms, MIN_RESET_SETTLE_MS)?;
        check_settle(self.command_settle_ms, MIN_COMMAND_SETTLE_MS)?;

        Ok(Config {
            orientation: self.orientation,
            color_order: self.color_order,
            reset_settle_ms: self.reset_settle_ms,
            command_settle_ms: self.command_settle_ms,
            init_sequence: self.init_sequence,
        })
    }
}

fn check_settle(requested: u32, minimum: u32) -> Result<(), BuilderError> {
    if requested < minimum {
        return Err(BuilderError::SettleTooShort { requested, minimum });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build_succeeds() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.orientation, None);
        assert_eq!(config.color_order, ColorOrder::Bgr);
        assert_eq!(config.reset_settle_ms, 500);
        assert_eq!(config.command_settle_ms, 200);
        assert_eq!(config.init_sequence.len(), INIT_SEQUENCE.len());
    }

    #[test]
    fn test_missing_end_of_table_is_rejected() {
        static TABLE: [InitCommand; 2] = [InitCommand::new(0x11, &[]), InitCommand::new(0x29, &[])];
        let result = Builder::new().init_sequence(&TABLE).build();
        assert_eq!(result.unwrap_err(), BuilderError::MissingEndOfTable);
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        static TABLE: [InitCommand; 3] = [
            InitCommand::new(0x11, &[]),
            InitCommand::raw(0xE0, [0; MAX_PAYLOAD], 0x1F),
            InitCommand::end(),
        ];
        let result = Builder::new().init_sequence(&TABLE).build();
        assert_eq!(
            result.unwrap_err(),
            BuilderError::PayloadTooLong {
                index: 1,
                length: 31
            }
        );
    }

    #[test]
    fn test_entries_after_end_are_not_validated() {
        static TABLE: [InitCommand; 2] = [
            InitCommand::end(),
            InitCommand::raw(0xE0, [0; MAX_PAYLOAD], 0x1F),
        ];
        assert!(Builder::new().init_sequence(&TABLE).build().is_ok());
    }

    #[test]
    fn test_short_settle_delays_are_rejected() {
        let result = Builder::new().reset_settle_ms(100).build();
        assert_eq!(
            result.unwrap_err(),
            BuilderError::SettleTooShort {
                requested: 100,
                minimum: 500
            }
        );

        let result = Builder::new().command_settle_ms(199).build();
        assert_eq!(
            result.unwrap_err(),
            BuilderError::SettleTooShort {
                requested: 199,
                minimum: 200
            }
        );
    }

    #[test]
    fn test_longer_settle_delays_are_kept() {
        let config = Builder::new()
            .reset_settle_ms(800)
            .command_settle_ms(250)
            .orientation(Orientation::Rotate270)
            .color_order(ColorOrder::Rgb)
            .build()
            .unwrap();
        assert_eq!(config.reset_settle_ms, 800);
        assert_eq!(config.command_settle_ms, 250);
        assert_eq!(config.orientation, Some(Orientation::Rotate270));
        assert_eq!(config.color_order, ColorOrder::Rgb);
    }
}
