//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::color::Color;
use crate::command::{
    COLUMN_ADDRESS_SET, MEMORY_ACCESS_CONTROL, MEMORY_WRITE, ROW_ADDRESS_SET, SOFTWARE_RESET,
};
use crate::config::Config;
use crate::error::Error;
use crate::init::InitSequence;
use crate::interface::DisplayInterface;
use crate::orientation::Orientation;
use crate::window::Window;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for ILI9341
///
/// This struct owns the transport and the orientation state of one panel.
/// For embedded-graphics support, enable the `graphics` feature.
///
/// Calls are blocking and run to completion. Command and parameter bytes
/// are separate transport calls, so sharing one panel between tasks needs
/// a lock around each driver call.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Current orientation, drives width and height
    orientation: Orientation,
    /// Whether the init table has been replayed
    is_initialized: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent to the controller until
    /// [`initialize`](Self::initialize). The orientation starts at
    /// [`Orientation::Rotate0`].
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            orientation: Orientation::Rotate0,
            is_initialized: false,
        }
    }

    /// Bring the controller out of reset and replay the init table
    ///
    /// In order:
    /// 1. Put the DC line into its idle state
    /// 2. Hardware reset, then the software reset command
    /// 3. Wait `reset_settle_ms`
    /// 4. Send every init table entry up to the end-of-table entry, waiting
    ///    `command_settle_ms` after each entry flagged for delay
    /// 5. Apply the configured orientation, if any
    ///
    /// The stock table ends with a Memory Access Control byte of `0x48`, the
    /// 180 degree pattern, while [`orientation`](Self::orientation) still
    /// reports [`Orientation::Rotate0`]. Set
    /// [`Builder::orientation`](crate::config::Builder::orientation) to have
    /// the hardware and the reported orientation agree after initialization.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the interface fails. Initialization
    /// stops at the failing transfer.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("ILI9341 initialization");
        self.interface.configure().map_err(Error::Transport)?;
        self.interface.reset(delay).map_err(Error::Transport)?;
        self.send_command(SOFTWARE_RESET)?;
        delay.delay_ms(self.config.reset_settle_ms);

        let table = self.config.init_sequence;
        let mut sequence = InitSequence::new(table);
        for step in sequence.by_ref() {
            trace!(
                "init cmd {:#04x}, {} bytes, delay {}",
                step.opcode,
                step.payload.len(),
                step.delay_after
            );
            self.send_command(step.opcode)?;
            if !step.payload.is_empty() {
                self.send_data(step.payload)?;
            }
            if step.delay_after {
                delay.delay_ms(self.config.command_settle_ms);
            }
        }

        if let Some(orientation) = self.config.orientation {
            self.set_orientation(orientation)?;
        }

        self.is_initialized = true;
        debug!(
            "ILI9341 ready, {} table entries, {}x{}",
            sequence.visited(),
            self.width(),
            self.height()
        );
        Ok(())
    }

    /// Set the display orientation
    ///
    /// Sends the Memory Access Control command with the byte for
    /// `orientation`, then updates the stored orientation and dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the interface fails; the stored
    /// orientation is left unchanged.
    pub fn set_orientation(&mut self, orientation: Orientation) -> DisplayResult<I> {
        let madctl = orientation.madctl(self.config.color_order);
        debug!(
            "orientation {} degrees, MADCTL {:#04x}",
            orientation.degrees(),
            madctl
        );
        self.send_command(MEMORY_ACCESS_CONTROL)?;
        self.send_data(&[madctl])?;
        self.orientation = orientation;
        Ok(())
    }

    /// Set the orientation from a rotation in degrees
    ///
    /// Values other than 0, 90, 180 and 270 select [`Orientation::Rotate0`].
    pub fn set_orientation_degrees(&mut self, degrees: u16) -> DisplayResult<I> {
        self.set_orientation(Orientation::from_degrees(degrees))
    }

    /// Current orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Width in pixels for the current orientation
    pub fn width(&self) -> u16 {
        self.orientation.dimensions().0
    }

    /// Height in pixels for the current orientation
    pub fn height(&self) -> u16 {
        self.orientation.dimensions().1
    }

    /// `(width, height)` for the current orientation
    pub fn dimensions(&self) -> (u16, u16) {
        self.orientation.dimensions()
    }

    /// Whether [`initialize`](Self::initialize) has completed
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Set the address window for following pixel data
    ///
    /// Coordinates are inclusive and sent unchecked. Orientation changes how
    /// the controller fills the window, not the coordinates sent here.
    pub fn set_window(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
    ) -> DisplayResult<I> {
        self.apply_window(Window::new(x_start, y_start, x_end, y_end))
    }

    fn apply_window(&mut self, window: Window) -> DisplayResult<I> {
        self.send_command(COLUMN_ADDRESS_SET)?;
        self.send_data(&window.column_payload())?;
        self.send_command(ROW_ADDRESS_SET)?;
        self.send_data(&window.row_payload())?;
        Ok(())
    }

    /// Draw a single RGB565 pixel
    ///
    /// Sets a 1x1 window at `(x, y)`, then writes the colour MSB first.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: impl Into<Color>) -> DisplayResult<I> {
        let color = color.into();
        self.apply_window(Window::pixel(x, y))?;
        self.send_command(MEMORY_WRITE)?;
        self.send_data(&color.to_be_bytes())?;
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Transport)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Transport)
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the interface
    pub fn release(self) -> I {
        self.interface
    }
}
