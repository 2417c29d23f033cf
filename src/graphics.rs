//! Graphics support via embedded-graphics
//!
//! This module implements the [`DrawTarget`] trait from the embedded-graphics
//! ecosystem directly on [`Display`], so widget and GUI libraries can render
//! to the panel without a frame buffer.
//!
//! Every pixel is sent through [`Display::draw_pixel`]; pixels outside the
//! current orientation's bounds are skipped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use ili9341::{Config, Display, Interface};
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
//! # let interface = Interface::new(MockSpi, MockPin, MockPin);
//! let mut display = Display::new(interface, Config::default());
//! let _ = display.initialize(&mut delay);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 2))
//!     .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::Pixel,
};

use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.dimensions();

        for Pixel(Point { x, y }, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };

            if x >= width || y >= height {
                continue;
            }

            self.draw_pixel(x, y, color)?;
        }

        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let (width, height) = self.dimensions();
        Size::new(u32::from(width), u32::from(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MEMORY_WRITE;
    use crate::config::Config;
    use crate::mock::{Event, Log, MockInterface, commands, new_log};
    use crate::orientation::Orientation;
    use alloc::vec;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    fn test_display() -> (Display<MockInterface>, Log) {
        let log = new_log();
        (
            Display::new(MockInterface::new(log.clone()), Config::default()),
            log,
        )
    }

    fn pixel_writes(log: &Log) -> usize {
        commands(log)
            .iter()
            .filter(|cmd| **cmd == MEMORY_WRITE)
            .count()
    }

    #[test]
    fn test_size_follows_orientation() {
        let (mut display, _log) = test_display();
        assert_eq!(OriginDimensions::size(&display), Size::new(240, 320));
        display.set_orientation(Orientation::Rotate90).unwrap();
        assert_eq!(OriginDimensions::size(&display), Size::new(320, 240));
    }

    #[test]
    fn test_draw_iter_writes_each_pixel() {
        let (mut display, log) = test_display();
        Pixel(Point::new(5, 10), Rgb565::RED)
            .draw(&mut display)
            .unwrap();
        assert_eq!(
            log.borrow()[4..],
            [Event::Command(MEMORY_WRITE), Event::Data(vec![0xF8, 0x00])]
        );
    }

    #[test]
    fn test_filled_rectangle_draws_every_pixel() {
        let (mut display, log) = test_display();
        Rectangle::new(Point::new(0, 0), Size::new(3, 2))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
            .draw(&mut display)
            .unwrap();
        assert_eq!(pixel_writes(&log), 6);
    }

    #[test]
    fn test_out_of_bounds_pixels_are_skipped() {
        let (mut display, log) = test_display();
        let pixels = [
            Pixel(Point::new(-1, 0), Rgb565::RED),
            Pixel(Point::new(0, -1), Rgb565::RED),
            Pixel(Point::new(240, 0), Rgb565::RED),
            Pixel(Point::new(0, 320), Rgb565::RED),
            Pixel(Point::new(239, 319), Rgb565::RED),
        ];
        display.draw_iter(pixels).unwrap();
        assert_eq!(pixel_writes(&log), 1);
    }

    #[test]
    fn test_bounds_use_rotated_dimensions() {
        let (mut display, log) = test_display();
        display.set_orientation(Orientation::Rotate270).unwrap();
        display
            .draw_iter([Pixel(Point::new(300, 10), Rgb565::BLUE)])
            .unwrap();
        assert_eq!(pixel_writes(&log), 1);
    }

    #[test]
    fn test_transport_error_stops_drawing() {
        let (display, log) = test_display();
        let mut interface = display.release();
        interface.fail_at = Some(0);
        let mut display = Display::new(interface, Config::default());
        let result = display.draw_iter([
            Pixel(Point::new(0, 0), Rgb565::RED),
            Pixel(Point::new(1, 0), Rgb565::RED),
        ]);
        assert!(matches!(result, Err(Error::Transport(_))));
        assert!(log.borrow().is_empty());
    }
}
