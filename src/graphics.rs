//! Graphics support via embedded-graphics
//!
//! Implements [`DrawTarget`] and [`OriginDimensions`] for
//! [`Display`] so the embedded-graphics primitives (lines, rectangles,
//! circles, text) render straight to GRAM. The ILI9225 is a direct-write
//! panel: no framebuffer is kept, each drawing operation goes to the wire
//! immediately.
//!
//! Coordinates follow the driver's logical landscape convention, 220 wide by
//! 176 tall. RGB565 colours pass through as raw 16-bit words.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! # use core::convert::Infallible;
//! # use ili9225::{Builder, ControllerInterface, Display};
//! # struct MockIface;
//! # impl ControllerInterface for MockIface {
//! #     type Error = Infallible;
//! #     fn write_register(&mut self, _reg: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write_data(&mut self, _value: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn begin_data(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write_words(&mut self, _words: &[u16]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn end_data(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn idle(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_reset(&mut self, _high: bool) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_backlight(&mut self, _on: bool) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let config = match Builder::new().build() { Ok(c) => c, Err(_) => return };
//! let mut display = Display::new(MockIface, config);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut display);
//! ```

use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::pixelcolor::raw::RawU16;
use embedded_graphics_core::prelude::*;
use embedded_graphics_core::primitives::Rectangle;

use crate::display::Display;
use crate::error::Error;
use crate::interface::ControllerInterface;
use crate::register::{SCREEN_HEIGHT, SCREEN_WIDTH};

impl<I> OriginDimensions for Display<I>
where
    I: ControllerInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(SCREEN_HEIGHT), u32::from(SCREEN_WIDTH))
    }
}

impl<I> DrawTarget for Display<I>
where
    I: ControllerInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Off-screen pixels are dropped, per the DrawTarget contract.
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u16, point.y as u16);
            if x >= SCREEN_HEIGHT || y >= SCREEN_WIDTH {
                continue;
            }
            self.write_pixel(x, y, RawU16::from(color).into_inner())?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.bottom_right().is_none() {
            // Zero-sized after clipping.
            return Ok(());
        }
        self.fill_rect(
            area.top_left.x as u16,
            area.top_left.y as u16,
            area.size.width as u16,
            area.size.height as u16,
            RawU16::from(color).into_inner(),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(RawU16::from(color).into_inner())
    }
}
