//! ILI9225 TFT LCD Driver
//!
//! A driver for the ILI9225 LCD controller (176x220, RGB565) addressed over
//! a 16-bit SPI-like register bus.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Timed power-up/reset sequencing with device identification check
//!   (identification requires the `read` feature)
//! - Blocking pixel writes and a non-blocking channel-offloaded path with
//!   interrupt-driven completion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ili9225::{Builder, Display, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::SpiBus;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus<u16> for MockSpi {
//! #     fn read(&mut self, _words: &mut [u16]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u16]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u16], _write: &[u16]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u16]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let (spi, cs, rs, rst, bl) = (MockSpi, MockPin, MockPin, MockPin, MockPin);
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, cs, rs, rst, bl);
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! // Full-screen black, then one green pixel.
//! let _ = display.fill(0x0000);
//! let _ = display.write_pixel(10, 10, 0x07E0);
//! ```
//!
//! For the asynchronous path, see the [`transfer`] module.

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// ILI9225 register definitions
pub mod register;
/// Asynchronous transfer engine
pub mod transfer;

// DrawTarget integration; impls only, no public items of its own.
#[cfg(feature = "graphics")]
mod graphics;

pub use config::{Builder, Config};
pub use display::{ColorMode, Display};
pub use error::{BuilderError, Error};
pub use interface::{ControllerInterface, Interface, InterfaceError};
#[cfg(feature = "read")]
pub use interface::ReadInterface;
pub use register::{DEVICE_CODE, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use transfer::{
    CompletionCallback, IrqLine, TransferChannel, configure_channel, register_callback,
};
