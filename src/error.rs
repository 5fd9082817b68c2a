//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`BuilderError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus communication errors
//!
//! Out-of-range windows, rectangles and empty buffers are caller bugs: the
//! driver rejects them before touching the bus, but there is nothing
//! meaningful to recover from. The only error a correct program is expected
//! to observe at runtime is [`Error::ChipIdMismatch`] at startup.
//!
//! ## Example
//!
//! ```
//! use ili9225::{Builder, BuilderError};
//!
//! let result = Builder::new().osc_frequency(0x1F).build();
//! assert!(matches!(result, Err(BuilderError::InvalidOscFrequency { .. })));
//! ```

use crate::interface::ControllerInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: ControllerInterface> {
    /// Interface error (SPI bus or control line)
    ///
    /// Wraps the underlying hardware error from the [`ControllerInterface`]
    /// implementation.
    Interface(I::Error),
    /// The device code read back at the end of initialization did not match
    /// [`DEVICE_CODE`](crate::register::DEVICE_CODE)
    ///
    /// `diff` is the wrapping numeric difference `DEVICE_CODE - read value`;
    /// it is never zero. The sequence is not resumable: recovery means
    /// re-running initialization from the start.
    ChipIdMismatch {
        /// Wrapping difference between the expected and read device code
        diff: u16,
    },
    /// Window bounds violate the ordering invariant
    ///
    /// A window must satisfy `hor_start < hor_end < SCREEN_WIDTH` and
    /// `vert_start < vert_end < SCREEN_HEIGHT`. Rejected before any register
    /// write.
    InvalidWindow {
        /// Horizontal window start
        hor_start: u16,
        /// Horizontal window end
        hor_end: u16,
        /// Vertical window start
        vert_start: u16,
        /// Vertical window end
        vert_end: u16,
    },
    /// A drawing rectangle is degenerate or extends past the screen
    OutOfBounds {
        /// X coordinate along the scan axis
        x: u16,
        /// Y coordinate along the gate axis
        y: u16,
        /// Width along the scan axis
        w: u16,
        /// Height along the gate axis
        h: u16,
    },
    /// A pixel buffer was empty
    EmptyBuffer,
    /// A blit buffer does not cover its rectangle
    BufferLengthMismatch {
        /// Required number of pixel words (`w * h`)
        expected: usize,
        /// Provided number of pixel words
        provided: usize,
    },
    /// An asynchronous transfer is still in flight
    ///
    /// The transfer session is a single physical resource; a new write may
    /// only start after the completion interrupt for the previous
    /// [`dma_write`](crate::display::Display::dma_write) has been serviced.
    TransferInFlight,
}

impl<I: ControllerInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::ChipIdMismatch { diff } => {
                write!(f, "Device code mismatch: difference {diff:#06x}")
            }
            Self::InvalidWindow {
                hor_start,
                hor_end,
                vert_start,
                vert_end,
            } => write!(
                f,
                "Invalid window: hor {hor_start}..{hor_end}, vert {vert_start}..{vert_end}"
            ),
            Self::OutOfBounds { x, y, w, h } => {
                write!(f, "Rectangle out of bounds: x={x}, y={y}, w={w}, h={h}")
            }
            Self::EmptyBuffer => write!(f, "Empty pixel buffer"),
            Self::BufferLengthMismatch { expected, provided } => {
                write!(
                    f,
                    "Buffer length mismatch: expected {expected} words, provided {provided}"
                )
            }
            Self::TransferInFlight => write!(f, "Asynchronous transfer still in flight"),
        }
    }
}

impl<I: ControllerInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is
/// created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Oscillator frequency code does not fit the 4-bit FOSC field
    InvalidOscFrequency {
        /// Requested frequency code (valid range 0..=15)
        code: u8,
    },
    /// Porch line count outside the blank-period register range
    InvalidPorch {
        /// Requested front porch lines (valid range 1..=15)
        front: u8,
        /// Requested back porch lines (valid range 1..=15)
        back: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidOscFrequency { code } => {
                write!(f, "Oscillator frequency code {code} exceeds 4-bit range")
            }
            Self::InvalidPorch { front, back } => {
                write!(f, "Porch lines {front}/{back} outside 1..=15")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
