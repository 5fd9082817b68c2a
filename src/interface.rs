//! Hardware interface abstraction
//!
//! This module provides the [`ControllerInterface`] trait and the
//! [`Interface`] struct for communicating with the ILI9225 over a 16-bit
//! SPI-like register bus.
//!
//! ## Hardware Requirements
//!
//! The ILI9225 in SPI register mode requires:
//! - SPI bus clocked for 16-bit words (MOSI + SCK, MISO only for the `read`
//!   feature)
//! - 4 GPIO pins:
//!   - **CS**: Chip select (output, active low)
//!   - **RS**: Register select (output, low = index phase, high = data phase)
//!   - **RST**: Reset (output, active low)
//!   - **BL**: Backlight enable (output)
//!
//! Unlike controllers that accept a whole command+data burst under one
//! chip-select assertion, the ILI9225 requires CS to toggle high between the
//! index phase and the data phase of a register access. The driver therefore
//! owns the CS pin and uses [`SpiBus`] directly rather than an
//! `embedded_hal::spi::SpiDevice`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ili9225::{ControllerInterface, Interface, register};
//! # use core::convert::Infallible;
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
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin, MockPin);
//!
//! // One full register transaction
//! let _ = interface.set_register(register::OSC_CTRL, 0x0701);
//!
//! // A pixel burst: session held open across many data words
//! let _ = interface.write_register(register::GRAM_RW);
//! let _ = interface.begin_data();
//! let _ = interface.write_words(&[0xF800, 0x07E0, 0x001F]);
//! let _ = interface.end_data();
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the register bus interface to the ILI9225
///
/// This trait abstracts over different hardware implementations, allowing
/// [`Display`](crate::display::Display) to work with any transport that can
/// frame 16-bit words with chip-select and register-select signalling.
///
/// ## Implementing
///
/// For most targets, use the provided [`Interface`] struct. Implement this
/// trait directly for exotic transports (parallel bus adapters, shared-bus
/// wrappers with different CS discipline).
pub trait ControllerInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Select a register: RS low, CS asserted, one address word, CS released
    fn write_register(&mut self, reg: u16) -> InterfaceResult<(), Self::Error>;

    /// Write one value word: RS high, CS asserted, one word, CS released
    fn write_data(&mut self, value: u16) -> InterfaceResult<(), Self::Error>;

    /// Write `value` to register `reg`
    ///
    /// Composes [`write_register`](Self::write_register) and
    /// [`write_data`](Self::write_data). Chip-select toggles high between the
    /// two phases; no other transaction may be interleaved between them, so
    /// callers must treat the pair as atomic.
    fn set_register(&mut self, reg: u16, value: u16) -> InterfaceResult<(), Self::Error> {
        self.write_register(reg)?;
        self.write_data(value)
    }

    /// Open a data-phase transfer session: RS high, CS asserted, no words sent
    ///
    /// The session stays open until [`end_data`](Self::end_data); every word
    /// streamed in between is a data-phase word.
    fn begin_data(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Stream words into an open transfer session
    fn write_words(&mut self, words: &[u16]) -> InterfaceResult<(), Self::Error>;

    /// Close the transfer session: CS released
    ///
    /// Must only release CS after the last streamed word has left the wire.
    fn end_data(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Drive the bus to its idle state: CS released, RS low
    fn idle(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Set the level of the reset line (active low)
    fn set_reset(&mut self, high: bool) -> InterfaceResult<(), Self::Error>;

    /// Switch the backlight on or off
    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error>;
}

/// Duplex extension of [`ControllerInterface`]
///
/// Only exists with the `read` feature: read support is a build capability,
/// not a runtime property, so transports without MISO simply never see this
/// trait.
#[cfg(feature = "read")]
pub trait ReadInterface: ControllerInterface {
    /// Receive one value word: RS high, CS asserted, one word in, CS released
    fn read_data(&mut self) -> InterfaceResult<u16, Self::Error>;

    /// Receive one status word with RS low
    ///
    /// Used for queries that bypass the index register, such as the
    /// currently driven gate line.
    fn read_status(&mut self) -> InterfaceResult<u16, Self::Error>;

    /// Read the value of register `reg`
    fn get_register(&mut self, reg: u16) -> InterfaceResult<u16, Self::Error> {
        self.write_register(reg)?;
        self.read_data()
    }
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI bus error
    Spi(SpiErr),
    /// Control line error
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

/// Hardware interface implementation for the ILI9225
///
/// Implements [`ControllerInterface`] for embedded-hal v1.0 SPI and GPIO
/// traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus<u16>`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `RS` - Register select pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BL` - Backlight pin implementing [`OutputPin`]
pub struct Interface<SPI, CS, RS, RST, BL> {
    /// SPI bus clocked for 16-bit words
    spi: SPI,
    /// Chip select (active low)
    cs: CS,
    /// Register select (low = index, high = data)
    rs: RS,
    /// Reset (active low)
    rst: RST,
    /// Backlight enable
    bl: BL,
}

impl<SPI, CS, RS, RST, BL> Interface<SPI, CS, RS, RST, BL>
where
    SPI: SpiBus<u16>,
    CS: OutputPin,
    RS: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Create a new Interface
    ///
    /// Pin levels are not touched here; [`Display::init`](crate::display::Display::init)
    /// starts by driving every line to its safe idle level.
    pub fn new(spi: SPI, cs: CS, rs: RS, rst: RST, bl: BL) -> Self {
        Self {
            spi,
            cs,
            rs,
            rst,
            bl,
        }
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, CS, RS, RST, BL) {
        (self.spi, self.cs, self.rs, self.rst, self.bl)
    }
}

impl<SPI, CS, RS, RST, BL, PinErr> ControllerInterface for Interface<SPI, CS, RS, RST, BL>
where
    SPI: SpiBus<u16>,
    SPI::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    RS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn write_register(&mut self, reg: u16) -> InterfaceResult<(), Self::Error> {
        self.rs.set_low().map_err(InterfaceError::Pin)?;
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[reg]).map_err(InterfaceError::Spi)?;
        // Flush before any CS edge: SpiBus writes may still sit in a FIFO.
        self.spi.flush().map_err(InterfaceError::Spi)?;
        self.cs.set_high().map_err(InterfaceError::Pin)
    }

    fn write_data(&mut self, value: u16) -> InterfaceResult<(), Self::Error> {
        self.rs.set_high().map_err(InterfaceError::Pin)?;
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[value]).map_err(InterfaceError::Spi)?;
        self.spi.flush().map_err(InterfaceError::Spi)?;
        self.cs.set_high().map_err(InterfaceError::Pin)
    }

    fn begin_data(&mut self) -> InterfaceResult<(), Self::Error> {
        self.rs.set_high().map_err(InterfaceError::Pin)?;
        self.cs.set_low().map_err(InterfaceError::Pin)
    }

    fn write_words(&mut self, words: &[u16]) -> InterfaceResult<(), Self::Error> {
        self.spi.write(words).map_err(InterfaceError::Spi)
    }

    fn end_data(&mut self) -> InterfaceResult<(), Self::Error> {
        // The last streamed word must leave the wire before CS deasserts.
        self.spi.flush().map_err(InterfaceError::Spi)?;
        self.cs.set_high().map_err(InterfaceError::Pin)
    }

    fn idle(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cs.set_high().map_err(InterfaceError::Pin)?;
        self.rs.set_low().map_err(InterfaceError::Pin)
    }

    fn set_reset(&mut self, high: bool) -> InterfaceResult<(), Self::Error> {
        if high {
            self.rst.set_high().map_err(InterfaceError::Pin)
        } else {
            self.rst.set_low().map_err(InterfaceError::Pin)
        }
    }

    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error> {
        if on {
            self.bl.set_high().map_err(InterfaceError::Pin)
        } else {
            self.bl.set_low().map_err(InterfaceError::Pin)
        }
    }
}

#[cfg(feature = "read")]
impl<SPI, CS, RS, RST, BL, PinErr> ReadInterface for Interface<SPI, CS, RS, RST, BL>
where
    SPI: SpiBus<u16>,
    SPI::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    RS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    fn read_data(&mut self) -> InterfaceResult<u16, Self::Error> {
        self.rs.set_high().map_err(InterfaceError::Pin)?;
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        let mut word = [0u16; 1];
        self.spi.read(&mut word).map_err(InterfaceError::Spi)?;
        self.spi.flush().map_err(InterfaceError::Spi)?;
        self.cs.set_high().map_err(InterfaceError::Pin)?;
        Ok(word[0])
    }

    fn read_status(&mut self) -> InterfaceResult<u16, Self::Error> {
        self.rs.set_low().map_err(InterfaceError::Pin)?;
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        let mut word = [0u16; 1];
        self.spi.read(&mut word).map_err(InterfaceError::Spi)?;
        self.spi.flush().map_err(InterfaceError::Spi)?;
        self.cs.set_high().map_err(InterfaceError::Pin)?;
        Ok(word[0])
    }
}
