//! ILI9225 register definitions
//!
//! This module defines the 16-bit control-register addresses of the ILI9225
//! LCD controller. The chip is addressed through an index register: a
//! register-select-low word selects the register, and subsequent
//! register-select-high words read or write its 16-bit value. Writes to the
//! GRAM data register auto-increment the internal address counter according
//! to the active entry mode.
//!
//! ## Access pattern
//!
//! All register transactions follow the pattern:
//! 1. Set RS low (index phase), assert CS
//! 2. Send the register address word, deassert CS
//! 3. Set RS high (data phase), assert CS
//! 4. Send (or receive) the register value word(s), deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use ili9225::{register, ControllerInterface};
//! # struct MockIface;
//! # impl ControllerInterface for MockIface {
//! #     type Error = core::convert::Infallible;
//! #     fn write_register(&mut self, _reg: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write_data(&mut self, _value: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn begin_data(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write_words(&mut self, _words: &[u16]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn end_data(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn idle(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_reset(&mut self, _high: bool) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_backlight(&mut self, _on: bool) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = MockIface;
//! // Start the internal oscillator
//! let _ = interface.set_register(register::OSC_CTRL, 0x0701);
//! ```

/// Device code read (RW, 0x00)
///
/// Reading returns the device code `0x9225`. Writing starts (1) or stops (0)
/// the internal oscillator; allow 10 ms for it to stabilise.
pub const DRIVER_CODE_READ: u16 = 0x00;

/// Driver output control (WO, 0x01)
///
/// Sync-signal polarities, gate/source shift direction (GS/SS) and the
/// active gate line count NL.
pub const DRIVER_OUTPUT_CTRL: u16 = 0x01;

/// LCD AC driving waveform control (WO, 0x02)
///
/// Inversion method (INV) and 3-field interlace (FLD).
pub const LCD_AC_DRIVING_CTRL: u16 = 0x02;

/// Entry mode (WO, 0x03)
///
/// BGR swap, horizontal/vertical address counter increment (ID1/ID0) and the
/// GRAM update major axis (AM).
pub const ENTRY_MODE: u16 = 0x03;

/// Display control 1 (WO, 0x07)
///
/// Gate output level (GON), 8-colour mode (CL), greyscale reversal (REV) and
/// the display on/off field D (0b11 = on).
pub const DISPLAY_CTRL: u16 = 0x07;

/// Blank period control 1 (WO, 0x08)
///
/// Front (FP) and back (BP) porch line counts, four bits each.
pub const BLANK_PERIOD_CTRL: u16 = 0x08;

/// Frame cycle control (WO, 0x0B)
///
/// Gate output non-overlap, source delay and clocks per line. RGB mode only.
pub const FRAME_CYCLE_CTRL: u16 = 0x0B;

/// RGB input interface control (WO, 0x0C)
pub const INTERFACE_CTRL: u16 = 0x0C;

/// Oscillator control (WO, 0x0F)
///
/// FOSC frequency code in bits 11:8 and the oscillator enable in bit 0.
pub const OSC_CTRL: u16 = 0x0F;

/// Power control 1 (WO, 0x10)
///
/// Driver current level (SAP), deep standby (DSTB) and sleep (STB).
pub const PWR_CTRL1: u16 = 0x10;

/// Power control 2 (WO, 0x11)
///
/// Automatic boost (APON), boost circuit enables (PON), amplifier enables
/// and the VCI1 output voltage.
pub const PWR_CTRL2: u16 = 0x11;

/// Power control 3 (WO, 0x12)
///
/// Boost converter output factor (BT) and per-circuit operating frequencies.
pub const PWR_CTRL3: u16 = 0x12;

/// Power control 4 (WO, 0x13)
///
/// Gamma reference voltage GVDD, 2.66 V to 5.5 V.
pub const PWR_CTRL4: u16 = 0x13;

/// Power control 5 (WO, 0x14)
///
/// VCOM amplitude (VCOMG), VCOMH voltage (VCM) and alternating amplitude
/// (VML), all relative to GVDD.
pub const PWR_CTRL5: u16 = 0x14;

/// VCI recycling period (WO, 0x15)
pub const VCI_RECYCLING: u16 = 0x15;

/// RAM address set 1 (WO, 0x20)
///
/// Low half AD\[7:0\] of the GRAM address counter (horizontal component).
pub const RAM_ADDR_SET1: u16 = 0x20;

/// RAM address set 2 (WO, 0x21)
///
/// High half AD\[15:8\] of the GRAM address counter (vertical component).
pub const RAM_ADDR_SET2: u16 = 0x21;

/// GRAM data read/write (RW, 0x22)
///
/// Each word written lands at the address counter, which then auto-increments
/// per the entry mode. The counter wraps within the active window.
pub const GRAM_RW: u16 = 0x22;

/// Software reset (WO, 0x28)
///
/// Writing `0x00CE` performs a software reset.
pub const SOFT_RESET: u16 = 0x28;

/// Gate scan control (WO, 0x30)
///
/// SCN: line the gate scan starts from.
pub const GATE_SCAN_CTRL: u16 = 0x30;

/// Vertical scroll control 1 (WO, 0x31) — scroll end address
pub const VERT_SCROLL_CTRL1: u16 = 0x31;

/// Vertical scroll control 2 (WO, 0x32) — scroll start address
pub const VERT_SCROLL_CTRL2: u16 = 0x32;

/// Vertical scroll control 3 (WO, 0x33) — scroll step
pub const VERT_SCROLL_CTRL3: u16 = 0x33;

/// Partial screen driving position 1 (WO, 0x34) — screen end
pub const PART_DRIVING_POS1: u16 = 0x34;

/// Partial screen driving position 2 (WO, 0x35) — screen start
pub const PART_DRIVING_POS2: u16 = 0x35;

/// Horizontal window address 1 (WO, 0x36) — HEA, window end
pub const HORI_WIN_ADDR1: u16 = 0x36;

/// Horizontal window address 2 (WO, 0x37) — HSA, window start
pub const HORI_WIN_ADDR2: u16 = 0x37;

/// Vertical window address 1 (WO, 0x38) — VEA, window end
pub const VERT_WIN_ADDR1: u16 = 0x38;

/// Vertical window address 2 (WO, 0x39) — VSA, window start
pub const VERT_WIN_ADDR2: u16 = 0x39;

/// Gamma control 1 (WO, 0x50)
pub const GAMMA_CTRL1: u16 = 0x50;
/// Gamma control 2 (WO, 0x51)
pub const GAMMA_CTRL2: u16 = 0x51;
/// Gamma control 3 (WO, 0x52)
pub const GAMMA_CTRL3: u16 = 0x52;
/// Gamma control 4 (WO, 0x53)
pub const GAMMA_CTRL4: u16 = 0x53;
/// Gamma control 5 (WO, 0x54)
pub const GAMMA_CTRL5: u16 = 0x54;
/// Gamma control 6 (WO, 0x55)
pub const GAMMA_CTRL6: u16 = 0x55;
/// Gamma control 7 (WO, 0x56)
pub const GAMMA_CTRL7: u16 = 0x56;
/// Gamma control 8 (WO, 0x57)
pub const GAMMA_CTRL8: u16 = 0x57;
/// Gamma control 9 (WO, 0x58)
pub const GAMMA_CTRL9: u16 = 0x58;
/// Gamma control 10 (WO, 0x59)
pub const GAMMA_CTRL10: u16 = 0x59;

/// Device code reported by the driver-code register
pub const DEVICE_CODE: u16 = 0x9225;

/// Panel width in pixels along the gate (horizontal window) axis
pub const SCREEN_WIDTH: u16 = 176;

/// Panel height in pixels along the scan (vertical window) axis
pub const SCREEN_HEIGHT: u16 = 220;
