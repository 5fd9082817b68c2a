//! Core display operations
//!
//! [`Display`] owns the bus interface and a private copy of the
//! configuration. It drives the timed bring-up sequence, the GRAM window and
//! address-pointer model, and the synchronous pixel-write path. The
//! asynchronous path lives in [`transfer`](crate::transfer).
//!
//! ## Coordinate conventions
//!
//! The panel is natively 176 pixels along the gate (horizontal window) axis
//! and 220 along the scan (vertical window) axis, with the scan origin fixed
//! at the far end of the scan axis. Two conventions coexist:
//!
//! - [`set_window`](Display::set_window) and
//!   [`set_address`](Display::set_address) operate in **native panel
//!   coordinates** — raw register semantics, no translation.
//! - The drawing helpers ([`write_pixel`](Display::write_pixel),
//!   [`fill_rect`](Display::fill_rect), [`blit`](Display::blit),
//!   [`fill`](Display::fill)) use one **logical landscape** convention:
//!   `x ∈ 0..220` left-to-right along the scan axis, `y ∈ 0..176` down the
//!   gate axis. The fixed hardware scan inversion (`219 - x`) is applied in
//!   a single internal helper; it is a property of the panel wiring, not an
//!   option.

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::config::{Config, DEFAULT_ENTRY_MODE};
use crate::error::Error;
use crate::interface::ControllerInterface;

#[cfg(feature = "read")]
use crate::interface::ReadInterface;
use crate::register::{
    BLANK_PERIOD_CTRL, DISPLAY_CTRL, DRIVER_OUTPUT_CTRL, ENTRY_MODE, FRAME_CYCLE_CTRL,
    GAMMA_CTRL1, GAMMA_CTRL2, GAMMA_CTRL3, GAMMA_CTRL4, GAMMA_CTRL5, GAMMA_CTRL6, GAMMA_CTRL7,
    GAMMA_CTRL8, GAMMA_CTRL9, GAMMA_CTRL10, GATE_SCAN_CTRL, GRAM_RW, HORI_WIN_ADDR1,
    HORI_WIN_ADDR2, INTERFACE_CTRL, LCD_AC_DRIVING_CTRL, OSC_CTRL, PART_DRIVING_POS1,
    PART_DRIVING_POS2, PWR_CTRL1, PWR_CTRL2, PWR_CTRL3, PWR_CTRL4, PWR_CTRL5, RAM_ADDR_SET1,
    RAM_ADDR_SET2, SCREEN_HEIGHT, SCREEN_WIDTH, VCI_RECYCLING, VERT_SCROLL_CTRL1,
    VERT_SCROLL_CTRL2, VERT_SCROLL_CTRL3, VERT_WIN_ADDR1, VERT_WIN_ADDR2,
};

#[cfg(feature = "read")]
use crate::register::{DEVICE_CODE, DRIVER_CODE_READ};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Words per bus write during solid fills
const FILL_CHUNK: usize = 32;

/// Colour depth selection for [`Display::display_control`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Full 2^18-colour mode (RGB565 input)
    #[default]
    Full = 0,
    /// Reduced 8-colour mode
    EightColor = 1,
}

/// Core display driver for the ILI9225
///
/// Initialization must complete before any window, addressing or pixel-write
/// operation; the driver does not enforce that ordering at runtime.
pub struct Display<I>
where
    I: ControllerInterface,
{
    /// Bus interface
    interface: I,
    /// Private configuration copy, immutable after `new`
    config: Config,
    /// True while an asynchronous transfer session is armed
    transfer_armed: bool,
}

impl<I> Display<I>
where
    I: ControllerInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            transfer_armed: false,
        }
    }

    /// Initialize the controller: reset sequencing, power-rail bring-up and
    /// mode configuration
    ///
    /// Strictly sequential and timing-gated; a failed or aborted run must be
    /// restarted from the beginning, there is no intermediate resume point.
    ///
    /// # Errors
    ///
    /// With the `read` feature, returns [`Error::ChipIdMismatch`] if the
    /// device-code register does not read back `0x9225`; the payload carries
    /// the numeric difference from the expected code. Without `read` the
    /// identification check is compiled out.
    #[cfg(feature = "read")]
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I>
    where
        I: ReadInterface,
    {
        self.bring_up(delay)?;
        let id = self
            .interface
            .get_register(DRIVER_CODE_READ)
            .map_err(Error::Interface)?;
        if id != DEVICE_CODE {
            return Err(Error::ChipIdMismatch {
                diff: DEVICE_CODE.wrapping_sub(id),
            });
        }
        debug!("ili9225: initialization complete, device code {id:#06x}");
        Ok(())
    }

    /// Initialize the controller: reset sequencing, power-rail bring-up and
    /// mode configuration
    ///
    /// Strictly sequential and timing-gated; a failed or aborted run must be
    /// restarted from the beginning, there is no intermediate resume point.
    /// The device identification check requires the `read` feature and is
    /// compiled out of this build.
    #[cfg(not(feature = "read"))]
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.bring_up(delay)?;
        debug!("ili9225: initialization complete");
        Ok(())
    }

    /// Steps 1-10 of the bring-up sequence: everything except the
    /// identification check
    fn bring_up<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        // Safe idle levels first. RST must be high before the reset pulse.
        self.interface.set_reset(true).map_err(Error::Interface)?;
        self.interface.idle().map_err(Error::Interface)?;
        delay.delay_ms(1);

        // Reset pulse; Tres minimum is 1 ms, held longer for margin.
        self.interface.set_reset(false).map_err(Error::Interface)?;
        delay.delay_ms(10);
        self.interface.set_reset(true).map_err(Error::Interface)?;
        // Register access is invalid until the internal state settles.
        delay.delay_ms(50);

        self.interface.set_backlight(false).map_err(Error::Interface)?;

        // Power rails in two stages: clear every domain, let it discharge,
        // then program operating voltages.
        const POWER_REGS: [u16; 5] = [PWR_CTRL1, PWR_CTRL2, PWR_CTRL3, PWR_CTRL4, PWR_CTRL5];
        for reg in POWER_REGS {
            self.set_register(reg, 0x0000)?;
        }
        delay.delay_ms(40);

        // VCI reference before the gamma-dependent rails, driver current last.
        const POWER_ON: [(u16, u16); 5] = [
            (PWR_CTRL2, 0x0018), // VCI 2.58 V
            (PWR_CTRL3, 0x6121), // boost converter factors, VGH/VGL
            (PWR_CTRL4, 0x006F), // GVDD 4.68 V
            (PWR_CTRL5, 0x495F), // VCM 0.8030 V, VML 1.104 V
            (PWR_CTRL1, 0x0800), // driving capability "medium fast 1"
        ];
        for (reg, value) in POWER_ON {
            self.set_register(reg, value)?;
        }
        delay.delay_ms(10);

        // Automatic boost and amplifiers, VCI1 raised to 2.76 V.
        self.set_register(PWR_CTRL2, 0x103B)?;
        delay.delay_ms(50);

        // Geometry, timing and gamma do not depend on rail settling: one
        // ordered batch, one settle at the end.
        let gamma = self.config.gamma;
        let batch: [(u16, u16); 32] = [
            (DRIVER_OUTPUT_CTRL, 0x011C), // SS shift direction, 220-line NL
            (LCD_AC_DRIVING_CTRL, 0x0100), // line inversion disabled
            (ENTRY_MODE, self.config.entry_mode),
            (DISPLAY_CTRL, 0x0000), // outputs off while programming
            (BLANK_PERIOD_CTRL, self.config.blank_period_word()),
            (FRAME_CYCLE_CTRL, 0x1100),
            (INTERFACE_CTRL, 0x0000), // RGB interface unused
            (OSC_CTRL, self.config.osc_word()),
            (VCI_RECYCLING, 0x0020),
            (RAM_ADDR_SET1, 0x0000),
            (RAM_ADDR_SET2, 0x0000),
            (GATE_SCAN_CTRL, 0x0000),
            (VERT_SCROLL_CTRL1, 0x00DB), // scroll end at line 219
            (VERT_SCROLL_CTRL2, 0x0000),
            (VERT_SCROLL_CTRL3, 0x0000), // no scrolling
            (PART_DRIVING_POS1, 0x00DB),
            (PART_DRIVING_POS2, 0x0000),
            (HORI_WIN_ADDR1, 0x00AF), // full 176 x 220 window
            (HORI_WIN_ADDR2, 0x0000),
            (VERT_WIN_ADDR1, 0x00DB),
            (VERT_WIN_ADDR2, 0x0000),
            (GAMMA_CTRL1, gamma[0]),
            (GAMMA_CTRL2, gamma[1]),
            (GAMMA_CTRL3, gamma[2]),
            (GAMMA_CTRL4, gamma[3]),
            (GAMMA_CTRL5, gamma[4]),
            (GAMMA_CTRL6, gamma[5]),
            (GAMMA_CTRL7, gamma[6]),
            (GAMMA_CTRL8, gamma[7]),
            (GAMMA_CTRL9, gamma[8]),
            (GAMMA_CTRL10, gamma[9]),
            (DISPLAY_CTRL, 0x0012), // full colour, display still off
        ];
        for (reg, value) in batch {
            self.set_register(reg, value)?;
        }
        delay.delay_ms(50);

        // GON, CL, REV, D: gate driver on, full colour, reversed greyscale
        // per panel requirement, display on.
        self.set_register(DISPLAY_CTRL, 0x1017)?;
        delay.delay_ms(50);

        self.interface.set_backlight(true).map_err(Error::Interface)
    }

    /// Set the GRAM window the address pointer is confined to
    ///
    /// Native panel coordinates. The address pointer wraps within the window
    /// and is reset here to the window's start corner. The window is a side
    /// effect of every drawing helper too; nothing validates later writes
    /// against it, keeping window and address consistent is the caller's
    /// responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] — before any register write — unless
    /// `hor_start < hor_end < 176` and `vert_start < vert_end < 220`. A
    /// violation is a caller bug, not a recoverable condition.
    pub fn set_window(
        &mut self,
        hor_start: u16,
        hor_end: u16,
        vert_start: u16,
        vert_end: u16,
    ) -> DisplayResult<I> {
        if hor_start >= hor_end
            || hor_end >= SCREEN_WIDTH
            || vert_start >= vert_end
            || vert_end >= SCREEN_HEIGHT
        {
            return Err(Error::InvalidWindow {
                hor_start,
                hor_end,
                vert_start,
                vert_end,
            });
        }

        self.set_register(HORI_WIN_ADDR1, hor_end)?;
        self.set_register(HORI_WIN_ADDR2, hor_start)?;
        self.set_register(VERT_WIN_ADDR1, vert_end)?;
        self.set_register(VERT_WIN_ADDR2, vert_start)?;
        self.set_register(RAM_ADDR_SET1, hor_start)?;
        self.set_register(RAM_ADDR_SET2, vert_start)
    }

    /// Set the GRAM address pointer directly
    ///
    /// Native panel coordinates; the caller must keep `(x, y)` inside the
    /// previously programmed window.
    pub fn set_address(&mut self, x: u16, y: u16) -> DisplayResult<I> {
        self.set_register(RAM_ADDR_SET1, x)?;
        self.set_register(RAM_ADDR_SET2, y)
    }

    /// Open a pixel-write transfer session
    ///
    /// Selects the GRAM data register and leaves chip-select asserted with
    /// register-select in the data phase. Every word streamed through
    /// [`write_many`](Self::write_many) lands at the address pointer, which
    /// auto-increments per the active entry mode.
    pub fn begin_write(&mut self) -> DisplayResult<I> {
        self.ensure_no_transfer()?;
        self.interface
            .write_register(GRAM_RW)
            .map_err(Error::Interface)?;
        self.interface.begin_data().map_err(Error::Interface)
    }

    /// Stream pixel words into the open transfer session
    pub fn write_many(&mut self, pixels: &[u16]) -> DisplayResult<I> {
        self.interface.write_words(pixels).map_err(Error::Interface)
    }

    /// Close the transfer session, releasing chip-select
    pub fn end_write(&mut self) -> DisplayResult<I> {
        self.interface.end_data().map_err(Error::Interface)
    }

    /// Write a buffer of pixels at the current address pointer, blocking
    ///
    /// One session: exactly one chip-select assert/release pair frames all
    /// `pixels.len()` data words. Returns once every word is on the wire.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyBuffer`] for a zero-length buffer, before any bus
    /// traffic.
    pub fn write_pixels(&mut self, pixels: &[u16]) -> DisplayResult<I> {
        if pixels.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        self.begin_write()?;
        self.write_many(pixels)?;
        self.end_write()
    }

    /// Write one pixel at logical landscape coordinates
    pub fn write_pixel(&mut self, x: u16, y: u16, color: u16) -> DisplayResult<I> {
        if x >= SCREEN_HEIGHT || y >= SCREEN_WIDTH {
            return Err(Error::OutOfBounds { x, y, w: 1, h: 1 });
        }
        self.set_register(RAM_ADDR_SET1, y)?;
        self.set_register(RAM_ADDR_SET2, Self::scan_bound(x))?;
        self.set_register(GRAM_RW, color)
    }

    /// Fill a rectangle with a solid colour, blocking
    ///
    /// Logical landscape coordinates: `x` and `w` along the 220-pixel scan
    /// axis, `y` and `h` along the 176-pixel gate axis.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: u16) -> DisplayResult<I> {
        self.set_draw_window(x, y, w, h)?;
        self.begin_write()?;
        let chunk = [color; FILL_CHUNK];
        let mut remaining = usize::from(w) * usize::from(h);
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK);
            self.write_many(&chunk[..n])?;
            remaining -= n;
        }
        self.end_write()
    }

    /// Fill the entire screen with a solid colour, blocking
    pub fn fill(&mut self, color: u16) -> DisplayResult<I> {
        self.fill_rect(0, 0, SCREEN_HEIGHT, SCREEN_WIDTH, color)
    }

    /// Copy a pixel buffer into a rectangle, blocking
    ///
    /// `pixels` is row-major in the logical landscape convention and must
    /// hold exactly `w * h` words.
    pub fn blit(&mut self, pixels: &[u16], x: u16, y: u16, w: u16, h: u16) -> DisplayResult<I> {
        if pixels.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        let expected = usize::from(w) * usize::from(h);
        if pixels.len() != expected {
            return Err(Error::BufferLengthMismatch {
                expected,
                provided: pixels.len(),
            });
        }
        self.set_draw_window(x, y, w, h)?;
        self.begin_write()?;
        self.write_many(pixels)?;
        self.end_write()
    }

    /// Set display output control: greyscale inversion and colour depth
    pub fn display_control(&mut self, invert: bool, mode: ColorMode) -> DisplayResult<I> {
        let mut word = 0x0013;
        word |= u16::from(invert) << 2;
        word |= (mode as u16) << 3;
        self.set_register(DISPLAY_CTRL, word)
    }

    /// Set the driver current level and sleep mode
    pub fn power_control(&mut self, drive_power: u8, sleep: bool) -> DisplayResult<I> {
        let word = (u16::from(drive_power) << 8) | u16::from(sleep);
        self.set_register(PWR_CTRL1, word)
    }

    /// Set the gate scan range in panel lines
    ///
    /// The hardware takes both bounds in eight-line units.
    pub fn set_gate_scan(&mut self, start: u16, end: u16) -> DisplayResult<I> {
        self.set_register(DRIVER_OUTPUT_CTRL, 0x0100 | (end / 8))?;
        self.set_register(GATE_SCAN_CTRL, start / 8)
    }

    /// Set the oscillator frequency code (0..=15), keeping it running
    pub fn set_drive_freq(&mut self, code: u8) -> DisplayResult<I> {
        self.set_register(OSC_CTRL, (u16::from(code & 0x0F) << 8) | 1)
    }

    /// Switch the backlight on or off
    pub fn set_backlight(&mut self, on: bool) -> DisplayResult<I> {
        self.interface.set_backlight(on).map_err(Error::Interface)
    }

    /// Stop using the display
    ///
    /// Currently a no-op: the driver holds no teardown state. Present so
    /// callers have a stable shutdown point if that changes.
    pub fn shutdown(&mut self) {}

    /// Read the device-code register
    #[cfg(feature = "read")]
    pub fn read_device_code(&mut self) -> Result<u16, Error<I>>
    where
        I: ReadInterface,
    {
        self.interface
            .get_register(DRIVER_CODE_READ)
            .map_err(Error::Interface)
    }

    /// Read the gate line currently being driven
    ///
    /// Can help with tearing mitigation.
    #[cfg(feature = "read")]
    pub fn read_driving_line(&mut self) -> Result<u16, Error<I>>
    where
        I: ReadInterface,
    {
        let status = self.interface.read_status().map_err(Error::Interface)?;
        Ok(status >> 8)
    }

    /// Access the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Logical x to physical scan-axis bound. The scan origin is fixed at
    /// the far end of the axis; this inversion is panel wiring, not policy.
    fn scan_bound(x: u16) -> u16 {
        SCREEN_HEIGHT - 1 - x
    }

    /// Program window, entry mode and address pointer for a drawing helper
    fn set_draw_window(&mut self, x: u16, y: u16, w: u16, h: u16) -> DisplayResult<I> {
        if w == 0
            || h == 0
            || u32::from(x) + u32::from(w) > u32::from(SCREEN_HEIGHT)
            || u32::from(y) + u32::from(h) > u32::from(SCREEN_WIDTH)
        {
            return Err(Error::OutOfBounds { x, y, w, h });
        }

        // The addressing math below assumes the landscape entry mode.
        self.set_register(ENTRY_MODE, DEFAULT_ENTRY_MODE)?;
        self.set_register(HORI_WIN_ADDR1, y + h - 1)?;
        self.set_register(HORI_WIN_ADDR2, y)?;
        self.set_register(VERT_WIN_ADDR1, Self::scan_bound(x))?;
        self.set_register(VERT_WIN_ADDR2, Self::scan_bound(x + w - 1))?;
        self.set_register(RAM_ADDR_SET1, y)?;
        self.set_register(RAM_ADDR_SET2, Self::scan_bound(x))
    }

    /// Write `value` to register `reg`, refusing while a transfer is armed
    fn set_register(&mut self, reg: u16, value: u16) -> DisplayResult<I> {
        self.ensure_no_transfer()?;
        self.interface
            .set_register(reg, value)
            .map_err(Error::Interface)
    }

    pub(crate) fn ensure_no_transfer(&self) -> DisplayResult<I> {
        if self.transfer_armed {
            return Err(Error::TransferInFlight);
        }
        Ok(())
    }

    pub(crate) fn mark_transfer_armed(&mut self) {
        self.transfer_armed = true;
    }

    pub(crate) fn clear_transfer_armed(&mut self) {
        self.transfer_armed = false;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::Builder;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Op {
        Reg(u16),
        Data(u16),
        BeginData,
        Words(alloc::vec::Vec<u16>),
        EndData,
        Idle,
        Reset(bool),
        Backlight(bool),
    }

    #[derive(Debug)]
    pub(crate) struct MockInterface {
        pub ops: Vec<Op>,
        #[cfg(feature = "read")]
        pub device_code: u16,
    }

    impl MockInterface {
        pub fn new() -> Self {
            Self {
                ops: Vec::new(),
                #[cfg(feature = "read")]
                device_code: crate::register::DEVICE_CODE,
            }
        }

        /// (register, value) pairs in write order
        pub fn register_writes(&self) -> Vec<(u16, u16)> {
            let mut pairs = Vec::new();
            let mut selected = None;
            for op in &self.ops {
                match op {
                    Op::Reg(reg) => selected = Some(*reg),
                    Op::Data(value) => {
                        if let Some(reg) = selected {
                            pairs.push((reg, *value));
                        }
                    }
                    _ => {}
                }
            }
            pairs
        }

        /// All words streamed through open sessions, flattened
        pub fn session_words(&self) -> Vec<u16> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Words(words) => Some(words.clone()),
                    _ => None,
                })
                .flatten()
                .collect()
        }

        pub fn count(&self, looking_for: &Op) -> usize {
            self.ops.iter().filter(|op| *op == looking_for).count()
        }
    }

    impl ControllerInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn write_register(&mut self, reg: u16) -> Result<(), Self::Error> {
            self.ops.push(Op::Reg(reg));
            Ok(())
        }
        fn write_data(&mut self, value: u16) -> Result<(), Self::Error> {
            self.ops.push(Op::Data(value));
            Ok(())
        }
        fn begin_data(&mut self) -> Result<(), Self::Error> {
            self.ops.push(Op::BeginData);
            Ok(())
        }
        fn write_words(&mut self, words: &[u16]) -> Result<(), Self::Error> {
            self.ops.push(Op::Words(words.to_vec()));
            Ok(())
        }
        fn end_data(&mut self) -> Result<(), Self::Error> {
            self.ops.push(Op::EndData);
            Ok(())
        }
        fn idle(&mut self) -> Result<(), Self::Error> {
            self.ops.push(Op::Idle);
            Ok(())
        }
        fn set_reset(&mut self, high: bool) -> Result<(), Self::Error> {
            self.ops.push(Op::Reset(high));
            Ok(())
        }
        fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
            self.ops.push(Op::Backlight(on));
            Ok(())
        }
    }

    #[cfg(feature = "read")]
    impl ReadInterface for MockInterface {
        fn read_data(&mut self) -> Result<u16, Self::Error> {
            Ok(self.device_code)
        }
        fn read_status(&mut self) -> Result<u16, Self::Error> {
            Ok(0x4200)
        }
    }

    pub(crate) struct MockDelay {
        pub delays_ms: Vec<u32>,
    }

    impl MockDelay {
        pub fn new() -> Self {
            Self {
                delays_ms: Vec::new(),
            }
        }
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.delays_ms.push(ns / 1_000_000);
        }
    }

    pub(crate) fn test_display() -> Display<MockInterface> {
        let config = Builder::new().build().unwrap();
        Display::new(MockInterface::new(), config)
    }

    /// Peek at the mock behind a display; for sibling test modules that
    /// cannot reach the private field.
    pub(crate) fn interface_of(display: &Display<MockInterface>) -> &MockInterface {
        &display.interface
    }

    #[test]
    fn test_init_delays_in_documented_order() {
        let mut display = test_display();
        let mut delay = MockDelay::new();
        display.init(&mut delay).unwrap();
        assert_eq!(delay.delays_ms, [1, 10, 50, 40, 10, 50, 50, 50]);
        assert!(delay.delays_ms.iter().sum::<u32>() >= 261);
    }

    #[test]
    fn test_init_reset_sequencing() {
        let mut display = test_display();
        let mut delay = MockDelay::new();
        display.init(&mut delay).unwrap();
        let resets: Vec<&Op> = display
            .interface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Reset(_)))
            .collect();
        // High before the pulse, low for the pulse, high to release.
        assert_eq!(resets, [&Op::Reset(true), &Op::Reset(false), &Op::Reset(true)]);
    }

    #[test]
    fn test_init_backlight_off_then_on() {
        let mut display = test_display();
        let mut delay = MockDelay::new();
        display.init(&mut delay).unwrap();
        let backlight: Vec<&Op> = display
            .interface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Backlight(_)))
            .collect();
        assert_eq!(backlight, [&Op::Backlight(false), &Op::Backlight(true)]);
    }

    #[test]
    fn test_init_zeroes_power_registers_before_programming() {
        let mut display = test_display();
        let mut delay = MockDelay::new();
        display.init(&mut delay).unwrap();
        let writes = display.interface.register_writes();
        // First five register writes clear the five power domains.
        let cleared: Vec<(u16, u16)> = writes[..5].to_vec();
        assert_eq!(
            cleared,
            [
                (PWR_CTRL1, 0),
                (PWR_CTRL2, 0),
                (PWR_CTRL3, 0),
                (PWR_CTRL4, 0),
                (PWR_CTRL5, 0)
            ]
        );
        // VCI reference is programmed before the gamma-dependent rails.
        let vci = writes.iter().position(|w| *w == (PWR_CTRL2, 0x0018));
        let gvdd = writes.iter().position(|w| *w == (PWR_CTRL4, 0x006F));
        assert!(vci.unwrap() < gvdd.unwrap());
    }

    #[test]
    fn test_init_ends_with_display_on() {
        let mut display = test_display();
        let mut delay = MockDelay::new();
        display.init(&mut delay).unwrap();
        let writes = display.interface.register_writes();
        let last_display_ctrl = writes
            .iter()
            .rev()
            .find(|(reg, _)| *reg == DISPLAY_CTRL)
            .copied();
        assert_eq!(last_display_ctrl, Some((DISPLAY_CTRL, 0x1017)));
    }

    #[cfg(feature = "read")]
    #[test]
    fn test_init_id_mismatch_reports_difference() {
        let config = Builder::new().build().unwrap();
        let mut interface = MockInterface::new();
        interface.device_code = 0x9220;
        let mut display = Display::new(interface, config);
        let mut delay = MockDelay::new();
        let result = display.init(&mut delay);
        assert!(matches!(result, Err(Error::ChipIdMismatch { diff: 5 })));
    }

    #[test]
    fn test_set_window_writes_bounds_end_before_start() {
        let mut display = test_display();
        display.set_window(10, 20, 30, 40).unwrap();
        assert_eq!(
            display.interface.register_writes(),
            [
                (HORI_WIN_ADDR1, 20),
                (HORI_WIN_ADDR2, 10),
                (VERT_WIN_ADDR1, 40),
                (VERT_WIN_ADDR2, 30),
                (RAM_ADDR_SET1, 10),
                (RAM_ADDR_SET2, 30)
            ]
        );
    }

    #[test]
    fn test_set_window_rejects_unordered_bounds_before_any_write() {
        let mut display = test_display();
        let result = display.set_window(20, 10, 0, 40);
        assert!(matches!(result, Err(Error::InvalidWindow { .. })));
        assert!(display.interface.ops.is_empty());
    }

    #[test]
    fn test_set_window_rejects_out_of_screen_bounds() {
        let mut display = test_display();
        assert!(matches!(
            display.set_window(0, 176, 0, 40),
            Err(Error::InvalidWindow { .. })
        ));
        assert!(matches!(
            display.set_window(0, 100, 0, 220),
            Err(Error::InvalidWindow { .. })
        ));
        assert!(display.interface.ops.is_empty());
    }

    #[test]
    fn test_fill_rect_applies_scan_inversion() {
        let mut display = test_display();
        display.fill_rect(10, 0, 5, 176, 0x0000).unwrap();
        let writes = display.interface.register_writes();
        assert!(writes.contains(&(VERT_WIN_ADDR1, 219 - 10)));
        assert!(writes.contains(&(VERT_WIN_ADDR2, 219 - 14)));
        assert!(writes.contains(&(RAM_ADDR_SET2, 219 - 10)));
    }

    #[test]
    fn test_write_pixels_one_session_exactly_n_words() {
        let mut display = test_display();
        let pixels = [0xA5A5u16; 7];
        display.write_pixels(&pixels).unwrap();
        assert_eq!(display.interface.count(&Op::BeginData), 1);
        assert_eq!(display.interface.count(&Op::EndData), 1);
        assert_eq!(display.interface.session_words().len(), 7);
        // The session is opened on the GRAM data register.
        assert_eq!(display.interface.ops[0], Op::Reg(GRAM_RW));
    }

    #[test]
    fn test_write_pixels_rejects_empty_buffer() {
        let mut display = test_display();
        let result = display.write_pixels(&[]);
        assert!(matches!(result, Err(Error::EmptyBuffer)));
        assert!(display.interface.ops.is_empty());
    }

    #[test]
    fn test_full_screen_fill_emits_all_words_in_one_session() {
        let mut display = test_display();
        display.fill(0x0000).unwrap();
        assert_eq!(display.interface.count(&Op::BeginData), 1);
        assert_eq!(display.interface.count(&Op::EndData), 1);
        let words = display.interface.session_words();
        assert_eq!(words.len(), 220 * 176);
        assert!(words.iter().all(|w| *w == 0x0000));
    }

    #[test]
    fn test_full_screen_fill_white() {
        let mut display = test_display();
        display.fill(0xFFFF).unwrap();
        let words = display.interface.session_words();
        assert_eq!(words.len(), 220 * 176);
        assert!(words.iter().all(|w| *w == 0xFFFF));
    }

    #[test]
    fn test_write_pixel_addresses_then_writes_gram() {
        let mut display = test_display();
        display.write_pixel(4, 9, 0x07E0).unwrap();
        assert_eq!(
            display.interface.register_writes(),
            [
                (RAM_ADDR_SET1, 9),
                (RAM_ADDR_SET2, 219 - 4),
                (GRAM_RW, 0x07E0)
            ]
        );
    }

    #[test]
    fn test_write_pixel_out_of_bounds() {
        let mut display = test_display();
        assert!(matches!(
            display.write_pixel(220, 0, 0),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            display.write_pixel(0, 176, 0),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(display.interface.ops.is_empty());
    }

    #[test]
    fn test_fill_rect_out_of_bounds_rejected_before_any_write() {
        let mut display = test_display();
        let result = display.fill_rect(200, 0, 40, 10, 0);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert!(display.interface.ops.is_empty());
    }

    #[test]
    fn test_blit_requires_exact_buffer_length() {
        let mut display = test_display();
        let pixels = [0u16; 10];
        let result = display.blit(&pixels, 0, 0, 4, 4);
        assert!(matches!(
            result,
            Err(Error::BufferLengthMismatch {
                expected: 16,
                provided: 10
            })
        ));
        assert!(display.interface.ops.is_empty());
    }

    #[test]
    fn test_blit_streams_buffer_in_one_session() {
        let mut display = test_display();
        let pixels = [0x1234u16; 16];
        display.blit(&pixels, 2, 3, 4, 4).unwrap();
        assert_eq!(display.interface.count(&Op::BeginData), 1);
        assert_eq!(display.interface.count(&Op::EndData), 1);
        assert_eq!(display.interface.session_words(), pixels.to_vec());
    }

    #[test]
    fn test_display_control_word() {
        let mut display = test_display();
        display
            .display_control(true, ColorMode::EightColor)
            .unwrap();
        assert_eq!(
            display.interface.register_writes(),
            [(DISPLAY_CTRL, 0x0013 | 0x0004 | 0x0008)]
        );
    }

    #[test]
    fn test_power_control_word() {
        let mut display = test_display();
        display.power_control(0x08, true).unwrap();
        assert_eq!(
            display.interface.register_writes(),
            [(PWR_CTRL1, 0x0801)]
        );
    }

    #[test]
    fn test_gate_scan_in_eight_line_units() {
        let mut display = test_display();
        display.set_gate_scan(16, 160).unwrap();
        assert_eq!(
            display.interface.register_writes(),
            [(DRIVER_OUTPUT_CTRL, 0x0100 | 20), (GATE_SCAN_CTRL, 2)]
        );
    }

    #[cfg(feature = "read")]
    #[test]
    fn test_read_driving_line_uses_status_high_byte() {
        let mut display = test_display();
        assert_eq!(display.read_driving_line().unwrap(), 0x42);
    }
}
