//! Asynchronous transfer engine
//!
//! This module provides the channel-offloaded pixel-write path: a
//! [`TransferChannel`] seam for the platform's data mover, a process-wide
//! completion-callback slot bound to one of two [`IrqLine`]s, and the
//! [`Display`] operations that arm a transfer and finalize it from the
//! completion interrupt.
//!
//! ## Flow
//!
//! 1. [`configure_channel`] binds the channel once: 16-bit elements, paced
//!    by the transport's data-request signal so the channel never overruns
//!    the wire.
//! 2. [`register_callback`] binds the single completion slot to a
//!    notification line and enables it.
//! 3. [`Display::dma_write`] opens the transfer session, arms the channel
//!    and returns immediately; the caller proceeds while pixels stream in
//!    the background.
//! 4. The user's interrupt handler calls [`Display::service_interrupt`],
//!    which closes the session, clears the pending flag and invokes the
//!    callback — chip-select is released strictly before the callback runs.
//!
//! The callback executes in interrupt context: keep it short. A slow
//! callback delays all other interrupt processing on that line. Once armed,
//! a transfer runs to completion; there is no abort primitive.

use core::cell::Cell;

use critical_section::Mutex;
use log::trace;

use crate::display::Display;
use crate::error::Error;
use crate::interface::ControllerInterface;

/// Completion callback invoked from the interrupt handler
///
/// A plain function pointer: the slot is process-wide state, shared with
/// interrupt context, and captures would need a `'static` home of their own.
pub type CompletionCallback = fn();

/// Notification line signalling offload-channel completion
///
/// The platform offers two; exactly one is bound at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IrqLine {
    /// First completion interrupt line
    Line0,
    /// Second completion interrupt line
    Line1,
}

/// Platform seam for the offload data mover
///
/// Implementations wrap one hardware channel that streams 16-bit words into
/// the transport's data register, advancing only on the transport's
/// data-request signal. Configuration and arming are infallible register
/// programming on every platform this models, so the methods do not return
/// `Result`.
pub trait TransferChannel {
    /// Bind the channel: 16-bit element size, transport-paced
    fn configure(&mut self);

    /// Arm the channel to stream `words` and start it, returning at once
    ///
    /// The `'static` bound keeps the buffer alive for the whole background
    /// transfer; the hardware reads it long after this call returns.
    fn start(&mut self, words: &'static [u16]);

    /// Enable or disable completion interrupts on `line`
    fn set_line_enabled(&mut self, line: IrqLine, enabled: bool);

    /// Clear the channel's pending completion flag on `line`
    fn clear_pending(&mut self, line: IrqLine);
}

/// The single completion slot: one callback for the whole driver, not one
/// per transfer. Re-registration rebinds it.
static COMPLETION: Mutex<Cell<Option<(IrqLine, CompletionCallback)>>> =
    Mutex::new(Cell::new(None));

/// Bind the offload channel to the transport
///
/// Call once after [`Display::init`](crate::display::Display::init), before
/// the first [`Display::dma_write`].
pub fn configure_channel<C: TransferChannel>(channel: &mut C) {
    channel.configure();
    trace!("ili9225: offload channel configured");
}

/// Register the completion callback and enable its notification line
///
/// There is exactly one slot for the whole driver: calling this again
/// rebinds it. Two transfers completed back-to-back therefore share one
/// notification path; the in-flight guard on
/// [`Display::dma_write`](crate::display::Display::dma_write) keeps that
/// situation from arising.
pub fn register_callback<C: TransferChannel>(
    channel: &mut C,
    line: IrqLine,
    callback: CompletionCallback,
) {
    critical_section::with(|cs| COMPLETION.borrow(cs).set(Some((line, callback))));
    channel.set_line_enabled(line, true);
}

#[cfg(test)]
pub(crate) fn clear_callback() {
    critical_section::with(|cs| COMPLETION.borrow(cs).set(None));
}

impl<I> Display<I>
where
    I: ControllerInterface,
{
    /// Stream a pixel buffer through the offload channel, non-blocking
    ///
    /// Opens the transfer session exactly as the synchronous path does, arms
    /// the channel and returns immediately. Completion is observed solely
    /// through the registered callback; there is no polling or blocking
    /// wait.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyBuffer`] for a zero-length buffer;
    /// [`Error::TransferInFlight`] if the previous transfer's completion
    /// interrupt has not been serviced yet — the session is a single
    /// physical resource.
    pub fn dma_write<C: TransferChannel>(
        &mut self,
        channel: &mut C,
        pixels: &'static [u16],
    ) -> Result<(), Error<I>> {
        if pixels.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        self.ensure_no_transfer()?;
        self.begin_write()?;
        // Mark before starting: the completion interrupt may preempt as
        // soon as the channel runs.
        self.mark_transfer_armed();
        channel.start(pixels);
        trace!("ili9225: transfer of {} words armed", pixels.len());
        Ok(())
    }

    /// Finalize a completed transfer; call from the interrupt handler
    ///
    /// Closes the session (releasing chip-select strictly after the last
    /// streamed word), clears the line's pending flag and invokes the
    /// registered callback, in that order. Runs in interrupt context: it
    /// stays short and must not start another transfer.
    pub fn service_interrupt<C: TransferChannel>(
        &mut self,
        channel: &mut C,
    ) -> Result<(), Error<I>> {
        let closed = self.end_write();
        self.clear_transfer_armed();
        closed?;

        if let Some((line, callback)) = critical_section::with(|cs| COMPLETION.borrow(cs).get()) {
            channel.clear_pending(line);
            callback();
        }
        Ok(())
    }
}
