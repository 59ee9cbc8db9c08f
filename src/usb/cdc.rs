//! USB CDC ACM (Serial) Pipes
//!
//! The USB endpoints and the remote protocols run as separate tasks joined
//! by two byte pipes. A command waiting for its next keystroke stays
//! suspended while the receive task keeps filling the receive pipe, and
//! long output waits for the transmit task to make room.
//!
//! ```text
//! USB OUT ──receive()──▶ rx pipe ──▶ CdcChannel ──▶ RemoteTransport
//! USB IN  ◀─transmit()── tx pipe ◀── CdcChannel ◀──┘
//! ```

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::pipe::Pipe;

use crate::channel::RemoteChannel;
#[cfg(feature = "embedded")]
use crate::config::USB_CDC_PACKET_SIZE;
use crate::config::{CDC_RX_BUFFER_SIZE, CDC_TX_BUFFER_SIZE};

/// Receive and transmit pipes of one CDC ACM port
///
/// Lives in a `static` (or any place both tasks can borrow) and is shared by
/// reference between the USB tasks and the [`CdcChannel`].
pub struct CdcPipes<M: RawMutex, const RX: usize = CDC_RX_BUFFER_SIZE, const TX: usize = CDC_TX_BUFFER_SIZE> {
    rx: Pipe<M, RX>,
    tx: Pipe<M, TX>,
}

impl<M: RawMutex, const RX: usize, const TX: usize> CdcPipes<M, RX, TX> {
    /// Create empty pipes
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rx: Pipe::new(),
            tx: Pipe::new(),
        }
    }

    /// Protocol-side view of the pipes
    #[must_use]
    pub const fn channel(&self) -> CdcChannel<'_, M, RX, TX> {
        CdcChannel {
            pipes: self,
            lookahead: None,
        }
    }

    /// Queue received bytes without waiting, returns the number kept
    pub fn receive_bytes(&self, data: &[u8]) -> usize {
        if data.is_empty() {
            return 0;
        }
        self.rx.try_write(data).unwrap_or(0)
    }

    /// Move pending output into `buf` without waiting, returns the count
    pub fn take_output(&self, buf: &mut [u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }
        self.tx.try_read(buf).unwrap_or(0)
    }

    /// Bytes received but not yet read by the protocol
    #[must_use]
    pub fn pending_input(&self) -> usize {
        self.rx.len()
    }

    /// Bytes queued for the host
    #[must_use]
    pub fn pending_output(&self) -> usize {
        self.tx.len()
    }

    /// Drop everything in both directions, e.g. after the host went away
    pub fn clear(&self) {
        self.rx.clear();
        self.tx.clear();
    }

    /// Move USB packets into the receive pipe until the host goes away
    ///
    /// Waits for pipe room instead of dropping input.
    ///
    /// # Errors
    ///
    /// Returns the endpoint error once the host disconnected.
    #[cfg(feature = "embedded")]
    pub async fn receive<'d, D: embassy_usb::driver::Driver<'d>>(
        &self,
        receiver: &mut embassy_usb::class::cdc_acm::Receiver<'d, D>,
    ) -> Result<(), embassy_usb::driver::EndpointError> {
        let mut packet = [0u8; USB_CDC_PACKET_SIZE];
        loop {
            let len = receiver.read_packet(&mut packet).await?;
            let mut data = &packet[..len];
            while !data.is_empty() {
                let written = self.rx.write(data).await;
                data = &data[written..];
            }
        }
    }

    /// Send queued output as USB packets until the host goes away
    ///
    /// # Errors
    ///
    /// Returns the endpoint error once the host disconnected.
    #[cfg(feature = "embedded")]
    pub async fn transmit<'d, D: embassy_usb::driver::Driver<'d>>(
        &self,
        sender: &mut embassy_usb::class::cdc_acm::Sender<'d, D>,
    ) -> Result<(), embassy_usb::driver::EndpointError> {
        let mut packet = [0u8; USB_CDC_PACKET_SIZE];
        loop {
            let len = self.tx.read(&mut packet).await;
            sender.write_packet(&packet[..len]).await?;
            if len == USB_CDC_PACKET_SIZE && self.tx.is_empty() {
                // Terminate the transfer
                sender.write_packet(&[]).await?;
            }
        }
    }
}

impl<M: RawMutex, const RX: usize, const TX: usize> Default for CdcPipes<M, RX, TX> {
    fn default() -> Self {
        Self::new()
    }
}

/// Remote channel over [`CdcPipes`]
///
/// Holds one look-ahead byte taken from the receive pipe. Writes take what
/// fits in the transmit pipe; the stream writers wait for the rest.
pub struct CdcChannel<'p, M: RawMutex, const RX: usize = CDC_RX_BUFFER_SIZE, const TX: usize = CDC_TX_BUFFER_SIZE> {
    pipes: &'p CdcPipes<M, RX, TX>,
    lookahead: Option<u8>,
}

impl<'p, M: RawMutex, const RX: usize, const TX: usize> CdcChannel<'p, M, RX, TX> {
    /// Shared pipes behind this channel
    #[must_use]
    pub const fn pipes(&self) -> &'p CdcPipes<M, RX, TX> {
        self.pipes
    }

    fn fill(&mut self) {
        if self.lookahead.is_some() {
            return;
        }
        let mut byte = [0u8; 1];
        if let Ok(1) = self.pipes.rx.try_read(&mut byte) {
            self.lookahead = Some(byte[0]);
        }
    }
}

impl<M: RawMutex, const RX: usize, const TX: usize> RemoteChannel for CdcChannel<'_, M, RX, TX> {
    fn peek(&mut self) -> Option<u8> {
        self.fill();
        self.lookahead
    }

    fn read(&mut self) -> Option<u8> {
        self.fill();
        self.lookahead.take()
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        if bytes.is_empty() {
            return 0;
        }
        self.pipes.tx.try_write(bytes).unwrap_or(0)
    }
}
