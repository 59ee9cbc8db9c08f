//! Byte Channels
//!
//! A remote channel is a duplex byte stream with one byte of non-destructive
//! look-ahead. Reads never block here: `None` means nothing is buffered yet.
//! Writes never block either: a channel takes what fits and reports how
//! much that was. Blocking behavior lives in [`crate::protocol::stream`].

use embedded_io::{Read, ReadReady, Write};

/// Duplex byte channel carrying one remote protocol
pub trait RemoteChannel {
    /// Look at the next byte without consuming it
    fn peek(&mut self) -> Option<u8>;

    /// Consume the next byte
    fn read(&mut self) -> Option<u8>;

    /// Queue as many bytes as fit, returning how many were taken
    ///
    /// Returning zero means "full for now"; the caller retries later.
    fn write(&mut self, bytes: &[u8]) -> usize;

    /// Check if a byte is buffered
    fn available(&mut self) -> bool {
        self.peek().is_some()
    }
}

impl<C: RemoteChannel + ?Sized> RemoteChannel for &mut C {
    fn peek(&mut self) -> Option<u8> {
        (**self).peek()
    }

    fn read(&mut self) -> Option<u8> {
        (**self).read()
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        (**self).write(bytes)
    }
}

/// Adapter turning an `embedded-io` serial port into a [`RemoteChannel`]
///
/// Holds one look-ahead byte. I/O errors read as "nothing buffered" on the
/// receive side and drop the output on the transmit side. Writes block
/// until the port took every byte.
pub struct PeekableIo<T> {
    io: T,
    lookahead: Option<u8>,
}

impl<T> PeekableIo<T> {
    /// Wrap a serial port
    #[must_use]
    pub const fn new(io: T) -> Self {
        Self {
            io,
            lookahead: None,
        }
    }

    /// Get a reference to the wrapped port
    #[must_use]
    pub const fn get_ref(&self) -> &T {
        &self.io
    }

    /// Get a mutable reference to the wrapped port
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.io
    }

    /// Unwrap the port, discarding any look-ahead byte
    pub fn into_inner(self) -> T {
        self.io
    }
}

impl<T: Read + ReadReady> PeekableIo<T> {
    fn fill(&mut self) {
        if self.lookahead.is_some() {
            return;
        }
        if !matches!(self.io.read_ready(), Ok(true)) {
            return;
        }
        let mut byte = [0u8; 1];
        if let Ok(1) = self.io.read(&mut byte) {
            self.lookahead = Some(byte[0]);
        }
    }
}

impl<T: Read + ReadReady + Write> RemoteChannel for PeekableIo<T> {
    fn peek(&mut self) -> Option<u8> {
        self.fill();
        self.lookahead
    }

    fn read(&mut self) -> Option<u8> {
        self.fill();
        self.lookahead.take()
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        if self.io.write_all(bytes).is_err() {
            #[cfg(feature = "embedded")]
            defmt::warn!("remote: dropped {} output bytes", bytes.len());
        }
        bytes.len()
    }
}
