//! Primitive Stream Readers
//!
//! The only code allowed to wait on the channel. Every higher-level parser
//! is composed from these readers and writers. Waiting yields to the
//! executor once per missing byte (or once per full transmit buffer), so a
//! slow typist or a slow host does not starve other tasks, while bytes are
//! still consumed and produced strictly in order.

use core::fmt;

use embassy_futures::yield_now;
use heapless::{String, Vec};

use crate::channel::RemoteChannel;
use crate::config::PRINT_CHUNK_LEN;

/// Reader/writer over a remote channel
///
/// With echo enabled (the operator protocol) every consumed byte is sent
/// back, so a terminal sees its own keystrokes. The rigctl protocol reads
/// silently.
pub struct RemoteStream<'a, C: ?Sized> {
    channel: &'a mut C,
    echo: bool,
}

impl<'a, C: RemoteChannel + ?Sized> RemoteStream<'a, C> {
    /// Create an echoing stream
    pub fn new(channel: &'a mut C) -> Self {
        Self {
            channel,
            echo: true,
        }
    }

    /// Create a stream that does not echo consumed bytes
    pub fn silent(channel: &'a mut C) -> Self {
        Self {
            channel,
            echo: false,
        }
    }

    /// Check if consumed bytes are echoed
    #[must_use]
    pub const fn echoes(&self) -> bool {
        self.echo
    }

    /// Look at the next byte without consuming or waiting
    pub fn peek(&mut self) -> Option<u8> {
        self.channel.peek()
    }

    /// Check if a byte is buffered
    pub fn available(&mut self) -> bool {
        self.channel.available()
    }

    /// Consume the next byte if one is buffered, without echo
    pub fn try_read(&mut self) -> Option<u8> {
        self.channel.read()
    }

    /// Wait for a byte and return it without consuming it
    pub async fn wait_peek(&mut self) -> u8 {
        loop {
            if let Some(byte) = self.channel.peek() {
                return byte;
            }
            yield_now().await;
        }
    }

    /// Wait for a byte, consume it and echo it
    pub async fn read_char(&mut self) -> u8 {
        loop {
            if let Some(byte) = self.channel.read() {
                if self.echo {
                    self.send(&[byte]).await;
                }
                return byte;
            }
            yield_now().await;
        }
    }

    /// Read a run of decimal digits
    ///
    /// Stops at the first non-digit, which is left unconsumed. The
    /// accumulator wraps on overflow.
    pub async fn read_integer(&mut self) -> u32 {
        let mut result: u32 = 0;
        loop {
            let ch = self.wait_peek().await;
            if !ch.is_ascii_digit() {
                return result;
            }
            self.read_char().await;
            result = result.wrapping_mul(10).wrapping_add(u32::from(ch - b'0'));
        }
    }

    /// Read up to `N` characters, stopping before `,` or any control byte
    ///
    /// The separator is not consumed. Non-ASCII bytes also end the string.
    pub async fn read_string<const N: usize>(&mut self) -> String<N> {
        self.read_until(|ch| ch == b',' || ch < b' ').await
    }

    /// Read up to `N` characters of a blank-separated word
    pub async fn read_word<const N: usize>(&mut self) -> String<N> {
        self.read_until(is_word_separator).await
    }

    async fn read_until<const N: usize>(&mut self, is_separator: impl Fn(u8) -> bool) -> String<N> {
        let mut text = String::new();
        while text.len() < N {
            let ch = self.wait_peek().await;
            if is_separator(ch) || !ch.is_ascii() {
                break;
            }
            self.read_char().await;
            if text.push(char::from(ch)).is_err() {
                break;
            }
        }
        text
    }

    /// Consume the rest of a blank-separated word
    pub async fn skip_word(&mut self) {
        loop {
            let ch = self.wait_peek().await;
            if is_word_separator(ch) || !ch.is_ascii() {
                return;
            }
            self.read_char().await;
        }
    }

    /// Consume spaces and tabs
    pub async fn skip_blanks(&mut self) {
        loop {
            let ch = self.wait_peek().await;
            if ch != b' ' && ch != b'\t' {
                return;
            }
            self.read_char().await;
        }
    }

    /// Consume a carriage return if it is next
    ///
    /// Waits for a byte but consumes (without echo) only `\r`.
    pub async fn expect_newline(&mut self) -> bool {
        if self.wait_peek().await == b'\r' {
            self.channel.read();
            true
        } else {
            false
        }
    }

    /// Consume everything already buffered, echoing it
    pub async fn drain(&mut self) {
        while let Some(byte) = self.channel.read() {
            if self.echo {
                self.send(&[byte]).await;
            }
        }
    }

    /// Discard buffered input up to and including the next `\n`
    pub fn discard_line(&mut self) {
        while let Some(byte) = self.channel.read() {
            if byte == b'\n' {
                return;
            }
        }
    }

    /// Queue bytes, waiting for room as needed
    pub async fn send(&mut self, mut bytes: &[u8]) {
        while !bytes.is_empty() {
            let taken = self.channel.write(bytes);
            bytes = &bytes[taken.min(bytes.len())..];
            if !bytes.is_empty() {
                yield_now().await;
            }
        }
    }

    /// Write a string
    pub async fn write_text(&mut self, text: &str) {
        self.send(text.as_bytes()).await;
    }

    /// Write a line followed by CRLF
    pub async fn write_line(&mut self, text: &str) {
        self.write_text(text).await;
        self.newline().await;
    }

    /// Write CRLF
    pub async fn newline(&mut self) {
        self.send(b"\r\n").await;
    }

    /// Write formatted text of any length
    ///
    /// The arguments are rendered in chunks of [`PRINT_CHUNK_LEN`] bytes,
    /// re-rendering and skipping what was already sent. Arguments must
    /// render the same text every time.
    pub async fn print(&mut self, args: fmt::Arguments<'_>) {
        let mut sent = 0;
        loop {
            let mut chunk = Chunk {
                skip: sent,
                bytes: Vec::new(),
                more: false,
            };
            // An error only means the chunk filled up
            let _ = fmt::write(&mut chunk, args);
            self.send(&chunk.bytes).await;
            if !chunk.more {
                return;
            }
            sent += chunk.bytes.len();
        }
    }
}

/// One window of rendered output
struct Chunk {
    skip: usize,
    bytes: Vec<u8, PRINT_CHUNK_LEN>,
    more: bool,
}

impl fmt::Write for Chunk {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut text = s.as_bytes();
        let skipped = self.skip.min(text.len());
        self.skip -= skipped;
        text = &text[skipped..];

        let room = PRINT_CHUNK_LEN - self.bytes.len();
        let take = room.min(text.len());
        // Cannot fail: length checked above
        let _ = self.bytes.extend_from_slice(&text[..take]);
        if take < text.len() {
            self.more = true;
            return Err(fmt::Error);
        }
        Ok(())
    }
}

const fn is_word_separator(ch: u8) -> bool {
    ch == b',' || ch <= b' '
}
