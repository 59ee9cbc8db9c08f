//! Transport Host
//!
//! Binds one channel to the protocol selected for it. The host firmware
//! keeps one [`RemoteTransport`] per physical link (USB serial, UART, BLE)
//! and awaits [`RemoteTransport::poll`] and [`RemoteTransport::tick`] from
//! the task that owns the link. Both may suspend while waiting for input or
//! for transmit room, so the link's I/O must be served by other tasks (see
//! [`crate::usb::cdc`]).

use crate::channel::RemoteChannel;
use crate::device::{Device, Radio};
use crate::protocol::session::RemoteSession;
use crate::protocol::stream::RemoteStream;
use crate::protocol::{command, rigctl, status};
use crate::types::RemoteEvent;

/// Protocol spoken on a transport
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// Transport disabled
    #[default]
    Off,
    /// Operator command protocol with status telemetry
    Remote,
    /// Hamlib rigctl emulation
    RigCtl,
}

impl TransportMode {
    /// Check if the transport is active
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Off)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TransportMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "Off"),
            Self::Remote => defmt::write!(f, "Remote"),
            Self::RigCtl => defmt::write!(f, "RigCtl"),
        }
    }
}

/// A channel, the protocol that owns it, and its session
pub struct RemoteTransport<C> {
    channel: C,
    mode: TransportMode,
    session: RemoteSession,
}

impl<C: RemoteChannel> RemoteTransport<C> {
    /// Create a disabled transport
    #[must_use]
    pub const fn new(channel: C) -> Self {
        Self {
            channel,
            mode: TransportMode::Off,
            session: RemoteSession::new(0),
        }
    }

    /// Create a transport in the given mode
    #[must_use]
    pub const fn with_mode(channel: C, mode: TransportMode, now_ms: u32) -> Self {
        Self {
            channel,
            mode,
            session: RemoteSession::new(now_ms),
        }
    }

    /// Current protocol
    #[must_use]
    pub const fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Switch protocol
    ///
    /// Enabling or disabling the transport starts a fresh session.
    pub fn set_mode(&mut self, mode: TransportMode, now_ms: u32) {
        if mode == self.mode {
            return;
        }
        #[cfg(feature = "embedded")]
        defmt::info!("remote: transport {} -> {}", self.mode, mode);
        if mode.is_active() != self.mode.is_active() {
            self.session = RemoteSession::new(now_ms);
        }
        self.mode = mode;
    }

    /// Session state
    #[must_use]
    pub const fn session(&self) -> &RemoteSession {
        &self.session
    }

    /// Session state, mutably
    pub fn session_mut(&mut self) -> &mut RemoteSession {
        &mut self.session
    }

    /// Get a reference to the channel
    #[must_use]
    pub const fn channel(&self) -> &C {
        &self.channel
    }

    /// Get a mutable reference to the channel
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Unwrap the channel
    pub fn into_channel(self) -> C {
        self.channel
    }

    /// Handle pending input
    ///
    /// In remote mode one command byte is executed and its event returned.
    /// In rigctl mode every buffered request is served and the event is
    /// always empty, as rigctl owns its replies.
    pub async fn poll<D: Device + ?Sized>(&mut self, device: &mut D) -> RemoteEvent {
        match self.mode {
            TransportMode::Off => RemoteEvent::NONE,
            TransportMode::RigCtl => {
                rigctl::process(&mut self.channel, device).await;
                RemoteEvent::NONE
            }
            TransportMode::Remote => match self.channel.read() {
                Some(key) => command::do_command(&mut self.channel, &mut self.session, device, key).await,
                None => RemoteEvent::NONE,
            },
        }
    }

    /// Run periodic work, emitting a status line when due
    ///
    /// Returns `true` if a status line was sent.
    pub async fn tick<R: Radio + ?Sized>(&mut self, radio: &mut R, now_ms: u32) -> bool {
        if !self.mode.is_active() {
            return false;
        }
        let mut stream = RemoteStream::new(&mut self.channel);
        status::tick(&mut stream, &mut self.session, radio, now_ms).await
    }

    /// [`Self::tick`] against the system uptime clock
    #[cfg(feature = "embedded")]
    #[allow(clippy::cast_possible_truncation)]
    pub async fn tick_now<R: Radio + ?Sized>(&mut self, radio: &mut R) -> bool {
        let now_ms = embassy_time::Instant::now().as_millis() as u32;
        self.tick(radio, now_ms).await
    }
}
