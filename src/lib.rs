//! ATS Remote Control Library
//!
//! This library provides the remote-control command layer for an
//! SI4732-based pocket receiver. An operator on a serial, USB or wireless
//! text channel can read and change receiver state, edit stored memories,
//! transfer the UI color theme, or drive the receiver through a
//! Hamlib-compatible `rigctl` wire protocol.
//!
//! # Architecture
//!
//! The library is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     TRANSPORT HOST                           │
//! │  Mode select (Off / Remote / RigCtl)  │  Session  │  Tick    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     PROTOCOL LAYER                           │
//! │  Command engine │ Memory editor │ Theme │ Status │ RigCtl    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  PRIMITIVE STREAM READERS                    │
//! │  read_char  │  read_integer  │  read_string  │  newline      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    CHANNEL / DEVICE SEAMS                    │
//! │  UART (embedded-io)  │  USB CDC (embassy-usb)  │  Radio      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Collaborators behind traits**: the receiver, memory table, theme and
//!   frame buffer are owned by the host firmware and reached via [`device`]
//! - **Cooperative blocking**: readers yield per missing byte instead of
//!   spinning, so other per-tick work keeps running
//! - **All-or-nothing memory edits**: a slot is only written after the whole
//!   request validated
//! - **Explicit error handling**: parsers return `Result`, the command engine
//!   turns errors into `Error: ...` replies

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_time;
#[cfg(feature = "embedded")]
pub use embassy_usb;

/// Byte Channels
///
/// Duplex byte channel abstraction and the UART adapter.
pub mod channel;

/// Device Collaborators
///
/// Traits through which the protocols reach receiver state.
pub mod device;

/// Error types shared by the protocol parsers
pub mod error;

/// Communication Protocols
///
/// Remote command protocol, memory editor, theme transfer,
/// status telemetry and rigctl emulation.
pub mod protocol;

/// Transport Host
///
/// Selects which protocol owns a channel and runs telemetry.
pub mod transport;

/// USB Subsystem
///
/// CDC ACM pipes between the USB tasks and the remote channel.
pub mod usb;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::channel::RemoteChannel;
    pub use crate::device::{Device, FrameBuffer, MemoryStore, Radio, ThemeStore};
    pub use crate::error::{RemoteError, RemoteResult};
    pub use crate::protocol::session::RemoteSession;
    pub use crate::transport::{RemoteTransport, TransportMode};
    pub use crate::types::*;

    // Logging
    #[cfg(feature = "embedded")]
    pub use defmt::{debug, error, info, trace, warn};
}
