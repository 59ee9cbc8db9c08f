//! Communication Protocols
//!
//! Two hand-rolled text protocols share one channel abstraction:
//!
//! - the remote command protocol: single-character commands from an
//!   operator terminal, with echo, memory editing, theme transfer,
//!   screen capture and periodic status lines
//! - a Hamlib `rigctld`-style protocol for logging and CAT software
//!
//! Only one of them interprets a channel at a time; see
//! [`crate::transport`].

pub mod session;
pub mod stream;
pub mod command;
pub mod memory;
pub mod theme;
pub mod capture;
pub mod status;
pub mod rigctl;
