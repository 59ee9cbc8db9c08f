//! USB Subsystem
//!
//! Provides USB functionality for the remote channel:
//! - CDC ACM pipes carrying the remote and rigctl protocols

pub mod cdc;
