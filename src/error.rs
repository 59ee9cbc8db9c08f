//! Error types for the remote protocols.
//!
//! The `Display` text of each variant is what the operator sees after
//! `Error: ` on the wire.

use thiserror::Error;

/// Errors raised while parsing a multi-field remote command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// A field was not followed by a comma.
    #[error("Expected ','")]
    ExpectedComma,

    /// Slot number outside `1..=total`.
    #[error("Invalid memory slot number")]
    InvalidSlot,

    /// Band name not present in the band table.
    #[error("No such band")]
    NoSuchBand,

    /// Request not terminated by a carriage return.
    #[error("Expected newline")]
    ExpectedNewline,

    /// Mode name not present in the mode table.
    #[error("No such mode")]
    NoSuchMode,

    /// Frequency or mode does not fit any band with that name.
    #[error("Invalid frequency or mode")]
    InvalidFrequency,

    /// Theme token did not start with `x`.
    #[error("Expected 'x'")]
    ExpectedThemeToken,
}

#[cfg(feature = "embedded")]
impl defmt::Format for RemoteError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ExpectedComma => defmt::write!(f, "ExpectedComma"),
            Self::InvalidSlot => defmt::write!(f, "InvalidSlot"),
            Self::NoSuchBand => defmt::write!(f, "NoSuchBand"),
            Self::ExpectedNewline => defmt::write!(f, "ExpectedNewline"),
            Self::NoSuchMode => defmt::write!(f, "NoSuchMode"),
            Self::InvalidFrequency => defmt::write!(f, "InvalidFrequency"),
            Self::ExpectedThemeToken => defmt::write!(f, "ExpectedThemeToken"),
        }
    }
}

/// Result type alias for remote protocol operations.
pub type RemoteResult<T> = Result<T, RemoteError>;
