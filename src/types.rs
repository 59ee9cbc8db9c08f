//! Shared types used across the remote-control layer
//!
//! This module defines the domain types exchanged between the protocols
//! and the receiver: modes, band descriptors, memory records and the
//! event returned by the command engine.

use crate::config::{
    AM_ALIGNMENT_HZ, AM_HZ_PER_UNIT, EVENT_CHANGED, EVENT_CLICK, EVENT_DIRECTION_SHIFT,
    EVENT_PREFS, FM_ALIGNMENT_HZ, FM_HZ_PER_UNIT,
};

/// Demodulation mode of the receiver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Broadcast FM
    Fm,
    /// Lower Sideband
    Lsb,
    /// Upper Sideband
    Usb,
    /// Amplitude Modulation
    #[default]
    Am,
}

impl Mode {
    /// Mode table in receiver order
    pub const ALL: [Self; 4] = [Self::Fm, Self::Lsb, Self::Usb, Self::Am];

    /// Display name used on the wire
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fm => "FM",
            Self::Lsb => "LSB",
            Self::Usb => "USB",
            Self::Am => "AM",
        }
    }

    /// Parse an exact display name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.name() == name)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Mode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.name());
    }
}

/// Kind of band, which decides tuning units and permitted modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandKind {
    /// FM broadcast (10 kHz units)
    Fm,
    /// Long wave
    Lw,
    /// Medium wave
    Mw,
    /// Short wave
    Sw,
}

impl BandKind {
    /// Hz per native tuning unit
    #[must_use]
    pub const fn hz_per_unit(self) -> u32 {
        match self {
            Self::Fm => FM_HZ_PER_UNIT,
            Self::Lw | Self::Mw | Self::Sw => AM_HZ_PER_UNIT,
        }
    }
}

/// Band table entry
///
/// Limits are in native tuning units (kHz, or 10 kHz on FM bands).
/// Several entries may share one display name, e.g. a band split in two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    /// Display name
    pub name: &'static str,
    /// Band kind
    pub kind: BandKind,
    /// Lowest frequency in native units
    pub minimum_freq: u16,
    /// Highest frequency in native units
    pub maximum_freq: u16,
    /// USB calibration offset in Hz
    pub usb_cal: i16,
    /// LSB calibration offset in Hz
    pub lsb_cal: i16,
}

impl Band {
    /// Create a band without calibration offsets
    #[must_use]
    pub const fn new(name: &'static str, kind: BandKind, minimum_freq: u16, maximum_freq: u16) -> Self {
        Self {
            name,
            kind,
            minimum_freq,
            maximum_freq,
            usb_cal: 0,
            lsb_cal: 0,
        }
    }

    /// Set sideband calibration offsets
    #[must_use]
    pub const fn with_calibration(mut self, usb_cal: i16, lsb_cal: i16) -> Self {
        self.usb_cal = usb_cal;
        self.lsb_cal = lsb_cal;
        self
    }

    /// Calibration applied for the given mode (zero outside SSB)
    #[must_use]
    pub const fn calibration(&self, mode: Mode) -> i16 {
        match mode {
            Mode::Usb => self.usb_cal,
            Mode::Lsb => self.lsb_cal,
            Mode::Fm | Mode::Am => 0,
        }
    }

    /// Check whether a memory at `frequency_hz` in `mode` fits this band
    ///
    /// The frequency must be inside the band limits, FM bands take only FM
    /// and other bands never take FM, and FM/AM frequencies must sit on the
    /// 10 kHz / 1 kHz grid. A zero frequency never fits.
    #[must_use]
    pub fn accepts(&self, frequency_hz: u32, mode: Mode) -> bool {
        let unit = self.kind.hz_per_unit();
        let low = u32::from(self.minimum_freq) * unit;
        let high = u32::from(self.maximum_freq) * unit;

        if frequency_hz == 0 || frequency_hz < low || frequency_hz > high {
            return false;
        }

        if (self.kind == BandKind::Fm) != (mode == Mode::Fm) {
            return false;
        }

        match mode {
            Mode::Fm => frequency_hz % FM_ALIGNMENT_HZ == 0,
            Mode::Am => frequency_hz % AM_ALIGNMENT_HZ == 0,
            Mode::Lsb | Mode::Usb => true,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Band {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Band({=str}, {}-{})",
            self.name,
            self.minimum_freq,
            self.maximum_freq
        );
    }
}

/// Stored memory slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MemoryRecord {
    /// Index into the band table
    pub band: u8,
    /// Frequency in Hz, zero for a cleared slot
    pub frequency: u32,
    /// Index into the mode table
    pub mode: u8,
}

impl MemoryRecord {
    /// Create a record
    #[must_use]
    pub const fn new(band: u8, frequency: u32, mode: u8) -> Self {
        Self {
            band,
            frequency,
            mode,
        }
    }

    /// Check if the slot holds nothing
    #[must_use]
    pub const fn is_cleared(&self) -> bool {
        self.frequency == 0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for MemoryRecord {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Mem(band {}, {} Hz, mode {})", self.band, self.frequency, self.mode);
    }
}

/// Receiver setting that the remote can step up or down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Band selection
    Band,
    /// Demodulation mode
    Mode,
    /// Tuning step
    Step,
    /// IF bandwidth
    Bandwidth,
    /// AGC / attenuation
    Agc,
    /// Audio volume
    Volume,
    /// Display backlight
    Backlight,
    /// SSB calibration
    Calibration,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Control {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Band => defmt::write!(f, "Band"),
            Self::Mode => defmt::write!(f, "Mode"),
            Self::Step => defmt::write!(f, "Step"),
            Self::Bandwidth => defmt::write!(f, "Bandwidth"),
            Self::Agc => defmt::write!(f, "AGC"),
            Self::Volume => defmt::write!(f, "Volume"),
            Self::Backlight => defmt::write!(f, "Backlight"),
            Self::Calibration => defmt::write!(f, "Cal"),
        }
    }
}

/// Received signal metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SignalQuality {
    /// Signal strength in dBuV
    pub rssi: u8,
    /// Signal-to-noise ratio in dB
    pub snr: u8,
}

/// Result of one remote command
///
/// Mirrors the integer event the firmware main loop consumes: bit 0 marks a
/// recognized command, bit 1 an encoder click, bit 2 a preferences change,
/// and the signed encoder direction sits from bit 3 upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RemoteEvent {
    /// Simulated encoder rotation
    pub direction: i8,
    /// Simulated encoder click
    pub click: bool,
    /// Preferences should be persisted
    pub prefs: bool,
    /// Command was recognized
    pub changed: bool,
}

impl RemoteEvent {
    /// The empty event returned for unrecognized input
    pub const NONE: Self = Self {
        direction: 0,
        click: false,
        prefs: false,
        changed: false,
    };

    /// Check if a command was recognized
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        self.changed
    }

    /// Encode as the firmware event bitmask
    #[must_use]
    pub const fn bits(self) -> i32 {
        let mut bits = (self.direction as i32) << EVENT_DIRECTION_SHIFT;
        if self.changed {
            bits |= EVENT_CHANGED;
        }
        if self.click {
            bits |= EVENT_CLICK;
        }
        if self.prefs {
            bits |= EVENT_PREFS;
        }
        bits
    }

    /// Decode a firmware event bitmask
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_bits(bits: i32) -> Self {
        Self {
            direction: (bits >> EVENT_DIRECTION_SHIFT) as i8,
            click: bits & EVENT_CLICK != 0,
            prefs: bits & EVENT_PREFS != 0,
            changed: bits & EVENT_CHANGED != 0,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RemoteEvent {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Event({=i32:#x})", self.bits());
    }
}
