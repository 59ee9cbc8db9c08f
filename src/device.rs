//! Device Collaborators
//!
//! The remote protocols never own receiver state. Everything they read or
//! change is reached through these traits, implemented by the host
//! firmware. Tables are borrowed read-only and looked up by position, so
//! duplicate band names keep their table order.

use crate::types::{Band, Control, MemoryRecord, Mode, SignalQuality};

/// Receiver state and mutators
pub trait Radio {
    /// Step a setting by a signed delta
    fn adjust(&mut self, control: Control, delta: i8);

    /// Force sleep on or off
    fn set_sleep(&mut self, on: bool);

    /// Band table
    fn bands(&self) -> &[Band];

    /// Mode table
    fn modes(&self) -> &[Mode] {
        &Mode::ALL
    }

    /// Index of the current band
    fn band_index(&self) -> usize;

    /// Current band, if the index is valid
    fn current_band(&self) -> Option<&Band> {
        self.bands().get(self.band_index())
    }

    /// Current mode
    fn mode(&self) -> Mode;

    /// Switch mode without reselecting the band
    fn set_mode(&mut self, mode: Mode);

    /// Current frequency in native units
    fn frequency(&self) -> u16;

    /// Tune to a frequency in native units
    fn set_frequency(&mut self, frequency: u16);

    /// Fine-tune (BFO) offset in Hz
    fn bfo(&self) -> i16;

    /// Current tuning step description
    fn step_desc(&self) -> &str;

    /// Current bandwidth description
    fn bandwidth_desc(&self) -> &str;

    /// AGC / attenuation index
    fn agc_index(&self) -> u8;

    /// Volume level
    fn volume(&self) -> u8;

    /// Last measured signal strength in dBuV
    fn rssi(&self) -> u8;

    /// Query fresh signal metrics from the receiver chip
    fn signal_quality(&mut self) -> SignalQuality;

    /// Antenna tuning capacitor, read fresh from the receiver chip
    fn tuning_capacitor(&mut self) -> u16;

    /// Battery voltage in volts
    fn battery_voltage(&mut self) -> f32;
}

/// Fixed-size memory table
pub trait MemoryStore {
    /// Number of slots
    fn memory_count(&self) -> usize;

    /// Read a slot (0-based)
    fn memory(&self, index: usize) -> Option<MemoryRecord>;

    /// Overwrite a slot (0-based)
    fn store_memory(&mut self, index: usize, record: MemoryRecord);
}

/// Active color theme
pub trait ThemeStore {
    /// Theme display name
    fn theme_name(&self) -> &str;

    /// Editable color fields, in theme order
    fn theme_colors(&self) -> &[u16];

    /// Editable color fields, mutably
    fn theme_colors_mut(&mut self) -> &mut [u16];

    /// Check if the theme editor is enabled
    fn theme_editor(&self) -> bool;

    /// Enable or disable the theme editor
    fn set_theme_editor(&mut self, enabled: bool);
}

/// Screen contents
pub trait FrameBuffer {
    /// Width and height in pixels
    fn screen_size(&self) -> (u16, u16);

    /// RGB565 pixel at `(x, y)`, origin top-left
    fn read_pixel(&self, x: u16, y: u16) -> u16;

    /// Redraw the whole screen
    fn redraw(&mut self);
}

/// Everything the remote command protocol touches
pub trait Device: Radio + MemoryStore + ThemeStore + FrameBuffer {}

impl<T: Radio + MemoryStore + ThemeStore + FrameBuffer> Device for T {}
