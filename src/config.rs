//! System configuration and protocol constants
//!
//! This module defines compile-time constants for the remote-control layer.
//! Wire-format limits, timing and scale factors are centralized here.

/// Application version reported as the first status field
pub const APP_VERSION: u16 = 233;

/// Minimum time between two status lines, in milliseconds
pub const STATUS_INTERVAL_MS: u32 = 500;

/// Longest band name accepted by the memory editor
pub const BAND_NAME_MAX: usize = 7;

/// Longest mode name accepted by the memory editor
pub const MODE_NAME_MAX: usize = 3;

/// Longest word (mode or level name) accepted by the rigctl parser
pub const RIGCTL_WORD_MAX: usize = 16;

/// Formatted output is rendered and queued in chunks of this size
pub const PRINT_CHUNK_LEN: usize = 64;

/// Event bit: a command was recognized
pub const EVENT_CHANGED: i32 = 1 << 0;

/// Event bit: simulated encoder click
pub const EVENT_CLICK: i32 = 1 << 1;

/// Event bit: preferences changed and should be persisted
pub const EVENT_PREFS: i32 = 1 << 2;

/// Bit position of the signed encoder direction
pub const EVENT_DIRECTION_SHIFT: u32 = 3;

/// Hz per native tuning unit on FM bands
pub const FM_HZ_PER_UNIT: u32 = 10_000;

/// Hz per native tuning unit on AM/SSB bands
pub const AM_HZ_PER_UNIT: u32 = 1_000;

/// Alignment required of FM memory frequencies (Hz)
pub const FM_ALIGNMENT_HZ: u32 = 10_000;

/// Alignment required of AM memory frequencies (Hz)
pub const AM_ALIGNMENT_HZ: u32 = 1_000;

/// Offset subtracted from RSSI to report the rigctl `STRENGTH` level
pub const RIGCTL_STRENGTH_OFFSET: i16 = 127;

/// Nominal FM passband reported by rigctl `m`
pub const RIGCTL_FM_WIDTH_HZ: u32 = 100_000;

/// Nominal AM passband reported by rigctl `m`
pub const RIGCTL_AM_WIDTH_HZ: u32 = 6_000;

/// Nominal SSB passband reported by rigctl `m`
pub const RIGCTL_SSB_WIDTH_HZ: u32 = 2_700;

/// USB CDC ACM packet size
pub const USB_CDC_PACKET_SIZE: usize = 64;

/// Receive pipe size for CDC channels
pub const CDC_RX_BUFFER_SIZE: usize = 256;

/// Transmit pipe size for CDC channels
pub const CDC_TX_BUFFER_SIZE: usize = 1024;

/// Screen capture bitmap layout
pub mod bitmap {
    //! Constants of the 16-bit bitfield BMP emitted by the capture command

    /// BMP file header size
    pub const FILE_HEADER_LEN: u32 = 14;

    /// BITMAPINFOHEADER size
    pub const INFO_HEADER_LEN: u32 = 40;

    /// Three 32-bit color masks following the info header
    pub const MASKS_LEN: u32 = 12;

    /// Offset of the pixel array
    pub const PIXEL_OFFSET: u32 = FILE_HEADER_LEN + INFO_HEADER_LEN + MASKS_LEN;

    /// Bits per pixel
    pub const BITS_PER_PIXEL: u16 = 16;

    /// `BI_BITFIELDS` compression
    pub const COMPRESSION_BITFIELDS: u32 = 3;

    /// RGB565 red mask
    pub const RED_MASK: u32 = 0xF800;

    /// RGB565 green mask
    pub const GREEN_MASK: u32 = 0x07E0;

    /// RGB565 blue mask
    pub const BLUE_MASK: u32 = 0x001F;
}
