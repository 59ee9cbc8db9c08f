//! Shared test doubles: an in-memory channel and a mock receiver.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;

use ats_remote::channel::RemoteChannel;
use ats_remote::device::{FrameBuffer, MemoryStore, Radio, ThemeStore};
use ats_remote::types::{Band, BandKind, Control, MemoryRecord, Mode, SignalQuality};

/// Run a protocol future to completion
pub fn run<F: Future>(future: F) -> F::Output {
    embassy_futures::block_on(future)
}

/// Channel with scripted input and captured output
#[derive(Default)]
pub struct MockChannel {
    pub input: VecDeque<u8>,
    pub output: Vec<u8>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(bytes: &[u8]) -> Self {
        let mut channel = Self::new();
        channel.push(bytes);
        channel
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn take_output(&mut self) -> String {
        let text = self.output_str();
        self.output.clear();
        text
    }

    pub fn remaining(&self) -> Vec<u8> {
        self.input.iter().copied().collect()
    }
}

impl RemoteChannel for MockChannel {
    fn peek(&mut self) -> Option<u8> {
        self.input.front().copied()
    }

    fn read(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        self.output.extend_from_slice(bytes);
        bytes.len()
    }
}

/// Channel that reports "nothing buffered" a number of times before
/// delivering each byte, like a slow typist
pub struct SlowChannel {
    pub inner: MockChannel,
    pub delay: usize,
    pub misses: usize,
    countdown: usize,
}

impl SlowChannel {
    pub fn new(bytes: &[u8], delay: usize) -> Self {
        Self {
            inner: MockChannel::with_input(bytes),
            delay,
            misses: 0,
            countdown: delay,
        }
    }

    fn ready(&mut self) -> bool {
        if self.countdown == 0 {
            true
        } else {
            self.countdown -= 1;
            self.misses += 1;
            false
        }
    }
}

impl RemoteChannel for SlowChannel {
    fn peek(&mut self) -> Option<u8> {
        if self.ready() {
            self.inner.peek()
        } else {
            None
        }
    }

    fn read(&mut self) -> Option<u8> {
        if !self.ready() {
            return None;
        }
        let byte = self.inner.read();
        self.countdown = self.delay;
        byte
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        self.inner.write(bytes)
    }
}

/// Channel whose transmit side alternates between full and taking at
/// most `width` bytes, like a busy USB endpoint
pub struct NarrowChannel {
    pub inner: MockChannel,
    pub width: usize,
    pub stalls: usize,
    full: bool,
}

impl NarrowChannel {
    pub fn new(width: usize) -> Self {
        Self {
            inner: MockChannel::new(),
            width,
            stalls: 0,
            full: true,
        }
    }
}

impl RemoteChannel for NarrowChannel {
    fn peek(&mut self) -> Option<u8> {
        self.inner.peek()
    }

    fn read(&mut self) -> Option<u8> {
        self.inner.read()
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        self.full = !self.full;
        if !self.full {
            self.stalls += 1;
            return 0;
        }
        let taken = bytes.len().min(self.width);
        self.inner.write(&bytes[..taken])
    }
}

pub const BAND_FM: usize = 0;
pub const BAND_MW: usize = 1;
pub const BAND_20M: usize = 2;
pub const BAND_15M_HAM: usize = 3;
pub const BAND_ALL: usize = 4;
pub const BAND_15M_BROADCAST: usize = 5;

pub const MODE_FM: u8 = 0;
pub const MODE_LSB: u8 = 1;
pub const MODE_USB: u8 = 2;
pub const MODE_AM: u8 = 3;

pub const MEMORY_SLOTS: usize = 8;

/// Band table with one name ("15M") used by two entries
pub fn band_table() -> Vec<Band> {
    vec![
        Band::new("FM", BandKind::Fm, 6400, 10800),
        Band::new("MW", BandKind::Mw, 520, 1710),
        Band::new("20M", BandKind::Sw, 14000, 14350).with_calibration(10, -20),
        Band::new("15M", BandKind::Sw, 21000, 21450),
        Band::new("ALL", BandKind::Sw, 150, 30000),
        Band::new("15M", BandKind::Sw, 18900, 19020),
    ]
}

/// Mock receiver recording every call the protocols make
pub struct MockRadio {
    pub bands: Vec<Band>,
    pub band_index: usize,
    pub mode: Mode,
    pub frequency: u16,
    pub bfo: i16,
    pub step: &'static str,
    pub bandwidth: &'static str,
    pub agc: u8,
    pub volume: u8,
    pub rssi: u8,
    pub snr: u8,
    pub capacitor: u16,
    pub capacitor_reads: usize,
    pub signal_reads: usize,
    pub voltage: f32,
    pub adjustments: Vec<(Control, i8)>,
    pub sleep: Option<bool>,
    pub memories: Vec<MemoryRecord>,
    pub theme_name: &'static str,
    pub theme: Vec<u16>,
    pub theme_editor: bool,
    pub redraws: usize,
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<u16>,
}

impl MockRadio {
    pub fn new() -> Self {
        Self {
            bands: band_table(),
            band_index: BAND_20M,
            mode: Mode::Usb,
            frequency: 14200,
            bfo: 500,
            step: "1k",
            bandwidth: "3.0k",
            agc: 0,
            volume: 35,
            rssi: 40,
            snr: 12,
            capacitor: 17,
            capacitor_reads: 0,
            signal_reads: 0,
            voltage: 3.7,
            adjustments: Vec::new(),
            sleep: None,
            memories: vec![MemoryRecord::default(); MEMORY_SLOTS],
            theme_name: "Test",
            theme: vec![0; 4],
            theme_editor: false,
            redraws: 0,
            width: 2,
            height: 2,
            // Row 0: red, green; row 1: blue, white
            pixels: vec![0xF800, 0x07E0, 0x001F, 0xFFFF],
        }
    }
}

impl Default for MockRadio {
    fn default() -> Self {
        Self::new()
    }
}

impl Radio for MockRadio {
    fn adjust(&mut self, control: Control, delta: i8) {
        self.adjustments.push((control, delta));
    }

    fn set_sleep(&mut self, on: bool) {
        self.sleep = Some(on);
    }

    fn bands(&self) -> &[Band] {
        &self.bands
    }

    fn band_index(&self) -> usize {
        self.band_index
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    fn frequency(&self) -> u16 {
        self.frequency
    }

    fn set_frequency(&mut self, frequency: u16) {
        self.frequency = frequency;
    }

    fn bfo(&self) -> i16 {
        self.bfo
    }

    fn step_desc(&self) -> &str {
        self.step
    }

    fn bandwidth_desc(&self) -> &str {
        self.bandwidth
    }

    fn agc_index(&self) -> u8 {
        self.agc
    }

    fn volume(&self) -> u8 {
        self.volume
    }

    fn rssi(&self) -> u8 {
        self.rssi
    }

    fn signal_quality(&mut self) -> SignalQuality {
        self.signal_reads += 1;
        SignalQuality {
            rssi: self.rssi,
            snr: self.snr,
        }
    }

    fn tuning_capacitor(&mut self) -> u16 {
        self.capacitor_reads += 1;
        self.capacitor
    }

    fn battery_voltage(&mut self) -> f32 {
        self.voltage
    }
}

impl MemoryStore for MockRadio {
    fn memory_count(&self) -> usize {
        self.memories.len()
    }

    fn memory(&self, index: usize) -> Option<MemoryRecord> {
        self.memories.get(index).copied()
    }

    fn store_memory(&mut self, index: usize, record: MemoryRecord) {
        self.memories[index] = record;
    }
}

impl ThemeStore for MockRadio {
    fn theme_name(&self) -> &str {
        self.theme_name
    }

    fn theme_colors(&self) -> &[u16] {
        &self.theme
    }

    fn theme_colors_mut(&mut self) -> &mut [u16] {
        &mut self.theme
    }

    fn theme_editor(&self) -> bool {
        self.theme_editor
    }

    fn set_theme_editor(&mut self, enabled: bool) {
        self.theme_editor = enabled;
    }
}

impl FrameBuffer for MockRadio {
    fn screen_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn read_pixel(&self, x: u16, y: u16) -> u16 {
        self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }
}
