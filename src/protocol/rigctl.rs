//! RigCtl Emulation
//!
//! A subset of the Hamlib `rigctld` text protocol, enough for logging and
//! CAT software to follow and tune the receiver:
//!
//! | Request          | Reply                     |
//! |------------------|---------------------------|
//! | `f`              | frequency in Hz           |
//! | `F <hz>`         | `RPRT 0`                  |
//! | `m`              | mode name, passband in Hz |
//! | `M <mode> <bw>`  | `RPRT 0`                  |
//! | `v`              | `VFOA`                    |
//! | `l STRENGTH`     | RSSI - 127                |
//! | `q`              | nothing                   |
//!
//! Input is never echoed. Blanks and line ends between requests are
//! skipped; any other unknown byte discards the rest of its line.

use heapless::String;

use super::stream::RemoteStream;
use crate::channel::RemoteChannel;
use crate::config::{
    AM_HZ_PER_UNIT, FM_HZ_PER_UNIT, RIGCTL_AM_WIDTH_HZ, RIGCTL_FM_WIDTH_HZ, RIGCTL_SSB_WIDTH_HZ,
    RIGCTL_STRENGTH_OFFSET, RIGCTL_WORD_MAX,
};
use crate::device::Radio;
use crate::types::Mode;

/// Success report for set requests
pub const RPRT_OK: &str = "RPRT 0";

/// Level name answered with the signal strength
pub const LEVEL_STRENGTH: &str = "STRENGTH";

/// Serve every request currently buffered on the channel
pub async fn process<C, R>(channel: &mut C, radio: &mut R)
where
    C: RemoteChannel + ?Sized,
    R: Radio + ?Sized,
{
    let mut stream = RemoteStream::silent(channel);
    while let Some(request) = stream.try_read() {
        handle_request(&mut stream, radio, request).await;
    }
}

/// Serve one request whose command byte was already consumed
pub async fn handle_request<C, R>(stream: &mut RemoteStream<'_, C>, radio: &mut R, request: u8)
where
    C: RemoteChannel + ?Sized,
    R: Radio + ?Sized,
{
    match request {
        b'f' => {
            let hz = frequency_hz(radio.mode(), radio.frequency(), radio.bfo());
            stream.print(format_args!("{hz}\n")).await;
        }
        b'F' => {
            stream.skip_blanks().await;
            let hz = stream.read_integer().await;
            let frequency = native_frequency(radio.mode(), hz);
            #[cfg(feature = "embedded")]
            defmt::debug!("rigctl: set frequency {} Hz -> {}", hz, frequency);
            radio.set_frequency(frequency);
            stream.write_line(RPRT_OK).await;
        }
        b'm' => {
            let mode = radio.mode();
            stream
                .print(format_args!("{}\n{}\n", mode.name(), passband_hz(mode)))
                .await;
        }
        b'M' => {
            let name = read_word(stream).await;
            stream.skip_blanks().await;
            // Passband is accepted but the receiver keeps its own
            let _ = stream.read_integer().await;
            if let Some(mode) = Mode::from_name(&name) {
                #[cfg(feature = "embedded")]
                defmt::debug!("rigctl: set mode {}", mode);
                radio.set_mode(mode);
            }
            stream.write_line(RPRT_OK).await;
        }
        b'v' => stream.write_line("VFOA").await,
        b'l' => {
            let level = read_word(stream).await;
            if level == LEVEL_STRENGTH {
                let strength = i16::from(radio.rssi()) - RIGCTL_STRENGTH_OFFSET;
                stream.print(format_args!("{strength}\n")).await;
            } else {
                stream.write_line("0").await;
            }
        }
        b'q' | b' ' | b'\t' | b'\r' | b'\n' => {}
        _ => {
            #[cfg(feature = "embedded")]
            defmt::debug!("rigctl: ignoring {=u8:#x}", request);
            stream.discard_line();
        }
    }
}

/// Frequency in Hz as reported by `f`
///
/// FM units are 10 kHz; other modes use kHz plus the BFO offset.
#[must_use]
pub fn frequency_hz(mode: Mode, frequency: u16, bfo: i16) -> i64 {
    match mode {
        Mode::Fm => i64::from(frequency) * i64::from(FM_HZ_PER_UNIT),
        Mode::Lsb | Mode::Usb | Mode::Am => {
            i64::from(frequency) * i64::from(AM_HZ_PER_UNIT) + i64::from(bfo)
        }
    }
}

/// Native tuning units for a frequency in Hz, truncating and saturating
#[must_use]
pub fn native_frequency(mode: Mode, hz: u32) -> u16 {
    let units = match mode {
        Mode::Fm => hz / FM_HZ_PER_UNIT,
        Mode::Lsb | Mode::Usb | Mode::Am => hz / AM_HZ_PER_UNIT,
    };
    u16::try_from(units).unwrap_or(u16::MAX)
}

/// Nominal passband reported by `m`
#[must_use]
pub const fn passband_hz(mode: Mode) -> u32 {
    match mode {
        Mode::Fm => RIGCTL_FM_WIDTH_HZ,
        Mode::Am => RIGCTL_AM_WIDTH_HZ,
        Mode::Lsb | Mode::Usb => RIGCTL_SSB_WIDTH_HZ,
    }
}

async fn read_word<C: RemoteChannel + ?Sized>(stream: &mut RemoteStream<'_, C>) -> String<RIGCTL_WORD_MAX> {
    stream.skip_blanks().await;
    let word = stream.read_word().await;
    stream.skip_word().await;
    word
}
