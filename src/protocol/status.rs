//! Status Telemetry
//!
//! While logging is on, one comma-separated status line goes out every
//! [`STATUS_INTERVAL_MS`]:
//!
//! ```text
//! version,frequency,bfo,cal,band,mode,step,bandwidth,agc,volume,rssi,snr,cap,voltage,seq
//! ```

use super::session::RemoteSession;
use super::stream::RemoteStream;
use crate::channel::RemoteChannel;
use crate::config::{APP_VERSION, STATUS_INTERVAL_MS};
use crate::device::Radio;

/// Number of comma-separated fields in a status line
pub const STATUS_FIELDS: usize = 15;

/// Emit a status line if logging is on and the interval elapsed
///
/// Returns `true` if a line was sent.
pub async fn tick<C, R>(
    stream: &mut RemoteStream<'_, C>,
    session: &mut RemoteSession,
    radio: &mut R,
    now_ms: u32,
) -> bool
where
    C: RemoteChannel + ?Sized,
    R: Radio + ?Sized,
{
    if !session.status_due(now_ms, STATUS_INTERVAL_MS) {
        return false;
    }
    session.mark_status(now_ms);
    print_status(stream, session, radio).await;
    true
}

/// Emit one status line for the current receiver state, CRLF included
///
/// Refreshes signal metrics and the antenna capacitor from the receiver.
/// Descriptions of any length are sent whole.
pub async fn print_status<C, R>(stream: &mut RemoteStream<'_, C>, session: &RemoteSession, radio: &mut R)
where
    C: RemoteChannel + ?Sized,
    R: Radio + ?Sized,
{
    let voltage = radio.battery_voltage();
    let signal = radio.signal_quality();
    let capacitor = radio.tuning_capacitor();

    let mode = radio.mode();
    let (band_name, calibration) = radio
        .current_band()
        .map_or(("", 0), |band| (band.name, band.calibration(mode)));

    stream
        .print(format_args!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{:.2},{}\r\n",
            APP_VERSION,
            radio.frequency(),
            radio.bfo(),
            calibration,
            band_name,
            mode.name(),
            radio.step_desc(),
            radio.bandwidth_desc(),
            radio.agc_index(),
            radio.volume(),
            signal.rssi,
            signal.snr,
            capacitor,
            voltage,
            session.seqnum,
        ))
        .await;
}
