//! Memory Bank Editor
//!
//! Parses `#slot,BAND,frequency,MODE\r` into a staged [`MemoryEdit`].
//! Nothing is written to the memory table until the whole request
//! validated; the caller commits the staged edit.

use heapless::String;

use super::stream::RemoteStream;
use crate::channel::RemoteChannel;
use crate::config::{BAND_NAME_MAX, MODE_NAME_MAX};
use crate::device::{MemoryStore, Radio};
use crate::error::{RemoteError, RemoteResult};
use crate::types::{Band, MemoryRecord, Mode};

/// A validated memory write, not yet applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryEdit {
    /// Slot number (1-based)
    pub slot: usize,
    /// Record to store
    pub record: MemoryRecord,
}

impl MemoryEdit {
    /// Table index (0-based)
    #[must_use]
    pub const fn index(&self) -> usize {
        self.slot - 1
    }

    /// Write the record into its slot
    pub fn commit<S: MemoryStore + ?Sized>(&self, store: &mut S) {
        store.store_memory(self.index(), self.record);
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for MemoryEdit {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "#{} {}", self.slot, self.record);
    }
}

/// Parse a memory set request following the `#` command byte
///
/// Echoes `#` first, then the request as it is consumed, and a CRLF once
/// the terminating carriage return was accepted.
///
/// # Errors
///
/// Returns the first malformed field or rejected value. The channel is
/// left as is; draining and reporting is up to the caller.
pub async fn parse_memory<C, R>(
    stream: &mut RemoteStream<'_, C>,
    radio: &R,
    total: usize,
) -> RemoteResult<MemoryEdit>
where
    C: RemoteChannel + ?Sized,
    R: Radio + ?Sized,
{
    stream.write_text("#").await;

    let slot = stream.read_integer().await;
    expect_comma(stream).await?;
    let slot = usize::try_from(slot)
        .ok()
        .filter(|slot| (1..=total).contains(slot))
        .ok_or(RemoteError::InvalidSlot)?;

    let band_name: String<BAND_NAME_MAX> = stream.read_string().await;
    expect_comma(stream).await?;
    if find_band(radio.bands(), &band_name).is_none() {
        return Err(RemoteError::NoSuchBand);
    }

    let frequency = stream.read_integer().await;
    expect_comma(stream).await?;

    let mode_name: String<MODE_NAME_MAX> = stream.read_string().await;
    if !stream.expect_newline().await {
        return Err(RemoteError::ExpectedNewline);
    }
    stream.newline().await;

    let modes = radio.modes();
    let mode_index = modes
        .iter()
        .position(|mode| mode.name() == mode_name.as_str())
        .ok_or(RemoteError::NoSuchMode)?;
    let band_index = resolve_band(radio.bands(), &band_name, frequency, modes[mode_index])?;

    Ok(MemoryEdit {
        slot,
        record: MemoryRecord::new(
            u8::try_from(band_index).map_err(|_| RemoteError::NoSuchBand)?,
            frequency,
            u8::try_from(mode_index).map_err(|_| RemoteError::NoSuchMode)?,
        ),
    })
}

/// First band table entry with this name
#[must_use]
pub fn find_band(bands: &[Band], name: &str) -> Option<usize> {
    bands.iter().position(|band| band.name == name)
}

/// Last band table entry with this name
#[must_use]
pub fn rfind_band(bands: &[Band], name: &str) -> Option<usize> {
    bands.iter().rposition(|band| band.name == name)
}

/// Pick the band entry a memory belongs to
///
/// The first entry with the name wins if the frequency fits it. A zero
/// frequency clears the slot and keeps the first entry. Otherwise the last
/// entry with the same name is tried, which covers one name shared by two
/// band definitions.
///
/// # Errors
///
/// [`RemoteError::NoSuchBand`] if no entry has the name,
/// [`RemoteError::InvalidFrequency`] if neither candidate accepts it.
pub fn resolve_band(bands: &[Band], name: &str, frequency: u32, mode: Mode) -> RemoteResult<usize> {
    let first = find_band(bands, name).ok_or(RemoteError::NoSuchBand)?;
    if frequency == 0 || bands[first].accepts(frequency, mode) {
        return Ok(first);
    }

    let last = rfind_band(bands, name).ok_or(RemoteError::NoSuchBand)?;
    if bands[last].accepts(frequency, mode) {
        Ok(last)
    } else {
        Err(RemoteError::InvalidFrequency)
    }
}

/// Print every populated slot as `#NN,BAND,frequency,MODE`
pub async fn list_memories<C, D>(stream: &mut RemoteStream<'_, C>, device: &D)
where
    C: RemoteChannel + ?Sized,
    D: Radio + MemoryStore + ?Sized,
{
    for index in 0..device.memory_count() {
        let Some(record) = device.memory(index) else {
            continue;
        };
        if record.is_cleared() {
            continue;
        }
        let band = device
            .bands()
            .get(usize::from(record.band))
            .map_or("", |band| band.name);
        let mode = device
            .modes()
            .get(usize::from(record.mode))
            .map_or("", |mode| mode.name());
        stream
            .print(format_args!("#{:02},{},{},{}\r\n", index + 1, band, record.frequency, mode))
            .await;
    }
}

async fn expect_comma<C: RemoteChannel + ?Sized>(stream: &mut RemoteStream<'_, C>) -> RemoteResult<()> {
    if stream.read_char().await == b',' {
        Ok(())
    } else {
        Err(RemoteError::ExpectedComma)
    }
}
