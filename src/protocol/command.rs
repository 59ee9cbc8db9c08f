//! Remote Command Engine
//!
//! Single-character commands typed by an operator:
//!
//! | Key     | Action                          | Persist |
//! |---------|---------------------------------|---------|
//! | `R` `r` | encoder +1 / -1                 | yes     |
//! | `e`     | encoder click                   | no      |
//! | `B` `b` | band up / down                  | yes     |
//! | `M` `m` | mode up / down                  | yes     |
//! | `S` `s` | step up / down                  | yes     |
//! | `W` `w` | bandwidth up / down             | yes     |
//! | `A` `a` | AGC / attenuation up / down     | yes     |
//! | `V` `v` | volume up / down                | yes     |
//! | `L` `l` | backlight up / down             | yes     |
//! | `O` `o` | sleep on / off                  | no      |
//! | `I` `i` | calibration up / down           | yes     |
//! | `C`     | stop logging, capture screen    | no      |
//! | `t`     | toggle status logging           | no      |
//! | `$`     | list memories                   | no      |
//! | `#`     | set memory                      | on success |
//! | `T`     | toggle theme editor             | no      |
//! | `^`     | upload theme (editor enabled)   | no      |
//! | `@`     | download theme (editor enabled) | no      |
//!
//! Anything else is ignored silently and yields [`RemoteEvent::NONE`].

use super::capture::capture_screen;
use super::memory::{list_memories, parse_memory};
use super::session::RemoteSession;
use super::stream::RemoteStream;
use super::theme::{read_theme, write_theme};
use crate::channel::RemoteChannel;
use crate::device::Device;
use crate::error::RemoteError;
use crate::types::{Control, RemoteEvent};

/// Setting stepped by a key, with its direction
#[must_use]
pub const fn control_for(key: u8) -> Option<(Control, i8)> {
    let control = match key {
        b'B' | b'b' => Control::Band,
        b'M' | b'm' => Control::Mode,
        b'S' | b's' => Control::Step,
        b'W' | b'w' => Control::Bandwidth,
        b'A' | b'a' => Control::Agc,
        b'V' | b'v' => Control::Volume,
        b'L' | b'l' => Control::Backlight,
        b'I' | b'i' => Control::Calibration,
        _ => return None,
    };
    let delta = if key.is_ascii_uppercase() { 1 } else { -1 };
    Some((control, delta))
}

/// Execute one command byte
///
/// Commands that need more input (`#`, `^`) read it from `channel`,
/// waiting for the operator as needed.
pub async fn do_command<C, D>(channel: &mut C, session: &mut RemoteSession, device: &mut D, key: u8) -> RemoteEvent
where
    C: RemoteChannel + ?Sized,
    D: Device + ?Sized,
{
    let mut stream = RemoteStream::new(channel);
    let mut event = RemoteEvent::NONE;

    if let Some((control, delta)) = control_for(key) {
        device.adjust(control, delta);
        event.prefs = true;
        return recognized(event);
    }

    match key {
        b'R' | b'r' => {
            event.direction = if key == b'R' { 1 } else { -1 };
            event.prefs = true;
        }
        b'e' => event.click = true,
        b'O' | b'o' => device.set_sleep(key == b'O'),
        b'C' => {
            session.log_enabled = false;
            capture_screen(&mut stream, &*device).await;
        }
        b't' => {
            session.toggle_log();
        }
        b'$' => list_memories(&mut stream, &*device).await,
        b'#' => {
            let total = device.memory_count();
            match parse_memory(&mut stream, &*device, total).await {
                Ok(edit) => {
                    #[cfg(feature = "embedded")]
                    defmt::info!("remote: store {}", edit);
                    edit.commit(device);
                    event.prefs = true;
                }
                Err(error) => show_error(&mut stream, error).await,
            }
        }
        b'T' => {
            let enabled = !device.theme_editor();
            device.set_theme_editor(enabled);
            stream
                .write_line(if enabled {
                    "Theme editor enabled"
                } else {
                    "Theme editor disabled"
                })
                .await;
        }
        b'^' => {
            if device.theme_editor() {
                if let Err(_error) = write_theme(&mut stream, &mut *device).await {
                    #[cfg(feature = "embedded")]
                    defmt::warn!("remote: theme upload aborted: {}", _error);
                }
                device.redraw();
            }
        }
        b'@' => {
            if device.theme_editor() {
                read_theme(&mut stream, &*device).await;
            }
        }
        _ => return RemoteEvent::NONE,
    }

    recognized(event)
}

const fn recognized(mut event: RemoteEvent) -> RemoteEvent {
    event.changed = true;
    event
}

/// Abandon a command: echo what is left of it and report the error
async fn show_error<C: RemoteChannel + ?Sized>(stream: &mut RemoteStream<'_, C>, error: RemoteError) {
    #[cfg(feature = "embedded")]
    defmt::warn!("remote: rejected command: {}", error);
    stream.drain().await;
    stream.print(format_args!("\r\nError: {error}\r\n")).await;
}
