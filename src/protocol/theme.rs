//! Theme Transfer Protocol
//!
//! Colors travel as `xHHLL` tokens, one per 16-bit field. The first digit
//! pair is the field's second byte in memory and the second pair its first
//! byte, i.e. the little-endian bytes of the field printed high byte first.

use super::stream::RemoteStream;
use crate::channel::RemoteChannel;
use crate::device::ThemeStore;
use crate::error::{RemoteError, RemoteResult};

/// Prompt printed before a theme upload
pub const THEME_PROMPT: &str = "Enter a string of hex colors (x0001x0002...): ";

/// Read one token per color field into the theme
///
/// Prints ` Ok` after the last field. A token not starting with `x` prints
/// ` Err` and stops; fields already written keep their new values.
///
/// # Errors
///
/// [`RemoteError::ExpectedThemeToken`] on a malformed token.
pub async fn write_theme<C, T>(stream: &mut RemoteStream<'_, C>, theme: &mut T) -> RemoteResult<()>
where
    C: RemoteChannel + ?Sized,
    T: ThemeStore + ?Sized,
{
    stream.write_text(THEME_PROMPT).await;

    for field in theme.theme_colors_mut() {
        if stream.read_char().await != b'x' {
            stream.write_line(" Err").await;
            return Err(RemoteError::ExpectedThemeToken);
        }

        let high = read_hex_byte(stream).await;
        let low = read_hex_byte(stream).await;
        *field = u16::from_le_bytes([low, high]);
    }

    stream.write_line(" Ok").await;
    Ok(())
}

/// Print the theme name and one token per color field
pub async fn read_theme<C, T>(stream: &mut RemoteStream<'_, C>, theme: &T)
where
    C: RemoteChannel + ?Sized,
    T: ThemeStore + ?Sized,
{
    stream.print(format_args!("Color theme {}: ", theme.theme_name())).await;
    for color in theme.theme_colors() {
        let [low, high] = color.to_le_bytes();
        stream.print(format_args!("x{high:02X}{low:02X}")).await;
    }
    stream.newline().await;
}

async fn read_hex_byte<C: RemoteChannel + ?Sized>(stream: &mut RemoteStream<'_, C>) -> u8 {
    let high = nibble(stream.read_char().await);
    let low = nibble(stream.read_char().await);
    (high << 4) | low
}

/// Hex digit value, zero for anything else
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn nibble(ch: u8) -> u8 {
    char::from(ch).to_digit(16).map_or(0, |digit| digit as u8)
}
