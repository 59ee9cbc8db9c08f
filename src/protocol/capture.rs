//! Screen Capture
//!
//! Dumps the frame buffer as a hex-encoded 16-bit BMP with RGB565
//! bitfield masks. Multi-byte fields and pixels are printed in file byte
//! order (little-endian), rows bottom to top, one CRLF-terminated text line
//! per row after a leading blank line and the header line.

use super::stream::RemoteStream;
use crate::channel::RemoteChannel;
use crate::config::bitmap::{
    BITS_PER_PIXEL, BLUE_MASK, COMPRESSION_BITFIELDS, GREEN_MASK, INFO_HEADER_LEN, PIXEL_OFFSET,
    RED_MASK,
};
use crate::device::FrameBuffer;

/// Emit the screen as hex text
///
/// Output is paced by the channel: each field waits for transmit room.
pub async fn capture_screen<C, F>(stream: &mut RemoteStream<'_, C>, screen: &F)
where
    C: RemoteChannel + ?Sized,
    F: FrameBuffer + ?Sized,
{
    let (width, height) = screen.screen_size();
    let image_len = PIXEL_OFFSET + u32::from(width) * u32::from(height) * 2;

    stream.newline().await;

    // File header
    stream.write_text("424d").await;
    write_u32(stream, image_len).await;
    write_u32(stream, 0).await;
    write_u32(stream, PIXEL_OFFSET).await;

    // Info header
    write_u32(stream, INFO_HEADER_LEN).await;
    write_u32(stream, u32::from(width)).await;
    write_u32(stream, u32::from(height)).await;
    write_u16(stream, 1).await;
    write_u16(stream, BITS_PER_PIXEL).await;
    write_u32(stream, COMPRESSION_BITFIELDS).await;
    for _ in 0..5 {
        // Image size, X/Y resolution, palette colors, important colors
        write_u32(stream, 0).await;
    }
    write_u32(stream, RED_MASK).await;
    write_u32(stream, GREEN_MASK).await;
    write_u32(stream, BLUE_MASK).await;
    stream.newline().await;

    for y in (0..height).rev() {
        for x in 0..width {
            write_u16(stream, screen.read_pixel(x, y)).await;
        }
        stream.newline().await;
    }
}

async fn write_u16<C: RemoteChannel + ?Sized>(stream: &mut RemoteStream<'_, C>, value: u16) {
    let [b0, b1] = value.to_le_bytes();
    stream.print(format_args!("{b0:02x}{b1:02x}")).await;
}

async fn write_u32<C: RemoteChannel + ?Sized>(stream: &mut RemoteStream<'_, C>, value: u32) {
    let [b0, b1, b2, b3] = value.to_le_bytes();
    stream.print(format_args!("{b0:02x}{b1:02x}{b2:02x}{b3:02x}")).await;
}
