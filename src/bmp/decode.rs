//! BMP decoder: header block, optional color table, raw pixel region.

use alloc::vec::Vec;

use enough::Stop;
use log::{debug, warn};

use super::Bitmap;
use super::header::{BmpHeader, HEADER_SIZE};
use crate::error::{ConvolveError, try_zeroed};
use crate::limits::{Limits, check_limits};

/// Decode a complete BMP byte stream.
///
/// The pixel region is read up to end of input. A short region leaves the
/// remainder zeroed; extra bytes (row padding, trailing data) are dropped.
pub(crate) fn decode_bitmap(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Bitmap, ConvolveError> {
    let header = BmpHeader::from_bytes(data)?;
    let (width, height, bit_depth) = (header.width(), header.height(), header.bit_depth());
    debug!("bmp header: bit_depth={bit_depth} width={width} height={height}");

    let pixel_len = header.pixel_data_len()?;
    check_limits(limits, width, height, pixel_len)?;
    stop.check()?;

    let mut rest = &data[HEADER_SIZE..];
    let palette = match header.palette_len() {
        Some(len) => {
            debug!("bmp palette: {len} bytes");
            let (palette, tail) = take_zero_filled(rest, len)?;
            rest = tail;
            Some(palette)
        }
        None => None,
    };

    let (pixels, tail) = take_zero_filled(rest, pixel_len)?;
    if rest.len() < pixel_len {
        warn!(
            "pixel region truncated: expected {pixel_len} bytes, found {}; remainder zero-filled",
            rest.len()
        );
    } else if !tail.is_empty() {
        warn!(
            "ignoring {} bytes after the {pixel_len}-byte pixel region",
            tail.len()
        );
    }

    Ok(Bitmap {
        header,
        palette,
        pixels,
    })
}

/// Copy `len` bytes from the front of `input` into a fresh zeroed buffer,
/// returning the buffer and whatever input follows it.
fn take_zero_filled(input: &[u8], len: usize) -> Result<(Vec<u8>, &[u8]), ConvolveError> {
    let mut buf = try_zeroed(len)?;
    let available = input.len().min(len);
    buf[..available].copy_from_slice(&input[..available]);
    Ok((buf, &input[available..]))
}
