//! BMP encoder: header verbatim, color table if present, pixel region.

use alloc::vec::Vec;

use enough::Stop;

use super::Bitmap;
use super::header::HEADER_SIZE;
use crate::error::ConvolveError;

/// Serialize a bitmap to bytes. No row padding is inserted.
pub(crate) fn encode_bitmap(bitmap: &Bitmap, stop: &dyn Stop) -> Result<Vec<u8>, ConvolveError> {
    let palette = bitmap.palette().unwrap_or(&[]);
    let pixels = bitmap.pixels();
    let total = HEADER_SIZE
        .checked_add(palette.len())
        .and_then(|n| n.checked_add(pixels.len()))
        .ok_or(ConvolveError::DimensionsTooLarge {
            width: bitmap.width(),
            height: bitmap.height(),
        })?;

    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| ConvolveError::AllocationFailed { bytes: total })?;

    out.extend_from_slice(bitmap.header().as_bytes());
    out.extend_from_slice(palette);

    let row_bytes = (pixels.len() / bitmap.height().max(1) as usize).max(1);
    for (row_idx, row) in pixels.chunks(row_bytes).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }

    Ok(out)
}
