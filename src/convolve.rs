//! Causal 2D correlation of an 8-bit image with an integer kernel.
//!
//! The kernel origin is its bottom-right weight: output pixel `(i, j)` sums
//! `src[i - m][j - n] * k[m][n]` over the kernel, skipping taps that fall
//! above row 0 or left of column 0. Bottom and right edges never need
//! padding. The sum is clamped to `0..=255` once, after accumulation.
//!
//! Each term fits in `i64`; the running sum saturates, so kernels too large
//! for exact accumulation still clamp to the right end of the range.

use enough::Stop;

use crate::bmp::Bitmap;
use crate::error::{ConvolveError, try_zeroed};
use crate::kernel::Kernel;
use crate::limits::{Limits, check_limits};

/// Filter `source` with `kernel`, producing a new bitmap with the same
/// header and palette.
///
/// Only 8-bit images are accepted; other depths fail with
/// [`ConvolveError::UnsupportedBitDepth`].
pub fn convolve(
    source: &Bitmap,
    kernel: &Kernel<'_>,
    stop: impl Stop,
) -> Result<Bitmap, ConvolveError> {
    convolve_bitmap(source, kernel, None, &stop)
}

/// [`convolve`] with resource limits applied to the output buffer.
pub fn convolve_with_limits(
    source: &Bitmap,
    kernel: &Kernel<'_>,
    limits: &Limits,
    stop: impl Stop,
) -> Result<Bitmap, ConvolveError> {
    convolve_bitmap(source, kernel, Some(limits), &stop)
}

pub(crate) fn convolve_bitmap(
    source: &Bitmap,
    kernel: &Kernel<'_>,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Bitmap, ConvolveError> {
    if source.bit_depth() != 8 {
        return Err(ConvolveError::UnsupportedBitDepth(source.bit_depth()));
    }
    let (width, height) = (source.width(), source.height());
    let len = source.pixels().len();
    check_limits(limits, width, height, len)?;

    let mut out = try_zeroed(len)?;
    convolve_gray8(
        source.pixels(),
        width as usize,
        height as usize,
        kernel,
        &mut out,
        stop,
    )?;
    Ok(source.with_pixels(out))
}

/// Core loop over a tightly packed `width × height` buffer.
fn convolve_gray8(
    src: &[u8],
    width: usize,
    height: usize,
    kernel: &Kernel<'_>,
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), ConvolveError> {
    debug_assert_eq!(src.len(), width * height);
    debug_assert_eq!(out.len(), width * height);

    for (i, out_row) in out.chunks_exact_mut(width).enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        let rows = kernel.height().min(i + 1);
        for (j, px) in out_row.iter_mut().enumerate() {
            let cols = kernel.width().min(j + 1);
            let mut sum: i64 = 0;
            for m in 0..rows {
                let src_row = &src[(i - m) * width..(i - m + 1) * width];
                for n in 0..cols {
                    let term = i64::from(src_row[j - n]) * i64::from(kernel.weight(m, n));
                    sum = sum.saturating_add(term);
                }
            }
            *px = sum.clamp(0, 255) as u8;
        }
    }
    Ok(())
}
