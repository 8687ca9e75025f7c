//! # zenconvolve
//!
//! Spatial filtering of uncompressed BMP images with small integer kernels.
//!
//! A run reads a whole file, decodes the 54-byte header, the optional color
//! table and the pixel region, correlates the pixels with a named kernel,
//! and writes the result back in the same layout.
//!
//! ## Pieces
//!
//! - [`Bitmap`] / [`BmpHeader`]: decode and encode. The header is carried
//!   verbatim; only width (offset 18), height (offset 22) and bit depth
//!   (offset 28) are interpreted, all little-endian.
//! - [`Kernel`] / [`NamedKernel`]: weight matrices and the filter table.
//! - [`convolve`]: top/left-anchored correlation with clamping to `0..=255`.
//! - [`FilterJob`] (`std`): file in, file out.
//!
//! ## Non-Goals
//!
//! - Compressed or multi-channel filtering
//! - Row alignment padding (rows are written back to back)
//! - Streaming decode of very large files
//!
//! ## Usage
//!
//! ```no_run
//! use zenconvolve::{Bitmap, NamedKernel, convolve};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your 8-bit BMP bytes
//!
//! let source = Bitmap::decode(data, Unstoppable)?;
//! let filtered = convolve(&source, &NamedKernel::Sharpen3x3.kernel(), Unstoppable)?;
//! let bytes = filtered.encode(Unstoppable)?;
//! # let _ = bytes;
//! # Ok::<(), zenconvolve::ConvolveError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod limits;

pub mod bmp;
mod convolve;
mod kernel;

#[cfg(feature = "std")]
mod pipeline;

// Re-exports
pub use bmp::{Bitmap, BmpHeader};
pub use convolve::{convolve, convolve_with_limits};
pub use enough::{Stop, Unstoppable};
pub use error::{ConvolveError, ErrorKind};
pub use kernel::{Kernel, NamedKernel, kernel_by_name};
pub use limits::Limits;

#[cfg(feature = "std")]
pub use pipeline::{FilterJob, copy_file, read_bmp_file, write_bmp_file};
