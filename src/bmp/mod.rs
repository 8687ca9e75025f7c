//! Uncompressed BMP codec.
//!
//! A [`Bitmap`] is the header block, an optional color table, and the raw
//! pixel region. Row padding is not modelled: rows are `(bit_depth / 8) ×
//! width` bytes back to back, so a file whose width is not a multiple of
//! four re-encodes without its padding.

mod decode;
mod encode;
mod header;

pub use header::{BmpHeader, HEADER_SIZE};

use alloc::vec::Vec;
use enough::Stop;

use crate::error::ConvolveError;
use crate::limits::Limits;

/// A decoded bitmap. Owns its palette and pixel buffers exclusively.
///
/// Palette presence and pixel buffer length are always consistent with the
/// header; every constructor checks this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    header: BmpHeader,
    palette: Option<Vec<u8>>,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Decode a complete BMP byte stream.
    pub fn decode(data: &[u8], stop: impl Stop) -> Result<Self, ConvolveError> {
        decode::decode_bitmap(data, None, &stop)
    }

    /// Decode with resource limits applied before the pixel buffer is allocated.
    pub fn decode_with_limits(
        data: &[u8],
        limits: &Limits,
        stop: impl Stop,
    ) -> Result<Self, ConvolveError> {
        decode::decode_bitmap(data, Some(limits), &stop)
    }

    pub(crate) fn decode_with(
        data: &[u8],
        limits: Option<&Limits>,
        stop: &dyn Stop,
    ) -> Result<Self, ConvolveError> {
        decode::decode_bitmap(data, limits, stop)
    }

    /// Encode back to bytes: header, palette (if any), pixels.
    pub fn encode(&self, stop: impl Stop) -> Result<Vec<u8>, ConvolveError> {
        encode::encode_bitmap(self, &stop)
    }

    /// Assemble a bitmap from its parts.
    ///
    /// The palette must be present exactly when the header's bit depth is 8
    /// or less, with `4 × 2^bit_depth` bytes, and `pixels` must match the
    /// declared pixel region size.
    pub fn from_parts(
        header: BmpHeader,
        palette: Option<Vec<u8>>,
        pixels: Vec<u8>,
    ) -> Result<Self, ConvolveError> {
        let expected = header.palette_len().unwrap_or(0);
        let actual = palette.as_ref().map_or(0, Vec::len);
        if header.has_palette() != palette.is_some() || expected != actual {
            return Err(ConvolveError::PaletteMismatch { expected, actual });
        }
        let expected = header.pixel_data_len()?;
        if pixels.len() != expected {
            return Err(ConvolveError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            header,
            palette,
            pixels,
        })
    }

    /// An 8-bit image with a linear grayscale palette.
    pub fn gray8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ConvolveError> {
        let header = BmpHeader::gray8(width, height)?;
        let palette = (0..=255u8).flat_map(|v| [v, v, v, 0]).collect();
        Self::from_parts(header, Some(palette), pixels)
    }

    /// Same header and palette, new pixel buffer of the same length.
    pub(crate) fn with_pixels(&self, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Self {
            header: self.header,
            palette: self.palette.clone(),
            pixels,
        }
    }

    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    pub fn width(&self) -> u32 {
        self.header.width()
    }

    pub fn height(&self) -> u32 {
        self.header.height()
    }

    pub fn bit_depth(&self) -> u32 {
        self.header.bit_depth()
    }

    /// Raw color table bytes, `None` above 8 bits per pixel.
    pub fn palette(&self) -> Option<&[u8]> {
        self.palette.as_deref()
    }

    /// Pixel region, row-major, no padding.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Zero-copy view of an 8-bit image as an [`imgref::ImgRef`].
    ///
    /// Returns [`ConvolveError::UnsupportedBitDepth`] for other depths.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> Result<imgref::ImgRef<'_, u8>, ConvolveError> {
        if self.bit_depth() != 8 {
            return Err(ConvolveError::UnsupportedBitDepth(self.bit_depth()));
        }
        Ok(imgref::ImgRef::new(
            &self.pixels,
            self.width() as usize,
            self.height() as usize,
        ))
    }
}
