//! The 54-byte BMP header block.
//!
//! Only three fields are interpreted; everything else is carried verbatim so
//! that re-encoding reproduces the original bytes.
//!
//! | Offset | Length | Field                          |
//! |--------|--------|--------------------------------|
//! | 18     | 4      | width, u32 little-endian       |
//! | 22     | 4      | height, u32 little-endian      |
//! | 28     | 4      | bit depth, u32 little-endian   |

use crate::error::ConvolveError;

/// Size of the file header plus BITMAPINFOHEADER.
pub const HEADER_SIZE: usize = 54;

const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const BIT_DEPTH_OFFSET: usize = 28;

/// Bytes per palette entry (B, G, R, reserved).
const PALETTE_ENTRY_SIZE: usize = 4;

/// Opaque 54-byte BMP header with typed accessors for width, height and
/// bit depth.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader([u8; HEADER_SIZE]);

impl BmpHeader {
    /// Wrap an existing header block.
    pub const fn new(bytes: [u8; HEADER_SIZE]) -> Self {
        Self(bytes)
    }

    /// Read the header from the first 54 bytes of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ConvolveError> {
        let block = data
            .get(..HEADER_SIZE)
            .ok_or(ConvolveError::UnexpectedEof {
                needed: HEADER_SIZE,
                actual: data.len(),
            })?;
        let mut bytes = [0u8; HEADER_SIZE];
        bytes.copy_from_slice(block);
        Ok(Self(bytes))
    }

    /// Build a standard header for an uncompressed 8-bit image with a full
    /// 256-entry palette and no row padding.
    pub fn gray8(width: u32, height: u32) -> Result<Self, ConvolveError> {
        let pixel_data_size = (width as usize)
            .checked_mul(height as usize)
            .ok_or(ConvolveError::DimensionsTooLarge { width, height })?;
        let data_offset = HEADER_SIZE + 256 * PALETTE_ENTRY_SIZE;
        let file_size = u32::try_from(data_offset + pixel_data_size)
            .map_err(|_| ConvolveError::DimensionsTooLarge { width, height })?;

        let mut b = [0u8; HEADER_SIZE];
        // File header (14 bytes)
        b[0..2].copy_from_slice(b"BM");
        b[2..6].copy_from_slice(&file_size.to_le_bytes());
        b[10..14].copy_from_slice(&(data_offset as u32).to_le_bytes());

        // DIB header (BITMAPINFOHEADER, 40 bytes)
        b[14..18].copy_from_slice(&40u32.to_le_bytes());
        b[WIDTH_OFFSET..WIDTH_OFFSET + 4].copy_from_slice(&width.to_le_bytes());
        b[HEIGHT_OFFSET..HEIGHT_OFFSET + 4].copy_from_slice(&height.to_le_bytes());
        b[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
        b[BIT_DEPTH_OFFSET..BIT_DEPTH_OFFSET + 2].copy_from_slice(&8u16.to_le_bytes());
        // compression stays 0 (BI_RGB)
        b[34..38].copy_from_slice(&(pixel_data_size as u32).to_le_bytes());
        b[38..42].copy_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
        b[42..46].copy_from_slice(&2835u32.to_le_bytes()); // v resolution
        b[46..50].copy_from_slice(&256u32.to_le_bytes()); // colors used
        Ok(Self(b))
    }

    pub fn as_bytes(&self) -> &[u8; HEADER_SIZE] {
        &self.0
    }

    pub fn width(&self) -> u32 {
        self.read_u32_le(WIDTH_OFFSET)
    }

    pub fn height(&self) -> u32 {
        self.read_u32_le(HEIGHT_OFFSET)
    }

    /// All four bytes at offset 28. For uncompressed files the upper half
    /// (the compression field) is zero, so this equals the bits per pixel.
    pub fn bit_depth(&self) -> u32 {
        self.read_u32_le(BIT_DEPTH_OFFSET)
    }

    /// Images of 8 bits per pixel or fewer carry a color table.
    pub fn has_palette(&self) -> bool {
        self.bit_depth() <= 8
    }

    /// Color table size in bytes: `4 × 2^bit_depth`, or `None` when absent.
    pub fn palette_len(&self) -> Option<usize> {
        self.has_palette()
            .then(|| PALETTE_ENTRY_SIZE << self.bit_depth())
    }

    /// Declared pixel region size: `(bit_depth / 8) × width × height`.
    ///
    /// A region of zero bytes is rejected; so is one that overflows `usize`.
    pub fn pixel_data_len(&self) -> Result<usize, ConvolveError> {
        let (width, height, bit_depth) = (self.width(), self.height(), self.bit_depth());
        let len = ((bit_depth / 8) as usize)
            .checked_mul(width as usize)
            .and_then(|n| n.checked_mul(height as usize))
            .ok_or(ConvolveError::DimensionsTooLarge { width, height })?;
        if len == 0 {
            return Err(ConvolveError::EmptyImage {
                width,
                height,
                bit_depth,
            });
        }
        Ok(len)
    }

    fn read_u32_le(&self, offset: usize) -> u32 {
        u32::from_le_bytes([
            self.0[offset],
            self.0[offset + 1],
            self.0[offset + 2],
            self.0[offset + 3],
        ])
    }
}

impl core::fmt::Debug for BmpHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BmpHeader")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("bit_depth", &self.bit_depth())
            .finish_non_exhaustive()
    }
}
