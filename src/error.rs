use alloc::string::String;
use enough::StopReason;

/// Coarse classification of a [`ConvolveError`].
///
/// Every error is fatal to the invocation that produced it; the kind only
/// tells the caller which of the broad failure classes occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A file could not be opened, read, or written, or the stream ended early.
    Io,
    /// A buffer of the required size could not be materialized.
    Allocation,
    /// Bad usage, unknown kernel, or an image the engine does not accept.
    InvalidArgument,
    /// A caller-supplied [`enough::Stop`] requested cancellation.
    Cancelled,
}

/// Errors from BMP decoding/encoding, kernel lookup, and convolution.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvolveError {
    #[cfg(feature = "std")]
    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("unexpected end of input: need {needed} header bytes, got {actual}")]
    UnexpectedEof { needed: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("empty pixel region: {width}x{height} at {bit_depth} bits per pixel")]
    EmptyImage {
        width: u32,
        height: u32,
        bit_depth: u32,
    },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("cannot allocate {bytes} bytes")]
    AllocationFailed { bytes: usize },

    #[error("invalid kernel: {0}")]
    UnknownKernel(String),

    #[error("malformed kernel: {0}")]
    InvalidKernel(String),

    #[error("unsupported bit depth {0}: convolution requires 8-bit images")]
    UnsupportedBitDepth(u32),

    #[error("pixel buffer mismatch: header declares {expected} bytes, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("palette mismatch: header requires {expected} bytes, got {actual}")]
    PaletteMismatch { expected: usize, actual: usize },

    #[error("usage: {0}")]
    Usage(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl ConvolveError {
    /// Which failure class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "std")]
            Self::Io { .. } => ErrorKind::Io,
            Self::UnexpectedEof { .. } => ErrorKind::Io,
            Self::DimensionsTooLarge { .. }
            | Self::EmptyImage { .. }
            | Self::LimitExceeded(_)
            | Self::AllocationFailed { .. } => ErrorKind::Allocation,
            Self::UnknownKernel(_)
            | Self::InvalidKernel(_)
            | Self::UnsupportedBitDepth(_)
            | Self::PixelCountMismatch { .. }
            | Self::PaletteMismatch { .. }
            | Self::Usage(_) => ErrorKind::InvalidArgument,
            Self::Cancelled(_) => ErrorKind::Cancelled,
        }
    }

    #[cfg(feature = "std")]
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl From<StopReason> for ConvolveError {
    fn from(r: StopReason) -> Self {
        ConvolveError::Cancelled(r)
    }
}

/// Reserve a zeroed buffer of exactly `bytes` bytes, reporting failure
/// instead of aborting.
pub(crate) fn try_zeroed(bytes: usize) -> Result<alloc::vec::Vec<u8>, ConvolveError> {
    let mut buf = alloc::vec::Vec::new();
    buf.try_reserve_exact(bytes)
        .map_err(|_| ConvolveError::AllocationFailed { bytes })?;
    buf.resize(bytes, 0);
    Ok(buf)
}
