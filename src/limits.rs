use crate::error::ConvolveError;

/// Caps on the images a run will materialize.
///
/// Checked twice per run: once against the decoded pixel region before its
/// buffer is allocated, and once against the convolution output. Every
/// field defaults to `None`, meaning unbounded.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on `width × height`.
    pub max_pixels: Option<u64>,
    /// Cap on the byte length of one pixel region.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject a `width × height` image whose pixel region is `bytes` long.
    pub(crate) fn check_image(
        &self,
        width: u32,
        height: u32,
        bytes: usize,
    ) -> Result<(), ConvolveError> {
        let exceeded = |what: &str, value: u64, max: u64| {
            ConvolveError::LimitExceeded(alloc::format!("{what} {value} exceeds limit {max}"))
        };
        if let Some(max) = self.max_width.filter(|&max| u64::from(width) > max) {
            return Err(exceeded("width", width.into(), max));
        }
        if let Some(max) = self.max_height.filter(|&max| u64::from(height) > max) {
            return Err(exceeded("height", height.into(), max));
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max) = self.max_pixels.filter(|&max| pixels > max) {
            return Err(exceeded("pixel count", pixels, max));
        }
        let bytes = bytes as u64;
        if let Some(max) = self.max_memory_bytes.filter(|&max| bytes > max) {
            return Err(exceeded("pixel region bytes", bytes, max));
        }
        Ok(())
    }
}

/// [`Limits::check_image`] when limits were supplied.
pub(crate) fn check_limits(
    limits: Option<&Limits>,
    width: u32,
    height: u32,
    bytes: usize,
) -> Result<(), ConvolveError> {
    limits.map_or(Ok(()), |limits| limits.check_image(width, height, bytes))
}
