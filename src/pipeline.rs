//! File-to-file driver: read, filter, write.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use enough::Stop;
use log::{info, warn};

use crate::bmp::Bitmap;
use crate::convolve::convolve_bitmap;
use crate::error::ConvolveError;
use crate::kernel::NamedKernel;
use crate::limits::Limits;

/// Read and decode a BMP file.
pub fn read_bmp_file(
    path: &Path,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<Bitmap, ConvolveError> {
    let data = fs::read(path).map_err(|e| ConvolveError::io(path, e))?;
    Bitmap::decode_with(&data, limits, &stop)
}

/// Encode and write a BMP file.
///
/// Nothing touches `path` until encoding has succeeded. If the file cannot
/// be created it is left as it was; if writing fails after creating it,
/// the partial file is removed.
pub fn write_bmp_file(
    path: &Path,
    bitmap: &Bitmap,
    stop: impl Stop,
) -> Result<(), ConvolveError> {
    let bytes = bitmap.encode(&stop)?;
    let mut file = File::create(path).map_err(|e| ConvolveError::io(path, e))?;
    if let Err(e) = file.write_all(&bytes).and_then(|()| file.sync_all()) {
        drop(file);
        if fs::remove_file(path).is_ok() {
            warn!("removed partial output {}", path.display());
        }
        return Err(ConvolveError::io(path, e));
    }
    Ok(())
}

/// Decode `input` and re-encode it to `output` unchanged.
///
/// Row padding in the input is not carried over.
pub fn copy_file(input: &Path, output: &Path, stop: impl Stop) -> Result<(), ConvolveError> {
    let bitmap = read_bmp_file(input, None, &stop)?;
    write_bmp_file(output, &bitmap, &stop)
}

/// One input file filtered by one named kernel into one output file.
#[derive(Clone, Debug)]
pub struct FilterJob {
    input: PathBuf,
    output: PathBuf,
    kernel: NamedKernel,
    limits: Option<Limits>,
}

impl FilterJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, kernel: NamedKernel) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            kernel,
            limits: None,
        }
    }

    /// Resolve the kernel from its filter name.
    pub fn from_kernel_name(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        kernel: &str,
    ) -> Result<Self, ConvolveError> {
        Ok(Self::new(input, output, kernel.parse()?))
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn kernel(&self) -> NamedKernel {
        self.kernel
    }

    /// Decode, filter, encode. The first error aborts the job and no output
    /// is left behind.
    pub fn run(&self, stop: impl Stop) -> Result<(), ConvolveError> {
        let limits = self.limits.as_ref();

        info!("reading {}", self.input.display());
        let source = read_bmp_file(&self.input, limits, &stop)?;
        info!(
            "{}x{} at {} bpp, palette {} bytes",
            source.width(),
            source.height(),
            source.bit_depth(),
            source.palette().map_or(0, <[u8]>::len)
        );

        info!("applying {}", self.kernel);
        let filtered = convolve_bitmap(&source, &self.kernel.kernel(), limits, &stop)?;
        drop(source);

        info!("writing {}", self.output.display());
        write_bmp_file(&self.output, &filtered, &stop)
    }
}
