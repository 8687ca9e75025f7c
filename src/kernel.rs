//! Convolution kernels and the table of named filters.

use core::fmt;
use core::str::FromStr;

use crate::error::ConvolveError;

/// Immutable matrix of signed integer weights, row-major: `weights[r * width + c]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel<'a> {
    width: usize,
    height: usize,
    weights: &'a [i32],
}

impl<'a> Kernel<'a> {
    /// Build a kernel, checking that `weights` holds exactly `width × height`
    /// entries and that neither side is zero.
    ///
    /// Accumulation is exact up to roughly 16 million taps at extreme
    /// weights; beyond that the per-pixel sum saturates before clamping.
    pub fn new(width: usize, height: usize, weights: &'a [i32]) -> Result<Self, ConvolveError> {
        if width == 0 || height == 0 {
            return Err(ConvolveError::InvalidKernel(alloc::format!(
                "kernel must be non-empty, got {width}x{height}"
            )));
        }
        if width.checked_mul(height) != Some(weights.len()) {
            return Err(ConvolveError::InvalidKernel(alloc::format!(
                "{width}x{height} kernel needs {} weights, got {}",
                width.saturating_mul(height),
                weights.len()
            )));
        }
        Ok(Self {
            width,
            height,
            weights,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn weights(&self) -> &'a [i32] {
        self.weights
    }

    /// Weight at row `r`, column `c`.
    #[inline]
    pub fn weight(&self, r: usize, c: usize) -> i32 {
        self.weights[r * self.width + c]
    }
}

const fn square(weights: &'static [i32], side: usize) -> Kernel<'static> {
    assert!(side * side == weights.len());
    Kernel {
        width: side,
        height: side,
        weights,
    }
}

#[rustfmt::skip]
const GAUSSIAN_BLUR_3X3: &[i32] = &[
    1, 2, 1,
    2, 4, 2,
    1, 2, 1,
];

#[rustfmt::skip]
const GAUSSIAN_BLUR_5X5: &[i32] = &[
    1,  4,  6,  4, 1,
    4, 16, 24, 16, 4,
    6, 24, 36, 24, 6,
    4, 16, 24, 16, 4,
    1,  4,  6,  4, 1,
];

#[rustfmt::skip]
const LAPLACIAN_5X5: &[i32] = &[
    -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1,
    -1, -1, 24, -1, -1,
    -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1,
];

#[rustfmt::skip]
const EDGE_DETECTION_3X3: &[i32] = &[
    -1, -1, -1,
    -1,  8, -1,
    -1, -1, -1,
];

#[rustfmt::skip]
const SHARPEN_3X3: &[i32] = &[
     0, -4,  0,
    -4, 17, -4,
     0, -4,  0,
];

/// The filters selectable by name.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedKernel {
    /// `gaussian_blur_3x3`
    GaussianBlur3x3,
    /// `gaussian_blur_5x5`
    GaussianBlur5x5,
    /// `laplacian_5x5`
    Laplacian5x5,
    /// `edge_detection_3x3`
    EdgeDetection3x3,
    /// `sharpen_3x3`
    Sharpen3x3,
}

impl NamedKernel {
    /// Every named kernel, in the order the CLI lists them.
    pub const ALL: [NamedKernel; 5] = [
        Self::Laplacian5x5,
        Self::GaussianBlur3x3,
        Self::GaussianBlur5x5,
        Self::EdgeDetection3x3,
        Self::Sharpen3x3,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::GaussianBlur3x3 => "gaussian_blur_3x3",
            Self::GaussianBlur5x5 => "gaussian_blur_5x5",
            Self::Laplacian5x5 => "laplacian_5x5",
            Self::EdgeDetection3x3 => "edge_detection_3x3",
            Self::Sharpen3x3 => "sharpen_3x3",
        }
    }

    pub const fn kernel(self) -> Kernel<'static> {
        match self {
            Self::GaussianBlur3x3 => square(GAUSSIAN_BLUR_3X3, 3),
            Self::GaussianBlur5x5 => square(GAUSSIAN_BLUR_5X5, 5),
            Self::Laplacian5x5 => square(LAPLACIAN_5X5, 5),
            Self::EdgeDetection3x3 => square(EDGE_DETECTION_3X3, 3),
            Self::Sharpen3x3 => square(SHARPEN_3X3, 3),
        }
    }
}

impl FromStr for NamedKernel {
    type Err = ConvolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ConvolveError::UnknownKernel(s.into()))
    }
}

impl fmt::Display for NamedKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a kernel by its filter name.
pub fn kernel_by_name(name: &str) -> Result<Kernel<'static>, ConvolveError> {
    name.parse::<NamedKernel>().map(NamedKernel::kernel)
}
