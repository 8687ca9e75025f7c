//! Helpers shared by the integration tests.

#![allow(dead_code)]

use enough::{Stop, StopReason};

/// A stop token that has already fired.
pub struct AlwaysCancelled;

impl Stop for AlwaysCancelled {
    fn check(&self) -> Result<(), StopReason> {
        Err(StopReason::Cancelled)
    }
}

/// Raw bytes of a padding-free BMP: 54-byte header with the three
/// interpreted fields set, an optional palette, then `pixels`.
pub fn raw_bmp(width: u32, height: u32, bit_depth: u32, pixels: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; 54];
    data[0..2].copy_from_slice(b"BM");
    // Uninterpreted fields get distinctive values so verbatim copying is visible.
    data[6..10].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    data[18..22].copy_from_slice(&width.to_le_bytes());
    data[22..26].copy_from_slice(&height.to_le_bytes());
    data[28..32].copy_from_slice(&bit_depth.to_le_bytes());
    data[38..42].copy_from_slice(&3780u32.to_le_bytes());
    if bit_depth <= 8 {
        let entries = 1usize << bit_depth;
        data.extend((0..entries).flat_map(|i| {
            let v = (i * 255 / entries.max(2).saturating_sub(1)) as u8;
            [v, v.wrapping_add(1), v.wrapping_add(2), 0]
        }));
    }
    data.extend_from_slice(pixels);
    data
}

pub fn noise_pattern(len: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; len];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

/// Straightforward reference for the top/left-anchored correlation.
pub fn reference_filter(src: &[u8], width: usize, height: usize, k: &[i32], kw: usize) -> Vec<u8> {
    let kh = k.len() / kw;
    let mut out = vec![0u8; width * height];
    for i in 0..height as isize {
        for j in 0..width as isize {
            let mut val: i32 = 0;
            for m in 0..kh as isize {
                for n in 0..kw as isize {
                    let (y, x) = (i - m, j - n);
                    if y >= 0 && x >= 0 {
                        val += src[y as usize * width + x as usize] as i32
                            * k[m as usize * kw + n as usize];
                    }
                }
            }
            out[i as usize * width + j as usize] = val.clamp(0, 255) as u8;
        }
    }
    out
}
