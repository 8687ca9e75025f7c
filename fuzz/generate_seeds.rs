#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: u32, height: u32, bit_depth: u32) -> Vec<u8> {
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..32].copy_from_slice(&bit_depth.to_le_bytes());
    bmp
}

fn main() {
    use std::fs;
    for dir in ["fuzz/corpus/fuzz_decode", "fuzz/corpus/fuzz_roundtrip"] {
        fs::create_dir_all(dir).unwrap();

        // 8-bit 4x4 with grayscale palette
        let mut gray = header(4, 4, 8);
        gray.extend((0..=255u8).flat_map(|v| [v, v, v, 0]));
        gray.extend((0..16u8).map(|v| v * 16));
        fs::write(format!("{dir}/gray8_4x4.bmp"), &gray).unwrap();

        // 24-bit 2x1, no palette
        let mut rgb = header(2, 1, 24);
        rgb.extend_from_slice(&[0xff, 0, 0, 0, 0xff, 0]);
        fs::write(format!("{dir}/rgb24_2x1.bmp"), &rgb).unwrap();

        // 4-bit: palette only, empty pixel region
        let mut nibble = header(2, 2, 4);
        nibble.extend(std::iter::repeat_n(0x40u8, 64));
        fs::write(format!("{dir}/pal4_2x2.bmp"), &nibble).unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/short_header.bmp"), &gray[..30]).unwrap();
        fs::write(format!("{dir}/short_pixels.bmp"), &gray[..1080]).unwrap();
        fs::write(format!("{dir}/zero_width.bmp"), header(0, 4, 8)).unwrap();
    }
    println!("Seeds written");
}
