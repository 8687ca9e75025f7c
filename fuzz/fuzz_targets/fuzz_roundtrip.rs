#![no_main]
use libfuzzer_sys::fuzz_target;
use zenconvolve::{Bitmap, Limits};

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };
    let Ok(decoded) = Bitmap::decode_with_limits(data, &limits, enough::Unstoppable) else {
        return;
    };

    // Re-encoding and decoding again must give the same image
    let reencoded = decoded
        .encode(enough::Unstoppable)
        .expect("encoding a decoded bitmap must succeed");
    let decoded2 = Bitmap::decode(&reencoded, enough::Unstoppable)
        .expect("re-encoded data failed to decode");

    assert_eq!(decoded, decoded2, "roundtrip mismatch");
    assert_eq!(reencoded.len(), 54 + decoded.palette().map_or(0, <[u8]>::len) + decoded.pixels().len());
});
