#![no_main]
use libfuzzer_sys::fuzz_target;
use zenconvolve::{Bitmap, Limits, NamedKernel, convolve};

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };
    // Must never panic
    let Ok(bitmap) = Bitmap::decode_with_limits(data, &limits, enough::Unstoppable) else {
        return;
    };
    for named in NamedKernel::ALL {
        let _ = convolve(&bitmap, &named.kernel(), enough::Unstoppable);
    }
});
