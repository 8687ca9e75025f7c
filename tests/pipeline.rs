mod common;

use common::{AlwaysCancelled, noise_pattern, raw_bmp, reference_filter};
use enough::Unstoppable;
use zenconvolve::*;

#[test]
fn edge_detection_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.bmp");

    #[rustfmt::skip]
    let pixels: [u8; 16] = [
        10,  20,  30,  40,
        50, 200,  60,  70,
        80,  90, 255, 100,
         0, 110, 120, 130,
    ];
    let data = raw_bmp(4, 4, 8, &pixels);
    std::fs::write(&input, &data).unwrap();

    FilterJob::from_kernel_name(&input, &output, "edge_detection_3x3")
        .unwrap()
        .run(Unstoppable)
        .unwrap();

    let written = std::fs::read(&output).unwrap();
    assert_eq!(written.len(), 54 + 1024 + 16);
    assert_eq!(&written[..54 + 1024], &data[..54 + 1024]);

    #[rustfmt::skip]
    let edge: [i32; 9] = [
        -1, -1, -1,
        -1,  8, -1,
        -1, -1, -1,
    ];
    let expected = reference_filter(&pixels, 4, 4, &edge, 3);
    assert_eq!(&written[1078..], &expected[..]);
    // (0,0) sees only itself, through the top-left weight: -10.
    assert_eq!(written[1078], 0);
    // (2,2) sees the full window: 8 * 200 - 595 = 1005.
    assert_eq!(written[1078 + 10], 255);
}

#[test]
fn every_named_kernel_matches_reference() {
    let (w, h) = (9usize, 7usize);
    let pixels = noise_pattern(w * h);
    let source = Bitmap::decode(&raw_bmp(w as u32, h as u32, 8, &pixels), Unstoppable).unwrap();

    for named in NamedKernel::ALL {
        let kernel = named.kernel();
        let out = convolve(&source, &kernel, Unstoppable).unwrap();
        let expected = reference_filter(&pixels, w, h, kernel.weights(), kernel.width());
        assert_eq!(out.pixels(), &expected[..], "{named}");
    }
}

#[test]
fn geometry_is_preserved_for_every_kernel() {
    let source = Bitmap::decode(&raw_bmp(6, 5, 8, &noise_pattern(30)), Unstoppable).unwrap();
    for named in NamedKernel::ALL {
        let out = convolve(&source, &named.kernel(), Unstoppable).unwrap();
        assert_eq!(out.header(), source.header(), "{named}");
        assert_eq!(out.width(), source.width());
        assert_eq!(out.height(), source.height());
        assert_eq!(out.palette(), source.palette());
        assert_eq!(out.pixels().len(), source.pixels().len());
    }
}

#[test]
fn all_ones_kernel_truncates_top_left() {
    let source = Bitmap::gray8(2, 2, vec![255; 4]).unwrap();
    let ones = [1; 9];
    let kernel = Kernel::new(3, 3, &ones).unwrap();
    let out = convolve(&source, &kernel, Unstoppable).unwrap();
    assert_eq!(out.pixels()[0], 255);
}

#[test]
fn source_and_result_are_independent() {
    let source = Bitmap::gray8(3, 3, (1..=9).collect()).unwrap();
    let out = convolve(&source, &NamedKernel::GaussianBlur3x3.kernel(), Unstoppable).unwrap();
    let source_pixels = source.clone().into_pixels();
    drop(source);
    assert_eq!(out.palette().map(<[u8]>::len), Some(1024));
    assert_eq!(source_pixels, (1..=9).collect::<Vec<u8>>());
}

#[test]
fn unknown_kernel_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.bmp");
    std::fs::write(&input, raw_bmp(2, 2, 8, &[0; 4])).unwrap();

    let err = FilterJob::from_kernel_name(&input, &output, "box_blur_3x3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!output.exists());
}

#[test]
fn non_8bit_input_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.bmp");
    std::fs::write(&input, raw_bmp(2, 2, 24, &[0; 12])).unwrap();

    let err = FilterJob::new(&input, &output, NamedKernel::Sharpen3x3)
        .run(Unstoppable)
        .unwrap_err();
    assert!(matches!(err, ConvolveError::UnsupportedBitDepth(24)));
    assert!(!output.exists());
}

#[test]
fn cancelled_filter_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.bmp");
    let data = raw_bmp(32, 40, 8, &noise_pattern(32 * 40));
    std::fs::write(&input, &data).unwrap();

    let source = Bitmap::decode(&data, Unstoppable).unwrap();
    let blur = NamedKernel::GaussianBlur5x5.kernel();
    let err = convolve(&source, &blur, AlwaysCancelled).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cancelled);

    let err = FilterJob::new(&input, &output, NamedKernel::GaussianBlur5x5)
        .run(AlwaysCancelled)
        .unwrap_err();
    assert!(matches!(err, ConvolveError::Cancelled(_)));
    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn read_only_output_is_not_deleted() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.bmp");
    std::fs::write(&input, raw_bmp(4, 4, 8, &[50; 16])).unwrap();
    std::fs::write(&output, b"keep me").unwrap();
    std::fs::set_permissions(&output, std::fs::Permissions::from_mode(0o444)).unwrap();

    let result = FilterJob::new(&input, &output, NamedKernel::Sharpen3x3).run(Unstoppable);
    match result {
        Err(err) => {
            assert_eq!(err.kind(), ErrorKind::Io);
            assert_eq!(std::fs::read(&output).unwrap(), b"keep me");
        }
        // Running as root bypasses the permission bits.
        Ok(()) => assert_eq!(std::fs::read(&output).unwrap().len(), 54 + 1024 + 16),
    }
}
