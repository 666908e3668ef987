/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use jpeg_encoder::{ColorType, Encoder};
use vishellize_image::codecs::jpeg::decode_jpeg;
use vishellize_image::codecs::ImageFormat;
use vishellize_image::zune_core::options::DecoderOptions;
use vishellize_image::{Channels, DecodeErrors};

fn encode_jpeg(width: u16, height: u16, color: ColorType, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let encoder = Encoder::new(&mut out, 100);

    encoder.encode(data, width, height, color).unwrap();
    out
}

fn solid_rgb(width: u16, height: u16, rgb: [u8; 3]) -> Vec<u8> {
    rgb.repeat(usize::from(width) * usize::from(height))
}

fn close_to(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= 3
}

#[test]
fn test_solid_color_decodes_to_rgb() {
    let file = encode_jpeg(16, 8, ColorType::Rgb, &solid_rgb(16, 8, [200, 40, 90]));

    let image = decode_jpeg(&file, DecoderOptions::default()).unwrap();

    assert_eq!(image.dimensions(), (16, 8));
    assert_eq!(image.channels(), Channels::RGB);
    assert_eq!(image.pixels().len(), 16 * 8 * 3);

    for pixel in image.pixels().chunks_exact(3) {
        assert!(
            close_to(pixel[0], 200) && close_to(pixel[1], 40) && close_to(pixel[2], 90),
            "unexpected pixel {:?}",
            pixel
        );
    }
}

#[test]
fn test_grayscale_decodes_to_rgb() {
    let file = encode_jpeg(8, 8, ColorType::Luma, &[128; 64]);

    let image = decode_jpeg(&file, DecoderOptions::default()).unwrap();

    assert_eq!(image.channels(), Channels::RGB);
    assert_eq!(image.pixels().len(), 8 * 8 * 3);

    for pixel in image.pixels().chunks_exact(3) {
        assert!(close_to(pixel[0], 128));
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }
}

#[test]
fn test_odd_dimensions_keep_invariant() {
    let file = encode_jpeg(13, 7, ColorType::Rgb, &solid_rgb(13, 7, [0, 255, 0]));

    let image = ImageFormat::Jpeg
        .decode(&file, DecoderOptions::default())
        .unwrap();

    assert_eq!(
        image.pixels().len(),
        image.width() as usize * image.height() as usize * image.channels().stride()
    );
}

#[test]
fn test_decoding_is_deterministic() {
    let data: Vec<u8> = (0..16 * 16 * 3).map(|x| (x % 251) as u8).collect();
    let file = encode_jpeg(16, 16, ColorType::Rgb, &data);

    let first = decode_jpeg(&file, DecoderOptions::default()).unwrap();
    let second = decode_jpeg(&file, DecoderOptions::default()).unwrap();

    assert_eq!(first.pixels(), second.pixels());
}

#[test]
fn test_invalid_header() {
    let err = decode_jpeg(b"definitely not a jpeg", DecoderOptions::default()).unwrap_err();

    assert!(matches!(err, DecodeErrors::HeaderInvalid(_)));
}

#[test]
fn test_png_bytes_are_not_a_jpeg_header() {
    let png = [137, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13];

    let err = decode_jpeg(&png, DecoderOptions::default()).unwrap_err();

    assert!(matches!(err, DecodeErrors::HeaderInvalid(_)));
}

#[test]
fn test_probe_reads_headers() {
    let file = encode_jpeg(9, 4, ColorType::Rgb, &solid_rgb(9, 4, [1, 2, 3]));

    let info = ImageFormat::Jpeg
        .probe(&file, DecoderOptions::default())
        .unwrap();

    assert_eq!((info.width, info.height), (9, 4));
    assert_eq!(info.channels, Channels::RGB);
    assert_eq!(info.format, ImageFormat::Jpeg);
}

#[test]
fn test_dimension_limits() {
    let file = encode_jpeg(32, 32, ColorType::Rgb, &solid_rgb(32, 32, [9, 9, 9]));
    let options = DecoderOptions::default().set_max_height(16);

    let err = decode_jpeg(&file, options).unwrap_err();

    assert!(matches!(err, DecodeErrors::HeaderInvalid(_)));
}
