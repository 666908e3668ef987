/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG decoding via `zune-png`
use std::path::Path;

use log::{debug, warn};
use zune_core::options::DecoderOptions;
use zune_core::result::DecodingResult;
use zune_png::PngDecoder;

use crate::codecs::{canonicalize, ImageFormat};
use crate::errors::{describe, DecodeErrors};
use crate::image::DecodedImage;
use crate::source::read_source;

/// The eight bytes every PNG stream starts with
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Returns true if `data` starts with the PNG signature
pub fn has_png_signature(data: &[u8]) -> bool {
    data.starts_with(&PNG_SIGNATURE)
}

/// Decode a PNG image into an RGBA buffer
///
/// Palette, grayscale, low bit depth and 16 bit images are all
/// converted to 8 bit RGBA. Images without an alpha channel
/// get an opaque one.
pub fn decode_png(data: &[u8], options: DecoderOptions) -> Result<DecodedImage, DecodeErrors> {
    if !has_png_signature(data) {
        return Err(DecodeErrors::NotAPng);
    }
    let options = options.png_set_strip_to_8bit(true);
    let mut decoder = PngDecoder::new_with_options(data, options);

    decoder
        .decode_headers()
        .map_err(|e| DecodeErrors::MalformedStream(describe(e)))?;

    let (width, height) = decoder
        .get_dimensions()
        .ok_or_else(|| DecodeErrors::MalformedStream("Image dimensions unknown".to_string()))?;
    let colorspace = decoder
        .get_colorspace()
        .ok_or_else(|| DecodeErrors::MalformedStream("Image colorspace unknown".to_string()))?;

    debug!("PNG image {}x{} in {:?}", width, height, colorspace);

    let samples = match decoder
        .decode()
        .map_err(|e| DecodeErrors::MalformedStream(describe(e)))?
    {
        DecodingResult::U8(samples) => samples,
        DecodingResult::U16(samples) => {
            warn!("Decoder returned 16 bit samples, keeping the high byte");
            samples.iter().map(|x| (x >> 8) as u8).collect()
        }
        _ => {
            return Err(DecodeErrors::MalformedStream(
                "Unsupported sample type".to_string()
            ))
        }
    };

    canonicalize(ImageFormat::Png, width, height, colorspace, samples)
}

/// Read and decode a PNG file
///
/// The file is rejected before decoding if it is empty or can't be read
/// completely, see [`read_source`]
pub fn decode_png_file<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<DecodedImage, DecodeErrors> {
    let source = read_source(path)?;

    decode_png(source.data(), options)
}

/// Parse the headers only, returning `(width, height)`
pub(crate) fn read_png_dimensions(
    data: &[u8], options: DecoderOptions
) -> Result<(usize, usize), DecodeErrors> {
    if !has_png_signature(data) {
        return Err(DecodeErrors::NotAPng);
    }
    let mut decoder = PngDecoder::new_with_options(data, options);

    decoder
        .decode_headers()
        .map_err(|e| DecodeErrors::MalformedStream(describe(e)))?;

    decoder
        .get_dimensions()
        .ok_or_else(|| DecodeErrors::MalformedStream("Image dimensions unknown".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_check() {
        assert!(has_png_signature(&[137, 80, 78, 71, 13, 10, 26, 10, 0, 0]));
        assert!(!has_png_signature(&[137, 80, 78, 71]));
        assert!(!has_png_signature(b"GIF89a, not a png"));
    }

    #[test]
    fn short_input_is_not_a_png() {
        let err = decode_png(&PNG_SIGNATURE[..4], DecoderOptions::default()).unwrap_err();

        assert!(matches!(err, DecodeErrors::NotAPng));
    }
}
