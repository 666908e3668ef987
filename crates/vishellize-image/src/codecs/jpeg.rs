/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! JPEG decoding via `zune-jpeg`
use log::debug;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

use crate::codecs::{canonicalize, ImageFormat};
use crate::errors::{describe, DecodeErrors};
use crate::image::{try_alloc_zeroed, DecodedImage};

/// Decode a JPEG image into an RGB buffer
///
/// Header parsing failures are reported as [`DecodeErrors::HeaderInvalid`],
/// failures after the header was understood as [`DecodeErrors::DecompressFailed`]
pub fn decode_jpeg(data: &[u8], options: DecoderOptions) -> Result<DecodedImage, DecodeErrors> {
    let options = options.jpeg_set_out_colorspace(ColorSpace::RGB);
    let mut decoder = JpegDecoder::new_with_options(data, options);

    decoder
        .decode_headers()
        .map_err(|e| DecodeErrors::HeaderInvalid(describe(e)))?;

    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| DecodeErrors::HeaderInvalid("Image dimensions unknown".to_string()))?;
    let colorspace = decoder
        .get_output_colorspace()
        .ok_or_else(|| DecodeErrors::HeaderInvalid("Output colorspace unknown".to_string()))?;
    let size = decoder
        .output_buffer_size()
        .ok_or(DecodeErrors::AllocationFailed(usize::MAX))?;

    debug!(
        "JPEG image {}x{}, decoding {} bytes as {:?}",
        width, height, size, colorspace
    );

    let mut samples = try_alloc_zeroed(size)?;

    decoder
        .decode_into(&mut samples)
        .map_err(|e| DecodeErrors::DecompressFailed(describe(e)))?;

    canonicalize(ImageFormat::Jpeg, width, height, colorspace, samples)
}

/// Parse the headers only, returning `(width, height)`
pub(crate) fn read_jpeg_dimensions(
    data: &[u8], options: DecoderOptions
) -> Result<(usize, usize), DecodeErrors> {
    let mut decoder = JpegDecoder::new_with_options(data, options);

    decoder
        .decode_headers()
        .map_err(|e| DecodeErrors::HeaderInvalid(describe(e)))?;

    decoder
        .dimensions()
        .ok_or_else(|| DecodeErrors::HeaderInvalid("Image dimensions unknown".to_string()))
}
