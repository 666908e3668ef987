/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for the supported codecs
//!
//! Every decoder here normalizes its output to the canonical layout
//! of its format, JPEG images always come out as [`Channels::RGB`],
//! PNG images always come out as [`Channels::RGBA`] with opaque alpha
//! filled in where the source has none.
use std::path::Path;

use log::trace;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::errors::DecodeErrors;
use crate::image::{try_alloc_zeroed, Channels, DecodedImage};

pub mod jpeg;
pub mod png;

/// All supported image formats
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum ImageFormat {
    /// Joint Photographic Experts Group
    Jpeg,
    /// Portable Network Graphics
    Png
}

/// Header level information about an image
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct ImageInfo {
    pub format:   ImageFormat,
    pub width:    u32,
    pub height:   u32,
    /// Layout the image will have once decoded
    pub channels: Channels
}

impl ImageFormat {
    /// Select a format from a file extension.
    ///
    /// Matching is ASCII case insensitive, `png`, `jpg` and `jpeg` are understood.
    pub fn from_extension(extension: &str) -> Option<ImageFormat> {
        if extension.eq_ignore_ascii_case("png") {
            Some(ImageFormat::Png)
        } else if extension.eq_ignore_ascii_case("jpg") || extension.eq_ignore_ascii_case("jpeg")
        {
            Some(ImageFormat::Jpeg)
        } else {
            None
        }
    }

    /// Select a format from a file name suffix, no file contents are inspected.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ImageFormat, DecodeErrors> {
        let path = path.as_ref();

        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageFormat::from_extension)
            .ok_or_else(|| DecodeErrors::UnsupportedFormat(path.to_string_lossy().to_string()))
    }

    pub const fn name(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png"
        }
    }

    /// The pixel layout images of this format are normalized to
    pub const fn canonical_channels(self) -> Channels {
        match self {
            ImageFormat::Jpeg => Channels::RGB,
            ImageFormat::Png => Channels::RGBA
        }
    }

    /// Decode a complete image held in `data`
    pub fn decode(self, data: &[u8], options: DecoderOptions) -> Result<DecodedImage, DecodeErrors> {
        trace!("Decoding {} bytes as {}", data.len(), self.name());

        match self {
            ImageFormat::Jpeg => jpeg::decode_jpeg(data, options),
            ImageFormat::Png => png::decode_png(data, options)
        }
    }

    /// Read only the headers of an image
    pub fn probe(self, data: &[u8], options: DecoderOptions) -> Result<ImageInfo, DecodeErrors> {
        let (width, height) = match self {
            ImageFormat::Jpeg => jpeg::read_jpeg_dimensions(data, options)?,
            ImageFormat::Png => png::read_png_dimensions(data, options)?
        };
        let (width, height) = self.checked_dimensions(width, height)?;

        Ok(ImageInfo {
            format: self,
            width,
            height,
            channels: self.canonical_channels()
        })
    }

    /// The error a decoder of this format reports for a stream it can't make sense of
    pub(crate) fn stream_error(self, reason: String) -> DecodeErrors {
        match self {
            ImageFormat::Jpeg => DecodeErrors::DecompressFailed(reason),
            ImageFormat::Png => DecodeErrors::MalformedStream(reason)
        }
    }

    fn checked_dimensions(self, width: usize, height: usize) -> Result<(u32, u32), DecodeErrors> {
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => Ok((w, h)),
            _ => Err(self.stream_error(format!(
                "Image dimensions {}x{} are too large",
                width, height
            )))
        }
    }
}

/// Convenience function, decode `data` using default decoder options
pub fn decode(data: &[u8], format: ImageFormat) -> Result<DecodedImage, DecodeErrors> {
    format.decode(data, DecoderOptions::default())
}

/// Convert the samples a library produced into the canonical layout
/// for `format`
///
/// `samples` is interpreted as `width * height` pixels laid out in `colorspace`.
pub(crate) fn canonicalize(
    format: ImageFormat, width: usize, height: usize, colorspace: ColorSpace, samples: Vec<u8>
) -> Result<DecodedImage, DecodeErrors> {
    let target = format.canonical_channels();
    let (width_u32, height_u32) = format.checked_dimensions(width, height)?;
    let components = colorspace.num_components();

    let pixel_count = width
        .checked_mul(height)
        .ok_or(DecodeErrors::AllocationFailed(usize::MAX))?;

    if pixel_count.checked_mul(components) != Some(samples.len()) {
        return Err(format.stream_error(format!(
            "Decoder produced {} bytes, expected {} for a {}x{} {:?} image",
            samples.len(),
            pixel_count.saturating_mul(components),
            width,
            height,
            colorspace
        )));
    }

    if colorspace == target.to_colorspace() {
        return Ok(DecodedImage::new(width_u32, height_u32, target, samples));
    }

    trace!("Converting {:?} to {:?}", colorspace, target);

    let out_size = DecodedImage::buffer_size(width_u32, height_u32, target)
        .ok_or(DecodeErrors::AllocationFailed(usize::MAX))?;
    let mut output = try_alloc_zeroed(out_size)?;
    let stride = target.stride();

    match colorspace {
        ColorSpace::Luma => {
            for (out, &luma) in output.chunks_exact_mut(stride).zip(samples.iter()) {
                out[..3].fill(luma);
                if stride == 4 {
                    out[3] = 255;
                }
            }
        }
        ColorSpace::LumaA => {
            for (out, pix) in output.chunks_exact_mut(stride).zip(samples.chunks_exact(2)) {
                out[..3].fill(pix[0]);
                if stride == 4 {
                    out[3] = pix[1];
                }
            }
        }
        ColorSpace::RGB => {
            // only reachable when target is RGBA
            for (out, pix) in output.chunks_exact_mut(stride).zip(samples.chunks_exact(3)) {
                out[..3].copy_from_slice(pix);
                out[3] = 255;
            }
        }
        ColorSpace::RGBA => {
            // only reachable when target is RGB
            for (out, pix) in output.chunks_exact_mut(stride).zip(samples.chunks_exact(4)) {
                out.copy_from_slice(&pix[..3]);
            }
        }
        other => return Err(DecodeErrors::UnsupportedColorspace(other))
    }

    Ok(DecodedImage::new(width_u32, height_u32, target, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path() {
        assert_eq!(ImageFormat::from_path("a/b/c.png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path("photo.JPG").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("photo.jpeg").unwrap(), ImageFormat::Jpeg);

        assert!(matches!(
            ImageFormat::from_path("notes.txt"),
            Err(DecodeErrors::UnsupportedFormat(_))
        ));
        assert!(matches!(
            ImageFormat::from_path("no_extension"),
            Err(DecodeErrors::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn luma_expands_to_rgba() {
        let image = canonicalize(ImageFormat::Png, 2, 1, ColorSpace::Luma, vec![10, 200]).unwrap();

        assert_eq!(image.channels(), Channels::RGBA);
        assert_eq!(image.pixels(), &[10, 10, 10, 255, 200, 200, 200, 255]);
    }

    #[test]
    fn luma_alpha_keeps_alpha() {
        let image =
            canonicalize(ImageFormat::Png, 1, 1, ColorSpace::LumaA, vec![7, 128]).unwrap();

        assert_eq!(image.pixels(), &[7, 7, 7, 128]);
    }

    #[test]
    fn rgb_gets_opaque_alpha() {
        let image =
            canonicalize(ImageFormat::Png, 1, 1, ColorSpace::RGB, vec![1, 2, 3]).unwrap();

        assert_eq!(image.pixels(), &[1, 2, 3, 255]);
    }

    #[test]
    fn rgba_drops_alpha_for_jpeg() {
        let image =
            canonicalize(ImageFormat::Jpeg, 1, 1, ColorSpace::RGBA, vec![1, 2, 3, 4]).unwrap();

        assert_eq!(image.channels(), Channels::RGB);
        assert_eq!(image.pixels(), &[1, 2, 3]);
    }

    #[test]
    fn wrong_sample_count_is_an_error() {
        let err = canonicalize(ImageFormat::Png, 2, 2, ColorSpace::RGB, vec![0; 5]).unwrap_err();
        assert!(matches!(err, DecodeErrors::MalformedStream(_)));

        let err = canonicalize(ImageFormat::Jpeg, 2, 2, ColorSpace::RGB, vec![0; 5]).unwrap_err();
        assert!(matches!(err, DecodeErrors::DecompressFailed(_)));
    }

    #[test]
    fn cmyk_is_rejected() {
        let err = canonicalize(ImageFormat::Jpeg, 1, 1, ColorSpace::CMYK, vec![0; 4]).unwrap_err();

        assert!(matches!(
            err,
            DecodeErrors::UnsupportedColorspace(ColorSpace::CMYK)
        ));
    }
}
