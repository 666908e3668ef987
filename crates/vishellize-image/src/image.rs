/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The canonical in-memory image
use zune_core::colorspace::ColorSpace;

use crate::errors::DecodeErrors;

/// Layout of a single pixel in a [`DecodedImage`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum Channels {
    /// Red, green and blue, 3 bytes per pixel
    RGB,
    /// Red, green, blue and alpha, 4 bytes per pixel
    RGBA
}

impl Channels {
    /// Number of bytes used by one pixel
    pub const fn stride(self) -> usize {
        match self {
            Channels::RGB => 3,
            Channels::RGBA => 4
        }
    }

    pub const fn to_colorspace(self) -> ColorSpace {
        match self {
            Channels::RGB => ColorSpace::RGB,
            Channels::RGBA => ColorSpace::RGBA
        }
    }
}

/// A decoded image
///
/// Pixels are stored interleaved, top row first, with no padding
/// between rows. The buffer length is always
/// `width * height * channels.stride()`, this is checked on construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedImage {
    width:    u32,
    height:   u32,
    channels: Channels,
    pixels:   Vec<u8>
}

impl DecodedImage {
    /// Create a new image from an already laid out buffer.
    ///
    /// # Panics
    /// If `pixels.len()` does not match `width * height * channels.stride()`
    pub fn new(width: u32, height: u32, channels: Channels, pixels: Vec<u8>) -> DecodedImage {
        let expected = Self::buffer_size(width, height, channels);

        assert_eq!(
            Some(pixels.len()),
            expected,
            "Buffer of {} bytes does not fit a {}x{} {:?} image",
            pixels.len(),
            width,
            height,
            channels
        );

        DecodedImage {
            width,
            height,
            channels,
            pixels
        }
    }

    /// Number of bytes needed to store an image of the given dimensions,
    /// or `None` if it does not fit in a `usize`
    pub fn buffer_size(width: u32, height: u32, channels: Channels) -> Option<usize> {
        usize::try_from(width)
            .ok()?
            .checked_mul(usize::try_from(height).ok()?)?
            .checked_mul(channels.stride())
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Return the image dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub const fn channels(&self) -> Channels {
        self.channels
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image returning the underlying buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Returns true if the image has no pixels, i.e either
    /// dimension is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of bytes in a single row
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.channels.stride()
    }
}

/// Allocate a zeroed buffer, reporting failure instead of aborting
pub(crate) fn try_alloc_zeroed(size: usize) -> Result<Vec<u8>, DecodeErrors> {
    let mut buffer = Vec::new();

    buffer
        .try_reserve_exact(size)
        .map_err(|_| DecodeErrors::AllocationFailed(size))?;
    buffer.resize(size, 0);

    Ok(buffer)
}
