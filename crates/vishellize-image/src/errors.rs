/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when reading and decoding images
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use zune_core::colorspace::ColorSpace;

/// All errors that can occur before an image reaches the renderer
pub enum DecodeErrors {
    /// The input path does not exist
    FileNotFound(PathBuf),
    /// Any other I/O failure while reading the input
    IoErrors(std::io::Error),
    /// The input was empty or fewer bytes were read than the
    /// file system reported
    TruncatedInput { expected: u64, read: u64 },
    /// A buffer of the given size could not be allocated
    AllocationFailed(usize),
    /// The first 8 bytes are not the PNG signature
    NotAPng,
    /// The JPEG header could not be parsed
    HeaderInvalid(String),
    /// The JPEG decoder failed while decompressing pixels
    DecompressFailed(String),
    /// The PNG decoder reported an error
    MalformedStream(String),
    /// File extension isn't one of the supported formats
    UnsupportedFormat(String),
    /// The decoder produced pixels in a layout we can't normalize
    UnsupportedColorspace(ColorSpace)
}

impl Debug for DecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "Couldn't open file {:?}", path),
            Self::IoErrors(err) => write!(f, "I/O error: {:?}", err),
            Self::TruncatedInput { expected, read } => {
                if *expected == 0 {
                    write!(f, "Input is empty")
                } else {
                    write!(
                        f,
                        "Input truncated, expected {} bytes but read {}",
                        expected, read
                    )
                }
            }
            Self::AllocationFailed(size) => {
                write!(f, "Couldn't allocate {} bytes for image", size)
            }
            Self::NotAPng => write!(f, "Bad PNG signature, not a png"),
            Self::HeaderInvalid(reason) => {
                write!(f, "Couldn't decompress JPEG header: {}", reason)
            }
            Self::DecompressFailed(reason) => {
                write!(f, "Couldn't decompress JPEG image into RGB buffer: {}", reason)
            }
            Self::MalformedStream(reason) => write!(f, "Error reading PNG: {}", reason),
            Self::UnsupportedFormat(name) => {
                write!(f, "Unsupported file format for {:?}", name)
            }
            Self::UnsupportedColorspace(colorspace) => {
                write!(f, "Cannot convert {:?} pixels to RGB", colorspace)
            }
        }
    }
}

impl Display for DecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for DecodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for DecodeErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

/// Library errors carry a trailing newline in their debug output, strip it
/// so messages stay on one line
pub(crate) fn describe<E: Debug>(error: E) -> String {
    format!("{:?}", error).trim().to_string()
}
