/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder adapters for terminal image viewing
//!
//! This crate wraps the `zune-jpeg` and `zune-png` decoders and normalizes
//! whatever they produce into one canonical representation, a [`DecodedImage`]
//! holding a flat, row-major, 8 bit per channel RGB or RGBA buffer.
//!
//! Decoding failures from the libraries never leak out of this crate, they are
//! converted into [`DecodeErrors`] at the adapter boundary.
//!
//! # Usage
//!
//! ```no_run
//! use vishellize_image::codecs::ImageFormat;
//! use vishellize_image::source::read_source;
//! use vishellize_image::zune_core::options::DecoderOptions;
//!
//! let source = read_source("picture.png").unwrap();
//! let image = ImageFormat::Png
//!     .decode(source.data(), DecoderOptions::default())
//!     .unwrap();
//!
//! assert_eq!(
//!     image.pixels().len(),
//!     image.width() as usize * image.height() as usize * image.channels().stride()
//! );
//! ```
pub use codecs::ImageFormat;
pub use errors::DecodeErrors;
pub use image::{Channels, DecodedImage};
pub use zune_core;

pub mod codecs;
pub mod errors;
pub mod image;
pub mod source;
