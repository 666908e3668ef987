/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Truecolor terminal rendering
//!
//! Every pixel of a [`DecodedImage`](vishellize_image::DecodedImage) becomes
//! one block character preceded by a `ESC[38;2;R;G;Bm` escape which sets the
//! foreground color. Each row ends with a `ESC[0m` reset followed by a newline,
//! so no color state leaks into the next row or past the end of the image.
//!
//! ```no_run
//! use vishellize_image::{Channels, DecodedImage};
//! use vishellize_render::render;
//!
//! let image = DecodedImage::new(1, 1, Channels::RGB, vec![255, 0, 0]);
//! render(&image, std::io::stdout().lock()).unwrap();
//! ```
pub use errors::RenderErrors;
pub use terminal::{render, TerminalRenderer, BLOCK_GLYPH, RESET};

pub mod errors;
pub mod terminal;
