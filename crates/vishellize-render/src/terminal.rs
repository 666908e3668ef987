/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use log::trace;
use vishellize_image::DecodedImage;

use crate::errors::RenderErrors;

/// Character printed once for every pixel
pub const BLOCK_GLYPH: char = '\u{2588}';

/// Resets all terminal attributes
pub const RESET: &str = "\x1b[0m";

/// Writes images as rows of colored glyphs
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TerminalRenderer {
    glyph: char
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        TerminalRenderer { glyph: BLOCK_GLYPH }
    }
}

impl TerminalRenderer {
    pub fn new() -> TerminalRenderer {
        TerminalRenderer::default()
    }

    /// Use `glyph` instead of the full block for every pixel
    pub fn with_glyph(glyph: char) -> TerminalRenderer {
        TerminalRenderer { glyph }
    }

    pub const fn glyph(&self) -> char {
        self.glyph
    }

    /// Render `image` into `sink`
    ///
    /// One row is assembled at a time and handed to the sink with a single
    /// `write_all`, the sink is flushed once all rows are written.
    /// The first failing write aborts the remaining rows.
    ///
    /// Images with a zero dimension produce no output.
    pub fn render<W: Write>(&self, image: &DecodedImage, mut sink: W) -> Result<(), RenderErrors> {
        if image.is_empty() {
            trace!("Image has no pixels, nothing to render");
            return Ok(());
        }
        let stride = image.channels().stride();
        let row_stride = image.row_stride();
        // widest escape is "\x1b[38;2;255;255;255m" + a 3 byte glyph
        let mut line = Vec::with_capacity(image.width() as usize * 24 + RESET.len() + 1);

        for (y, row) in image.pixels().chunks_exact(row_stride).enumerate() {
            line.clear();

            for pixel in row.chunks_exact(stride) {
                // alpha, if present, is ignored
                write!(
                    line,
                    "\x1b[38;2;{};{};{}m{}",
                    pixel[0], pixel[1], pixel[2], self.glyph
                )?;
            }
            line.extend_from_slice(RESET.as_bytes());
            line.push(b'\n');

            sink.write_all(&line).map_err(|err| {
                trace!("Write failed on row {}", y);
                RenderErrors::WriteFailed(err)
            })?;
        }
        sink.flush()?;

        Ok(())
    }
}

/// Render `image` into `sink` with the default block glyph
pub fn render<W: Write>(image: &DecodedImage, sink: W) -> Result<(), RenderErrors> {
    TerminalRenderer::default().render(image, sink)
}
