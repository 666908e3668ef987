/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{Error, ErrorKind, Write};

use vishellize_image::{Channels, DecodedImage};
use vishellize_render::{render, RenderErrors, TerminalRenderer, RESET};

/// A sink that accepts a fixed number of writes and fails afterwards
struct FailingSink {
    accepted:  usize,
    remaining: usize
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.remaining == 0 {
            return Err(Error::new(ErrorKind::BrokenPipe, "sink closed"));
        }
        self.remaining -= 1;
        self.accepted += 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn render_to_string(image: &DecodedImage) -> String {
    let mut out = Vec::new();
    render(image, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Remove every `ESC[...m` sequence
fn strip_ansi(text: &str) -> String {
    let mut output = String::new();
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(c);
        }
    }
    output
}

#[test]
fn test_opaque_red_rgba_row() {
    let image = DecodedImage::new(
        2,
        1,
        Channels::RGBA,
        vec![0xFF, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0xFF]
    );

    let output = render_to_string(&image);

    assert_eq!(
        output,
        "\x1b[38;2;255;0;0m█\x1b[38;2;255;0;0m█\x1b[0m\n"
    );
    assert_eq!(output.matches("\x1b[38;2;255;0;0m").count(), 2);
    assert_eq!(output.matches(RESET).count(), 1);
}

#[test]
fn test_alpha_is_ignored() {
    let rgb = DecodedImage::new(2, 1, Channels::RGB, vec![1, 2, 3, 4, 5, 6]);
    let rgba = DecodedImage::new(2, 1, Channels::RGBA, vec![1, 2, 3, 0, 4, 5, 6, 128]);

    assert_eq!(render_to_string(&rgb), render_to_string(&rgba));
}

#[test]
fn test_one_line_per_row() {
    let pixels: Vec<u8> = (0..3 * 4 * 3).map(|x| x as u8).collect();
    let image = DecodedImage::new(3, 4, Channels::RGB, pixels);

    let output = render_to_string(&image);
    let stripped = strip_ansi(&output);

    assert_eq!(stripped, "███\n███\n███\n███\n");
    assert_eq!(output.matches(RESET).count(), 4);

    for line in output.lines() {
        assert!(line.ends_with(RESET));
    }
}

#[test]
fn test_pixel_order_is_row_major() {
    let image = DecodedImage::new(2, 2, Channels::RGB, vec![
        1, 0, 0, 2, 0, 0, //
        3, 0, 0, 4, 0, 0,
    ]);

    let output = render_to_string(&image);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "\x1b[38;2;1;0;0m█\x1b[38;2;2;0;0m█\x1b[0m");
    assert_eq!(lines[1], "\x1b[38;2;3;0;0m█\x1b[38;2;4;0;0m█\x1b[0m");
}

#[test]
fn test_zero_sized_images_render_nothing() {
    let wide = DecodedImage::new(5, 0, Channels::RGBA, vec![]);
    let tall = DecodedImage::new(0, 5, Channels::RGB, vec![]);

    assert!(render_to_string(&wide).is_empty());
    assert!(render_to_string(&tall).is_empty());
}

#[test]
fn test_rendering_is_deterministic() {
    let pixels: Vec<u8> = (0..16 * 16 * 4).map(|x| (x * 7 % 256) as u8).collect();
    let image = DecodedImage::new(16, 16, Channels::RGBA, pixels);

    assert_eq!(render_to_string(&image), render_to_string(&image));
}

#[test]
fn test_custom_glyph() {
    let image = DecodedImage::new(1, 1, Channels::RGB, vec![9, 9, 9]);
    let mut out = Vec::new();

    TerminalRenderer::with_glyph('#')
        .render(&image, &mut out)
        .unwrap();

    assert_eq!(out, b"\x1b[38;2;9;9;9m#\x1b[0m\n");
}

#[test]
fn test_write_failure_stops_rendering() {
    let image = DecodedImage::new(1, 5, Channels::RGB, vec![0; 15]);
    let mut sink = FailingSink {
        accepted:  0,
        remaining: 2
    };

    let err = render(&image, &mut sink).unwrap_err();

    assert!(matches!(err, RenderErrors::WriteFailed(ref e) if e.kind() == ErrorKind::BrokenPipe));
    // two rows went through, the third failed and nothing was tried after
    assert_eq!(sink.accepted, 2);
}
