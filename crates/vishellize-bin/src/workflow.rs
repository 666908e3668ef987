/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::io::{Read, Write};

use log::{debug, info};
use vishellize_image::codecs::ImageFormat;
use vishellize_image::source::{read_source, read_stdin_source, SourceBytes};
use vishellize_render::TerminalRenderer;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::probe_files::probe_source;

/// Decode and display every input in `options`, in order.
///
/// With no inputs JPEG data is read from `stdin`. The first failure stops
/// processing, inputs after it are not touched.
pub(crate) fn view_inputs<R: Read, W: Write>(
    options: &CmdOptions, stdin: R, out: &mut W
) -> Result<(), CliErrors> {
    let renderer = TerminalRenderer::default();

    if options.inputs.is_empty() {
        info!("No input files, reading JPEG data from standard input");

        let source = read_stdin_source(stdin)?;
        return show_source(
            OsStr::new("<stdin>"),
            ImageFormat::Jpeg,
            &source,
            options,
            &renderer,
            out
        );
    }

    info!("Viewing {} input file(s)", options.inputs.len());

    for in_file in &options.inputs {
        let format = ImageFormat::from_path(in_file)?;
        debug!("Treating {:?} as a {} file", in_file, format.name());

        let source = read_source(in_file)?;

        show_source(in_file.as_os_str(), format, &source, options, &renderer, out)?;
    }
    Ok(())
}

fn show_source<W: Write>(
    name: &OsStr, format: ImageFormat, source: &SourceBytes, options: &CmdOptions,
    renderer: &TerminalRenderer, out: &mut W
) -> Result<(), CliErrors> {
    if options.verbose {
        writeln!(out, "File size: {}", source.reported_len())?;
        writeln!(out, "Read {} bytes into buffer.", source.bytes_read())?;
    }
    if options.probe {
        return probe_source(name, format, source, options, out);
    }

    let image = format.decode(source.data(), options.decoder_options())?;

    if options.verbose {
        writeln!(
            out,
            "Image dimensions (px): {}x{}",
            image.width(),
            image.height()
        )?;
    }
    debug!("Rendering {:?}", name);

    renderer.render(&image, &mut *out)?;

    Ok(())
}
