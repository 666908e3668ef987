/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::io::Write;

use vishellize_image::codecs::ImageFormat;
use vishellize_image::source::SourceBytes;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::serde::Metadata;

/// Extract metadata from image headers and print it as JSON to `out`.
pub(crate) fn probe_source<W: Write>(
    name: &OsStr, format: ImageFormat, source: &SourceBytes, options: &CmdOptions, out: &mut W
) -> Result<(), CliErrors> {
    let info = format.probe(source.data(), options.decoder_options())?;
    let metadata = Metadata::new(name, source.reported_len(), &info);

    serde_json::to_writer_pretty(&mut *out, &metadata)
        .map_err(|e| CliErrors::ProbeErrors(e.to_string()))?;
    writeln!(out)?;

    Ok(())
}
