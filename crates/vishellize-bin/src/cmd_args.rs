/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub mod help_strings;

/// Returns true if `-h` or `--help` appears before any `--` separator.
///
/// The first element of `args` is the program name and is skipped.
pub fn wants_help(args: &[OsString]) -> bool {
    args.iter()
        .skip(1)
        .map(OsString::as_os_str)
        .take_while(|arg| *arg != OsStr::new("--"))
        .any(|arg| arg == OsStr::new("-h") || arg == OsStr::new("--help"))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("vishellize")
        .about("Display JPEG and PNG images in the terminal using 24-bit color")
        .override_usage(help_strings::USAGE)
        .after_help(help_strings::AFTER_HELP)
        .arg(Arg::new("in")
            .help("Image files to display, .png, .jpg or .jpeg")
            .value_name("FILE")
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .help("Print file size, bytes read and image dimensions before each image"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print image metadata as JSON instead of rendering")
            .long_help(help_strings::PROBE_HELP))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum image width accepted by the decoders")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum image height accepted by the decoders")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding steps"))
}
