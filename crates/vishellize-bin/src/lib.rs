/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::io::{Read, Write};
use std::process::exit;

use log::debug;

pub use crate::cmd_parsers::global_options::CmdOptions;
pub use crate::errors::CliErrors;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod probe_files;
mod serde;
mod workflow;

pub fn main() {
    let stdin = std::io::stdin();

    let status = run(
        std::env::args_os(),
        stdin.lock(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        |options| cmd_parsers::global_options::setup_logger(options.log_level)
    );

    exit(status);
}

/// Run one invocation of the viewer and return the process exit code.
///
/// `args` includes the program name. `on_options` is called once the command
/// line has been understood and before any input is read.
pub fn run<I, T, R, O, E, F>(
    args: I, stdin: R, stdout: &mut O, stderr: &mut E, on_options: F
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    R: Read,
    O: Write,
    E: Write,
    F: FnOnce(&CmdOptions)
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut cmd = cmd_args::create_cmd_args();

    // help wins over everything else on the command line
    if cmd_args::wants_help(&args) {
        return match write!(stdout, "{}", cmd.render_help()) {
            Ok(()) => 0,
            Err(_) => 1
        };
    }

    let result = cmd_parsers::parse_args(cmd, &args).and_then(|options| {
        on_options(&options);
        workflow::view_inputs(&options, stdin, &mut *stdout)
    });

    match result {
        Ok(()) => 0,
        Err(CliErrors::HelpRequested(text)) => match write!(stdout, "{}", text) {
            Ok(()) => 0,
            Err(_) => 1
        },
        Err(err) => {
            debug!("Could not complete workflow, reason {:?}", err);
            let _ = writeln!(stderr, "{}", err);
            1
        }
    }
}
