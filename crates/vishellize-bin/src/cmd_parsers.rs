/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Command;

use crate::cmd_parsers::global_options::{parse_options, CmdOptions};
use crate::errors::CliErrors;

pub mod global_options;

/// Match `args` against `cmd` and build the options for this invocation
pub fn parse_args(mut cmd: Command, args: &[OsString]) -> Result<CmdOptions, CliErrors> {
    match cmd.try_get_matches_from_mut(args) {
        Ok(matches) => Ok(parse_options(&matches)),
        Err(err) => Err(match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                CliErrors::HelpRequested(cmd.render_help().to_string())
            }
            ErrorKind::UnknownArgument => match err.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(flag)) => CliErrors::InvalidFlag(flag.clone()),
                _ => CliErrors::InvalidArguments(first_line(&err.to_string()))
            },
            _ => CliErrors::InvalidArguments(first_line(&err.to_string()))
        })
    }
}

/// clap errors span several lines, keep the one describing the problem
fn first_line(message: &str) -> String {
    message
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}
