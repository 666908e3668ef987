/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, Level};
use vishellize_image::zune_core::options::DecoderOptions;

/// Everything an invocation needs to know, built once from the command line
#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub inputs:     Vec<PathBuf>,
    pub verbose:    bool,
    pub probe:      bool,
    pub max_width:  usize,
    pub max_height: usize,
    pub log_level:  Level
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            inputs:     Vec::new(),
            verbose:    false,
            probe:      false,
            max_width:  16384,
            max_height: 16384,
            log_level:  Level::Warn
        }
    }

    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
    }
}

impl Default for CmdOptions {
    fn default() -> Self {
        CmdOptions::new()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(inputs) = options.get_many::<PathBuf>("in") {
        cmd_options.inputs = inputs.cloned().collect();
    }
    cmd_options.verbose = options.get_flag("verbose");
    cmd_options.probe = options.get_flag("probe");

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    cmd_options.log_level = log_level(options);

    cmd_options
}

fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(log_level: Level) {
    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {}", err);
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
