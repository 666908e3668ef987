/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use vishellize_image::DecodeErrors;
use vishellize_render::RenderErrors;

/// Reasons an invocation ends early
pub enum CliErrors {
    /// Help was asked for in a way the pre-scan didn't catch, e.g. `-vh`.
    /// Holds the rendered help text.
    HelpRequested(String),
    /// A leading dash argument we don't understand
    InvalidFlag(String),
    /// A known flag with a bad or missing value
    InvalidArguments(String),
    DecodeErrors(DecodeErrors),
    RenderErrors(RenderErrors),
    ProbeErrors(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HelpRequested(_) => write!(f, "Help requested"),
            Self::InvalidFlag(flag) => write!(f, "Invalid flag '{}'.", flag),
            Self::InvalidArguments(reason) => write!(f, "Invalid arguments: {}", reason),
            Self::DecodeErrors(err) => write!(f, "{:?}", err),
            Self::RenderErrors(err) => write!(f, "{:?}", err),
            Self::ProbeErrors(reason) => write!(f, "Couldn't write metadata: {}", reason)
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<DecodeErrors> for CliErrors {
    fn from(value: DecodeErrors) -> Self {
        Self::DecodeErrors(value)
    }
}

impl From<RenderErrors> for CliErrors {
    fn from(value: RenderErrors) -> Self {
        Self::RenderErrors(value)
    }
}

/// Anything written to the output stream failing is a render failure
impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        Self::RenderErrors(RenderErrors::WriteFailed(value))
    }
}
