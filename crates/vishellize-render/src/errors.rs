/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

pub enum RenderErrors {
    /// The output sink rejected a write or a flush
    WriteFailed(std::io::Error)
}

impl Debug for RenderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WriteFailed(err) => write!(f, "Couldn't write to output: {}", err)
        }
    }
}

impl Display for RenderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for RenderErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WriteFailed(err) => Some(err)
        }
    }
}

impl From<std::io::Error> for RenderErrors {
    fn from(value: std::io::Error) -> Self {
        Self::WriteFailed(value)
    }
}
