/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading encoded images into memory
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use log::trace;

use crate::errors::DecodeErrors;

/// Encoded image bytes together with the size the
/// file system reported for them
pub struct SourceBytes {
    data:         Vec<u8>,
    reported_len: u64
}

impl SourceBytes {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Size of the input as reported before reading
    pub const fn reported_len(&self) -> u64 {
        self.reported_len
    }

    /// Number of bytes actually read
    pub fn bytes_read(&self) -> usize {
        self.data.len()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

/// Read a whole file into memory
///
/// The number of bytes read is compared against the file size reported by
/// the file system, an empty file or a short read is reported as
/// [`DecodeErrors::TruncatedInput`]
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<SourceBytes, DecodeErrors> {
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            DecodeErrors::FileNotFound(path.to_path_buf())
        } else {
            DecodeErrors::IoErrors(err)
        }
    })?;

    let reported_len = file.metadata()?.len();
    trace!("File {:?} reports {} bytes", path, reported_len);

    let capacity =
        usize::try_from(reported_len).map_err(|_| DecodeErrors::AllocationFailed(usize::MAX))?;

    let mut data = Vec::new();
    data.try_reserve_exact(capacity)
        .map_err(|_| DecodeErrors::AllocationFailed(capacity))?;

    file.read_to_end(&mut data)?;

    check_complete(SourceBytes { data, reported_len })
}

/// Read encoded bytes from a stream of unknown length, e.g. standard input
///
/// An empty stream is reported as [`DecodeErrors::TruncatedInput`]
pub fn read_stdin_source<R: Read>(mut reader: R) -> Result<SourceBytes, DecodeErrors> {
    let mut data = Vec::new();

    reader.read_to_end(&mut data)?;
    trace!("Read {} bytes from stream", data.len());

    let reported_len = data.len() as u64;

    check_complete(SourceBytes { data, reported_len })
}

fn check_complete(source: SourceBytes) -> Result<SourceBytes, DecodeErrors> {
    let read = source.data.len() as u64;

    if source.reported_len == 0 || read != source.reported_len {
        return Err(DecodeErrors::TruncatedInput {
            expected: source.reported_len,
            read
        });
    }
    Ok(source)
}
