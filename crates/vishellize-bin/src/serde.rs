use std::ffi::OsStr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use vishellize_image::codecs::ImageInfo;

pub struct Metadata<'a> {
    file:      &'a OsStr,
    file_size: u64,
    info:      &'a ImageInfo
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a OsStr, file_size: u64, info: &'a ImageInfo) -> Metadata<'a> {
        Metadata {
            file,
            file_size,
            info
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageMetadata", 6)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("format", self.info.format.name())?;
        state.serialize_field("width", &self.info.width)?;
        state.serialize_field("height", &self.info.height)?;
        state.serialize_field("channels", &self.info.channels)?;

        state.end()
    }
}
