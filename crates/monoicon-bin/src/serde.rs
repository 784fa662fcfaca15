use std::ffi::OsString;

use monoicon_core::ImageInfo;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata {
    file: OsString,
    info: ImageInfo
}

impl Metadata {
    pub fn new(file: OsString, info: ImageInfo) -> Metadata {
        Metadata { file, info }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 5)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("width", &self.info.width)?;
        state.serialize_field("height", &self.info.height)?;
        state.serialize_field("colorspace", &format!("{:?}", self.info.colorspace))?;
        state.serialize_field("fits", &self.info.fits())?;

        state.end()
    }
}
