/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Text and binary emission of packed bitmaps
use std::fmt::Write as _;
use std::io::Write;

use log::debug;

use crate::bitmap::PackedBitmap;
use crate::errors::IconErrors;
use crate::identifier::{is_c_identifier, DEFAULT_ARRAY_NAME};
use crate::image::SourceImage;

/// Options controlling how the array literal is written
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconOptions {
    name:   String,
    source: String
}

impl Default for IconOptions {
    fn default() -> Self {
        IconOptions {
            name:   DEFAULT_ARRAY_NAME.to_string(),
            source: String::new()
        }
    }
}

impl IconOptions {
    /// Set the array identifier, defaults to [`DEFAULT_ARRAY_NAME`]
    pub fn set_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the path printed in the leading comment
    pub fn set_source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Writes a [`SourceImage`] as a monochrome C array.
///
/// The output looks like
/// ```text
/// // icons/dot.png
/// const uint8_t ICON_NAME[] = {
///   9, 1, 0, 0, // width, height, reserved, reserved
///   0b11111111, 0b1, //  0
/// };
/// ```
pub struct IconEncoder<'a> {
    image:   &'a SourceImage,
    options: IconOptions
}

impl<'a> IconEncoder<'a> {
    pub fn new(image: &'a SourceImage, options: IconOptions) -> IconEncoder<'a> {
        IconEncoder { image, options }
    }

    fn check_options(&self) -> Result<(), IconErrors> {
        if !is_c_identifier(&self.options.name) {
            return Err(IconErrors::InvalidIdentifier(self.options.name.clone()));
        }
        Ok(())
    }

    fn encode_text(&self, packed: &PackedBitmap) -> String {
        let mut out = String::new();

        // writing to a String can't fail
        let _ = writeln!(out, "// {}", self.options.source);
        let _ = writeln!(out, "const uint8_t {}[] = {{", self.options.name);
        let _ = writeln!(
            out,
            "  {}, {}, 0, 0, // width, height, reserved, reserved",
            packed.width(),
            packed.height()
        );

        for (y, row) in packed.rows().iter().enumerate() {
            out.push_str("  ");

            for group in row {
                out.push_str(&group.literal());
                out.push_str(", ");
            }
            let _ = writeln!(out, "// {y:>2}");
        }
        out.push_str("};\n");

        out
    }

    /// Encode to a string
    pub fn encode_to_string(&self) -> Result<String, IconErrors> {
        self.check_options()?;

        let packed = PackedBitmap::pack(self.image)?;

        Ok(self.encode_text(&packed))
    }

    /// Encode the text literal into `sink`, returning the number of bytes written
    pub fn encode<W: Write>(&self, mut sink: W) -> Result<usize, IconErrors> {
        let text = self.encode_to_string()?;

        sink.write_all(text.as_bytes())?;
        sink.flush()?;

        debug!("Wrote {} bytes of text", text.len());

        Ok(text.len())
    }

    /// Encode the binary form (see [`PackedBitmap::to_bytes`]) into `sink`,
    /// returning the number of bytes written
    pub fn encode_raw<W: Write>(&self, mut sink: W) -> Result<usize, IconErrors> {
        let bytes = PackedBitmap::pack(self.image)?.to_bytes();

        sink.write_all(&bytes)?;
        sink.flush()?;

        debug!("Wrote {} bytes of packed bitmap", bytes.len());

        Ok(bytes.len())
    }
}
