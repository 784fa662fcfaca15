/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible while reading and packing icons
use std::fmt::{Debug, Display, Formatter};

use zune_core::colorspace::ColorSpace;
use zune_image::errors::ImageErrors;

/// All errors that can occur between opening an image and
/// writing its packed representation
pub enum IconErrors {
    /// Width or height does not fit the one byte header fields.
    ///
    /// Contains the width and height of the offending image
    TooLargeDimensions(usize, usize),
    /// The pixel buffer length does not match `width * height`.
    ///
    /// Contains the expected and found lengths
    DimensionMismatch(usize, usize),
    /// The decoded image is in a colorspace we can't reduce to colour triples
    UnsupportedColorSpace(ColorSpace),
    /// The array name is not a valid C identifier
    InvalidIdentifier(String),
    /// The image decoder could not make sense of the file
    DecodeErrors(ImageErrors),
    IoErrors(std::io::Error),
    GenericString(String)
}

impl Debug for IconErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IconErrors::TooLargeDimensions(width, height) => {
                writeln!(
                    f,
                    "Too large dimensions {width}x{height}, width and height must be at most {}",
                    crate::MAX_DIMENSION
                )
            }
            IconErrors::DimensionMismatch(expected, found) => {
                writeln!(
                    f,
                    "Pixel count mismatch, expected {expected:?}, found {found:?}"
                )
            }
            IconErrors::UnsupportedColorSpace(color) => {
                writeln!(f, "Unsupported color space {color:?}")
            }
            IconErrors::InvalidIdentifier(name) => {
                writeln!(f, "{name:?} is not a valid C identifier")
            }
            IconErrors::DecodeErrors(err) => {
                writeln!(f, "Failed to decode image: {err:?}")
            }
            IconErrors::IoErrors(err) => {
                writeln!(f, "I/O error {err}")
            }
            IconErrors::GenericString(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for IconErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for IconErrors {}

impl From<std::io::Error> for IconErrors {
    fn from(value: std::io::Error) -> Self {
        IconErrors::IoErrors(value)
    }
}

impl From<ImageErrors> for IconErrors {
    fn from(value: ImageErrors) -> Self {
        IconErrors::DecodeErrors(value)
    }
}
