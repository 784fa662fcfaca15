/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Monochrome icon packing for firmware sources.
//!
//! An image is reduced to one bit per pixel, where any pixel that is not pure
//! black is foreground, and serialized as a C array literal with the following layout:
//! ```text
//! ╔══════════════════╤═══════════════════════════════════════════════════╗
//! ║ Bytes            │ Description                                       ║
//! ╠══════════════════╪═══════════════════════════════════════════════════╣
//! ║ 1                │ width in pixels (at most 255)                     ║
//! ╟──────────────────┼───────────────────────────────────────────────────╢
//! ║ 1                │ height in pixels (at most 255)                    ║
//! ╟──────────────────┼───────────────────────────────────────────────────╢
//! ║ 2                │ reserved, always zero                             ║
//! ╟──────────────────┼───────────────────────────────────────────────────╢
//! ║ ceil(w/8) * h    │ rows top to bottom, 8 pixels per byte, MSB first  ║
//! ╚══════════════════╧═══════════════════════════════════════════════════╝
//!```
//!
//! The text literal writes each group of eight pixels as a `0b` binary literal.
//! A short final group of a row is written with only as many digits as
//! there are pixels left, see [`BitGroup::literal`].
//!
//! # Example
//! ```
//! use monoicon_core::{IconEncoder, IconOptions, SourceImage};
//!
//! let image = SourceImage::from_fn(9, 1, |_, _| [255, 255, 255]);
//! let options = IconOptions::default().set_source("dot.png");
//! let text = IconEncoder::new(&image, options).encode_to_string().unwrap();
//!
//! assert!(text.contains("  0b11111111, 0b1, //  0\n"));
//! ```
pub use bitmap::*;
pub use encoder::*;
pub use errors::IconErrors;
pub use identifier::*;
pub use image::*;
pub use threshold::*;

mod bitmap;
mod encoder;
pub mod errors;
mod identifier;
mod image;
mod threshold;
