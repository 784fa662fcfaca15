/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoded source images
use std::path::Path;

use log::{debug, trace};
use zune_core::colorspace::ColorSpace;
use zune_image::image::Image;

use crate::bitmap::MAX_DIMENSION;
use crate::errors::IconErrors;
use crate::threshold::Pixel;

/// Basic facts about an image file, gathered without packing it
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageInfo {
    pub width:      usize,
    pub height:     usize,
    pub colorspace: ColorSpace
}

impl ImageInfo {
    /// Decode `path` and report its dimensions and colorspace
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<ImageInfo, IconErrors> {
        let image = Image::open(path)?;
        let (width, height) = image.dimensions();

        Ok(ImageInfo {
            width,
            height,
            colorspace: image.colorspace()
        })
    }

    /// Whether the image can be packed, both sides at most [`MAX_DIMENSION`]
    pub const fn fits(&self) -> bool {
        self.width <= MAX_DIMENSION && self.height <= MAX_DIMENSION
    }
}

/// A decoded image reduced to colour triples, stored row-major.
///
/// Alpha is discarded when converting from decoder output, an image is only
/// ever looked at through [`is_foreground`](crate::is_foreground).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceImage {
    width:  usize,
    height: usize,
    pixels: Vec<Pixel>
}

impl SourceImage {
    /// Create an image from row-major pixels
    ///
    /// # Errors
    /// If `pixels.len()` is not `width * height`
    pub fn new(pixels: Vec<Pixel>, width: usize, height: usize) -> Result<SourceImage, IconErrors> {
        let expected = width
            .checked_mul(height)
            .ok_or(IconErrors::TooLargeDimensions(width, height))?;

        if pixels.len() != expected {
            return Err(IconErrors::DimensionMismatch(expected, pixels.len()));
        }
        Ok(SourceImage {
            width,
            height,
            pixels
        })
    }

    /// Create an image by calling `func(x, y)` for every pixel
    ///
    /// # Example
    /// - A 4x4 checkerboard
    /// ```
    /// use monoicon_core::SourceImage;
    ///
    /// let board = SourceImage::from_fn(4, 4, |x, y| {
    ///     if (x + y) % 2 == 0 { [255, 255, 255] } else { [0, 0, 0] }
    /// });
    /// assert_eq!(board.pixel(1, 0), [0, 0, 0]);
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> SourceImage
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let mut pixels = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                pixels.push(func(x, y));
            }
        }
        SourceImage {
            width,
            height,
            pixels
        }
    }

    /// Convert an interleaved 8-bit buffer into colour triples
    ///
    /// Luma is spread over all three channels, BGR orders are swapped
    /// back to RGB and alpha channels are dropped.
    ///
    /// # Errors
    /// - `UnsupportedColorSpace` for anything other than Luma, LumaA, RGB, RGBA, BGR and BGRA
    /// - `DimensionMismatch` if `data` is not exactly `width * height` pixels long
    pub fn from_interleaved(
        data: &[u8], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<SourceImage, IconErrors> {
        let components = match colorspace {
            ColorSpace::Luma => 1,
            ColorSpace::LumaA => 2,
            ColorSpace::RGB | ColorSpace::BGR => 3,
            ColorSpace::RGBA | ColorSpace::BGRA => 4,
            _ => return Err(IconErrors::UnsupportedColorSpace(colorspace))
        };
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(components))
            .ok_or(IconErrors::TooLargeDimensions(width, height))?;

        if data.len() != expected {
            return Err(IconErrors::DimensionMismatch(expected, data.len()));
        }

        let pixels = data
            .chunks_exact(components)
            .map(|px| match colorspace {
                ColorSpace::Luma | ColorSpace::LumaA => [px[0], px[0], px[0]],
                ColorSpace::BGR | ColorSpace::BGRA => [px[2], px[1], px[0]],
                _ => [px[0], px[1], px[2]]
            })
            .collect();

        SourceImage::new(pixels, width, height)
    }

    /// Convert an already decoded zune image.
    ///
    /// Only the first frame of animated images is used, higher bit depths
    /// are scaled down to 8 bits first.
    pub fn from_zune_image(image: &Image) -> Result<SourceImage, IconErrors> {
        let (width, height) = image.dimensions();
        let colorspace = image.colorspace();

        trace!("Image colorspace: {colorspace:?}, dimensions {width}x{height}");

        let frames = image.flatten_to_u8();
        let first = frames
            .first()
            .ok_or_else(|| IconErrors::GenericString("Image contains no frames".to_string()))?;

        SourceImage::from_interleaved(first, width, height, colorspace)
    }

    /// Open and decode an image file
    ///
    /// Any decoder failure is reported before pixels are looked at.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<SourceImage, IconErrors> {
        debug!("Decoding {:?}", path.as_ref());

        let image = Image::open(path)?;

        SourceImage::from_zune_image(&image)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return the pixel at column `x` of row `y`
    ///
    /// # Panics
    /// If `(x, y)` is outside the image
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    /// Return all pixels of row `y`
    pub fn row(&self, y: usize) -> &[Pixel] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        (0..self.height).map(|y| self.row(y))
    }
}
