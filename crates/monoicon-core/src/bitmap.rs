/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bit packing of thresholded rows
use log::trace;

use crate::errors::IconErrors;
use crate::image::SourceImage;
use crate::threshold::is_foreground;

/// Largest width or height representable in the one byte header fields
pub const MAX_DIMENSION: usize = 255;

/// Up to eight consecutive pixels of a row.
///
/// The first pixel of the group is stored in the most significant of
/// the `len` used bits, so a group of three pixels `on, off, on` is `0b101`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BitGroup {
    bits: u8,
    len:  u8
}

impl BitGroup {
    /// Pack a run of at most 8 on/off values, first value most significant
    ///
    /// # Panics
    /// If `values` is empty or longer than 8
    pub(crate) fn from_bits(values: &[bool]) -> BitGroup {
        assert!(!values.is_empty() && values.len() <= 8);

        let bits = values
            .iter()
            .fold(0_u8, |acc, on| (acc << 1) | u8::from(*on));

        BitGroup {
            bits,
            len: values.len() as u8
        }
    }

    /// The packed pixels, right aligned
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Number of pixels in this group, 1 to 8
    pub const fn len(self) -> u8 {
        self.len
    }

    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// The group as a left aligned byte, unused low bits zeroed
    pub const fn to_byte(self) -> u8 {
        if self.len >= 8 {
            self.bits
        } else {
            self.bits << (8 - self.len)
        }
    }

    /// The group as a C binary literal.
    ///
    /// Exactly `len` digits are written, a short final group is not padded
    /// so `0b1` is the single-pixel group.
    pub fn literal(self) -> String {
        format!("0b{:0width$b}", self.bits, width = usize::from(self.len))
    }
}

/// A thresholded image, rows of [`BitGroup`]s
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackedBitmap {
    width:  u8,
    height: u8,
    rows:   Vec<Vec<BitGroup>>
}

impl PackedBitmap {
    /// Threshold and pack every row of `image`
    ///
    /// # Errors
    /// `TooLargeDimensions` when width or height exceeds [`MAX_DIMENSION`],
    /// sizes are never truncated into the header.
    pub fn pack(image: &SourceImage) -> Result<PackedBitmap, IconErrors> {
        let (width, height) = (image.width(), image.height());

        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(IconErrors::TooLargeDimensions(width, height));
        }

        let rows: Vec<Vec<BitGroup>> = image
            .rows()
            .map(|row| {
                let bits: Vec<bool> = row.iter().map(|px| is_foreground(*px)).collect();
                bits.chunks(8).map(BitGroup::from_bits).collect()
            })
            .collect();

        trace!("Packed {} rows of {} groups", rows.len(), width.div_ceil(8));

        Ok(PackedBitmap {
            width: width as u8,
            height: height as u8,
            rows
        })
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn height(&self) -> u8 {
        self.height
    }

    /// `[width, height, 0, 0]`, the last two bytes are reserved
    pub const fn header(&self) -> [u8; 4] {
        [self.width, self.height, 0, 0]
    }

    pub fn rows(&self) -> &[Vec<BitGroup>] {
        &self.rows
    }

    /// Number of bytes each row occupies in the binary form
    pub const fn row_stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// The binary form: header followed by `row_stride()` bytes per row,
    /// the last byte of a row zero padded on the right.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.row_stride() * usize::from(self.height));

        out.extend_from_slice(&self.header());

        for row in &self.rows {
            out.extend(row.iter().map(|group| group.to_byte()));
        }
        out
    }
}
