/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// A single pixel as three 8-bit colour channels
pub type Pixel = [u8; 3];

/// Decide whether a pixel is drawn.
///
/// Any channel above zero turns the pixel on, only pure black is off.
/// Channel order does not matter.
#[inline]
pub const fn is_foreground(pixel: Pixel) -> bool {
    pixel[0] > 0 || pixel[1] > 0 || pixel[2] > 0
}

#[cfg(test)]
mod tests {
    use crate::threshold::is_foreground;

    #[test]
    fn black_is_background() {
        assert!(!is_foreground([0, 0, 0]));
    }

    #[test]
    fn single_channel_turns_pixel_on() {
        for value in 1..=255_u8 {
            assert!(is_foreground([value, 0, 0]));
            assert!(is_foreground([0, value, 0]));
            assert!(is_foreground([0, 0, value]));
        }
    }

    #[test]
    fn sampled_domain_matches_rule() {
        // stride through the cube, hitting every value on each axis at least once
        for r in (0..=255_u16).step_by(3) {
            for g in (0..=255_u16).step_by(17) {
                for b in (0..=255_u16).step_by(5) {
                    let pixel = [r as u8, g as u8, b as u8];
                    let expected = r > 0 || g > 0 || b > 0;
                    assert_eq!(is_foreground(pixel), expected, "{pixel:?}");
                }
            }
        }
    }
}
