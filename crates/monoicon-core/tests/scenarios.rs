/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use monoicon_core::{IconEncoder, IconErrors, IconOptions, SourceImage};
use zune_core::colorspace::ColorSpace;
use zune_image::image::Image;

const ON: [u8; 3] = [255, 255, 255];
const OFF: [u8; 3] = [0, 0, 0];

fn encode(image: &SourceImage, source: &str) -> String {
    let options = IconOptions::default().set_source(source);
    IconEncoder::new(image, options).encode_to_string().unwrap()
}

fn row_lines(text: &str) -> Vec<&str> {
    // comment, declaration and header come first, closing brace last
    let lines: Vec<&str> = text.lines().collect();
    lines[3..lines.len() - 1].to_vec()
}

#[test]
fn single_black_pixel() {
    let image = SourceImage::from_fn(1, 1, |_, _| OFF);

    assert_eq!(
        encode(&image, "black.png"),
        "// black.png\n\
         const uint8_t ICON_NAME[] = {\n  \
         1, 1, 0, 0, // width, height, reserved, reserved\n  \
         0b0, //  0\n\
         };\n"
    );
}

#[test]
fn single_red_pixel() {
    let image = SourceImage::from_fn(1, 1, |_, _| [255, 0, 0]);
    let text = encode(&image, "red.png");

    assert_eq!(row_lines(&text), vec!["  0b1, //  0"]);
}

#[test]
fn short_final_group_is_not_padded() {
    let image = SourceImage::from_fn(9, 1, |_, _| ON);
    let text = encode(&image, "nine.png");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[2], "  9, 1, 0, 0, // width, height, reserved, reserved");
    assert_eq!(row_lines(&text), vec!["  0b11111111, 0b1, //  0"]);
}

#[test]
fn rows_are_emitted_in_order() {
    let image = SourceImage::from_fn(8, 2, |_, y| if y == 0 { OFF } else { ON });
    let text = encode(&image, "two_rows.png");

    assert_eq!(
        row_lines(&text),
        vec!["  0b00000000, //  0", "  0b11111111, //  1"]
    );
}

#[test]
fn row_comment_matches_index() {
    let image = SourceImage::from_fn(12, 120, |x, y| if (x + y) % 3 == 0 { ON } else { OFF });
    let text = encode(&image, "pattern.png");

    for (y, line) in row_lines(&text).iter().enumerate() {
        assert!(line.ends_with(&format!("// {y:>2}")), "{line}");
        assert_eq!(line.matches("0b").count(), 2);
    }
}

#[test]
fn header_has_two_reserved_zeros() {
    let image = SourceImage::from_fn(200, 17, |_, _| ON);
    let text = encode(&image, "wide.png");
    let header = text.lines().nth(2).unwrap();
    let values: Vec<&str> = header
        .split("//")
        .next()
        .unwrap()
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    assert_eq!(values, vec!["200", "17", "0", "0"]);
}

#[test]
fn near_black_is_foreground() {
    let image = SourceImage::from_fn(3, 1, |x, _| match x {
        0 => [0, 0, 1],
        1 => [0, 0, 0],
        _ => [0, 1, 0]
    });
    let text = encode(&image, "dim.png");

    assert_eq!(row_lines(&text), vec!["  0b101, //  0"]);
}

#[test]
fn oversized_image_is_rejected() {
    let image = SourceImage::from_fn(256, 256, |_, _| OFF);
    let result = IconEncoder::new(&image, IconOptions::default()).encode_to_string();

    assert!(matches!(result, Err(IconErrors::TooLargeDimensions(256, 256))));
}

#[test]
fn custom_name_is_used() {
    let image = SourceImage::from_fn(1, 1, |_, _| ON);
    let options = IconOptions::default()
        .set_name("GPS_FIX")
        .set_source("gps_fix.png");
    let text = IconEncoder::new(&image, options).encode_to_string().unwrap();

    assert_eq!(text.lines().nth(1).unwrap(), "const uint8_t GPS_FIX[] = {");
}

#[test]
fn decoded_grayscale_image() {
    let pixels = [0, 0, 30, 0, 0, 0, 0, 255, 0];
    let image = Image::from_u8(&pixels, 3, 3, ColorSpace::Luma);
    let source = SourceImage::from_zune_image(&image).unwrap();

    assert_eq!(
        row_lines(&encode(&source, "gray.pgm")),
        vec!["  0b001, //  0", "  0b000, //  1", "  0b010, //  2"]
    );
}

#[test]
fn decoded_rgba_image_ignores_alpha() {
    #[rustfmt::skip]
    let pixels = [
        0, 0, 0, 255,   10, 0, 0, 0,
    ];
    let image = Image::from_u8(&pixels, 2, 1, ColorSpace::RGBA);
    let source = SourceImage::from_zune_image(&image).unwrap();

    assert_eq!(row_lines(&encode(&source, "alpha.png")), vec!["  0b01, //  0"]);
}

#[test]
fn missing_file_fails_before_encoding() {
    let result = SourceImage::open("/nonexistent/icon.png");
    assert!(result.is_err());
}

#[test]
fn decode_ppm_file_from_disk() {
    let path = std::env::temp_dir().join(format!("monoicon-{}.ppm", std::process::id()));

    let mut contents = b"P6\n2 2\n255\n".to_vec();
    contents.extend_from_slice(&[0, 0, 0, 0, 0, 200, 1, 0, 0, 0, 0, 0]);
    std::fs::write(&path, contents).unwrap();

    let image = SourceImage::open(&path);
    std::fs::remove_file(&path).unwrap();
    let image = image.unwrap();

    assert_eq!((image.width(), image.height()), (2, 2));
    assert_eq!(
        row_lines(&encode(&image, "tiny.ppm")),
        vec!["  0b01, //  0", "  0b10, //  1"]
    );
}
