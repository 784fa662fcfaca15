/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

/// Placeholder array name, expected to be renamed by hand after pasting
pub const DEFAULT_ARRAY_NAME: &str = "ICON_NAME";

/// Check that `name` can be used as a C identifier
pub fn is_c_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();

    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {
            bytes.all(|c| c.is_ascii_alphanumeric() || c == b'_')
        }
        _ => false
    }
}

/// Derive an upper case array name from a file name
///
/// `icons/gps-fix.png` becomes `GPS_FIX`, a stem starting with a digit
/// gets an `ICON_` prefix.
pub fn name_from_path<P: AsRef<Path>>(path: P) -> String {
    let stem = match path.as_ref().file_stem() {
        Some(stem) => stem.to_string_lossy(),
        None => return DEFAULT_ARRAY_NAME.to_string()
    };

    let mut name: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if name.is_empty() {
        return DEFAULT_ARRAY_NAME.to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, "ICON_");
    }
    name
}
