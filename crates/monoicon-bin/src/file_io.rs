/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::OpenOptions;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use monoicon_core::IconErrors;

/// Label and pattern shown when asking for the input file
const PROMPT: &str = "monochrome icons (*): ";

/// Ask for an input path on `prompt`, reading the answer from `reader`.
///
/// Returns `None` when the user gives an empty answer or closes the input,
/// which callers treat as a cancellation rather than an error.
pub fn select_input<R: BufRead, W: Write>(
    mut reader: R, mut prompt: W
) -> Result<Option<PathBuf>, IconErrors> {
    write!(prompt, "{PROMPT}")?;
    prompt.flush()?;

    let mut answer = String::new();

    if reader.read_line(&mut answer)? == 0 {
        debug!("Input closed while waiting for a file name");
        return Ok(None);
    }
    // terminals quote dropped paths containing spaces
    let answer = answer.trim().trim_matches(|c| c == '\'' || c == '"');

    if answer.is_empty() {
        return Ok(None);
    }
    Ok(Some(PathBuf::from(answer)))
}

/// Ask a yes/no question, anything other than `y` is a no
pub fn confirm<R: BufRead, W: Write>(
    mut reader: R, mut prompt: W, question: &str
) -> Result<bool, IconErrors> {
    writeln!(prompt, "{question} [y/N]")?;
    prompt.flush()?;

    let mut result = String::new();
    reader.read_line(&mut result)?;

    Ok(result.trim() == "y")
}

/// Replace the contents of `path` with `data`
pub fn write_output_file(path: &Path, data: &[u8]) -> Result<(), IconErrors> {
    info!("Writing to {:?}", path);

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);

    writer.write_all(data)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use crate::file_io::{confirm, select_input, write_output_file};

    #[test]
    fn selected_path_is_returned() {
        let mut prompt = vec![];
        let path = select_input(Cursor::new("icons/gps.png\n"), &mut prompt).unwrap();

        assert_eq!(path, Some(PathBuf::from("icons/gps.png")));
        assert_eq!(String::from_utf8(prompt).unwrap(), "monochrome icons (*): ");
    }

    #[test]
    fn quoted_path_is_unquoted() {
        let path = select_input(Cursor::new("'my icons/a b.png'\n"), vec![]).unwrap();
        assert_eq!(path, Some(PathBuf::from("my icons/a b.png")));
    }

    #[test]
    fn empty_answer_cancels() {
        assert_eq!(select_input(Cursor::new("\n"), vec![]).unwrap(), None);
        assert_eq!(select_input(Cursor::new("   \r\n"), vec![]).unwrap(), None);
    }

    #[test]
    fn closed_input_cancels() {
        assert_eq!(select_input(Cursor::new(""), vec![]).unwrap(), None);
    }

    #[test]
    fn only_y_confirms() {
        assert!(confirm(Cursor::new("y\n"), vec![], "Overwrite?").unwrap());
        assert!(!confirm(Cursor::new("yes\n"), vec![], "Overwrite?").unwrap());
        assert!(!confirm(Cursor::new(""), vec![], "Overwrite?").unwrap());
    }

    #[test]
    fn output_file_is_replaced() {
        let path = std::env::temp_dir().join(format!("monoicon-{}-replaced.h", std::process::id()));
        std::fs::write(&path, "a much longer previous file").unwrap();

        write_output_file(&path, b"new").unwrap();
        let contents = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(contents, b"new");
    }
}
