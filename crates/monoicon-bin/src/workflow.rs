/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stderr, stdin, stdout, BufRead, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use monoicon_core::{
    is_c_identifier, name_from_path, IconEncoder, IconErrors, IconOptions, SourceImage,
    DEFAULT_ARRAY_NAME
};

use crate::cmd_parsers::global_options::{CmdOptions, NameOption};
use crate::file_io::{confirm, select_input, write_output_file};
use crate::probe_files::probe_input_file;

pub(crate) fn create_and_exec_workflow_from_cmd(cmd_opts: &CmdOptions) -> Result<(), IconErrors> {
    exec_workflow(cmd_opts, stdin().lock(), stderr(), stdout().lock())
}

/// Run one conversion.
///
/// Questions are asked on `prompt` and answered from `answers`, converted
/// data goes to `out` unless an output file was given. Nothing is written
/// anywhere until the whole image has been encoded.
pub(crate) fn exec_workflow<R: BufRead, P: Write, W: Write>(
    cmd_opts: &CmdOptions, mut answers: R, mut prompt: P, mut out: W
) -> Result<(), IconErrors> {
    let in_file = match &cmd_opts.input {
        Some(path) => path.clone(),
        None => match select_input(&mut answers, &mut prompt)? {
            Some(path) => path,
            None => {
                debug!("No file selected, nothing to do");
                return Ok(());
            }
        }
    };

    if cmd_opts.probe {
        return probe_input_file(&in_file, out);
    }

    verify_file_paths(
        &in_file,
        cmd_opts.output.as_deref(),
        cmd_opts.override_files,
        &mut answers,
        &mut prompt
    )?;

    let options = icon_options(&in_file, &cmd_opts.name)?;
    let image = SourceImage::open(&in_file)?;

    info!(
        "Decoded {:?}, {}x{} pixels",
        in_file,
        image.width(),
        image.height()
    );

    let encoder = IconEncoder::new(&image, options);
    let mut encoded = Vec::new();

    if cmd_opts.raw {
        encoder.encode_raw(&mut encoded)?;
    } else {
        encoder.encode(&mut encoded)?;
    }

    match cmd_opts.output.as_deref() {
        Some(path) => write_output_file(path, &encoded)?,
        None => {
            out.write_all(&encoded)?;
            out.flush()?;
        }
    }
    info!("Wrote {} bytes", encoded.len());

    Ok(())
}

/// Build encoder options for `in_file`, validating any user supplied name
pub(crate) fn icon_options(in_file: &Path, name: &NameOption) -> Result<IconOptions, IconErrors> {
    let name = match name {
        NameOption::Placeholder => DEFAULT_ARRAY_NAME.to_string(),
        NameOption::Named(name) => name.clone(),
        NameOption::FromFile => name_from_path(in_file)
    };

    if !is_c_identifier(&name) {
        return Err(IconErrors::InvalidIdentifier(name));
    }
    debug!("Array name: {name}");

    Ok(IconOptions::default()
        .set_name(&name)
        .set_source(&in_file.display().to_string()))
}

fn verify_file_paths<R: BufRead, P: Write>(
    in_path: &Path, out_path: Option<&Path>, override_files: bool, answers: R, prompt: P
) -> Result<(), IconErrors> {
    if !in_path.exists() {
        return Err(IconErrors::GenericString(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file() {
        return Err(IconErrors::GenericString(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }

    let Some(out_path) = out_path else {
        return Ok(());
    };

    if same_file(in_path, out_path) {
        return Err(IconErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            in_path
        )));
    }

    if out_path.exists() {
        if override_files {
            info!("Overwriting path {:?} ", out_path);
        } else if !confirm(
            answers,
            prompt,
            &format!("File {:?} exists, overwrite", out_path)
        )? {
            return Err(IconErrors::GenericString(format!(
                "Not overwriting file {:?}",
                out_path
            )));
        }
    }
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => PathBuf::from(a) == PathBuf::from(b)
    }
}
