/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;
use std::path::Path;

use monoicon_core::{IconErrors, ImageInfo};

use crate::serde::Metadata;

/// Probe an input file, and write its metadata as JSON to `sink`.
pub fn probe_input_file<W: Write>(in_file: &Path, mut sink: W) -> Result<(), IconErrors> {
    let info = ImageInfo::probe(in_file)?;
    let metadata = Metadata::new(in_file.as_os_str().to_os_string(), info);

    let json = serde_json::to_string_pretty(&metadata)
        .map_err(|e| IconErrors::GenericString(e.to_string()))?;

    writeln!(sink, "{json}")?;

    Ok(())
}
