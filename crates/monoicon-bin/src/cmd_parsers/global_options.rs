/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

/// How the array identifier is chosen
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NameOption {
    /// Keep the `ICON_NAME` placeholder
    Placeholder,
    /// Use the given identifier
    Named(String),
    /// Derive the identifier from the input file name
    FromFile
}

#[derive(Clone, Debug)]
pub struct CmdOptions {
    pub input:          Option<PathBuf>,
    pub output:         Option<PathBuf>,
    pub name:           NameOption,
    pub raw:            bool,
    pub probe:          bool,
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            input:          None,
            output:         None,
            name:           NameOption::Placeholder,
            raw:            false,
            probe:          false,
            override_files: false
        }
    }
}

fn on_command_line(options: &ArgMatches, id: &str) -> bool {
    options.value_source(id) == Some(ValueSource::CommandLine)
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.input = options.get_one::<String>("in").map(PathBuf::from);
    cmd_options.output = options.get_one::<String>("out").map(PathBuf::from);

    if let Some(name) = options.get_one::<String>("name") {
        info!("Using array name {name}");
        cmd_options.name = NameOption::Named(name.clone());
    } else if on_command_line(options, "name-from-file") {
        info!("Deriving array name from the input file");
        cmd_options.name = NameOption::FromFile;
    }

    if on_command_line(options, "raw") {
        info!("Writing binary output");
        cmd_options.raw = true;
    }
    if on_command_line(options, "probe") {
        cmd_options.probe = true;
    }
    if on_command_line(options, "all-yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
