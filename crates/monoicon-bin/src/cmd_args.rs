/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{Arg, ArgAction, Command};

pub(crate) mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("monoicon")
        .about("Convert an image into a monochrome bitmap array for firmware sources")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read the icon from")
            .long_help(help_strings::INPUT_HELP))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Write to this file instead of standard output"))
        .arg(Arg::new("name")
            .long("name")
            .help("Identifier of the emitted array")
            .conflicts_with("name-from-file"))
        .arg(Arg::new("name-from-file")
            .long("name-from-file")
            .action(ArgAction::SetTrue)
            .help("Derive the array identifier from the input file name"))
        .arg(Arg::new("raw")
            .long("raw")
            .action(ArgAction::SetTrue)
            .requires("out")
            .help("Write the packed bitmap as binary instead of a C array")
            .long_help(help_strings::RAW_HELP))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print image information as JSON and exit"))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files without asking"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the conversion"))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn command_is_well_formed() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn raw_requires_output() {
        let result = create_cmd_args().try_get_matches_from(["monoicon", "-i", "a.png", "--raw"]);
        assert!(result.is_err());
    }

    #[test]
    fn name_options_conflict() {
        let result = create_cmd_args().try_get_matches_from([
            "monoicon",
            "--name",
            "ICON",
            "--name-from-file"
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn input_is_optional() {
        let result = create_cmd_args().try_get_matches_from(["monoicon"]);
        assert!(result.is_ok());
    }
}
