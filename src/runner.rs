// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use crate::config::ConverterConfig;
use crate::convert::{convert_with, ConvertOptions, Validation, DEFAULT_OUTPUT_FNAME};
use crate::errors::SpliceError;

pub const USAGE: &str = "
Error: insufficient arguments.

Command:

\tsplice2fasta <path_splice_data>
\tExample: splice2fasta splice.data.txt
";

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Splice data file (exactly one)
    #[arg(value_name = "path_splice_data")]
    inputs: Vec<PathBuf>,

    /// Output FastA file
    #[arg(short, long, help = "Output FastA file; default: splice.data.fasta")]
    output: Option<PathBuf>,

    /// Reject malformed lines (all of them reported), instead of failing on the first short one
    #[arg(long)]
    strict: bool,

    /// JSON config file (keys: output, strict)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

// Flags take precedence over the config file, which takes precedence over defaults.
fn resolve_options(cli: &Cli, config: Option<ConverterConfig>) -> ConvertOptions {
    let config = config.unwrap_or_default();
    let output = match (&cli.output, config.output) {
        (Some(flag), Some(cfg)) => {
            warn!(
                "--output {} overrides config output {}",
                flag.display(),
                cfg.display()
            );
            flag.clone()
        }
        (Some(flag), None) => flag.clone(),
        (None, Some(cfg)) => cfg,
        (None, None) => PathBuf::from(DEFAULT_OUTPUT_FNAME),
    };
    let validation = if cli.strict || config.strict.unwrap_or(false) {
        Validation::Strict
    } else {
        Validation::Lenient
    };
    ConvertOptions { output, validation }
}

pub fn run() -> Result<(), SpliceError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();

    // Wrong argument count is not an error as far as the shell is concerned.
    let [input] = cli.inputs.as_slice() else {
        info!("Expected 1 input file, got {}", cli.inputs.len());
        print!("{}", USAGE);
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => {
            info!("Reading config {}", path.display());
            Some(ConverterConfig::from_file(path)?)
        }
        None => None,
    };
    let options = resolve_options(&cli, config);

    let conversion = convert_with(input, &options)?;
    info!("Converted {} record(s)", conversion.record_count);
    println!(
        "\nThe \"{}\" file was generated.\n",
        conversion.output_path.display()
    );

    Ok(())
}
