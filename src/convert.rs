// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::path::{Path, PathBuf};

use log::info;

use crate::errors::SpliceError;
use crate::seq::fasta::write_fasta_file;
use crate::seq::splice::read_splice_file;

pub use crate::seq::splice::Validation;

pub const DEFAULT_OUTPUT_FNAME: &str = "splice.data.fasta";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    // Relative paths are resolved against the current directory.
    pub output: PathBuf,
    pub validation: Validation,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            output: PathBuf::from(DEFAULT_OUTPUT_FNAME),
            validation: Validation::Lenient,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output_path: PathBuf,
    pub record_count: usize,
}

/// Converts splice data at `input_path` to `splice.data.fasta` in the current directory.
pub fn convert<P: AsRef<Path>>(input_path: P) -> Result<Conversion, SpliceError> {
    convert_with(input_path, &ConvertOptions::default())
}

/// Converts splice data at `input_path` to FastA, one record per input line, in input order.
///
/// The whole input is parsed before the output is opened, so a failed conversion never touches
/// an existing output file. The output is truncated, not appended to.
pub fn convert_with<P: AsRef<Path>>(
    input_path: P,
    options: &ConvertOptions,
) -> Result<Conversion, SpliceError> {
    let input_path = input_path.as_ref();
    let records = read_splice_file(input_path, options.validation)?;
    info!(
        "Read {} record(s) from {} ({:?})",
        records.len(),
        input_path.display(),
        options.validation
    );

    write_fasta_file(&records, &options.output)?;
    info!("Wrote {}", options.output.display());

    Ok(Conversion {
        output_path: options.output.clone(),
        record_count: records.len(),
    })
}
