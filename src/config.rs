// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::errors::SpliceError;

// Optional JSON config for splice2fasta, e.g.
//
//   { "output": "splice.data.fasta", "strict": false }
//
// Only read when explicitly passed with --config. Flags win over config values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    pub output: Option<PathBuf>,
    pub strict: Option<bool>,
}

impl ConverterConfig {
    pub fn from_value(value: Value) -> Result<Self, SpliceError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SpliceError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
