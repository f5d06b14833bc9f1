// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{error, fmt, io};

// One offending line of a splice data file, as reported in strict mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug)]
pub enum SpliceError {
    Io(io::Error),
    Format(String),
    // Lenient mode: a line has no field at `index` (1-based `line`).
    FieldIndex {
        line: usize,
        index: usize,
        fields: usize,
    },
    MalformedRecord(Vec<MalformedLine>),
}

// These allow conversion to SpliceError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for SpliceError {
    fn from(e: io::Error) -> Self {
        SpliceError::Io(e)
    }
}

impl From<String> for SpliceError {
    fn from(s: String) -> Self {
        SpliceError::Format(s)
    }
}

impl From<serde_json::Error> for SpliceError {
    fn from(e: serde_json::Error) -> Self {
        SpliceError::Format(e.to_string())
    }
}

impl fmt::Display for SpliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpliceError::Io(e) => write!(f, "I/O error: {}", e),
            SpliceError::Format(msg) => write!(f, "Format error: {}", msg),
            SpliceError::FieldIndex {
                line,
                index,
                fields,
            } => write!(
                f,
                "line {}: field index {} out of range ({} field(s))",
                line, index, fields
            ),
            SpliceError::MalformedRecord(lines) => {
                write!(f, "{} malformed record(s)", lines.len())?;
                for ml in lines {
                    write!(f, "\n  line {}: {}", ml.line, ml.reason)?;
                }
                Ok(())
            }
        }
    }
}

impl error::Error for SpliceError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SpliceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_field_index() {
        let e = SpliceError::FieldIndex {
            line: 4,
            index: 2,
            fields: 1,
        };
        assert_eq!(e.to_string(), "line 4: field index 2 out of range (1 field(s))");
    }

    #[test]
    fn test_display_malformed_lists_every_line() {
        let e = SpliceError::MalformedRecord(vec![
            MalformedLine {
                line: 2,
                reason: String::from("expected at least 3 fields, found 1"),
            },
            MalformedLine {
                line: 7,
                reason: String::from("empty class label"),
            },
        ]);
        let msg = e.to_string();
        assert!(msg.starts_with("2 malformed record(s)"));
        assert!(msg.contains("line 2: expected at least 3 fields"));
        assert!(msg.contains("line 7: empty class label"));
    }

    #[test]
    fn test_io_error_has_source() {
        let e: SpliceError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(error::Error::source(&e).is_some());
        assert!(e.to_string().starts_with("I/O error:"));
    }
}
