// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

// Reader for the UCI splice-junction data (splice.data.txt). Each line looks like
//
//   EI,      ATRINS-DONOR-521,   CCAGCTGCAT CACAGGAGGC...
//
// i.e. class label, instance name, sequence. Only fields 0 and 2 are used; spaces (and only
// spaces) are removed from the sequence.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use regex::Regex;

use crate::errors::{MalformedLine, SpliceError};
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

const LABEL_FIELD: usize = 0;
const SEQUENCE_FIELD: usize = 2;

// Letters (IUPAC codes and the dataset's D/N/S/R ambiguity codes), gaps and stops.
const SEQUENCE_PATTERN: &str = r"^[A-Za-z*-]+$";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    // Only fail if the sequence field is missing, and stop at the first such line.
    #[default]
    Lenient,
    // Check every line (field count, label, sequence alphabet) and report all problems at once.
    Strict,
}

struct SpliceParser {
    seq_re: Option<Regex>,
}

impl SpliceParser {
    fn new(validation: Validation) -> Result<Self, SpliceError> {
        let seq_re = match validation {
            Validation::Lenient => None,
            Validation::Strict => Some(
                Regex::new(SEQUENCE_PATTERN).map_err(|e| SpliceError::Format(e.to_string()))?,
            ),
        };
        Ok(SpliceParser { seq_re })
    }

    fn lenient(&self, line: &str, line_num: usize) -> Result<SeqRecord, SpliceError> {
        let fields: Vec<&str> = line.split(',').collect();
        match fields.get(SEQUENCE_FIELD) {
            Some(seq) => Ok(SeqRecord {
                header: String::from(fields[LABEL_FIELD]),
                sequence: seq.replace(' ', ""),
            }),
            None => Err(SpliceError::FieldIndex {
                line: line_num,
                index: SEQUENCE_FIELD,
                fields: fields.len(),
            }),
        }
    }

    // Err is the reason the line is malformed.
    fn strict(&self, seq_re: &Regex, line: &str) -> Result<SeqRecord, String> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() <= SEQUENCE_FIELD {
            return Err(format!(
                "expected at least {} fields, found {}",
                SEQUENCE_FIELD + 1,
                fields.len()
            ));
        }
        let label = fields[LABEL_FIELD];
        if label.is_empty() {
            return Err(String::from("empty class label"));
        }
        let sequence = fields[SEQUENCE_FIELD].replace(' ', "");
        if sequence.is_empty() {
            return Err(String::from("empty sequence"));
        }
        if !seq_re.is_match(&sequence) {
            return Err(format!("invalid character in sequence '{}'", sequence));
        }
        Ok(SeqRecord {
            header: String::from(label),
            sequence,
        })
    }

    fn parse(&self, line: &str, line_num: usize) -> Result<SeqRecord, SpliceError> {
        match &self.seq_re {
            None => self.lenient(line, line_num),
            Some(re) => self.strict(re, line).map_err(|reason| {
                SpliceError::MalformedRecord(vec![MalformedLine {
                    line: line_num,
                    reason,
                }])
            }),
        }
    }
}

/// Parses one line of splice data (without its line terminator). `line_num` is 1-based and only
/// used for error reporting.
pub fn parse_splice_line(
    line: &str,
    line_num: usize,
    validation: Validation,
) -> Result<SeqRecord, SpliceError> {
    SpliceParser::new(validation)?.parse(line, line_num)
}

/// Reads a whole splice data file, preserving line order.
///
/// In lenient mode the first line lacking a sequence field aborts the read. In strict mode all
/// lines are checked and every malformed one is listed in a single `MalformedRecord` error.
pub fn read_splice_file<P: AsRef<Path>>(
    path: P,
    validation: Validation,
) -> Result<SeqFile, SpliceError> {
    let file = File::open(path)?;
    let parser = SpliceParser::new(validation)?;
    let mut result: SeqFile = Vec::new();
    let mut malformed: Vec<MalformedLine> = Vec::new();

    for (i, line) in BufReader::new(file).lines().enumerate() {
        let l = line?;
        let line_num = i + 1;
        match &parser.seq_re {
            None => result.push(parser.lenient(&l, line_num)?),
            Some(re) => match parser.strict(re, &l) {
                Ok(record) => result.push(record),
                Err(reason) => malformed.push(MalformedLine {
                    line: line_num,
                    reason,
                }),
            },
        }
        debug!("line {}: parsed", line_num);
    }

    if !malformed.is_empty() {
        return Err(SpliceError::MalformedRecord(malformed));
    }
    Ok(result)
}
