// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::errors::SpliceError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

// One FastA record: header line, then the whole sequence on a single line.
pub fn fasta_fragment(record: &SeqRecord) -> String {
    format!(">{}\n{}\n", record.header, record.sequence)
}

pub fn write_fasta<W: Write>(records: &[SeqRecord], mut out: W) -> std::io::Result<()> {
    for record in records {
        out.write_all(fasta_fragment(record).as_bytes())?;
    }
    out.flush()
}

// Truncates `path` if it exists.
pub fn write_fasta_file<P: AsRef<Path>>(records: &[SeqRecord], path: P) -> Result<(), SpliceError> {
    let file = File::create(path)?;
    write_fasta(records, BufWriter::new(file))?;
    Ok(())
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, SpliceError> {
    let file = File::open(path)?;
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for (i, line) in BufReader::new(file).lines().enumerate() {
        let l: String = line?;
        if let Some(hdr) = l.strip_prefix('>') {
            // push existing record
            if let Some(record) = current_record.take() {
                result.push(record);
            }
            current_record = Some(SeqRecord::new(hdr, ""));
        } else if let Some(record) = current_record.as_mut() {
            // append line to current record's sequence
            record.sequence.push_str(&l);
        } else if !l.is_empty() {
            return Err(SpliceError::Format(format!(
                "line {}: sequence data before first header",
                i + 1
            )));
        }
    }
    if let Some(record) = current_record {
        result.push(record);
    }
    Ok(result)
}
