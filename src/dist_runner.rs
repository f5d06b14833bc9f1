// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{
    fmt,
    io::{stdout, BufWriter, Write},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use itertools::Itertools;
use log::{debug, info};

use crate::distance::{
    kmp_score, levenshtein, needleman_wunsch, white_similarity, NwScores, DEFAULT_WINDOW,
};
use crate::errors::SpliceError;
use crate::seq::fasta::read_fasta_file;
use crate::seq::record::SeqRecord;

#[derive(Debug, Parser)]
#[command(version, about = "Pairwise sequence scores for a FastA file", long_about = None) ]
struct Cli {
    /// FastA file (e.g. the output of splice2fasta)
    fasta_fname: PathBuf,

    /// Score to compute
    #[arg(short, long = "metric", default_value_t = Metric::Levenshtein,
        help = "Score [levenshtein|nw|white|kmp] (or just l|n|w|k); default: levenshtein",
        hide_default_value = true,
        hide_possible_values = true,
    )]
    metric: Metric,

    /// Window (k-mer) length for the white and kmp scores
    #[arg(short, long, default_value_t = DEFAULT_WINDOW,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    window: usize,

    /// Needleman-Wunsch match score
    #[arg(long = "match", default_value_t = 1.0, allow_negative_numbers = true)]
    match_score: f64,

    /// Needleman-Wunsch mismatch score
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    mismatch: f64,

    /// Needleman-Wunsch gap score
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    gap: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    #[clap(name = "levenshtein")]
    #[clap(alias = "l")]
    Levenshtein,
    #[clap(name = "nw")]
    #[clap(alias = "n")]
    NeedlemanWunsch,
    #[clap(name = "white")]
    #[clap(alias = "w")]
    White,
    #[clap(name = "kmp")]
    #[clap(alias = "k")]
    Kmp,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Metric::Levenshtein => "levenshtein",
            Metric::NeedlemanWunsch => "nw",
            Metric::White => "white",
            Metric::Kmp => "kmp",
        };
        write!(f, "{}", s)
    }
}

// Integer scores print as such, the others with two decimals.
pub fn score(metric: Metric, s1: &[u8], s2: &[u8], window: usize, nw: &NwScores) -> String {
    match metric {
        Metric::Levenshtein => levenshtein(s1, s2).to_string(),
        Metric::NeedlemanWunsch => format!("{:.2}", needleman_wunsch(s1, s2, nw)),
        Metric::White => format!("{:.2}", white_similarity(s1, s2, window)),
        Metric::Kmp => kmp_score(s1, s2, window).to_string(),
    }
}

/// Tab-separated score matrix: a header row of record names, then one row per record. Cell
/// (i, j) is score(record i, record j).
pub fn write_score_matrix<W: Write>(
    records: &[SeqRecord],
    metric: Metric,
    window: usize,
    nw: &NwScores,
    mut out: W,
) -> std::io::Result<()> {
    writeln!(out, "\t{}", records.iter().map(|r| &r.header).join("\t"))?;
    for row in records {
        let cells = records
            .iter()
            .map(|col| score(metric, row.sequence.as_bytes(), col.sequence.as_bytes(), window, nw))
            .join("\t");
        writeln!(out, "{}\t{}", row.header, cells)?;
        debug!("scored row {}", row.header);
    }
    out.flush()
}

pub fn run() -> Result<(), SpliceError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let records = read_fasta_file(&cli.fasta_fname)?;
    info!(
        "Read {} record(s) from {}; metric: {}",
        records.len(),
        cli.fasta_fname.display(),
        cli.metric
    );

    let nw = NwScores {
        match_score: cli.match_score,
        mismatch: cli.mismatch,
        gap: cli.gap,
    };
    write_score_matrix(&records, cli.metric, cli.window, &nw, BufWriter::new(stdout()))?;

    Ok(())
}
