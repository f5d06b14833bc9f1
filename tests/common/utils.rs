// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use assert_cmd::prelude::*;

#[allow(dead_code)]
pub const P6_INPUT: &str = "N,HUMAN,CAGGTAAGT\nEI,HUMAN,AG GTG AGT\n";

#[allow(dead_code)]
pub const P6_OUTPUT: &str = ">N\nCAGGTAAGT\n>EI\nAGGTGAGT\n";

#[allow(dead_code)]
pub fn splice2fasta() -> Command {
    Command::cargo_bin("splice2fasta").expect("splice2fasta binary")
}

#[allow(dead_code)]
pub fn seqdist() -> Command {
    Command::cargo_bin("seqdist").expect("seqdist binary")
}

// Fixtures under data/, as absolute paths (commands may run in a scratch directory).
#[allow(dead_code)]
pub fn data_file(fname: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(fname)
}

#[allow(dead_code)]
pub fn write_input(dir: &Path, fname: &str, content: &str) -> PathBuf {
    let path = dir.join(fname);
    fs::write(&path, content).expect("writing test input");
    path
}

#[allow(dead_code)]
pub fn stdout_text(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[allow(dead_code)]
pub fn stderr_text(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}
