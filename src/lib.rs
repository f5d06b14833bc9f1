pub mod config;
pub mod convert;
mod dist_runner;
pub mod distance;
pub mod errors;
mod runner;
pub mod seq;

use crate::errors::SpliceError;

pub use crate::convert::{convert, convert_with, Conversion, ConvertOptions, Validation};

// Entry point of splice2fasta
pub fn run() -> Result<(), SpliceError> {
    runner::run()
}

// Entry point of seqdist
pub fn run_seqdist() -> Result<(), SpliceError> {
    dist_runner::run()
}
