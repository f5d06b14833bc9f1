// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use splicefasta::errors::SpliceError;

fn main() -> Result<(), SpliceError> {
    splicefasta::run_seqdist()
}
