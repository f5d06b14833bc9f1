// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

pub mod fasta;
pub mod file;
pub mod record;
pub mod splice;
