// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use crate::seq::record::SeqRecord;

// Whatever the source format (splice data or FastA), a sequence file is just a Vec of sequence
// records, in file order.
//

pub type SeqFile = Vec<SeqRecord>;
