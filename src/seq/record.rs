// A record for sequences: a header (for splice data, the class label) and a raw sequence. Shared
// by the splice reader and the FastA codec.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn new(header: &str, sequence: &str) -> Self {
        SeqRecord {
            header: String::from(header),
            sequence: String::from(sequence),
        }
    }
}
