use serde::{Deserialize, Serialize};

/// One non-blank input line after trimming, together with its 1-based
/// position in the filtered record sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct FormatResult {
    pub records: Vec<Record>,
    pub output: String,
}
