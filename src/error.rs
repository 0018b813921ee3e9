//! Error types for kmer-analyzer.
//!
//! Every failure in the library is fatal to a single invocation: nothing is
//! retried and no partial state is kept. The variants below distinguish the
//! input side from the output side so the CLI can report which resource was
//! unavailable.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in kmer-analyzer operations.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// K-mer length is below 1.
    #[error("invalid k-mer length {k}: must be at least 1")]
    InvalidKmerLength { k: i64 },

    /// Failed to open or read the sequence source.
    #[error("failed to read sequence from '{input}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        input: String,
    },

    /// Failed to create or write the report destination.
    #[error("failed to write report to '{path}': {source}")]
    ReportWrite {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to serialize the JSON report.
    #[error("failed to serialize JSON report: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },
}

/// Error for an invalid k-mer length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("k-mer length must be at least 1, got {k}")]
pub struct KmerLengthError {
    /// The rejected k value.
    pub k: i64,
}

impl From<KmerLengthError> for AnalyzerError {
    fn from(err: KmerLengthError) -> Self {
        Self::InvalidKmerLength { k: err.k }
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonError { source }
    }
}
