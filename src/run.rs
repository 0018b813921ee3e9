//! Orchestration: load, count, report.
//!
//! The two counting passes only read the sequence, so [`analyze`] hands
//! them to [`rayon::join`]; the result is the same as running them one
//! after the other.

use std::path::PathBuf;

#[cfg(feature = "tracing")]
use tracing::{info, info_span};

use crate::{
    config::Config,
    counter::{count_following, count_kmers, FollowCounts, KmerCounts},
    error::AnalyzerError,
    input::Input,
    kmer::KmerLength,
    report::{build_rows, write_report},
    sequence::{read_sequence, Sequence},
};

/// Both count tables for one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Sequence length in characters.
    pub bases: usize,
    pub kmers: KmerCounts,
    pub follows: FollowCounts,
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub bases: usize,
    pub distinct_kmers: usize,
    pub rows: usize,
    pub output: PathBuf,
}

/// Runs both counting passes over `sequence`.
///
/// # Example
///
/// ```rust
/// use kmer_analyzer::kmer::KmerLength;
/// use kmer_analyzer::run::analyze;
/// use kmer_analyzer::sequence::Sequence;
///
/// let analysis = analyze(&Sequence::from("AAA"), KmerLength::new(2)?);
/// assert_eq!(analysis.bases, 3);
/// assert_eq!(analysis.kmers.get("AA"), Some(2));
/// assert_eq!(analysis.follows.get("AA", 'A'), Some(1));
/// # Ok::<(), kmer_analyzer::error::KmerLengthError>(())
/// ```
pub fn analyze(sequence: &Sequence, k: KmerLength) -> Analysis {
    #[cfg(feature = "tracing")]
    let _span = info_span!("analyze", k = k.get(), bases = sequence.len()).entered();

    let (kmers, follows) = rayon::join(
        || count_kmers(sequence, k),
        || count_following(sequence, k),
    );

    #[cfg(feature = "tracing")]
    info!(
        distinct_kmers = kmers.len(),
        with_successors = follows.len(),
        "Counting complete"
    );

    Analysis {
        bases: sequence.len(),
        kmers,
        follows,
    }
}

/// Loads `input` and analyzes it.
///
/// # Errors
///
/// Returns [`AnalyzerError::SequenceRead`] if the input cannot be read.
pub fn analyze_input(input: &Input, k: KmerLength) -> Result<Analysis, AnalyzerError> {
    let sequence = read_sequence(input)?;
    Ok(analyze(&sequence, k))
}

/// Loads the input, counts, and writes the report described by `config`.
///
/// # Errors
///
/// Returns [`AnalyzerError::SequenceRead`] or [`AnalyzerError::ReportWrite`]
/// when either end is unavailable, and [`AnalyzerError::JsonError`] if a
/// JSON report cannot be serialized.
pub fn run(config: &Config) -> Result<Summary, AnalyzerError> {
    let analysis = analyze_input(&config.input, config.k)?;
    let rows = build_rows(&analysis.kmers, &analysis.follows, config.min_count);
    write_report(&config.output, &rows, config.format)?;

    Ok(Summary {
        bases: analysis.bases,
        distinct_kmers: analysis.kmers.len(),
        rows: rows.len(),
        output: config.output.clone(),
    })
}
