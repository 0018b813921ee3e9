//! K-mer frequency and next-character statistics for DNA sequences.
//!
//! For a chosen length `k`, `kmer-analyzer` counts every k-mer of a sequence
//! and, for each k-mer, how often each character directly follows it. The
//! result is a sorted, tab-delimited report.
//!
//! Sequences are taken as-is: no alphabet validation and no reverse
//! complement merging. `N`s and any other characters are counted like
//! bases.
//!
//! # Example
//!
//! ```rust
//! use kmer_analyzer::kmer::KmerLength;
//! use kmer_analyzer::report::{build_rows, write_tsv};
//! use kmer_analyzer::run::analyze;
//! use kmer_analyzer::sequence::Sequence;
//!
//! let analysis = analyze(&Sequence::from("AAAC"), KmerLength::new(2)?);
//! let rows = build_rows(&analysis.kmers, &analysis.follows, 1);
//!
//! let mut out = Vec::new();
//! write_tsv(&rows, &mut out)?;
//! assert_eq!(
//!     String::from_utf8(out)?,
//!     "kmer\tCount\tNextChars\nAA\t2\tA:1, C:1\nAC\t1\t\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - `tracing` (default): structured logging of each phase
//! - `gzip`: transparent decompression of `.gz` inputs

pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod input;
pub mod kmer;
pub mod report;
pub mod run;
pub mod sequence;
