//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::{fmt, path::PathBuf};

use crate::kmer::KmerLength;

/// Counts k-mers in a DNA sequence and the characters that follow each one.
#[derive(Parser, Debug)]
#[command(name = "kmer-analyzer")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Sequence file, one or more lines of raw sequence ("-" for stdin)
    pub input: PathBuf,

    /// K-mer length (at least 1)
    #[arg(value_parser = parse_k, allow_negative_numbers = true)]
    pub k: KmerLength,

    /// Report destination (created or overwritten)
    pub output: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "tsv")]
    pub format: ReportFormat,

    /// Minimum count threshold (k-mers below this are left out of the report)
    #[arg(short, long, default_value = "1")]
    pub min_count: u64,

    /// Suppress the run preamble (the completion summary is still printed)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ReportFormat {
    /// Tab-separated rows (kmer\tCount\tNextChars)
    #[default]
    Tsv,
    /// JSON array format
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tsv => write!(f, "tsv"),
            Self::Json => write!(f, "json"),
        }
    }
}

fn parse_k(s: &str) -> Result<KmerLength, String> {
    let k: i64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid integer"))?;
    KmerLength::try_from(k).map_err(|_| "k-mer length must be at least 1".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_k_valid() {
        assert_eq!(parse_k("3").map(KmerLength::get), Ok(3));
        assert_eq!(parse_k("64").map(KmerLength::get), Ok(64));
    }

    #[test]
    fn parse_k_rejects_non_integer() {
        assert_eq!(
            parse_k("abc").unwrap_err(),
            "'abc' is not a valid integer"
        );
        assert!(parse_k("2.5").is_err());
    }

    #[test]
    fn parse_k_rejects_zero_and_negative() {
        assert_eq!(parse_k("0").unwrap_err(), "k-mer length must be at least 1");
        assert_eq!(parse_k("-2").unwrap_err(), "k-mer length must be at least 1");
    }

    #[test]
    fn args_positional_order() {
        let args = Args::try_parse_from(["kmer-analyzer", "reads.txt", "3", "out.tsv"]).unwrap();
        assert_eq!(args.input, PathBuf::from("reads.txt"));
        assert_eq!(args.k.get(), 3);
        assert_eq!(args.output, PathBuf::from("out.tsv"));
        assert_eq!(args.format, ReportFormat::Tsv);
        assert_eq!(args.min_count, 1);
        assert!(!args.quiet);
    }

    #[test]
    fn args_negative_k_reaches_validator() {
        let err = Args::try_parse_from(["kmer-analyzer", "reads.txt", "-1", "out.tsv"]).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn args_wrong_count() {
        assert!(Args::try_parse_from(["kmer-analyzer", "reads.txt", "3"]).is_err());
        assert!(Args::try_parse_from(["kmer-analyzer", "a", "3", "b", "c"]).is_err());
    }

    #[test]
    fn args_options() {
        let args = Args::try_parse_from([
            "kmer-analyzer",
            "-",
            "2",
            "out.json",
            "--format",
            "json",
            "--min-count",
            "4",
            "--quiet",
        ])
        .unwrap();
        assert_eq!(args.format, ReportFormat::Json);
        assert_eq!(args.min_count, 4);
        assert!(args.quiet);
    }
}
