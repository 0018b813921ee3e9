use std::path::PathBuf;

use crate::{
    cli::{Args, ReportFormat},
    input::Input,
    kmer::KmerLength,
};

/// Everything one analysis run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: Input,
    pub k: KmerLength,
    pub output: PathBuf,
    pub format: ReportFormat,
    pub min_count: u64,
}

impl Config {
    /// A TSV run with no count threshold.
    pub fn new(input: Input, k: KmerLength, output: impl Into<PathBuf>) -> Self {
        Self {
            input,
            k,
            output: output.into(),
            format: ReportFormat::Tsv,
            min_count: 1,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_min_count(mut self, min_count: u64) -> Self {
        self.min_count = min_count;
        self
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self::new(Input::from_path(&args.input), args.k, &args.output)
            .with_format(args.format)
            .with_min_count(args.min_count)
    }
}
