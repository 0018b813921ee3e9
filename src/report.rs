//! Report serialization.
//!
//! The two count tables are merged into [`ReportRow`]s sorted by k-mer, then
//! written either as the tab-delimited report or as JSON.
//!
//! The TSV layout is fixed:
//!
//! ```text
//! kmer\tCount\tNextChars
//! AA\t3\tA:3
//! AC\t1\t
//! ```
//!
//! A k-mer without successors keeps the trailing tab and nothing after it.

use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use serde::Serialize;

#[cfg(feature = "tracing")]
use tracing::info;

use crate::{
    cli::ReportFormat,
    counter::{FollowCounts, KmerCounts},
    error::AnalyzerError,
    kmer::as_text,
};

/// Header row of the TSV report.
pub const HEADER: &str = "kmer\tCount\tNextChars";

/// One k-mer with its total count and sorted successors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub kmer: String,
    pub count: u64,
    pub next: Vec<NextCount>,
}

/// A successor character and how often it follows the row's k-mer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextCount {
    pub symbol: String,
    pub count: u64,
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t", self.kmer, self.count)?;
        for (i, next) in self.next.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", next.symbol, next.count)?;
        }
        Ok(())
    }
}

/// Merges both tables into rows, one per k-mer of `counts` whose count is
/// at least `min_count`, ascending by k-mer.
///
/// K-mers missing from `follows` get an empty successor list.
pub fn build_rows(counts: &KmerCounts, follows: &FollowCounts, min_count: u64) -> Vec<ReportRow> {
    counts
        .sorted()
        .into_iter()
        .filter(|&(_, count)| count >= min_count)
        .map(|(kmer, count)| ReportRow {
            kmer: as_text(kmer).into_owned(),
            count,
            next: follows
                .sorted_next(kmer)
                .into_iter()
                .map(|(symbol, count)| NextCount {
                    symbol: as_text(symbol).into_owned(),
                    count,
                })
                .collect(),
        })
        .collect()
}

/// Writes the header and one line per row.
pub fn write_tsv<W: Write>(rows: &[ReportRow], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for row in rows {
        writeln!(writer, "{row}")?;
    }
    writer.flush()
}

/// Writes the rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(rows: &[ReportRow], mut writer: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    writer.flush().map_err(serde_json::Error::io)
}

/// Creates (or truncates) `path` and writes the rows in `format`.
///
/// # Errors
///
/// Returns [`AnalyzerError::ReportWrite`] if the file cannot be created or
/// written, or [`AnalyzerError::JsonError`] if serialization fails.
pub fn write_report(
    path: &Path,
    rows: &[ReportRow],
    format: ReportFormat,
) -> Result<(), AnalyzerError> {
    let write_error = |source: io::Error| AnalyzerError::ReportWrite {
        source,
        path: path.to_path_buf(),
    };

    let mut buf = BufWriter::new(File::create(path).map_err(write_error)?);

    match format {
        ReportFormat::Tsv => write_tsv(rows, &mut buf).map_err(write_error)?,
        ReportFormat::Json => write_json(rows, &mut buf).map_err(|err| {
            if err.is_io() {
                write_error(err.into())
            } else {
                err.into()
            }
        })?,
    }

    #[cfg(feature = "tracing")]
    info!(rows = rows.len(), path = %path.display(), %format, "Wrote report");

    Ok(())
}
