//! Sequence loading and k-mer windows.
//!
//! A [`Sequence`] is the whole input collapsed into one uppercase string:
//! every line is trimmed of surrounding whitespace and line terminators and
//! the pieces are concatenated. No alphabet is enforced, so `N`, IUPAC codes
//! or any other character are counted like bases.
//!
//! # Example
//!
//! ```rust
//! use kmer_analyzer::sequence::load_sequence;
//! use std::io::Cursor;
//!
//! let sequence = load_sequence(Cursor::new("acg\nTTG\n"))?;
//! assert_eq!(sequence, "ACGTTG");
//! assert_eq!(sequence.len(), 6);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::{
    fmt,
    io::{self, BufRead},
    iter,
};

use bytes::Bytes;

#[cfg(feature = "tracing")]
use tracing::info;

use crate::{error::AnalyzerError, input::Input, kmer::KmerLength};

/// An immutable sequence of characters.
///
/// Positions and lengths are counted in characters, not bytes. ASCII input
/// (the common case) is indexed directly; other text carries a table of
/// character offsets so windows are still cut on character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    text: Bytes,
    offsets: Option<Vec<usize>>,
}

impl Sequence {
    /// Wraps already-normalized text.
    ///
    /// No trimming or case folding happens here; use [`load_sequence`] to
    /// build a sequence from raw input lines.
    #[must_use]
    pub fn new(text: String) -> Self {
        let offsets = (!text.is_ascii()).then(|| {
            text.char_indices()
                .map(|(i, _)| i)
                .chain(iter::once(text.len()))
                .collect()
        });
        Self {
            text: Bytes::from(text),
            offsets,
        }
    }

    /// Number of characters in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets
            .as_ref()
            .map_or(self.text.len(), |offsets| offsets.len() - 1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The UTF-8 encoded text.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Every k-mer in order of its start position, `n - k + 1` of them.
    ///
    /// Yields nothing when `k` exceeds the sequence length.
    pub fn kmers(&self, k: KmerLength) -> impl Iterator<Item = Bytes> + '_ {
        let k = k.get();
        let starts = (self.len() + 1).saturating_sub(k);
        (0..starts).map(move |i| self.view(i, i + k))
    }

    /// Every k-mer that has a following character, paired with that
    /// character; `n - k` pairs.
    ///
    /// The k-mer ending at the last position is skipped. Yields nothing when
    /// `k >= n`.
    pub fn kmers_with_next(&self, k: KmerLength) -> impl Iterator<Item = (Bytes, Bytes)> + '_ {
        let k = k.get();
        let starts = self.len().saturating_sub(k);
        (0..starts).map(move |i| (self.view(i, i + k), self.view(i + k, i + k + 1)))
    }

    fn offset(&self, position: usize) -> usize {
        self.offsets
            .as_ref()
            .map_or(position, |offsets| offsets[position])
    }

    fn view(&self, start: usize, end: usize) -> Bytes {
        self.text.slice(self.offset(start)..self.offset(end))
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Self::new(text.to_string())
    }
}

impl PartialEq<str> for Sequence {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Sequence {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.text))
    }
}

/// Builds a [`Sequence`] from line-oriented text.
///
/// Each line (a bare `\r` also ends a line) is trimmed of leading and
/// trailing whitespace, the lines are concatenated, and the result is
/// uppercased. An empty source yields an empty sequence.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails or the text is not
/// valid UTF-8.
pub fn load_sequence<R: BufRead>(reader: R) -> io::Result<Sequence> {
    let mut text = String::new();
    for line in reader.lines() {
        for piece in line?.split('\r') {
            text.push_str(piece.trim());
        }
    }
    Ok(Sequence::new(text.to_uppercase()))
}

/// Opens `input` and loads it with [`load_sequence`].
///
/// # Errors
///
/// Returns [`AnalyzerError::SequenceRead`] if the source cannot be opened
/// or read.
pub fn read_sequence(input: &Input) -> Result<Sequence, AnalyzerError> {
    let sequence = input
        .open()
        .and_then(load_sequence)
        .map_err(|source| AnalyzerError::SequenceRead {
            source,
            input: input.to_string(),
        })?;

    #[cfg(feature = "tracing")]
    info!(input = %input, bases = sequence.len(), "Loaded sequence");

    Ok(sequence)
}
