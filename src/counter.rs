//! The two counting passes over a [`Sequence`].
//!
//! [`count_kmers`] tallies every k-mer; [`count_following`] tallies, per
//! k-mer, the character that comes right after each occurrence. Both are
//! pure functions over a shared, immutable sequence and build their own
//! private tables, so they can run in either order or side by side.
//!
//! # Example
//!
//! ```rust
//! use kmer_analyzer::counter::{count_following, count_kmers};
//! use kmer_analyzer::kmer::KmerLength;
//! use kmer_analyzer::sequence::Sequence;
//!
//! let sequence = Sequence::from("ACGACG");
//! let k = KmerLength::new(3)?;
//!
//! let counts = count_kmers(&sequence, k);
//! assert_eq!(counts.get("ACG"), Some(2));
//! assert_eq!(counts.total(), 4);
//!
//! let follows = count_following(&sequence, k);
//! assert_eq!(follows.get("ACG", 'A'), Some(1));
//! assert_eq!(follows.total(), 3);
//! # Ok::<(), kmer_analyzer::error::KmerLengthError>(())
//! ```

use bytes::Bytes;
use rustc_hash::FxHashMap;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::{kmer::KmerLength, sequence::Sequence};

/// Occurrence count per k-mer.
///
/// Keys are views into the counted sequence; iteration order is arbitrary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmerCounts(FxHashMap<Bytes, u64>);

impl KmerCounts {
    /// Count of `kmer`, or `None` if it never occurs.
    #[must_use]
    pub fn get(&self, kmer: &str) -> Option<u64> {
        self.0.get(kmer.as_bytes()).copied()
    }

    /// Number of distinct k-mers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts, i.e. the number of k-mer occurrences.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Iterates `(k-mer, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Bytes, u64)> {
        self.0.iter().map(|(kmer, &count)| (kmer, count))
    }

    /// `(k-mer, count)` pairs sorted ascending by k-mer.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&Bytes, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    fn increment(&mut self, kmer: Bytes) {
        *self.0.entry(kmer).or_insert(0) += 1;
    }
}

impl<'a> FromIterator<(&'a str, u64)> for KmerCounts {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(kmer, count)| (Bytes::copy_from_slice(kmer.as_bytes()), count))
                .collect(),
        )
    }
}

/// Next-character counts per k-mer.
///
/// The inner key is a single character, stored as its UTF-8 bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowCounts(FxHashMap<Bytes, FxHashMap<Bytes, u64>>);

impl FollowCounts {
    /// How often `next` directly follows `kmer`.
    #[must_use]
    pub fn get(&self, kmer: &str, next: char) -> Option<u64> {
        let mut buf = [0; 4];
        self.0
            .get(kmer.as_bytes())?
            .get(next.encode_utf8(&mut buf).as_bytes())
            .copied()
    }

    /// Number of k-mers with at least one recorded successor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of every nested count.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().flat_map(|next| next.values()).sum()
    }

    /// Sum of the nested counts of one k-mer; zero if it has no entry.
    #[must_use]
    pub fn kmer_total(&self, kmer: &[u8]) -> u64 {
        self.0
            .get(kmer)
            .map_or(0, |next| next.values().sum())
    }

    /// Successors of `kmer` sorted ascending by character. Empty when the
    /// k-mer has no entry.
    #[must_use]
    pub fn sorted_next(&self, kmer: &[u8]) -> Vec<(&Bytes, u64)> {
        let mut entries: Vec<_> = self
            .0
            .get(kmer)
            .into_iter()
            .flatten()
            .map(|(next, &count)| (next, count))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Iterates k-mers that have an entry, in arbitrary order.
    pub fn kmers(&self) -> impl Iterator<Item = &Bytes> {
        self.0.keys()
    }

    fn increment(&mut self, kmer: Bytes, next: Bytes) {
        *self.0.entry(kmer).or_default().entry(next).or_insert(0) += 1;
    }
}

impl<'a, N> FromIterator<(&'a str, N)> for FollowCounts
where
    N: IntoIterator<Item = (char, u64)>,
{
    fn from_iter<I: IntoIterator<Item = (&'a str, N)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(kmer, next)| {
                    let next = next
                        .into_iter()
                        .map(|(c, count)| {
                            let mut buf = [0; 4];
                            let bytes = Bytes::copy_from_slice(c.encode_utf8(&mut buf).as_bytes());
                            (bytes, count)
                        })
                        .collect();
                    (Bytes::copy_from_slice(kmer.as_bytes()), next)
                })
                .collect(),
        )
    }
}

/// Counts every substring of length `k`.
///
/// Scans start positions `0..=n-k`; if `k > n` the table is empty.
pub fn count_kmers(sequence: &Sequence, k: KmerLength) -> KmerCounts {
    let mut counts = KmerCounts::default();
    for kmer in sequence.kmers(k) {
        counts.increment(kmer);
    }

    #[cfg(feature = "tracing")]
    debug!(k = k.get(), distinct = counts.len(), "Counted k-mers");

    counts
}

/// Counts, per k-mer, the character immediately following each occurrence.
///
/// Scans start positions `0..n-k`, one fewer than [`count_kmers`]: the
/// k-mer ending the sequence has no successor. If `k >= n` the table is
/// empty.
pub fn count_following(sequence: &Sequence, k: KmerLength) -> FollowCounts {
    let mut follows = FollowCounts::default();
    for (kmer, next) in sequence.kmers_with_next(k) {
        follows.increment(kmer, next);
    }

    #[cfg(feature = "tracing")]
    debug!(k = k.get(), kmers = follows.len(), "Counted following characters");

    follows
}
