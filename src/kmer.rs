//! K-mer length validation and k-mer views.
//!
//! K-mers are never copied out of the sequence they come from: a k-mer is a
//! [`Bytes`] slice sharing the sequence buffer, so counting tables keyed by
//! k-mers hold reference-counted views rather than owned strings.

use std::{borrow::Cow, fmt, num::NonZeroUsize};

use bytes::Bytes;

use crate::error::KmerLengthError;

/// A validated k-mer length (`k >= 1`).
///
/// There is no upper bound: `k` may exceed the length of the sequence being
/// analyzed, in which case no k-mers are counted.
///
/// # Example
///
/// ```rust
/// use kmer_analyzer::kmer::KmerLength;
///
/// let k = KmerLength::new(21)?;
/// assert_eq!(k.get(), 21);
/// assert!(KmerLength::new(0).is_err());
/// # Ok::<(), kmer_analyzer::error::KmerLengthError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KmerLength(NonZeroUsize);

impl KmerLength {
    /// Creates a `KmerLength`, rejecting zero.
    pub fn new(k: usize) -> Result<Self, KmerLengthError> {
        NonZeroUsize::new(k)
            .map(Self)
            .ok_or(KmerLengthError { k: 0 })
    }

    /// Returns the length as a `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for KmerLength {
    type Error = KmerLengthError;

    fn try_from(k: i64) -> Result<Self, Self::Error> {
        usize::try_from(k)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(KmerLengthError { k })
    }
}

impl fmt::Display for KmerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Renders a k-mer (or a single next-symbol) view as text.
///
/// Views are always cut on character boundaries of UTF-8 text, so this
/// never substitutes replacement characters in practice.
#[must_use]
pub fn as_text(view: &Bytes) -> Cow<'_, str> {
    String::from_utf8_lossy(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_one() {
        assert_eq!(KmerLength::new(1).map(KmerLength::get), Ok(1));
    }

    #[test]
    fn new_rejects_zero() {
        assert_eq!(KmerLength::new(0), Err(KmerLengthError { k: 0 }));
    }

    #[test]
    fn no_upper_bound() {
        assert_eq!(KmerLength::new(1_000).map(KmerLength::get), Ok(1_000));
    }

    #[test]
    fn try_from_negative_keeps_value() {
        assert_eq!(KmerLength::try_from(-4), Err(KmerLengthError { k: -4 }));
        assert_eq!(KmerLength::try_from(0), Err(KmerLengthError { k: 0 }));
        assert_eq!(KmerLength::try_from(7).map(KmerLength::get), Ok(7));
    }

    #[test]
    fn display() {
        let k = KmerLength::new(5).unwrap();
        assert_eq!(k.to_string(), "5");
    }

    #[test]
    fn as_text_renders_utf8() {
        assert_eq!(as_text(&Bytes::from_static(b"ACGT")), "ACGT");
        assert_eq!(as_text(&Bytes::from("ÄC".to_string())), "ÄC");
    }
}
