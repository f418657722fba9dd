use std::fmt;
use std::num::NonZeroUsize;

/// A run of one symbol repeated `count` consecutive times.
///
/// The count is always at least 1; a zero-length run cannot be built.
/// `Display` writes the wire form: the symbol immediately followed by
/// the count in decimal, e.g. `a3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    symbol: char,
    count: NonZeroUsize,
}

impl Run {
    /// Creates a run, or `None` if `count` is zero.
    pub fn new(symbol: char, count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(|count| Self { symbol, count })
    }

    /// A run of length 1.
    pub(crate) fn single(symbol: char) -> Self {
        Self {
            symbol,
            count: NonZeroUsize::MIN,
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Extends the run by one occurrence.
    pub(crate) fn grow(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Appends the expanded run to `out`.
    pub fn expand_into(&self, out: &mut String) {
        out.extend(std::iter::repeat(self.symbol).take(self.count.get()));
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol, self.count)
    }
}
