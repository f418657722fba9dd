use crate::run::Run;

/// Incremental run-length encoder.
///
/// Symbols are pushed one at a time. If a symbol matches the symbol of the
/// last run, that run's count is incremented instead of starting a new run,
/// so the encoder never holds two adjacent runs of the same symbol.
///
/// ```
/// use runlength_rs::Encoder;
///
/// let mut enc = Encoder::new();
/// enc.extend("aaabccdd".chars());
///
/// assert_eq!(enc.runs().len(), 4);
/// assert_eq!(enc.to_string(), "a3b1c2d2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    runs: Vec<Run>,
    /// Number of symbols pushed (sum of run counts)
    length: usize,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symbol to the sequence.
    pub fn push(&mut self, symbol: char) {
        self.length += 1;

        if let Some(last) = self.runs.last_mut() {
            if last.symbol() == symbol {
                last.grow();
                return;
            }
        }

        self.runs.push(Run::single(symbol));
    }

    /// Extends the sequence with multiple symbols.
    pub fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for symbol in iter {
            self.push(symbol);
        }
    }

    /// Runs seen so far. The last one is still open and may grow on the
    /// next `push`.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Number of symbols pushed.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Closes the pending run and returns every run.
    pub fn finish(self) -> Vec<Run> {
        self.runs
    }
}

impl std::fmt::Display for Encoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for run in &self.runs {
            write!(f, "{run}")?;
        }
        Ok(())
    }
}

/// Splits `input` into its maximal runs.
pub fn encode_runs(input: &str) -> Vec<Run> {
    let mut enc = Encoder::new();
    enc.extend(input.chars());
    enc.finish()
}

/// Encodes `input` as `<symbol><count>` runs, e.g. `aaab` becomes `a3b1`.
///
/// Empty input yields an empty string. Input containing ASCII digits is
/// accepted, but only digit-free input is guaranteed to decode back to
/// itself.
pub fn encode(input: &str) -> String {
    let mut enc = Encoder::new();
    enc.extend(input.chars());
    enc.to_string()
}
