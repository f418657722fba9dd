use std::path::PathBuf;

/// Why a run in an encoded stream could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// A symbol was not followed by any decimal digit.
    MissingCount,
    /// The count parsed to zero.
    ZeroCount,
    /// The count was written with a leading zero, e.g. `a03`.
    LeadingZero,
    /// The count does not fit in a `usize`, or the expanded run cannot be
    /// allocated.
    CountOverflow,
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            MalformedKind::MissingCount => "symbol is not followed by a run count",
            MalformedKind::ZeroCount => "run count is zero",
            MalformedKind::LeadingZero => "run count has a leading zero",
            MalformedKind::CountOverflow => "run count is too large",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The encoded stream does not follow the `<symbol><count>` grammar.
    #[error("malformed RLE stream at byte {offset}: {kind}")]
    MalformedStream { offset: usize, kind: MalformedKind },

    #[error("could not read input file {}: {source}", path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file {} is not valid UTF-8 text: {source}", path.display())]
    NotText {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("could not write output file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the malformation details if this is a decoder failure.
    pub fn malformed_kind(&self) -> Option<MalformedKind> {
        match self {
            Error::MalformedStream { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
