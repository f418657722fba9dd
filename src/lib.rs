//! # runlength-rs - Run-Length Encoding for text
//!
//! Compresses text into a stream of runs, each written as the symbol
//! followed by how many times it repeats, and reverses the transform exactly.
//!
//! ## Example
//!
//! ```
//! use runlength_rs::{decode, encode};
//!
//! let encoded = encode("aaabbbccccc");
//! assert_eq!(encoded, "a3b3c5");
//!
//! // Reconstructs the original text
//! assert_eq!(decode(&encoded).unwrap(), "aaabbbccccc");
//! ```
//!
//! [`compress`] and [`decompress`] wrap the codec and also report the sizes on
//! both sides along with the compression or expansion ratio.
//!
//! ## Stream format
//!
//! - Runs are concatenated with no separators
//! - Each run is one symbol (`char`) then its count in decimal, no leading zeros
//! - Counts are at least 1
//!
//! Symbols that are ASCII digits are accepted by the encoder but cannot in
//! general be told apart from counts, so only digit-free text is guaranteed
//! to round-trip.

mod decoder;
mod encoder;
pub mod error;
pub mod logging;
pub mod naming;
mod report;
mod run;
mod stats;

#[cfg(test)]
mod tests;

pub use decoder::{decode, RunParser};
pub use encoder::{encode, encode_runs, Encoder};
pub use error::{Error, MalformedKind, Result};
pub use report::{compress, decompress, Compression, Decompression};
pub use run::Run;
pub use stats::{compression_ratio, expansion_ratio, Ratio};
