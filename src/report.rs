use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::Result;
use crate::stats::{compression_ratio, expansion_ratio, Ratio};
use serde::Serialize;

/// Result of compressing one text buffer.
///
/// Sizes are UTF-8 byte lengths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compression {
    pub original_size: usize,
    pub compressed_size: usize,
    pub compressed_content: String,
    pub compression_ratio: Ratio,
}

/// Result of decompressing one encoded stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decompression {
    pub compressed_size: usize,
    pub decompressed_size: usize,
    pub decompressed_content: String,
    pub expansion_ratio: Ratio,
}

/// Encodes `input` and reports the sizes on both sides.
///
/// ```
/// let report = runlength_rs::compress("wwwwaaadexxxxxx");
/// assert_eq!(report.compressed_content, "w4a3d1e1x6");
/// assert_eq!(report.compression_ratio.to_string(), "33.33%");
/// ```
pub fn compress(input: &str) -> Compression {
    let compressed_content = encode(input);
    let original_size = input.len();
    let compressed_size = compressed_content.len();
    let compression_ratio = compression_ratio(original_size, compressed_size);

    tracing::debug!(
        original_size,
        compressed_size,
        ratio = %compression_ratio,
        "compressed input"
    );

    Compression {
        original_size,
        compressed_size,
        compressed_content,
        compression_ratio,
    }
}

/// Decodes `input` and reports the sizes on both sides.
///
/// A malformed stream fails the whole operation; nothing is salvaged.
pub fn decompress(input: &str) -> Result<Decompression> {
    let decompressed_content = decode(input)?;
    let compressed_size = input.len();
    let decompressed_size = decompressed_content.len();
    let expansion_ratio = expansion_ratio(compressed_size, decompressed_size);

    tracing::debug!(
        compressed_size,
        decompressed_size,
        ratio = %expansion_ratio,
        "decompressed input"
    );

    Ok(Decompression {
        compressed_size,
        decompressed_size,
        decompressed_content,
        expansion_ratio,
    })
}
