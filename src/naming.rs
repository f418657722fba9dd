//! Default output file names for the compress and decompress directions.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension appended to compressed files.
pub const RLE_EXTENSION: &str = "rle";

/// Proposes where to save the compressed form of `input`.
///
/// `.rle` is appended to the whole file name, so `notes.txt` becomes
/// `notes.txt.rle`.
pub fn compressed_path(input: &Path) -> PathBuf {
    append_extension(input, RLE_EXTENSION)
}

/// Proposes where to save the decompressed form of `input`.
///
/// A trailing `.rle` is stripped. Names without it (or that would be empty
/// after stripping) get `.txt` appended, so the proposal never overwrites
/// the input.
pub fn decompressed_path(input: &Path) -> PathBuf {
    let stripped = input
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(".rle"))
        .filter(|stem| !stem.is_empty());

    match stripped {
        Some(stem) => input.with_file_name(stem),
        None => append_extension(input, "txt"),
    }
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".");
    name.push(ext);
    path.with_file_name(name)
}
