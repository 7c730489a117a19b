//! Source file reading
//!
//! Malformed UTF-8 fails the file by default; lossy decoding is opt-in.

use std::fs;
use std::path::Path;

use crate::core::error::ExtractError;

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingStrategy {
    /// Fail the file with an encoding error
    #[default]
    Strict,
    /// Replace invalid sequences with U+FFFD
    Lossy,
}

/// Read a whole file as text under the given encoding strategy
pub fn read_source(path: &Path, strategy: EncodingStrategy) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(err) => match strategy {
            EncodingStrategy::Strict => Err(ExtractError::InvalidEncoding {
                path: path.to_path_buf(),
            }),
            EncodingStrategy::Lossy => {
                tracing::debug!(path = %path.display(), "decoding non-UTF-8 file lossily");
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        },
    }
}

/// Read a file and split it into lines (`\n` or `\r\n` terminated)
pub fn read_lines(path: &Path, strategy: EncodingStrategy) -> Result<Vec<String>, ExtractError> {
    let content = read_source(path, strategy)?;
    Ok(content.lines().map(str::to_string).collect())
}
