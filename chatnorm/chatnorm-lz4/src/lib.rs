//! Decompression of LZ4-compressed message bodies.
//!
//! Rich/shared-content rows store their XML body as a raw LZ4 *block* (no frame
//! header, no stored size). [`decompress`] grows the output budget until the
//! block fits or [`MAX_RATIO`] is reached.

mod error;

use lz4_flex::block::{self, DecompressError as BlockError};

pub use error::DecompressError;

/// Initial output budget as a multiple of the input length.
pub const INITIAL_RATIO: usize = 4;
/// Largest output budget tried, as a multiple of the input length.
pub const MAX_RATIO: usize = 256;

const MIN_BUDGET: usize = 64;

/// Decompress an LZ4 block into UTF-8 text.
///
/// Trailing NUL padding is trimmed.
pub fn decompress(data: &[u8]) -> Result<String, DecompressError> {
    let mut bytes = decompress_bytes(data)?;
    let end = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    bytes.truncate(end);
    String::from_utf8(bytes).map_err(DecompressError::InvalidUtf8)
}

/// Decompress an LZ4 block into raw bytes.
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>, DecompressError> {
    if data.is_empty() {
        return Err(DecompressError::Empty);
    }

    let mut ratio = INITIAL_RATIO;
    loop {
        let budget = (data.len() * ratio).max(MIN_BUDGET);
        match block::decompress(data, budget) {
            Ok(out) => return Ok(out),
            Err(BlockError::OutputTooSmall { .. }) if ratio < MAX_RATIO => ratio *= 2,
            Err(BlockError::OutputTooSmall { .. }) => {
                return Err(DecompressError::TooLarge {
                    input_len: data.len(),
                    max_ratio: MAX_RATIO,
                });
            }
            Err(e) => return Err(DecompressError::Malformed(e)),
        }
    }
}
