/// Error returned by [`decompress`](crate::decompress).
#[derive(Debug, thiserror::Error)]
pub enum DecompressError {
    #[error("compressed payload is empty")]
    Empty,

    /// The block is truncated or references data outside the output.
    #[error("malformed LZ4 block: {0}")]
    Malformed(#[source] lz4_flex::block::DecompressError),

    #[error("LZ4 block of {input_len} bytes expands beyond {max_ratio}x")]
    TooLarge { input_len: usize, max_ratio: usize },

    #[error("decompressed content is not valid UTF-8: {0}")]
    InvalidUtf8(#[source] std::string::FromUtf8Error),
}
