/// Error returned by [`try_decode`](crate::try_decode).
#[derive(Debug, thiserror::Error)]
pub enum MetadataDecodeError {
    /// The blob is not a valid `BytesExtra` message.
    #[error("malformed auxiliary metadata: {0}")]
    Malformed(#[from] prost::DecodeError),

    /// The blob decoded but carries no items.
    #[error("auxiliary metadata has no items")]
    Empty,
}
