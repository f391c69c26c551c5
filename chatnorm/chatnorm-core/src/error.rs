//! Error types for the media parsing layer.

/// Error returned by [`MediaParser`](crate::MediaParser) implementations and
/// the media registry.
#[derive(Debug, thiserror::Error)]
pub enum MediaParseError {
    /// No parser is registered for the message type code.
    #[error("no media parser registered for type {type_code}")]
    UnknownType { type_code: i64 },

    /// The content could not be interpreted as the expected markup.
    #[error("malformed content for media type {type_code}: {source}")]
    Malformed {
        type_code: i64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The content parsed but a required element was missing or empty.
    #[error("media type {type_code} is missing '{element}'")]
    MissingElement { type_code: i64, element: String },
}
