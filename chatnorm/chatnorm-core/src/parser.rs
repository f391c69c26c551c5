//! Parser trait used to register pluggable media decoders.

use crate::{error::MediaParseError, media::MediaMessage};

/// Parses the content of one message type into a [`MediaMessage`].
///
/// Implementations are registered with `chatnorm_media::MediaResolver` and
/// dispatched on [`MediaParser::type_code`]. A parser must either return a
/// fully populated variant or an error; partial variants are not allowed.
pub trait MediaParser: Send + Sync {
    /// Returns the message type code this parser handles.
    fn type_code(&self) -> i64;

    /// Parse message content (usually embedded XML) into a media variant.
    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError>;
}
