//! Schema-version adapters.
//!
//! Every adapter maps its columns onto a [`Message`] in
//! [`RawRecord::into_parts`]; the shared steps run in [`RawRecord::wrap`]:
//!
//! ```text
//! RecordParts
//!   └─ type 49: LZ4-decompress compress_content → content
//!       └─ type != 1: MediaResolver → media
//!           └─ auxiliary blob → chat_room_sender, video path
//! ```

mod darwin_v3;
mod v3;
mod v4;

use chatnorm_core::{MediaMessage, Message, MessageVersion, type_code};
use chatnorm_media::MediaResolver;
use chatnorm_protobuf::AuxiliaryMetadata;
use tracing::{debug, trace};

pub use darwin_v3::MessageDarwinV3;
pub use v3::MessageV3;
pub use v4::MessageV4;

/// A message with its version-specific columns mapped, before decoding.
#[derive(Debug, Clone)]
pub struct RecordParts {
    pub message: Message,
    /// Protobuf auxiliary metadata blob, when the schema has one.
    pub extra: Option<Vec<u8>>,
}

/// A raw row from one database schema version.
pub trait RawRecord: Sized {
    const VERSION: MessageVersion;

    /// Map columns onto a [`Message`] created with [`Self::VERSION`].
    fn into_parts(self) -> RecordParts;

    /// Convert into a canonical [`Message`], decoding what can be decoded.
    fn wrap(self, resolver: &MediaResolver) -> Message {
        let parts = self.into_parts();
        debug_assert_eq!(parts.message.version(), Self::VERSION);
        finish(parts, resolver)
    }
}

fn finish(parts: RecordParts, resolver: &MediaResolver) -> Message {
    let RecordParts { mut message, extra } = parts;

    if message.msg_type == type_code::APP {
        if let Some(text) = decompress_content(&message) {
            message.content = text;
        }
    }

    if message.msg_type != type_code::TEXT {
        message.media = resolve_media(resolver, &message);
    }

    if let Some(meta) = extra
        .as_deref()
        .filter(|blob| !blob.is_empty())
        .and_then(|blob| decode_metadata(&message, blob))
    {
        apply_metadata(&mut message, &meta);
    }

    message
}

fn decompress_content(message: &Message) -> Option<String> {
    let data = message.compress_content.as_deref()?;
    match chatnorm_lz4::decompress(data) {
        Ok(text) => Some(text),
        Err(e) => {
            debug!(sequence = message.sequence, error = %e, "keeping original content");
            None
        }
    }
}

fn resolve_media(resolver: &MediaResolver, message: &Message) -> Option<MediaMessage> {
    match resolver.resolve(message.msg_type, &message.content) {
        Ok(media) => Some(media),
        Err(e) => {
            debug!(sequence = message.sequence, error = %e, "no media description");
            None
        }
    }
}

fn decode_metadata(message: &Message, blob: &[u8]) -> Option<AuxiliaryMetadata> {
    match chatnorm_protobuf::try_decode(blob) {
        Ok(meta) => Some(meta),
        Err(e) => {
            debug!(sequence = message.sequence, error = %e, "ignoring auxiliary metadata");
            None
        }
    }
}

fn apply_metadata(message: &mut Message, meta: &AuxiliaryMetadata) {
    if message.is_chat_room() {
        if let Some(sender) = meta.chat_room_sender() {
            message.chat_room_sender = sender.to_string();
        }
    }

    if message.msg_type == type_code::VIDEO {
        let Some(path) = meta.media_path() else {
            return;
        };
        match &mut message.media {
            Some(MediaMessage::Video(video)) => {
                video.path = Some(video_store_path(path));
                trace!(sequence = message.sequence, path = ?video.path, "resolved video path");
            }
            _ => debug!(
                sequence = message.sequence,
                "video path without a parsed video; dropped"
            ),
        }
    }
}

/// Convert the video path carried in auxiliary metadata into a path relative
/// to the media store: separators become `/` and the leading root segment is
/// dropped.
///
/// The `<videomsg>` md5 does not match the deduplicated store, hence the
/// metadata path is used instead.
// TODO: match the videomsg md5 against the hardlink store and drop this
// heuristic; check whether other media types need the same stripping first.
pub fn video_store_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    match normalized.split_once('/') {
        Some((_root, rest)) => rest.to_string(),
        None => normalized,
    }
}

/// Split a `"<sender>:\n<body>"` chat-room body into sender and body.
pub(crate) fn split_sender_prefix(content: &str) -> Option<(&str, &str)> {
    let (sender, body) = content.split_once(":\n")?;
    let valid = !sender.is_empty()
        && !sender
            .chars()
            .any(|c| c.is_whitespace() || c == '<' || c == ':');
    valid.then_some((sender, body))
}
