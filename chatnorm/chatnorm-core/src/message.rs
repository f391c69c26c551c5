//! Canonical message produced by every schema adapter.

use chrono::{DateTime, Utc};

use crate::{media::MediaMessage, render::PlainTextRenderer, version::MessageVersion};

/// Suffix that marks a talker identifier as a group conversation.
pub const CHAT_ROOM_SUFFIX: &str = "@chatroom";

/// Returns `true` when `talker` names a group conversation.
pub fn is_chat_room_talker(talker: &str) -> bool {
    talker.ends_with(CHAT_ROOM_SUFFIX)
}

/// A chat message normalized from one raw database row.
///
/// `display_name` and `chat_room_name` are enrichment fields: adapters leave
/// them empty and a contact lookup fills them before rendering. The schema
/// [`version`](Message::version) is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// 10-digit epoch timestamp followed by a 3-digit ordinal.
    pub sequence: i64,
    pub create_time: DateTime<Utc>,
    /// Index into the external name table.
    pub talker_id: i64,
    /// Account identifier or group identifier.
    pub talker: String,
    pub is_sender: bool,
    pub msg_type: i64,
    pub sub_type: i64,
    /// Plain text, decompressed text, or the original markup.
    pub content: String,
    /// Raw compressed payload, kept verbatim.
    pub compress_content: Option<Vec<u8>>,
    pub chat_room_sender: String,
    pub display_name: String,
    pub chat_room_name: String,
    pub media: Option<MediaMessage>,
    version: MessageVersion,
}

impl Message {
    pub fn new(version: MessageVersion) -> Self {
        Self {
            sequence: 0,
            create_time: DateTime::<Utc>::UNIX_EPOCH,
            talker_id: 0,
            talker: String::new(),
            is_sender: false,
            msg_type: 0,
            sub_type: 0,
            content: String::new(),
            compress_content: None,
            chat_room_sender: String::new(),
            display_name: String::new(),
            chat_room_name: String::new(),
            media: None,
            version,
        }
    }

    pub fn version(&self) -> MessageVersion {
        self.version
    }

    pub fn is_chat_room(&self) -> bool {
        is_chat_room_talker(&self.talker)
    }

    /// Set `create_time` from epoch seconds.
    ///
    /// Values outside the representable range fall back to the Unix epoch.
    pub fn set_create_time_secs(&mut self, secs: i64) {
        self.create_time = DateTime::from_timestamp(secs, 0).unwrap_or_default();
    }

    /// Render with the default [`PlainTextRenderer`].
    pub fn plain_text(&self, show_chat_room: bool, host: &str) -> String {
        PlainTextRenderer::default().render(self, show_chat_room, host)
    }
}
