use chatnorm_core::{Message, MessageVersion};
use serde::Deserialize;

use super::{RawRecord, RecordParts, split_sender_prefix};

/// Row of a v4 per-conversation `Msg_*` table.
///
/// The tables are keyed by conversation, so `talker` comes from the table
/// lookup and `sender_name` from joining `real_sender_id` on `Name2Id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageV4 {
    pub sort_seq: i64,
    pub real_sender_id: i64,
    /// Low 32 bits: type; high 32 bits: sub type.
    pub local_type: i64,
    pub talker: String,
    pub sender_name: String,
    pub is_sender: i64,
    pub create_time: i64,
    pub message_content: String,
    pub compress_content: Option<Vec<u8>>,
}

impl RawRecord for MessageV4 {
    const VERSION: MessageVersion = MessageVersion::WeChatV4;

    fn into_parts(self) -> RecordParts {
        let mut message = Message::new(Self::VERSION);
        message.sequence = self.sort_seq;
        message.set_create_time_secs(self.create_time);
        message.talker_id = self.real_sender_id;
        message.talker = self.talker;
        message.is_sender = self.is_sender == 1;
        message.msg_type = self.local_type & 0xFFFF_FFFF;
        message.sub_type = self.local_type >> 32;
        message.content = self.message_content;
        message.compress_content = self.compress_content;

        if message.is_chat_room() && !message.is_sender {
            if let Some((sender, body)) = split_sender_prefix(&message.content) {
                let (sender, body) = (sender.to_string(), body.to_string());
                message.chat_room_sender = sender;
                message.content = body;
            }
            if !self.sender_name.is_empty() {
                message.chat_room_sender = self.sender_name;
            }
        }

        RecordParts {
            message,
            extra: None,
        }
    }
}
