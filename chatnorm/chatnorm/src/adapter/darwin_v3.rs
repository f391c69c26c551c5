use chatnorm_core::{Message, MessageVersion};
use serde::Deserialize;

use super::{RawRecord, RecordParts, split_sender_prefix};

/// Row of a macOS v3 `Chat_*` table.
///
/// These tables have no sequence column and no auxiliary blob; chat-room
/// senders are carried as a `"<sender>:\n"` prefix of the content.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageDarwinV3 {
    #[serde(rename = "msgCreateTime")]
    pub create_time: i64,
    #[serde(rename = "msgContent")]
    pub content: String,
    #[serde(rename = "messageType")]
    pub msg_type: i64,
    /// 0 sent, 1 received.
    #[serde(rename = "mesDes")]
    pub mes_des: i64,
    #[serde(rename = "CompressedContent")]
    pub compressed_content: Option<Vec<u8>>,
    /// Conversation owning the table; supplied by the table lookup.
    pub talker: String,
}

impl RawRecord for MessageDarwinV3 {
    const VERSION: MessageVersion = MessageVersion::WeChatDarwinV3;

    fn into_parts(self) -> RecordParts {
        let mut message = Message::new(Self::VERSION);
        message.sequence = self.create_time.saturating_mul(1000);
        message.set_create_time_secs(self.create_time);
        message.talker = self.talker;
        message.is_sender = self.mes_des == 0;
        message.msg_type = self.msg_type;
        message.content = self.content;
        message.compress_content = self.compressed_content;

        if message.is_chat_room() && !message.is_sender {
            if let Some((sender, body)) = split_sender_prefix(&message.content) {
                let (sender, body) = (sender.to_string(), body.to_string());
                message.chat_room_sender = sender;
                message.content = body;
            }
        }

        RecordParts {
            message,
            extra: None,
        }
    }
}
