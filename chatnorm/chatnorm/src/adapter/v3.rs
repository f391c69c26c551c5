use chatnorm_core::{Message, MessageVersion};
use serde::Deserialize;

use super::{RawRecord, RecordParts};

/// Row of the Windows v3 `MSG` table.
///
/// Only the columns used for normalization are mapped; serde names match the
/// table's column names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MessageV3 {
    /// 10-digit timestamp followed by a 3-digit ordinal.
    pub sequence: i64,
    pub create_time: i64,
    /// Row id in the `Name2ID` table.
    pub talker_id: i64,
    pub str_talker: String,
    /// 0 received, 1 sent.
    pub is_sender: i64,
    #[serde(rename = "Type")]
    pub msg_type: i64,
    pub sub_type: i64,
    pub str_content: String,
    pub compress_content: Option<Vec<u8>>,
    /// Protobuf blob carrying the chat-room sender and media paths.
    pub bytes_extra: Option<Vec<u8>>,
}

impl RawRecord for MessageV3 {
    const VERSION: MessageVersion = MessageVersion::WeChatV3;

    fn into_parts(self) -> RecordParts {
        let mut message = Message::new(Self::VERSION);
        message.sequence = self.sequence;
        message.set_create_time_secs(self.create_time);
        message.talker_id = self.talker_id;
        message.talker = self.str_talker;
        message.is_sender = self.is_sender == 1;
        message.msg_type = self.msg_type;
        message.sub_type = self.sub_type;
        message.content = self.str_content;
        message.compress_content = self.compress_content;

        RecordParts {
            message,
            extra: self.bytes_extra,
        }
    }
}
