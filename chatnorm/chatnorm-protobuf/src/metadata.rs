use std::collections::BTreeMap;

use prost::Message as _;

use crate::{error::MetadataDecodeError, wire::BytesExtra};

/// Item type carrying the sender identifier of a chat-room message.
pub const TAG_CHAT_ROOM_SENDER: i32 = 1;
/// Item type carrying the media file path relative to the data directory.
pub const TAG_MEDIA_PATH: i32 = 4;

/// Tag → value view of a decoded `BytesExtra` blob.
///
/// Never empty: a blob without items decodes to "absent" instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxiliaryMetadata(BTreeMap<i32, String>);

impl AuxiliaryMetadata {
    pub fn get(&self, tag: i32) -> Option<&str> {
        self.0.get(&tag).map(String::as_str)
    }

    pub fn chat_room_sender(&self) -> Option<&str> {
        self.get(TAG_CHAT_ROOM_SENDER)
    }

    pub fn media_path(&self) -> Option<&str> {
        self.get(TAG_MEDIA_PATH)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> {
        self.0.iter().map(|(tag, value)| (*tag, value.as_str()))
    }
}

/// Decode a `BytesExtra` blob.
///
/// Items are folded in encoded order, so a repeated type keeps the last value.
pub fn try_decode(data: &[u8]) -> Result<AuxiliaryMetadata, MetadataDecodeError> {
    let extra = BytesExtra::decode(data)?;
    if extra.items.is_empty() {
        return Err(MetadataDecodeError::Empty);
    }

    let map = extra
        .items
        .into_iter()
        .map(|item| (item.r#type, item.value))
        .collect();
    Ok(AuxiliaryMetadata(map))
}

/// Decode a `BytesExtra` blob, returning `None` when it is malformed or empty.
pub fn decode(data: &[u8]) -> Option<AuxiliaryMetadata> {
    try_decode(data).ok()
}
