//! Decoder for the protobuf-encoded auxiliary metadata (`BytesExtra`) stored
//! alongside message rows.
//!
//! The blob carries a list of `(type, value)` items. [`decode`] folds them
//! into an [`AuxiliaryMetadata`] map keyed by item type.

mod error;
mod metadata;
mod wire;

pub use error::MetadataDecodeError;
pub use metadata::{AuxiliaryMetadata, TAG_CHAT_ROOM_SENDER, TAG_MEDIA_PATH, decode, try_decode};
pub use wire::{BytesExtra, BytesExtraHeader, BytesExtraItem};
