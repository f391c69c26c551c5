//! Schema-agnostic core types for `chatnorm`.
//!
//! This crate provides the canonical [`Message`] every schema adapter produces,
//! the [`MediaMessage`] variants, the [`MediaParser`] contract used by the
//! media registry, and [`PlainTextRenderer`] for transcript output.

mod error;
mod media;
mod message;
mod parser;
mod render;
mod version;

pub use error::MediaParseError;
pub use media::{
    AppMessage, ContactCard, Emoji, Image, Location, MediaMessage, MediaRef, Video, Voice,
    type_code,
};
pub use message::{CHAT_ROOM_SUFFIX, Message, is_chat_room_talker};
pub use parser::MediaParser;
pub use render::{DEFAULT_SELF_LABEL, PlainTextRenderer, TIME_FORMAT};
pub use version::MessageVersion;
