//! Normalization of raw chat message rows into the canonical [`Message`].
//!
//! Each supported database schema has its own row type implementing
//! [`RawRecord`]. Wrapping a row never fails: compressed bodies, media markup
//! and auxiliary metadata are decoded best-effort and any field that cannot be
//! derived keeps its default.
//!
//! ```
//! use chatnorm::{MessageV3, Normalizer};
//!
//! let normalizer = Normalizer::new();
//! let message = normalizer.normalize(MessageV3 {
//!     create_time: 1_700_000_000,
//!     str_talker: "alice".to_string(),
//!     msg_type: 1,
//!     str_content: "hi".to_string(),
//!     ..Default::default()
//! });
//! assert_eq!(message.plain_text(false, "127.0.0.1:5030"), "alice 2023-11-14 22:13:20\nhi\n");
//! ```

pub mod adapter;
mod normalizer;

pub use adapter::{MessageDarwinV3, MessageV3, MessageV4, RawRecord, RecordParts};
pub use chatnorm_core as core;
pub use chatnorm_core::{MediaMessage, Message, MessageVersion, PlainTextRenderer};
pub use chatnorm_lz4 as lz4;
pub use chatnorm_media as media;
pub use chatnorm_protobuf as protobuf;
pub use normalizer::{Normalizer, NormalizerBuilder};
