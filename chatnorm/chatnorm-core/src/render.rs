//! Plain-text transcript rendering.

use std::fmt::Write as _;

use chrono::{FixedOffset, Offset, Utc};

use crate::message::Message;

/// Speaker label used for messages sent by the database owner.
pub const DEFAULT_SELF_LABEL: &str = "我";

/// Timestamp layout of the transcript header line.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a [`Message`] as a transcript entry:
///
/// ```text
/// <speaker> [<chat room>] YYYY-MM-DD HH:MM:SS
/// <content or media description>
/// ```
#[derive(Debug, Clone)]
pub struct PlainTextRenderer {
    self_label: String,
    offset: FixedOffset,
}

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self {
            self_label: DEFAULT_SELF_LABEL.to_string(),
            offset: Utc.fix(),
        }
    }

    /// Override the label used for outgoing messages.
    pub fn with_self_label(mut self, label: impl Into<String>) -> Self {
        self.self_label = label.into();
        self
    }

    /// Render timestamps in a fixed offset instead of UTC.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn render(&self, message: &Message, show_chat_room: bool, host: &str) -> String {
        let mut buf = String::new();

        let speaker = if message.is_sender {
            self.self_label.as_str()
        } else if message.is_chat_room() {
            message.chat_room_sender.as_str()
        } else {
            message.talker.as_str()
        };
        push_labeled(&mut buf, &message.display_name, speaker);
        buf.push(' ');

        if message.is_chat_room() && show_chat_room {
            buf.push('[');
            push_labeled(&mut buf, &message.chat_room_name, &message.talker);
            buf.push_str("] ");
        }

        let local = message.create_time.with_timezone(&self.offset);
        // Writing into a String cannot fail.
        let _ = write!(buf, "{}", local.format(TIME_FORMAT));
        buf.push('\n');

        match &message.media {
            Some(media) => {
                let _ = write!(buf, "{}", media.with_host(host));
            }
            None => buf.push_str(&message.content),
        }
        buf.push('\n');

        buf
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes `name(id)` when a name is known, otherwise just `id`.
fn push_labeled(buf: &mut String, name: &str, id: &str) {
    if name.is_empty() {
        buf.push_str(id);
    } else {
        buf.push_str(name);
        buf.push('(');
        buf.push_str(id);
        buf.push(')');
    }
}
