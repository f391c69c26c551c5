//! Structured descriptions of non-text message content.

use std::fmt;

/// Message type codes used as media registry keys.
pub mod type_code {
    pub const TEXT: i64 = 1;
    pub const IMAGE: i64 = 3;
    pub const VOICE: i64 = 34;
    pub const CONTACT_CARD: i64 = 42;
    pub const VIDEO: i64 = 43;
    pub const EMOJI: i64 = 47;
    pub const LOCATION: i64 = 48;
    /// Shared/app content; stored compressed in v3 databases.
    pub const APP: i64 = 49;
    pub const VOIP: i64 = 50;
    pub const SYSTEM: i64 = 10000;
    pub const REVOKE: i64 = 10002;
}

/// `<appmsg><type>` values with a dedicated description.
mod app_type {
    pub const LINK: i64 = 5;
    pub const FILE: i64 = 6;
    pub const CHAT_HISTORY: i64 = 19;
    pub const MINI_PROGRAM: i64 = 33;
    pub const MINI_PROGRAM_CARD: i64 = 36;
    pub const QUOTE: i64 = 57;
    pub const TRANSFER: i64 = 2000;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub md5: String,
    pub length: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Voice {
    pub duration_ms: u64,
    pub client_msg_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactCard {
    pub username: String,
    pub nickname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Video {
    pub md5: String,
    /// Play length in seconds.
    pub play_length: u64,
    /// Path relative to the media store, when the adapter could resolve one.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emoji {
    pub md5: String,
    pub cdn_url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
    pub poi_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppMessage {
    pub app_type: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub file_ext: String,
    pub md5: String,
    /// Summary of the quoted message for reply messages.
    pub refer: Option<String>,
}

/// Type-specific media description; exactly one variant per message.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaMessage {
    Image(Image),
    Voice(Voice),
    ContactCard(ContactCard),
    Video(Video),
    Emoji(Emoji),
    Location(Location),
    App(AppMessage),
    VoipCall { summary: String },
    System { text: String },
    Revoke { text: String },
}

impl MediaMessage {
    /// Message type code this variant is registered under.
    pub fn type_code(&self) -> i64 {
        match self {
            Self::Image(_) => type_code::IMAGE,
            Self::Voice(_) => type_code::VOICE,
            Self::ContactCard(_) => type_code::CONTACT_CARD,
            Self::Video(_) => type_code::VIDEO,
            Self::Emoji(_) => type_code::EMOJI,
            Self::Location(_) => type_code::LOCATION,
            Self::App(_) => type_code::APP,
            Self::VoipCall { .. } => type_code::VOIP,
            Self::System { .. } => type_code::SYSTEM,
            Self::Revoke { .. } => type_code::REVOKE,
        }
    }

    /// Bind `host` for media URLs and return a displayable description.
    pub fn with_host<'a>(&'a self, host: &'a str) -> MediaRef<'a> {
        MediaRef { media: self, host }
    }
}

/// A [`MediaMessage`] paired with the host used to build media URLs.
pub struct MediaRef<'a> {
    media: &'a MediaMessage,
    host: &'a str,
}

impl fmt::Display for MediaRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self.host;
        match self.media {
            MediaMessage::Image(img) => write!(f, "![图片](http://{host}/image/{})", img.md5),
            MediaMessage::Voice(voice) => {
                write!(f, "[语音|{}秒]", voice.duration_ms.div_ceil(1000))
            }
            MediaMessage::ContactCard(card) => write!(f, "[名片|{}]", card.nickname),
            MediaMessage::Video(video) => {
                let key = video.path.as_deref().unwrap_or(&video.md5);
                write!(f, "![视频](http://{host}/video/{key})")
            }
            MediaMessage::Emoji(emoji) if emoji.cdn_url.is_empty() => f.write_str("[动画表情]"),
            MediaMessage::Emoji(emoji) => write!(f, "![动画表情]({})", emoji.cdn_url),
            MediaMessage::Location(loc) => {
                let label = if loc.label.is_empty() {
                    &loc.poi_name
                } else {
                    &loc.label
                };
                write!(f, "[位置|{label}]")
            }
            MediaMessage::App(app) => fmt_app(app, host, f),
            MediaMessage::VoipCall { summary } => write!(f, "[语音通话|{summary}]"),
            MediaMessage::System { text } | MediaMessage::Revoke { text } => f.write_str(text),
        }
    }
}

fn fmt_app(app: &AppMessage, host: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match app.app_type {
        app_type::LINK => write!(f, "[链接|{}]({})", app.title, app.url),
        app_type::FILE => write!(f, "[文件|{}](http://{host}/file/{})", app.title, app.md5),
        app_type::CHAT_HISTORY => write!(f, "[聊天记录|{}]", app.title),
        app_type::MINI_PROGRAM | app_type::MINI_PROGRAM_CARD => {
            write!(f, "[小程序|{}]", app.title)
        }
        app_type::QUOTE => match &app.refer {
            Some(refer) => write!(f, "{}\n[引用|{refer}]", app.title),
            None => f.write_str(&app.title),
        },
        app_type::TRANSFER => write!(f, "[转账|{}]", app.description),
        _ if app.title.is_empty() => f.write_str("[分享]"),
        _ => write!(f, "[{}]", app.title),
    }
}
