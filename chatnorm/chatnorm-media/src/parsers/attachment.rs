//! Parsers for messages backed by a file in the media store.

use chatnorm_core::{
    Emoji, Image, MediaMessage, MediaParseError, MediaParser, Video, Voice, type_code,
};
use serde::Deserialize;

use crate::xml::{from_content, lenient_u64, required};

/// `<msg><img md5=".." length=".."/></msg>`
pub struct ImageParser;

#[derive(Deserialize)]
struct ImageDoc {
    img: Option<ImageElem>,
}

#[derive(Deserialize)]
struct ImageElem {
    #[serde(rename = "@md5", default)]
    md5: String,
    #[serde(rename = "@length", default)]
    length: String,
}

impl MediaParser for ImageParser {
    fn type_code(&self) -> i64 {
        type_code::IMAGE
    }

    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError> {
        let doc: ImageDoc = from_content(type_code::IMAGE, content)?;
        let img = required(type_code::IMAGE, "img", doc.img)?;
        Ok(MediaMessage::Image(Image {
            md5: img.md5,
            length: lenient_u64(&img.length),
        }))
    }
}

/// `<msg><voicemsg voicelength=".." clientmsgid=".."/></msg>`
pub struct VoiceParser;

#[derive(Deserialize)]
struct VoiceDoc {
    voicemsg: Option<VoiceElem>,
}

#[derive(Deserialize)]
struct VoiceElem {
    #[serde(rename = "@voicelength", default)]
    voice_length: String,
    #[serde(rename = "@clientmsgid", default)]
    client_msg_id: String,
}

impl MediaParser for VoiceParser {
    fn type_code(&self) -> i64 {
        type_code::VOICE
    }

    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError> {
        let doc: VoiceDoc = from_content(type_code::VOICE, content)?;
        let voice = required(type_code::VOICE, "voicemsg", doc.voicemsg)?;
        Ok(MediaMessage::Voice(Voice {
            duration_ms: lenient_u64(&voice.voice_length),
            client_msg_id: voice.client_msg_id,
        }))
    }
}

/// `<msg><videomsg md5=".." playlength=".."/></msg>`
///
/// The store path is not part of the markup; the record adapter fills
/// [`Video::path`] from auxiliary metadata.
pub struct VideoParser;

#[derive(Deserialize)]
struct VideoDoc {
    videomsg: Option<VideoElem>,
}

#[derive(Deserialize)]
struct VideoElem {
    #[serde(rename = "@md5", default)]
    md5: String,
    #[serde(rename = "@playlength", default)]
    play_length: String,
}

impl MediaParser for VideoParser {
    fn type_code(&self) -> i64 {
        type_code::VIDEO
    }

    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError> {
        let doc: VideoDoc = from_content(type_code::VIDEO, content)?;
        let video = required(type_code::VIDEO, "videomsg", doc.videomsg)?;
        Ok(MediaMessage::Video(Video {
            md5: video.md5,
            play_length: lenient_u64(&video.play_length),
            path: None,
        }))
    }
}

/// `<msg><emoji md5=".." cdnurl=".."/></msg>`
pub struct EmojiParser;

#[derive(Deserialize)]
struct EmojiDoc {
    emoji: Option<EmojiElem>,
}

#[derive(Deserialize)]
struct EmojiElem {
    #[serde(rename = "@md5", default)]
    md5: String,
    #[serde(rename = "@cdnurl", default)]
    cdn_url: String,
}

impl MediaParser for EmojiParser {
    fn type_code(&self) -> i64 {
        type_code::EMOJI
    }

    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError> {
        let doc: EmojiDoc = from_content(type_code::EMOJI, content)?;
        let emoji = required(type_code::EMOJI, "emoji", doc.emoji)?;
        Ok(MediaMessage::Emoji(Emoji {
            md5: emoji.md5,
            cdn_url: emoji.cdn_url,
        }))
    }
}
