//! Calls and system notices.

use chatnorm_core::{MediaMessage, MediaParseError, MediaParser, type_code};
use serde::Deserialize;

use crate::xml::{from_content, required};

/// `<voipmsg><VoIPBubbleMsg><msg>summary</msg></VoIPBubbleMsg></voipmsg>`
pub struct VoipParser;

#[derive(Deserialize)]
struct VoipDoc {
    #[serde(rename = "VoIPBubbleMsg")]
    bubble: Option<VoipBubbleElem>,
}

#[derive(Deserialize)]
struct VoipBubbleElem {
    #[serde(default)]
    msg: String,
}

impl MediaParser for VoipParser {
    fn type_code(&self) -> i64 {
        type_code::VOIP
    }

    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError> {
        let doc: VoipDoc = from_content(type_code::VOIP, content)?;
        let bubble = required(type_code::VOIP, "VoIPBubbleMsg", doc.bubble)?;
        Ok(MediaMessage::VoipCall {
            summary: bubble.msg.trim().to_string(),
        })
    }
}

/// System notices are plain text, not markup.
pub struct SystemParser;

impl MediaParser for SystemParser {
    fn type_code(&self) -> i64 {
        type_code::SYSTEM
    }

    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError> {
        let text = content.trim();
        let text = required(
            type_code::SYSTEM,
            "text",
            Some(text).filter(|t| !t.is_empty()),
        )?;
        Ok(MediaMessage::System {
            text: text.to_string(),
        })
    }
}

/// `<sysmsg type="revokemsg"><revokemsg><replacemsg>..</replacemsg></revokemsg></sysmsg>`
pub struct RevokeParser;

#[derive(Deserialize)]
struct RevokeDoc {
    revokemsg: Option<RevokeElem>,
}

#[derive(Deserialize)]
struct RevokeElem {
    #[serde(default)]
    replacemsg: String,
}

impl MediaParser for RevokeParser {
    fn type_code(&self) -> i64 {
        type_code::REVOKE
    }

    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError> {
        let doc: RevokeDoc = from_content(type_code::REVOKE, content)?;
        let revoke = required(type_code::REVOKE, "revokemsg", doc.revokemsg)?;
        Ok(MediaMessage::Revoke {
            text: revoke.replacemsg.trim().to_string(),
        })
    }
}
