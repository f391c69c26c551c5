use chatnorm_core::{ContactCard, Location, MediaMessage, MediaParseError, MediaParser, type_code};
use serde::Deserialize;

use crate::xml::{from_content, lenient_f64, required};

/// Contact card; the fields are attributes of the root `<msg>` element.
pub struct ContactCardParser;

#[derive(Deserialize)]
struct CardDoc {
    #[serde(rename = "@username", default)]
    username: String,
    #[serde(rename = "@nickname", default)]
    nickname: String,
}

impl MediaParser for ContactCardParser {
    fn type_code(&self) -> i64 {
        type_code::CONTACT_CARD
    }

    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError> {
        let doc: CardDoc = from_content(type_code::CONTACT_CARD, content)?;
        let username = Some(doc.username).filter(|u| !u.is_empty());
        let username = required(type_code::CONTACT_CARD, "username", username)?;
        Ok(MediaMessage::ContactCard(ContactCard {
            username,
            nickname: doc.nickname,
        }))
    }
}

/// `<msg><location x=".." y=".." label=".." poiname=".."/></msg>`
pub struct LocationParser;

#[derive(Deserialize)]
struct LocationDoc {
    location: Option<LocationElem>,
}

#[derive(Deserialize)]
struct LocationElem {
    #[serde(rename = "@x", default)]
    x: String,
    #[serde(rename = "@y", default)]
    y: String,
    #[serde(rename = "@label", default)]
    label: String,
    #[serde(rename = "@poiname", default)]
    poi_name: String,
}

impl MediaParser for LocationParser {
    fn type_code(&self) -> i64 {
        type_code::LOCATION
    }

    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError> {
        let doc: LocationDoc = from_content(type_code::LOCATION, content)?;
        let loc = required(type_code::LOCATION, "location", doc.location)?;
        Ok(MediaMessage::Location(Location {
            latitude: lenient_f64(&loc.x),
            longitude: lenient_f64(&loc.y),
            label: loc.label,
            poi_name: loc.poi_name,
        }))
    }
}
