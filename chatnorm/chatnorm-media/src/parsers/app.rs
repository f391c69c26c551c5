//! Shared/app content (`<appmsg>`): links, files, quotes, mini programs,
//! transfers and forwarded chat histories.

use chatnorm_core::{AppMessage, MediaMessage, MediaParseError, MediaParser, type_code};
use serde::Deserialize;

use crate::xml::{from_content, lenient_i64, required};

pub struct AppParser;

#[derive(Deserialize)]
struct AppDoc {
    appmsg: Option<AppElem>,
}

#[derive(Deserialize)]
struct AppElem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    des: String,
    #[serde(rename = "type", default)]
    app_type: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    md5: String,
    appattach: Option<AppAttachElem>,
    refermsg: Option<ReferElem>,
}

#[derive(Deserialize)]
struct AppAttachElem {
    #[serde(default)]
    fileext: String,
}

#[derive(Deserialize)]
struct ReferElem {
    #[serde(default)]
    displayname: String,
    #[serde(default)]
    content: String,
}

impl ReferElem {
    /// `"<name>: <text>"`; quoted non-text messages carry markup, shown as a placeholder.
    fn summary(&self) -> String {
        let body = if self.content.trim_start().starts_with('<') {
            "[媒体]"
        } else {
            self.content.as_str()
        };
        if self.displayname.is_empty() {
            body.to_string()
        } else {
            format!("{}: {body}", self.displayname)
        }
    }
}

impl MediaParser for AppParser {
    fn type_code(&self) -> i64 {
        type_code::APP
    }

    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError> {
        let doc: AppDoc = from_content(type_code::APP, content)?;
        let app = required(type_code::APP, "appmsg", doc.appmsg)?;
        Ok(MediaMessage::App(AppMessage {
            app_type: lenient_i64(&app.app_type),
            title: app.title,
            description: app.des,
            url: app.url,
            file_ext: app.appattach.map(|a| a.fileext).unwrap_or_default(),
            md5: app.md5,
            refer: app.refermsg.as_ref().map(ReferElem::summary),
        }))
    }
}
