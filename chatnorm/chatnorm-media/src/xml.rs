//! Permissive XML helpers shared by the built-in parsers.

use chatnorm_core::MediaParseError;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
#[error("no XML root element in content")]
struct NoRootElement;

/// Locate the XML document inside message content.
///
/// Group messages from some clients prefix the body with a `"<sender>:\n"`
/// line; anything before the first `<` is skipped.
pub(crate) fn xml_body(type_code: i64, content: &str) -> Result<&str, MediaParseError> {
    let start = content.find('<').ok_or_else(|| MediaParseError::Malformed {
        type_code,
        source: Box::new(NoRootElement),
    })?;
    Ok(content[start..].trim_end())
}

/// Deserialize the root element of `content` into `T`.
pub(crate) fn from_content<T: DeserializeOwned>(
    type_code: i64,
    content: &str,
) -> Result<T, MediaParseError> {
    let body = xml_body(type_code, content)?;
    quick_xml::de::from_str(body).map_err(|e| MediaParseError::Malformed {
        type_code,
        source: Box::new(e),
    })
}

/// Unwrap an element that must be present for the message to be meaningful.
pub(crate) fn required<T>(
    type_code: i64,
    element: &str,
    value: Option<T>,
) -> Result<T, MediaParseError> {
    value.ok_or_else(|| MediaParseError::MissingElement {
        type_code,
        element: element.to_string(),
    })
}

/// Parse a numeric attribute, treating empty or garbled values as zero.
pub(crate) fn lenient_u64(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or_default()
}

pub(crate) fn lenient_i64(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or_default()
}

pub(crate) fn lenient_f64(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or_default()
}
