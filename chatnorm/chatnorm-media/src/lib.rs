//! Media content parsing for `chatnorm`.
//!
//! [`MediaResolver`] maps message type codes to [`MediaParser`]s and
//! dispatches message content to the matching one. The built-in parsers in
//! [`parsers`] read the XML bodies of image, voice, video, emoji, contact card,
//! location, app, call and system messages.
//!
//! New message types are supported by registering another parser; dispatch
//! never changes.
//!
//! ```
//! use chatnorm_media::MediaResolver;
//!
//! let resolver = MediaResolver::builder().with_default_parsers().build();
//! let media = resolver.resolve(3, r#"<msg><img md5="abc" length="12"/></msg>"#);
//! assert!(media.is_ok());
//! ```

pub mod parsers;
mod resolver;
mod xml;

pub use chatnorm_core::{MediaMessage, MediaParseError, MediaParser};
pub use resolver::{MediaResolver, MediaResolverBuilder};
