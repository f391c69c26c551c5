//! Built-in [`MediaParser`](chatnorm_core::MediaParser) implementations.
//!
//! | Type | Parser |
//! |---|---|
//! | 3 | [`ImageParser`] |
//! | 34 | [`VoiceParser`] |
//! | 42 | [`ContactCardParser`] |
//! | 43 | [`VideoParser`] |
//! | 47 | [`EmojiParser`] |
//! | 48 | [`LocationParser`] |
//! | 49 | [`AppParser`] |
//! | 50 | [`VoipParser`] |
//! | 10000 | [`SystemParser`] |
//! | 10002 | [`RevokeParser`] |

mod app;
mod attachment;
mod card;
mod notice;

use std::sync::Arc;

use chatnorm_core::MediaParser;

pub use app::AppParser;
pub use attachment::{EmojiParser, ImageParser, VideoParser, VoiceParser};
pub use card::{ContactCardParser, LocationParser};
pub use notice::{RevokeParser, SystemParser, VoipParser};

/// One instance of every built-in parser.
pub fn default_parsers() -> Vec<Arc<dyn MediaParser>> {
    vec![
        Arc::new(ImageParser),
        Arc::new(VoiceParser),
        Arc::new(ContactCardParser),
        Arc::new(VideoParser),
        Arc::new(EmojiParser),
        Arc::new(LocationParser),
        Arc::new(AppParser),
        Arc::new(VoipParser),
        Arc::new(SystemParser),
        Arc::new(RevokeParser),
    ]
}
