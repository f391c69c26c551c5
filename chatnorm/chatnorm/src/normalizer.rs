//! Facade that owns the media registry and converts rows of any schema.

use chatnorm_core::{MediaParser, Message};
use chatnorm_media::MediaResolver;
use rayon::prelude::*;

use crate::adapter::RawRecord;

/// Converts raw rows into [`Message`]s using a shared [`MediaResolver`].
///
/// Conversions are independent; the normalizer holds no mutable state and can
/// be shared across threads.
#[derive(Clone)]
pub struct Normalizer {
    resolver: MediaResolver,
}

/// Builder for configuring [`Normalizer`].
#[derive(Default)]
pub struct NormalizerBuilder {
    resolver: MediaResolver,
}

impl Normalizer {
    /// Create a builder with an empty media registry.
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// Create a normalizer with every built-in media parser registered.
    pub fn new() -> Self {
        Self::builder().with_default_parsers().build()
    }

    pub fn resolver(&self) -> &MediaResolver {
        &self.resolver
    }

    pub fn normalize<R: RawRecord>(&self, raw: R) -> Message {
        raw.wrap(&self.resolver)
    }

    /// Normalize rows in parallel, preserving input order.
    pub fn normalize_batch<R: RawRecord + Send>(&self, rows: Vec<R>) -> Vec<Message> {
        rows.into_par_iter()
            .map(|raw| raw.wrap(&self.resolver))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerBuilder {
    /// Register a media parser.
    pub fn with_parser(mut self, parser: Box<dyn MediaParser>) -> Self {
        self.resolver.register_parser(parser);
        self
    }

    /// Register all built-in media parsers.
    pub fn with_default_parsers(mut self) -> Self {
        for parser in chatnorm_media::parsers::default_parsers() {
            self.resolver.register_shared_parser(parser);
        }
        self
    }

    /// Replace the registry with a preconfigured resolver.
    pub fn with_resolver(mut self, resolver: MediaResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            resolver: self.resolver,
        }
    }
}
