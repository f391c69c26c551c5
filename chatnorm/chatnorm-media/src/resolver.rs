//! Type-code keyed parser registry.

use std::{collections::HashMap, sync::Arc};

use chatnorm_core::{MediaMessage, MediaParseError, MediaParser};

use crate::parsers;

/// Dispatches message content to the [`MediaParser`] registered for its type code.
#[derive(Clone, Default)]
pub struct MediaResolver {
    parsers: HashMap<i64, Arc<dyn MediaParser>>,
}

/// Builder for configuring [`MediaResolver`].
#[derive(Default)]
pub struct MediaResolverBuilder {
    parsers: Vec<Arc<dyn MediaParser>>,
}

impl MediaResolver {
    /// Create a builder for [`MediaResolver`].
    pub fn builder() -> MediaResolverBuilder {
        MediaResolverBuilder::default()
    }

    /// Create a resolver with no parsers registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with every built-in parser registered.
    pub fn with_default_parsers() -> Self {
        Self::builder().with_default_parsers().build()
    }

    /// Register a parser, replacing any parser for the same type code.
    pub fn register_parser(&mut self, parser: Box<dyn MediaParser>) {
        self.register_shared_parser(Arc::from(parser));
    }

    /// Register a shared parser, replacing any parser for the same type code.
    pub fn register_shared_parser(&mut self, parser: Arc<dyn MediaParser>) {
        self.parsers.insert(parser.type_code(), parser);
    }

    pub fn supports(&self, type_code: i64) -> bool {
        self.parsers.contains_key(&type_code)
    }

    /// Registered type codes in ascending order.
    pub fn type_codes(&self) -> Vec<i64> {
        let mut codes: Vec<i64> = self.parsers.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Parse `content` with the parser registered for `type_code`.
    ///
    /// Unknown type codes fail without invoking any parser.
    pub fn resolve(&self, type_code: i64, content: &str) -> Result<MediaMessage, MediaParseError> {
        let parser = self
            .parsers
            .get(&type_code)
            .ok_or(MediaParseError::UnknownType { type_code })?;
        parser.parse(content)
    }
}

impl MediaResolverBuilder {
    /// Register a media parser.
    pub fn with_parser(mut self, parser: Box<dyn MediaParser>) -> Self {
        self.parsers.push(Arc::from(parser));
        self
    }

    /// Register all built-in parsers.
    pub fn with_default_parsers(mut self) -> Self {
        self.parsers.extend(parsers::default_parsers());
        self
    }

    /// Build the resolver. Later registrations win on duplicate type codes.
    pub fn build(self) -> MediaResolver {
        let mut resolver = MediaResolver::new();
        for parser in self.parsers {
            resolver.register_shared_parser(parser);
        }
        resolver
    }
}
