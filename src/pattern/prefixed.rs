//! Patterns whose syntax is chosen by a name prefix
//!
//! A definition named `REGEXP:page\.(\w+)` is a regular expression pattern and
//! one named `WILDCARD:page.*` is a wildcard pattern. The prefix is stripped
//! before the pattern is handed to the factory registered for it.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::definition::Definition;

use super::regexp::RegexpDefinitionPatternMatcherFactory;
use super::wildcard::WildcardDefinitionPatternMatcherFactory;
use super::{
    DefinitionPatternMatcher, DefinitionPatternMatcherFactory, PatternError, PatternRecognizer,
};

/// Default prefix for wildcard patterns
pub const WILDCARD_PREFIX: &str = "WILDCARD:";

/// Default prefix for regular expression patterns
pub const REGEXP_PREFIX: &str = "REGEXP:";

/// Dispatches to a matcher factory based on the pattern's prefix
///
/// Prefixes are tried in registration order; the first one that matches wins.
#[derive(Clone, Default)]
pub struct PrefixedPatternMatcherFactory {
    prefixes: Vec<(String, Arc<dyn DefinitionPatternMatcherFactory>)>,
}

impl fmt::Debug for PrefixedPatternMatcherFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixedPatternMatcherFactory")
            .field("prefixes", &self.prefixes.iter().map(|(p, _)| p).collect::<Vec<_>>())
            .finish()
    }
}

impl PrefixedPatternMatcherFactory {
    /// Create a factory with no registered prefixes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory with the given wildcard and regular expression prefixes
    pub fn with_prefixes(wildcard_prefix: &str, regexp_prefix: &str) -> Self {
        let mut factory = Self::new();
        factory.register(wildcard_prefix, Arc::new(WildcardDefinitionPatternMatcherFactory::new()));
        factory.register(regexp_prefix, Arc::new(RegexpDefinitionPatternMatcherFactory::new()));
        factory
    }

    /// Register a factory for a prefix
    pub fn register(
        &mut self,
        prefix: impl Into<String>,
        factory: Arc<dyn DefinitionPatternMatcherFactory>,
    ) {
        self.prefixes.push((prefix.into(), factory));
    }

    /// Registered prefixes in dispatch order
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(|(p, _)| p.as_str())
    }

    fn find<'a>(
        &'a self,
        candidate: &'a str,
    ) -> Option<(&'a str, &'a dyn DefinitionPatternMatcherFactory)> {
        self.prefixes.iter().find_map(|(prefix, factory)| {
            candidate
                .strip_prefix(prefix.as_str())
                .map(|rest| (rest, factory.as_ref()))
        })
    }
}

impl PatternRecognizer for PrefixedPatternMatcherFactory {
    fn is_pattern_recognized(&self, candidate: &str) -> bool {
        self.find(candidate).is_some()
    }
}

impl DefinitionPatternMatcherFactory for PrefixedPatternMatcherFactory {
    fn create_definition_pattern_matcher(
        &self,
        pattern: &str,
        definition: &Definition,
    ) -> Result<Box<dyn DefinitionPatternMatcher>, PatternError> {
        match self.find(pattern) {
            Some((stripped, factory)) => factory.create_definition_pattern_matcher(stripped, definition),
            None => {
                debug!(pattern, "no registered prefix for pattern");
                Err(PatternError::UnknownPrefix {
                    pattern: pattern.to_string(),
                })
            }
        }
    }
}
