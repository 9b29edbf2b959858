//! Configuration for pattern definition resolvers
//!
//! Selects which pattern syntax definition names are written in, and the
//! prefixes used when several syntaxes are mixed. Can be built in code or
//! loaded from TOML:
//!
//! ```toml
//! syntax = "prefixed"
//!
//! [prefixes]
//! wildcard = "WILDCARD:"
//! regexp = "REGEXP:"
//! ```

use std::fmt;
use std::hash::Hash;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::pattern::{
    BasicPatternDefinitionResolver, DefinitionPatternMatcherFactory, PatternRecognizer,
    PrefixedPatternMatcherFactory, RegexpDefinitionPatternMatcherFactory,
    WildcardDefinitionPatternMatcherFactory, REGEXP_PREFIX, WILDCARD_PREFIX,
};

/// Errors that can occur when loading a resolver configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How definition names are recognized as patterns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternSyntax {
    /// Names containing `*` are wildcard patterns
    #[default]
    Wildcard,
    /// Every name is a regular expression
    Regexp,
    /// The syntax is chosen by a name prefix such as `WILDCARD:` or `REGEXP:`
    Prefixed,
}

impl fmt::Display for PatternSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatternSyntax::Wildcard => "wildcard",
            PatternSyntax::Regexp => "regexp",
            PatternSyntax::Prefixed => "prefixed",
        };
        f.write_str(name)
    }
}

/// Accepts every name as a pattern
#[derive(Debug, Clone, Copy, Default)]
struct AnyName;

impl PatternRecognizer for AnyName {
    fn is_pattern_recognized(&self, _candidate: &str) -> bool {
        true
    }
}

/// Use one component as both matcher factory and pattern recognizer
fn shared<T>(component: T) -> (Arc<dyn DefinitionPatternMatcherFactory>, Arc<dyn PatternRecognizer>)
where
    T: DefinitionPatternMatcherFactory + PatternRecognizer + 'static,
{
    let component = Arc::new(component);
    let factory: Arc<dyn DefinitionPatternMatcherFactory> = component.clone();
    let recognizer: Arc<dyn PatternRecognizer> = component;
    (factory, recognizer)
}

/// Configuration options for resolver construction
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Pattern syntax of definition names
    pub syntax: PatternSyntax,

    /// Prefix marking wildcard patterns in prefixed syntax
    pub wildcard_prefix: String,

    /// Prefix marking regular expression patterns in prefixed syntax
    pub regexp_prefix: String,
}

/// TOML structure for deserializing resolver configs
#[derive(Deserialize)]
struct TomlResolverConfig {
    syntax: Option<PatternSyntax>,
    prefixes: Option<TomlPrefixes>,
}

#[derive(Deserialize)]
struct TomlPrefixes {
    wildcard: Option<String>,
    regexp: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            syntax: PatternSyntax::default(),
            wildcard_prefix: WILDCARD_PREFIX.to_string(),
            regexp_prefix: REGEXP_PREFIX.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string, defaulting missing keys
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlResolverConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(syntax) = parsed.syntax {
            config.syntax = syntax;
        }
        if let Some(prefixes) = parsed.prefixes {
            if let Some(wildcard) = prefixes.wildcard {
                config.wildcard_prefix = wildcard;
            }
            if let Some(regexp) = prefixes.regexp {
                config.regexp_prefix = regexp;
            }
        }

        Ok(config)
    }

    /// Set the pattern syntax
    pub fn with_syntax(mut self, syntax: PatternSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Set the wildcard prefix used by prefixed syntax
    pub fn with_wildcard_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.wildcard_prefix = prefix.into();
        self
    }

    /// Set the regular expression prefix used by prefixed syntax
    pub fn with_regexp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.regexp_prefix = prefix.into();
        self
    }

    /// The matcher factory and pattern recognizer for the configured syntax
    pub fn components(
        &self,
    ) -> (Arc<dyn DefinitionPatternMatcherFactory>, Arc<dyn PatternRecognizer>) {
        match self.syntax {
            PatternSyntax::Wildcard => shared(WildcardDefinitionPatternMatcherFactory::new()),
            PatternSyntax::Regexp => {
                let factory: Arc<dyn DefinitionPatternMatcherFactory> =
                    Arc::new(RegexpDefinitionPatternMatcherFactory::new());
                let recognizer: Arc<dyn PatternRecognizer> = Arc::new(AnyName);
                (factory, recognizer)
            }
            PatternSyntax::Prefixed => shared(PrefixedPatternMatcherFactory::with_prefixes(
                &self.wildcard_prefix,
                &self.regexp_prefix,
            )),
        }
    }

    /// Build an empty resolver for the configured syntax
    pub fn build_resolver<K: Eq + Hash + fmt::Debug>(&self) -> BasicPatternDefinitionResolver<K> {
        let (factory, recognizer) = self.components();
        BasicPatternDefinitionResolver::new(factory, recognizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::definition::Definition;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.syntax, PatternSyntax::Wildcard);
        assert_eq!(config.wildcard_prefix, "WILDCARD:");
        assert_eq!(config.regexp_prefix, "REGEXP:");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
syntax = "prefixed"

[prefixes]
regexp = "RE:"
"#;
        let config = ResolverConfig::from_toml(toml_str).expect("Should parse");
        assert_eq!(config.syntax, PatternSyntax::Prefixed);
        assert_eq!(config.wildcard_prefix, "WILDCARD:");
        assert_eq!(config.regexp_prefix, "RE:");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ResolverConfig::from_toml("").expect("Should parse");
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_unknown_syntax_error() {
        let result = ResolverConfig::from_toml(r#"syntax = "glob""#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_regexp_syntax_treats_every_name_as_pattern() {
        let mut resolver = ResolverConfig::new()
            .with_syntax(PatternSyntax::Regexp)
            .build_resolver::<()>();
        let defs: HashMap<String, Definition> = [
            ("home".to_string(), Definition::new("home")),
            (r"page\.(\w+)".to_string(), Definition::new(r"page\.(\w+)").with_preparer("{1}")),
        ]
        .into_iter()
        .collect();

        let literals = resolver.store_definition_patterns(&defs, ()).expect("Should store");
        assert!(literals.is_empty());
        assert_eq!(resolver.matcher_count(&()), 2);

        let def = resolver
            .resolve_definition("page.news", &())
            .expect("Should format")
            .expect("Should match");
        assert_eq!(def.preparer.as_deref(), Some("news"));
    }

    #[test]
    fn test_prefixed_syntax_uses_configured_prefixes() {
        let mut resolver = ResolverConfig::new()
            .with_syntax(PatternSyntax::Prefixed)
            .with_wildcard_prefix("W:")
            .build_resolver::<()>();
        let defs: HashMap<String, Definition> = [
            ("W:a.*".to_string(), Definition::new("W:a.*")),
            ("WILDCARD:b.*".to_string(), Definition::new("WILDCARD:b.*")),
        ]
        .into_iter()
        .collect();

        let literals = resolver.store_definition_patterns(&defs, ()).expect("Should store");
        assert_eq!(literals.len(), 1);
        assert!(literals.contains_key("WILDCARD:b.*"));
        assert!(resolver.resolve_definition("a.x", &()).expect("Should format").is_some());
    }
}
