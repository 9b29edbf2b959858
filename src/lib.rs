//! Tiles Patterns - pattern-based view definitions
//!
//! Views are described by definitions: a template plus the attributes it is
//! rendered with. Instead of declaring one definition per view, a definition
//! can be registered under a pattern name such as `test.*.page`. When a
//! requested name matches, the captured parts are substituted into `{n}`
//! placeholders in the definition to produce a concrete one.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use tiles_patterns::{Attribute, Definition, ResolverConfig};
//!
//! let pattern = Definition::new("test.*.page")
//!     .with_extends("base-{1}")
//!     .with_template_attribute(Attribute::template("/layout/{1}.jsp"));
//! let definitions = HashMap::from([(pattern.name.clone(), pattern)]);
//!
//! let mut resolver = ResolverConfig::new().build_resolver::<&str>();
//! resolver.store_definition_patterns(&definitions, "en").unwrap();
//!
//! let def = resolver.resolve_definition("test.home.page", &"en").unwrap().unwrap();
//! assert_eq!(def.extends.as_deref(), Some("base-home"));
//! ```

pub mod config;
pub mod definition;
pub mod error;
pub mod format;
pub mod pattern;

pub use config::{ConfigError, PatternSyntax, ResolverConfig};
pub use definition::{Attribute, AttributeValue, Definition, Expression};
pub use error::FormatError;
pub use format::{format_placeholders, MessagePattern};
pub use pattern::{
    add_definitions_as_pattern_matchers, replace_placeholders, BasicPatternDefinitionResolver,
    DefinitionPatternMatcher, DefinitionPatternMatcherFactory, PatternError, PatternRecognizer,
};
