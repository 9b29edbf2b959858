//! Pattern definitions
//!
//! Definitions can be registered under a pattern name instead of a literal
//! one. When a requested name matches the pattern, the variables captured by
//! the match are substituted into the definition's `{n}` placeholders to
//! produce a concrete definition.
//!
//! ```text
//! name:     test.*.page
//! template: /layout/{1}.jsp
//!
//! request:  test.home.page  ->  template /layout/home.jsp
//! ```
//!
//! Which names are patterns is decided by a [`PatternRecognizer`]; the
//! matchers are built by a [`DefinitionPatternMatcherFactory`].

mod error;
pub mod prefixed;
pub mod regexp;
mod resolver;
pub mod util;
pub mod wildcard;

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::definition::Definition;
use crate::error::FormatError;

pub use error::PatternError;
pub use prefixed::{PrefixedPatternMatcherFactory, REGEXP_PREFIX, WILDCARD_PREFIX};
pub use regexp::{RegexpDefinitionPatternMatcher, RegexpDefinitionPatternMatcherFactory};
pub use resolver::BasicPatternDefinitionResolver;
pub use util::{replace_placeholders, replace_vars_in_attribute};
pub use wildcard::WildcardDefinitionPatternMatcherFactory;

/// Decides whether a definition name is a pattern
pub trait PatternRecognizer: Send + Sync {
    fn is_pattern_recognized(&self, candidate: &str) -> bool;
}

/// A pattern paired with the definition it expands to
pub trait DefinitionPatternMatcher: fmt::Debug + Send + Sync {
    /// The pattern this matcher tests names against
    fn pattern(&self) -> &str;

    /// The definition whose placeholders are filled on a match
    fn definition(&self) -> &Definition;

    /// Variables captured from `name`, or `None` if it does not match
    fn captures(&self, name: &str) -> Option<Vec<String>>;

    /// Create the concrete definition for `name`, or `None` if it does not match
    fn create_definition(&self, name: &str) -> Result<Option<Definition>, FormatError> {
        match self.captures(name) {
            Some(vars) => replace_placeholders(self.definition(), name, vars.as_slice()).map(Some),
            None => Ok(None),
        }
    }
}

/// Builds a matcher for a pattern and its definition
pub trait DefinitionPatternMatcherFactory: Send + Sync {
    fn create_definition_pattern_matcher(
        &self,
        pattern: &str,
        definition: &Definition,
    ) -> Result<Box<dyn DefinitionPatternMatcher>, PatternError>;
}

/// Append a matcher to `matchers` for every definition whose name is a pattern
///
/// Existing matchers are kept. Definitions with literal names are skipped.
/// Matchers are appended in the map's iteration order.
pub fn add_definitions_as_pattern_matchers(
    matchers: &mut Vec<Box<dyn DefinitionPatternMatcher>>,
    definitions: &HashMap<String, Definition>,
    recognizer: &dyn PatternRecognizer,
    factory: &dyn DefinitionPatternMatcherFactory,
) -> Result<(), PatternError> {
    for (name, definition) in definitions {
        if recognizer.is_pattern_recognized(name) {
            trace!(pattern = %name, "adding definition pattern");
            matchers.push(factory.create_definition_pattern_matcher(name, definition)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn definitions(names: &[&str]) -> HashMap<String, Definition> {
        names
            .iter()
            .map(|n| (n.to_string(), Definition::new(*n)))
            .collect()
    }

    fn patterns(matchers: &[Box<dyn DefinitionPatternMatcher>]) -> Vec<String> {
        let mut found: Vec<String> = matchers.iter().map(|m| m.pattern().to_string()).collect();
        found.sort();
        found
    }

    #[test]
    fn test_only_patterns_become_matchers() {
        let factory = WildcardDefinitionPatternMatcherFactory::new();
        let defs = definitions(&["home", "test.*", "page.*.*", "about"]);
        let mut matchers = Vec::new();

        add_definitions_as_pattern_matchers(&mut matchers, &defs, &factory, &factory)
            .expect("Should add");

        assert_eq!(patterns(&matchers), vec!["page.*.*", "test.*"]);
    }

    #[test]
    fn test_existing_matchers_are_kept() {
        let factory = WildcardDefinitionPatternMatcherFactory::new();
        let mut matchers = Vec::new();

        add_definitions_as_pattern_matchers(&mut matchers, &definitions(&["a.*"]), &factory, &factory)
            .expect("Should add");
        add_definitions_as_pattern_matchers(&mut matchers, &definitions(&["b.*", "c"]), &factory, &factory)
            .expect("Should add");

        assert_eq!(patterns(&matchers), vec!["a.*", "b.*"]);
    }

    #[test]
    fn test_empty_map_adds_nothing() {
        let factory = WildcardDefinitionPatternMatcherFactory::new();
        let mut matchers = Vec::new();

        add_definitions_as_pattern_matchers(&mut matchers, &HashMap::new(), &factory, &factory)
            .expect("Should add");

        assert!(matchers.is_empty());
    }

    #[test]
    fn test_definitions_are_not_modified() {
        let factory = WildcardDefinitionPatternMatcherFactory::new();
        let defs = definitions(&["x.*", "y"]);
        let before = defs.clone();
        let mut matchers = Vec::new();

        add_definitions_as_pattern_matchers(&mut matchers, &defs, &factory, &factory)
            .expect("Should add");

        assert_eq!(defs, before);
    }

    #[test]
    fn test_factory_errors_propagate() {
        let factory = RegexpDefinitionPatternMatcherFactory::new();
        let recognizer = WildcardDefinitionPatternMatcherFactory::new();
        let mut matchers = Vec::new();

        let result =
            add_definitions_as_pattern_matchers(&mut matchers, &definitions(&["(*"]), &recognizer, &factory);

        assert!(matches!(result, Err(PatternError::InvalidRegex { .. })));
    }
}
