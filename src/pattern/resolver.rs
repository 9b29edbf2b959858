//! Pattern matchers stored per customization key

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::definition::Definition;
use crate::error::FormatError;

use super::{
    add_definitions_as_pattern_matchers, DefinitionPatternMatcher,
    DefinitionPatternMatcherFactory, PatternError, PatternRecognizer,
};

/// Resolves definition names against pattern definitions
///
/// Matchers are kept in a separate list for each customization key `K`
/// (a locale, a device profile, ...). A name is resolved against one key's
/// list only, in the order the matchers were stored.
pub struct BasicPatternDefinitionResolver<K> {
    factory: Arc<dyn DefinitionPatternMatcherFactory>,
    recognizer: Arc<dyn PatternRecognizer>,
    matchers: HashMap<K, Vec<Box<dyn DefinitionPatternMatcher>>>,
}

impl<K: fmt::Debug> fmt::Debug for BasicPatternDefinitionResolver<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicPatternDefinitionResolver")
            .field("matchers", &self.matchers)
            .finish_non_exhaustive()
    }
}

impl<K: Eq + Hash + fmt::Debug> BasicPatternDefinitionResolver<K> {
    /// Create a resolver with no stored patterns
    pub fn new(
        factory: Arc<dyn DefinitionPatternMatcherFactory>,
        recognizer: Arc<dyn PatternRecognizer>,
    ) -> Self {
        Self {
            factory,
            recognizer,
            matchers: HashMap::new(),
        }
    }

    /// Store the pattern definitions of `definitions` under `key`
    ///
    /// Matchers are appended to those already stored for the key. Returns
    /// the definitions whose names are not patterns.
    pub fn store_definition_patterns(
        &mut self,
        definitions: &HashMap<String, Definition>,
        key: K,
    ) -> Result<HashMap<String, Definition>, PatternError> {
        let recognizer = self.recognizer.as_ref();
        let matchers = self.matchers.entry(key).or_default();
        let before = matchers.len();

        add_definitions_as_pattern_matchers(matchers, definitions, recognizer, self.factory.as_ref())?;
        debug!(added = matchers.len() - before, total = matchers.len(), "stored definition patterns");

        Ok(definitions
            .iter()
            .filter(|(name, _)| !recognizer.is_pattern_recognized(name))
            .map(|(name, def)| (name.clone(), def.clone()))
            .collect())
    }

    /// Resolve `name` against the patterns stored under `key`
    ///
    /// The first matching pattern wins. Returns `Ok(None)` when the key has
    /// no patterns or none of them match.
    pub fn resolve_definition(&self, name: &str, key: &K) -> Result<Option<Definition>, FormatError> {
        let Some(matchers) = self.matchers.get(key) else {
            trace!(?key, "no patterns stored for key");
            return Ok(None);
        };

        for matcher in matchers {
            trace!(pattern = matcher.pattern(), name, "trying pattern");
            if let Some(def) = matcher.create_definition(name)? {
                debug!(pattern = matcher.pattern(), name, ?key, "resolved definition from pattern");
                return Ok(Some(def));
            }
        }
        Ok(None)
    }

    /// Forget the patterns stored under `key`
    pub fn clear_pattern_paths(&mut self, key: &K) {
        self.matchers.remove(key);
    }

    /// Number of patterns stored under `key`
    pub fn matcher_count(&self, key: &K) -> usize {
        self.matchers.get(key).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::Attribute;
    use crate::pattern::WildcardDefinitionPatternMatcherFactory;
    use pretty_assertions::assert_eq;

    fn resolver() -> BasicPatternDefinitionResolver<&'static str> {
        let factory = Arc::new(WildcardDefinitionPatternMatcherFactory::new());
        BasicPatternDefinitionResolver::new(factory.clone(), factory)
    }

    fn definitions(defs: Vec<Definition>) -> HashMap<String, Definition> {
        defs.into_iter().map(|d| (d.name.clone(), d)).collect()
    }

    #[test]
    fn test_store_returns_literal_definitions() {
        let mut r = resolver();
        let defs = definitions(vec![Definition::new("home"), Definition::new("test.*")]);

        let literals = r.store_definition_patterns(&defs, "en").expect("Should store");

        assert_eq!(literals.keys().collect::<Vec<_>>(), vec!["home"]);
        assert_eq!(r.matcher_count(&"en"), 1);
    }

    #[test]
    fn test_patterns_are_separated_by_key() {
        let mut r = resolver();
        let en = definitions(vec![Definition::new("page.*")
            .with_template_attribute(Attribute::template("/en/{1}.jsp"))]);
        let fr = definitions(vec![Definition::new("page.*")
            .with_template_attribute(Attribute::template("/fr/{1}.jsp"))]);

        r.store_definition_patterns(&en, "en").expect("Should store");
        r.store_definition_patterns(&fr, "fr").expect("Should store");

        let resolved = r
            .resolve_definition("page.home", &"fr")
            .expect("Should format")
            .expect("Should match");
        assert_eq!(
            resolved.template_attribute.as_ref().and_then(Attribute::text_value),
            Some("/fr/home.jsp")
        );
        assert_eq!(r.resolve_definition("page.home", &"de").expect("Should format"), None);
    }

    #[test]
    fn test_first_stored_match_wins() {
        let mut r = resolver();
        r.store_definition_patterns(
            &definitions(vec![Definition::new("a.*").with_preparer("first")]),
            "k",
        )
        .expect("Should store");
        r.store_definition_patterns(
            &definitions(vec![Definition::new("*.b").with_preparer("second")]),
            "k",
        )
        .expect("Should store");

        let resolved = r
            .resolve_definition("a.b", &"k")
            .expect("Should format")
            .expect("Should match");
        assert_eq!(resolved.preparer.as_deref(), Some("first"));
    }

    #[test]
    fn test_clear_pattern_paths() {
        let mut r = resolver();
        r.store_definition_patterns(&definitions(vec![Definition::new("a.*")]), "k")
            .expect("Should store");

        r.clear_pattern_paths(&"k");

        assert_eq!(r.matcher_count(&"k"), 0);
        assert_eq!(r.resolve_definition("a.b", &"k").expect("Should format"), None);
    }

    #[test]
    fn test_format_error_surfaces() {
        let mut r = resolver();
        r.store_definition_patterns(
            &definitions(vec![Definition::new("a.*").with_extends("{2}")]),
            "k",
        )
        .expect("Should store");

        let err = r.resolve_definition("a.b", &"k").unwrap_err();
        assert!(matches!(err, FormatError::MissingArgument { index: 2, supplied: 2, .. }));
    }
}
