//! Regular expression definition patterns

use regex::Regex;

use crate::definition::Definition;

use super::{DefinitionPatternMatcher, DefinitionPatternMatcherFactory, PatternError};

/// Matches definition names against a regular expression
///
/// Captured variables are the capture groups, index 0 being the whole name.
/// Groups that did not take part in the match capture the empty string.
#[derive(Debug, Clone)]
pub struct RegexpDefinitionPatternMatcher {
    pattern: String,
    regex: Regex,
    definition: Definition,
}

impl RegexpDefinitionPatternMatcher {
    /// Create a matcher from an already compiled expression
    ///
    /// `regex` must be anchored at both ends for whole-name matching.
    pub fn new(pattern: impl Into<String>, regex: Regex, definition: Definition) -> Self {
        Self {
            pattern: pattern.into(),
            regex,
            definition,
        }
    }
}

impl DefinitionPatternMatcher for RegexpDefinitionPatternMatcher {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn definition(&self) -> &Definition {
        &self.definition
    }

    fn captures(&self, name: &str) -> Option<Vec<String>> {
        self.regex.captures(name).map(|caps| {
            caps.iter()
                .map(|m| m.map_or_else(String::new, |m| m.as_str().to_string()))
                .collect()
        })
    }
}

/// Creates matchers that treat the pattern as a regular expression
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexpDefinitionPatternMatcherFactory;

impl RegexpDefinitionPatternMatcherFactory {
    pub fn new() -> Self {
        Self
    }
}

impl DefinitionPatternMatcherFactory for RegexpDefinitionPatternMatcherFactory {
    fn create_definition_pattern_matcher(
        &self,
        pattern: &str,
        definition: &Definition,
    ) -> Result<Box<dyn DefinitionPatternMatcher>, PatternError> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))
            .map_err(|e| PatternError::invalid_regex(pattern, e))?;
        Ok(Box::new(RegexpDefinitionPatternMatcher::new(
            pattern,
            regex,
            definition.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::Attribute;
    use pretty_assertions::assert_eq;

    fn matcher(pattern: &str) -> Box<dyn DefinitionPatternMatcher> {
        let def = Definition::new(pattern)
            .with_template_attribute(Attribute::template("/{1}/{2}.jsp"));
        RegexpDefinitionPatternMatcherFactory::new()
            .create_definition_pattern_matcher(pattern, &def)
            .expect("Should create matcher")
    }

    #[test]
    fn test_captures_groups() {
        let m = matcher(r"page\.([a-z]+)\.(\d+)");
        assert_eq!(
            m.captures("page.news.12"),
            Some(vec!["page.news.12".to_string(), "news".to_string(), "12".to_string()])
        );
    }

    #[test]
    fn test_match_is_anchored() {
        let m = matcher(r"page\.(\w+)");
        assert!(m.captures("page.a").is_some());
        assert!(m.captures("xpage.a").is_none());
        assert!(m.captures("page.a.b").is_none());
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let m = matcher("a|b");
        assert!(m.captures("a").is_some());
        assert!(m.captures("ab").is_none());
    }

    #[test]
    fn test_optional_group_captures_empty() {
        let m = matcher(r"page(\.x)?");
        assert_eq!(m.captures("page"), Some(vec!["page".to_string(), String::new()]));
    }

    #[test]
    fn test_create_definition() {
        let m = matcher(r"page\.(\w+)\.(\w+)");
        let def = m
            .create_definition("page.shop.cart")
            .expect("Should format")
            .expect("Should match");
        assert_eq!(def.name, "page.shop.cart");
        assert_eq!(
            def.template_attribute.as_ref().and_then(Attribute::text_value),
            Some("/shop/cart.jsp")
        );
    }

    #[test]
    fn test_invalid_regex() {
        let result = RegexpDefinitionPatternMatcherFactory::new()
            .create_definition_pattern_matcher("page.(", &Definition::new("page.("));
        assert!(matches!(result, Err(PatternError::InvalidRegex { .. })));
    }
}
