//! Wildcard definition patterns
//!
//! - `*` matches zero or more characters, excluding `/`
//! - `**` matches zero or more characters, including `/`
//! - `\` makes the next character literal
//!
//! The whole name must match. When a name can be split several ways, earlier
//! wildcards take the shortest match. Captured variables start with the
//! whole name at index 0, followed by one entry per wildcard, so `{1}` refers
//! to the first wildcard.

use regex::Regex;

use crate::definition::Definition;

use super::regexp::RegexpDefinitionPatternMatcher;
use super::{
    DefinitionPatternMatcher, DefinitionPatternMatcherFactory, PatternError, PatternRecognizer,
};

/// Translate a wildcard pattern into an anchored regular expression
pub fn wildcard_to_regex(pattern: &str) -> String {
    let mut re = String::from("(?s)^");
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => literal.push(chars.next().unwrap_or('\\')),
            '*' => {
                re.push_str(&regex::escape(&literal));
                literal.clear();
                if chars.peek() == Some(&'*') {
                    chars.next();
                    re.push_str("(.*?)");
                } else {
                    re.push_str("([^/]*?)");
                }
            }
            _ => literal.push(c),
        }
    }

    re.push_str(&regex::escape(&literal));
    re.push('$');
    re
}

/// Recognizes wildcard patterns and creates matchers for them
#[derive(Debug, Clone, Copy, Default)]
pub struct WildcardDefinitionPatternMatcherFactory;

impl WildcardDefinitionPatternMatcherFactory {
    pub fn new() -> Self {
        Self
    }
}

impl PatternRecognizer for WildcardDefinitionPatternMatcherFactory {
    fn is_pattern_recognized(&self, candidate: &str) -> bool {
        candidate.contains('*')
    }
}

impl DefinitionPatternMatcherFactory for WildcardDefinitionPatternMatcherFactory {
    fn create_definition_pattern_matcher(
        &self,
        pattern: &str,
        definition: &Definition,
    ) -> Result<Box<dyn DefinitionPatternMatcher>, PatternError> {
        let regex = Regex::new(&wildcard_to_regex(pattern))
            .map_err(|e| PatternError::invalid_regex(pattern, e))?;
        Ok(Box::new(RegexpDefinitionPatternMatcher::new(
            pattern,
            regex,
            definition.clone(),
        )))
    }
}
