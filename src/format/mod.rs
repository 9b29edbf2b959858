//! Positional placeholder substitution
//!
//! Strings may contain `{n}` tokens that are replaced with the `n`th variable.
//! Quoting follows the usual message-format conventions:
//!
//! - `'` opens or closes a quoted section, inside which braces are literal
//! - `''` is a literal apostrophe, inside or outside a quoted section
//! - an unterminated quoted section runs to the end of the string
//! - a `}` outside an argument is literal
//!
//! Only bare indices are accepted: typed arguments such as `{0,number}` are
//! rejected, and values are always inserted verbatim. There is no locale
//! involved, so the same inputs give the same output on every machine.
//!
//! Strings without any `{` are returned as-is without being parsed, so an
//! apostrophe in such a string is kept.

pub mod lexer;

use std::borrow::Cow;

use crate::error::{FormatError, Span};

use lexer::{lex, Token};

/// A piece of a parsed placeholder string
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Text copied to the output, with quoting already removed
    Literal(String),
    /// A `{n}` argument
    Argument { index: usize, span: Span },
}

/// A parsed placeholder string, reusable across many substitutions
#[derive(Debug, Clone, PartialEq)]
pub struct MessagePattern {
    segments: Vec<Segment>,
}

impl MessagePattern {
    /// Parse a placeholder string
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut quoted = false;
        let mut tokens = lex(source);

        while let Some((tok, span)) = tokens.next() {
            match tok {
                Token::EscapedQuote => literal.push('\''),
                Token::Quote => quoted = !quoted,
                _ if quoted => literal.push_str(tok.literal()),
                Token::BraceOpen => {
                    let argument = parse_argument(source, span.start, &mut tokens)?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(argument);
                }
                _ => literal.push_str(tok.literal()),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// The parsed segments
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Highest argument index referenced, if any
    pub fn max_index(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Argument { index, .. } => Some(*index),
                Segment::Literal(_) => None,
            })
            .max()
    }

    /// Substitute variables into the pattern
    pub fn format<V: AsRef<str>>(&self, vars: &[V]) -> Result<String, FormatError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Argument { index, span } => {
                    let value = vars.get(*index).ok_or_else(|| FormatError::MissingArgument {
                        index: *index,
                        supplied: vars.len(),
                        span: span.clone(),
                    })?;
                    out.push_str(value.as_ref());
                }
            }
        }
        Ok(out)
    }
}

/// Parse the argument whose `{` starts at `start`, consuming up to its `}`
fn parse_argument<'src>(
    source: &'src str,
    start: usize,
    tokens: &mut impl Iterator<Item = (Token<'src>, Span)>,
) -> Result<Segment, FormatError> {
    let mut depth = 0usize;
    let mut comma = None;

    let end = loop {
        match tokens.next() {
            None => return Err(FormatError::UnmatchedBrace { span: start..start + 1 }),
            Some((Token::BraceOpen, _)) => depth += 1,
            Some((Token::BraceClose, span)) if depth == 0 => break span,
            Some((Token::BraceClose, _)) => depth -= 1,
            Some((Token::Comma, span)) if comma.is_none() => comma = Some(span.start),
            Some(_) => {}
        }
    };

    let span = start..end.end;
    let index_end = comma.unwrap_or(end.start);
    let index_text = &source[start + 1..index_end];

    let index = parse_index(index_text).ok_or_else(|| FormatError::InvalidArgumentIndex {
        text: index_text.to_string(),
        span: span.clone(),
    })?;

    if comma.is_some() {
        return Err(FormatError::UnsupportedFormatType { index, span });
    }

    Ok(Segment::Argument { index, span })
}

fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Substitute variables into a string containing `{n}` placeholders
///
/// Strings without `{` are borrowed back unchanged.
pub fn format_placeholders<'a, V: AsRef<str>>(
    source: &'a str,
    vars: &[V],
) -> Result<Cow<'a, str>, FormatError> {
    if !source.contains('{') {
        return Ok(Cow::Borrowed(source));
    }
    MessagePattern::parse(source)?
        .format(vars)
        .map(Cow::Owned)
}
