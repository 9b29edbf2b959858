//! Lexer for placeholder strings using logos

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token<'src> {
    /// A doubled apostrophe, always a literal `'`
    #[token("''")]
    EscapedQuote,

    /// Opens or closes a quoted section
    #[token("'")]
    Quote,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[regex(r"[^'{},]+")]
    Text(&'src str),
}

impl<'src> Token<'src> {
    /// The literal text this token stands for when it carries no meaning
    pub fn literal(&self) -> &'src str {
        match self {
            Token::EscapedQuote | Token::Quote => "'",
            Token::BraceOpen => "{",
            Token::BraceClose => "}",
            Token::Comma => ",",
            Token::Text(s) => s,
        }
    }
}

/// Lex a placeholder string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token<'_>, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_tokens() {
        let tokens: Vec<_> = lex("a-{0}").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Text("a-"),
                Token::BraceOpen,
                Token::Text("0"),
                Token::BraceClose,
            ]
        );
    }

    #[test]
    fn test_escaped_quote_is_one_token() {
        let tokens: Vec<_> = lex("it''s").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![Token::Text("it"), Token::EscapedQuote, Token::Text("s")]
        );
    }

    #[test]
    fn test_spans_cover_input() {
        let spans: Vec<_> = lex("{1},x").map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..1, 1..2, 2..3, 3..4, 4..5]);
    }
}
