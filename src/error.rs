//! Error types for placeholder substitution

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while substituting placeholders into a string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// An opening brace without its closing brace
    #[error("unmatched brace at {span:?}")]
    UnmatchedBrace { span: Span },

    /// Argument text that is not a non-negative integer
    #[error("invalid argument index '{text}' at {span:?}")]
    InvalidArgumentIndex { text: String, span: Span },

    /// A typed argument such as `{0,number}`
    #[error("argument {{{index}}} at {span:?} has a format type, only bare indices are supported")]
    UnsupportedFormatType { index: usize, span: Span },

    /// An argument index with no variable to substitute
    #[error("placeholder {{{index}}} at {span:?} is out of range: {supplied} variable(s) supplied")]
    MissingArgument {
        index: usize,
        supplied: usize,
        span: Span,
    },
}

impl FormatError {
    /// The byte range of the offending text
    pub fn span(&self) -> &Span {
        match self {
            FormatError::UnmatchedBrace { span }
            | FormatError::InvalidArgumentIndex { span, .. }
            | FormatError::UnsupportedFormatType { span, .. }
            | FormatError::MissingArgument { span, .. } => span,
        }
    }

    fn label(&self) -> String {
        match self {
            FormatError::UnmatchedBrace { .. } => "this brace is never closed".to_string(),
            FormatError::InvalidArgumentIndex { text, .. } => {
                format!("expected an argument index, found '{}'", text)
            }
            FormatError::UnsupportedFormatType { .. } => {
                "remove the format type, values are inserted as text".to_string()
            }
            FormatError::MissingArgument { supplied, .. } => match supplied {
                0 => "no variables were captured".to_string(),
                n => format!("valid indices are 0 to {}", n - 1),
            },
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let span = self.span().clone();

        // Writing into a Vec cannot fail
        let _ = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.label())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        String::from_utf8_lossy(&buf).into_owned()
    }
}
