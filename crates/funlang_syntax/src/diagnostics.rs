//! Syntax diagnostics for FunLang
//!
//! [`CompileError`] is the error type of the lexer and parser. It implements [`miette::Diagnostic`] so the CLI can
//! render it with a source snippet. [`LineIndex`] turns byte offsets into line/column positions for passes that
//! report positions as numbers.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, Report};

use crate::ast::Span;

/// A lex or parse error with location information
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn lex(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: ErrorKind::Lex,
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: ErrorKind::Syntax,
            hints: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lex => write!(f, "lex error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.kind {
            ErrorKind::Lex => "funlang::lex",
            ErrorKind::Syntax => "funlang::syntax",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::at(self.span.start..self.span.end, self.kind.to_string());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Render an error with its source snippet through miette's report handler.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    format!("{report:?}")
}

/// Render `message at line:column` without source context (used for aggregated plain-text reports).
pub fn format_plain(index: &LineIndex, error: &CompileError) -> String {
    let (line, column) = index.position(error.span.start);
    format!("{} at {}:{}", error.message, line, column)
}

/// Byte offset to (line, column) lookup.
///
/// Lines are 1-based, columns are 0-based byte offsets from the start of the line.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Position of `offset`; offsets past the end clamp to the end of the source.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.len);
        let line_idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        (line_idx + 1, offset - self.line_starts[line_idx])
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_character_is_line_one_column_zero() {
        let index = LineIndex::new("let x = 1\n");
        assert_eq!(index.position(0), (1, 0));
        assert_eq!(index.position(4), (1, 4));
    }

    #[test]
    fn positions_after_newlines() {
        let index = LineIndex::new("let x\n  x = 2\nprint x");
        assert_eq!(index.position(8), (2, 2));
        assert_eq!(index.position(14), (3, 0));
        assert_eq!(index.line_count(), 3);
    }

    #[test]
    fn offsets_past_end_are_clamped() {
        let index = LineIndex::new("a\nb");
        assert_eq!(index.position(100), (2, 1));
    }

    #[test]
    fn plain_format_includes_position() {
        let source = "let x\n)";
        let err = CompileError::syntax("Expected expression", Span::new(6, 7));
        assert_eq!(format_plain(&LineIndex::new(source), &err), "Expected expression at 2:0");
    }

    #[test]
    fn miette_report_mentions_message_and_file() {
        let source = "print @";
        let err = CompileError::lex("Unexpected character '@'", Span::new(6, 7));
        let rendered = format_error("demo.fun", source, &err);
        assert!(rendered.contains("Unexpected character '@'"), "got: {rendered}");
        assert!(rendered.contains("demo.fun"), "got: {rendered}");
    }

    #[test]
    fn hints_become_help_text() {
        let err = CompileError::syntax("Expected '}'", Span::new(0, 1)).with_hint("close the block");
        let help = err.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("close the block"));
    }
}
