//! Lexer for the FunLang programming language
//!
//! Handles tokenization including:
//! - Keywords (`let`, `var`, `print`, `if`, `func`, ...) and word operators (`AND`, `OR`)
//! - Identifiers and literals (integer, decimal, string)
//! - Operators and punctuation, including the chain pipes `=>` and `<=>`
//! - Line comments starting with `//` or `#`
//!
//! Whitespace and newlines are insignificant; statements are delimited by the grammar (and optional `;`).
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use funlang_core::lang::operators::{self, OperatorId};
use funlang_core::lang::punctuation::PunctuationId;

/// Lexer for FunLang source code.
///
/// Converts source text into a stream of tokens. Errors are collected rather than returned on the first failure so
/// one run reports every bad character and unterminated literal.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            ' ' | '\t' | '\r' | '\n' => {}

            // Comments
            '#' => self.skip_line_comment(),
            '/' if self.peek() == Some('/') => self.skip_line_comment(),

            // Operators
            '+' => self.add_op(OperatorId::Plus, start),
            '-' => self.add_op(OperatorId::Minus, start),
            '*' => self.add_op(OperatorId::Star, start),
            '/' => self.add_op(OperatorId::Slash, start),
            '%' => self.add_op(OperatorId::Percent, start),
            '=' => self.operator(
                start,
                OperatorId::Eq,
                &[('=', OperatorId::EqEq), ('>', OperatorId::Pipe)],
            ),
            '<' => self.scan_less_than(start),
            '>' => self.operator(start, OperatorId::Gt, &[('=', OperatorId::GtEq)]),
            '!' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::NotEq, start);
                } else {
                    self.errors.push(
                        CompileError::lex("Unexpected character '!'", Span::new(start, self.current_pos))
                            .with_hint("FunLang has no unary negation; compare with `== 0` instead"),
                    );
                }
            }

            // Punctuation
            ',' => self.add_punct(PunctuationId::Comma, start),
            ':' => self.add_punct(PunctuationId::Colon, start),
            ';' => self.add_punct(PunctuationId::Semicolon, start),
            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),
            '[' => self.add_punct(PunctuationId::LBracket, start),
            ']' => self.add_punct(PunctuationId::RBracket, start),
            '{' => self.add_punct(PunctuationId::LBrace, start),
            '}' => self.add_punct(PunctuationId::RBrace, start),

            // Strings
            '"' => self.scan_string(start),

            // Numbers
            '0'..='9' => self.scan_number(start),

            // Identifiers, keywords and word operators
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                self.errors.push(CompileError::lex(
                    format!("Unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                ));
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_op(&mut self, id: OperatorId, start: usize) {
        self.add_token(TokenKind::Operator(id), start);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    /// Try to match compound operator, fallback to simple.
    fn operator(&mut self, start: usize, simple: OperatorId, compounds: &[(char, OperatorId)]) {
        for (c, id) in compounds {
            if self.match_char(*c) {
                self.add_op(*id, start);
                return;
            }
        }
        self.add_op(simple, start);
    }

    /// Scan `<`, `<=` and the bidirectional pipe `<=>`.
    fn scan_less_than(&mut self, start: usize) {
        if self.match_char('=') {
            if self.match_char('>') {
                self.add_op(OperatorId::BiPipe, start);
            } else {
                self.add_op(OperatorId::LtEq, start);
            }
        } else {
            self.add_op(OperatorId::Lt, start);
        }
    }

    // ========================================================================
    // Literals
    // ========================================================================

    fn scan_string(&mut self, start: usize) {
        let mut value = String::new();
        loop {
            match self.advance() {
                None => {
                    self.errors.push(CompileError::lex(
                        "Unterminated string literal",
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some('"') => value.push('"'),
                    Some('\\') => value.push('\\'),
                    Some(other) => {
                        self.errors.push(CompileError::lex(
                            format!("Unknown escape sequence '\\{}'", other),
                            Span::new(self.current_pos - 1 - other.len_utf8(), self.current_pos),
                        ));
                    }
                    None => {
                        self.errors.push(CompileError::lex(
                            "Unterminated string literal",
                            Span::new(start, self.current_pos),
                        ));
                        return;
                    }
                },
                Some(c) => value.push(c),
            }
        }
        self.add_token(TokenKind::Text(value), start);
    }

    fn scan_number(&mut self, start: usize) {
        self.consume_digits();

        let is_decimal = self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit());
        if is_decimal {
            self.advance(); // '.'
            self.consume_digits();
            let text = self.source[start..self.current_pos].to_string();
            self.add_token(TokenKind::Decimal(text), start);
            return;
        }

        let text = &self.source[start..self.current_pos];
        match text.parse::<i64>() {
            Ok(n) => self.add_token(TokenKind::Int(n), start),
            Err(_) => self.errors.push(CompileError::lex(
                format!("Integer literal out of range: {}", text),
                Span::new(start, self.current_pos),
            )),
        }
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = operators::word_operator(spelling) {
            self.add_op(id, start);
        } else if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}
