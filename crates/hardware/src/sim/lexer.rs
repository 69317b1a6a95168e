//! Program Text Lexer.
//!
//! Splits program text into whitespace-delimited tokens. A token that opens
//! with `"` runs to the last `"` on its line that is followed by whitespace or
//! the end of the text, so quoted strings may contain spaces, tabs and quotes.

use crate::common::LoadError;

/// Kind of a lexed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A word beginning with `.`.
    Directive,
    /// Any other unquoted word.
    Word,
    /// A quoted string; the token text excludes the quotes.
    Quoted,
}

/// One token of program text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text (quotes stripped for `Quoted`).
    pub text: &'a str,
    /// 1-based line where the token starts.
    pub line: usize,
    /// Token kind.
    pub kind: TokenKind,
}

/// Iterator over the tokens of a program.
///
/// ```
/// use y86_core::sim::lexer::{Lexer, TokenKind};
///
/// let tokens: Vec<_> = Lexer::new(".string 10 \"a b\"")
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(tokens[2].text, "a b");
/// assert_eq!(tokens[2].kind, TokenKind::Quoted);
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `src`.
    pub const fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.src.as_bytes()[self.pos..];
        let blanks = rest.iter().take_while(|b| b.is_ascii_whitespace()).count();
        self.line += rest[..blanks].iter().filter(|&&b| b == b'\n').count();
        self.pos += blanks;
    }

    /// Lexes a quoted string. It closes at the last `"` on a line that is
    /// followed by whitespace or the end of the text; a line without one
    /// continues the string onto the next line.
    fn quoted(&mut self, start_line: usize) -> Result<Token<'a>, LoadError> {
        let bytes = self.src.as_bytes();
        let open = self.pos + 1;
        let mut line_start = open;
        while line_start <= bytes.len() {
            let line_end = bytes[line_start..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(bytes.len(), |n| line_start + n);
            let close = (line_start..line_end).rev().find(|&i| {
                bytes[i] == b'"' && bytes.get(i + 1).is_none_or(u8::is_ascii_whitespace)
            });
            if let Some(close) = close {
                let text = &self.src[open..close];
                self.line += text.matches('\n').count();
                self.pos = close + 1;
                return Ok(Token {
                    text,
                    line: start_line,
                    kind: TokenKind::Quoted,
                });
            }
            line_start = line_end + 1;
        }
        self.pos = bytes.len();
        Err(LoadError::UnterminatedString { line: start_line })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let bytes = self.src.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        let line = self.line;
        if bytes[self.pos] == b'"' {
            return Some(self.quoted(line));
        }

        let start = self.pos;
        let len = bytes[start..]
            .iter()
            .take_while(|b| !b.is_ascii_whitespace())
            .count();
        self.pos += len;
        let text = &self.src[start..self.pos];
        let kind = if text.starts_with('.') {
            TokenKind::Directive
        } else {
            TokenKind::Word
        };
        Some(Ok(Token { text, line, kind }))
    }
}
