//! Directive Parser.
//!
//! Turns the token stream of a program into typed [`Directive`] records. Each
//! record is fully validated (numbers parsed, string bytes extracted); applying
//! records to memory is the loader's job.

use std::iter::Peekable;

use crate::common::{CodecError, LoadError};
use crate::common::codec::{decode_hex_bytes, parse_decimal, parse_hex, parse_hex_byte};
use crate::sim::lexer::{Lexer, Token, TokenKind};

/// A loader directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// `.size <hex>`: memory capacity in bytes.
    Size(u32),
    /// `.text <addr> <hex-bytes>...`: program code and entry point. The byte
    /// string may be split over several tokens.
    Text {
        /// Load address and entry point.
        addr: u32,
        /// Decoded bytes.
        bytes: Vec<u8>,
    },
    /// `.byte <addr> <hex>`: one byte.
    Byte {
        /// Target address.
        addr: u32,
        /// Byte value.
        value: u8,
    },
    /// `.long <addr> <decimal>`: one little-endian word.
    Long {
        /// Target address.
        addr: u32,
        /// Word value.
        value: i32,
    },
    /// `.string <addr> "<text>"`: raw characters, no terminator.
    String {
        /// Target address.
        addr: u32,
        /// Characters between the quotes.
        bytes: Vec<u8>,
    },
    /// `.bss`: accepted and ignored.
    Bss,
}

impl Directive {
    /// Returns the directive keyword, including the leading dot.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Size(_) => ".size",
            Self::Text { .. } => ".text",
            Self::Byte { .. } => ".byte",
            Self::Long { .. } => ".long",
            Self::String { .. } => ".string",
            Self::Bss => ".bss",
        }
    }
}

/// A directive together with the line it was found on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedDirective {
    /// 1-based line of the directive keyword.
    pub line: usize,
    /// The directive.
    pub directive: Directive,
}

type Tokens<'a> = Peekable<Lexer<'a>>;

/// Takes the next argument of `directive`, rejecting a following directive.
fn argument<'a>(
    tokens: &mut Tokens<'a>,
    directive: &'static str,
    line: usize,
) -> Result<Token<'a>, LoadError> {
    let exhausted = matches!(
        tokens.peek(),
        None | Some(Ok(Token {
            kind: TokenKind::Directive,
            ..
        }))
    );
    if exhausted {
        return Err(LoadError::MissingArgument { directive, line });
    }
    tokens
        .next()
        .unwrap_or(Err(LoadError::MissingArgument { directive, line }))
}

/// Takes a numeric argument and converts it with `parse`.
fn number<'a, T>(
    tokens: &mut Tokens<'a>,
    directive: &'static str,
    line: usize,
    parse: impl FnOnce(&str) -> Result<T, CodecError>,
) -> Result<T, LoadError> {
    let tok = argument(tokens, directive, line)?;
    if tok.kind == TokenKind::Quoted {
        return Err(LoadError::UnexpectedToken {
            token: format!("\"{}\"", tok.text),
            line: tok.line,
        });
    }
    parse(tok.text).map_err(|source| LoadError::InvalidNumber {
        token: tok.text.to_owned(),
        line: tok.line,
        source,
    })
}

/// Parses the whole program text into directives, in source order.
///
/// # Errors
///
/// Returns the first lexical or syntactic [`LoadError`] in the text.
///
/// ```
/// use y86_core::sim::directive::{parse_directives, Directive};
///
/// let parsed = parse_directives(".size 20\n.byte 4 ff").unwrap();
/// assert_eq!(parsed[0].directive, Directive::Size(0x20));
/// assert_eq!(parsed[1].directive, Directive::Byte { addr: 4, value: 0xff });
/// ```
pub fn parse_directives(text: &str) -> Result<Vec<ParsedDirective>, LoadError> {
    let mut tokens = Lexer::new(text).peekable();
    let mut out = Vec::new();

    while let Some(tok) = tokens.next() {
        let tok = tok?;
        let line = tok.line;
        if tok.kind != TokenKind::Directive {
            return Err(LoadError::UnexpectedToken {
                token: tok.text.to_owned(),
                line,
            });
        }

        let directive = match tok.text {
            ".size" => Directive::Size(number(&mut tokens, ".size", line, parse_hex)?),
            ".text" => {
                let addr = number(&mut tokens, ".text", line, parse_hex)?;
                let mut bytes = number(&mut tokens, ".text", line, decode_hex_bytes)?;
                while let Some(Ok(Token {
                    kind: TokenKind::Word,
                    ..
                })) = tokens.peek()
                {
                    bytes.extend(number(&mut tokens, ".text", line, decode_hex_bytes)?);
                }
                Directive::Text { addr, bytes }
            }
            ".byte" => Directive::Byte {
                addr: number(&mut tokens, ".byte", line, parse_hex)?,
                value: number(&mut tokens, ".byte", line, parse_hex_byte)?,
            },
            ".long" => Directive::Long {
                addr: number(&mut tokens, ".long", line, parse_hex)?,
                value: number(&mut tokens, ".long", line, parse_decimal)?,
            },
            ".string" => {
                let addr = number(&mut tokens, ".string", line, parse_hex)?;
                let arg = argument(&mut tokens, ".string", line)?;
                if arg.kind != TokenKind::Quoted {
                    return Err(LoadError::ExpectedString {
                        token: arg.text.to_owned(),
                        line: arg.line,
                    });
                }
                Directive::String {
                    addr,
                    bytes: arg.text.as_bytes().to_vec(),
                }
            }
            ".bss" => {
                while let Some(Ok(next)) = tokens.peek() {
                    if next.kind == TokenKind::Directive {
                        break;
                    }
                    let _ = tokens.next();
                }
                Directive::Bss
            }
            other => {
                return Err(LoadError::UnknownDirective {
                    token: other.to_owned(),
                    line,
                });
            }
        };

        tracing::debug!(line, directive = directive.name(), "parsed directive");
        out.push(ParsedDirective { line, directive });
    }

    Ok(out)
}
