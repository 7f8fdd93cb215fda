//! # Lexer Module
//!
//! The lexer works in two stages.  The `scanner` is a finite state machine that reads one
//! byte at a time, skipping whitespace and comments, and captures the bytes of the next
//! lexeme along with end-of-line or end-of-input flags.  The `token` stage then classifies
//! the captured lexeme and evaluates integers and strings.
//!
//! Grammar of the lexemes, tried in this order:
//!
//! Kind | Form | Example
//! -----|------|--------
//! colon | `:` | `:`
//! binary | `[01]+ [bB]` | `101b`
//! octal | `[0-7]+ [oO]` | `17o`
//! decimal | `[0-9]+ [dD]?` | `42`, `42d`
//! hexadecimal | `[0-9a-fA-F]+ [hH]` | `0ffh`, `ah`
//! identifier | `[A-Za-z_] [A-Za-z0-9_]*` | `mov`
//! string | `'` printable `'` or `"` printable `"` | `'hi'`
//!
//! Comments run from `;` to the end of the line and never produce a token.
//! Anything else is captured up to the next delimiter and comes out as unrecognized.

pub mod source;
pub mod classify;
pub mod lexeme;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod token_test;

pub use source::{Input,ByteSource,ReadSource};
pub use scanner::Scanner;
pub use token::{Token,TokenKind,Value,Radix,RawLexeme};

/// Errors that stop a scan.  Lexical problems are not errors, see `TokenKind::Unrecognized`.
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("lexeme starting at row {row} col {col} exceeds {limit} bytes")]
    LexemeOverflow { limit: usize, row: usize, col: usize },
    #[error("unable to read character from source: {0}")]
    Io(#[from] std::io::Error)
}
