//! # `osa` front end library
//!
//! This library is the front end of the Onesixteen assembler.  It turns assembler source text
//! into a tree of lines, each line holding its tokens, which later passes (symbol resolution,
//! instruction encoding, code emission) can walk without touching the source again.
//!
//! ## Architecture
//!
//! The work is a pull pipeline with one byte and one token of lookahead:
//! * `lexer::ByteSource` supplies bytes, `lexer::ReadSource` adapts any `std::io::Read`
//! * `lexer::Scanner` is the character level state machine, it yields one `lexer::Token` per call
//! * `tree::TreeBuilder` pulls tokens and grows a `tree::Program`
//!
//! Every scan owns its own scanner and builder, nothing is shared between scans.
//!
//! ## Errors
//!
//! Lexical problems (unknown lexemes, unterminated strings, numerals that do not fit) are
//! not errors.  They become `TokenKind::Unrecognized` tokens so the whole source can be scanned
//! and a later pass can report them all.  Only a lexeme longer than the configured limit,
//! or a failure of the byte source, stops the scan with `lexer::Error`.
//!
//! ## Settings
//!
//! Limits and the integer overflow policy are in `settings::Settings`, which can be
//! loaded from a JSON string.

pub mod lexer;
pub mod tree;
pub mod settings;

use std::io::Read;
use log::info;
use lexer::{Scanner,Token,TokenKind};
use settings::Settings;
use tree::{Program,TreeBuilder};

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Scan everything the reader produces and build the program tree.
pub fn parse_source<R: Read>(reader: R,settings: &Settings) -> Result<Program,lexer::Error> {
    let mut scanner = Scanner::from_reader(reader,settings)?;
    let program = TreeBuilder::build(&mut scanner)?;
    info!("scanned {} lines, {} tokens",program.lines().len(),program.token_count());
    Ok(program)
}

/// Calls `parse_source` on a string using default settings.
pub fn parse_str(source: &str) -> Result<Program,lexer::Error> {
    parse_source(source.as_bytes(),&Settings::new())
}

/// Scan everything the reader produces and return the flat token stream.
/// The last token is always the end-of-input token.
pub fn scan_tokens<R: Read>(reader: R,settings: &Settings) -> Result<Vec<Token>,lexer::Error> {
    let mut ans = Vec::new();
    for tok in Scanner::from_reader(reader,settings)? {
        let tok = tok?;
        let done = tok.kind() == TokenKind::EndOfInput;
        ans.push(tok);
        if done {
            break;
        }
    }
    Ok(ans)
}
