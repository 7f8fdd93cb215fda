//! Character level state machine.
//!
//! ```text
//! state              input                 next state          action
//! -----------------  --------------------  ------------------  -------------------
//! Start              whitespace            Start               skip
//! Start              ':'                   SymbolCapture       -
//! Start              eol                   EndOfLineCapture    -
//! Start              eof                   EndOfInputCapture   -
//! Start              '                     SingleQuoteOpen     -
//! Start              "                     DoubleQuoteOpen     -
//! Start              ';'                   CommentSkip         -
//! Start              anything else         GenericCapture      -
//! SymbolCapture      ':'                   Done                capture
//! EndOfLineCapture   eol                   Done                consume, flag eol
//! EndOfInputCapture  eof                   Done                consume, flag eof
//! SingleQuoteOpen    '                     SingleQuoteBody     capture
//! SingleQuoteBody    '                     Done                capture
//! SingleQuoteBody    eol, eof, ';'         Done                -
//! SingleQuoteBody    anything else         SingleQuoteBody     capture
//! CommentSkip        eol, eof              Start               -
//! CommentSkip        anything else         CommentSkip         skip
//! GenericCapture     delimiter             Done                -
//! GenericCapture     anything else         GenericCapture      capture
//! ```
//! The double quote states mirror the single quote states.  A delimiter for
//! `GenericCapture` is whitespace, `:`, eol, eof, either quote, or `;`.

use log::trace;
use crate::settings::{Integers,Settings};
use super::classify::*;
use super::lexeme::LexemeBuffer;
use super::source::{ByteSource,Input,ReadSource};
use super::token::{RawLexeme,Token,TokenKind};
use super::Error;

#[derive(Clone,Copy,PartialEq,Eq,Debug)]
enum State {
    Start,
    SymbolCapture,
    EndOfLineCapture,
    EndOfInputCapture,
    SingleQuoteOpen,
    SingleQuoteBody,
    DoubleQuoteOpen,
    DoubleQuoteBody,
    CommentSkip,
    GenericCapture,
    Done
}

/// Mutable state of one scan: the lookahead register and its position.
struct ScannerState {
    /// the one byte of lookahead shared by classifiers and state machine
    current: Input,
    row: usize,
    col: usize
}

/// Produces tokens from a byte source, one call at a time.
/// Each scan needs its own `Scanner`, nothing here is shared.
pub struct Scanner<S: ByteSource> {
    source: S,
    state: ScannerState,
    lexeme: LexemeBuffer,
    ints: Integers,
    exhausted: bool
}

impl<R: std::io::Read> Scanner<ReadSource<R>> {
    /// Create a scanner over any reader
    pub fn from_reader(reader: R,settings: &Settings) -> Result<Self,Error> {
        Self::new(ReadSource::new(reader),settings)
    }
}

impl<S: ByteSource> Scanner<S> {
    /// Create a scanner, this reads the first byte into the lookahead register.
    pub fn new(mut source: S,settings: &Settings) -> Result<Self,Error> {
        let current = source.next_byte()?;
        Ok(Self {
            source,
            state: ScannerState { current, row: 0, col: 0 },
            lexeme: LexemeBuffer::new(settings.lexeme.max_length),
            ints: settings.integers,
            exhausted: false
        })
    }
    /// Move past the current byte and read the next one.
    fn advance(&mut self) -> Result<(),Error> {
        match self.state.current {
            Input::Byte(b'\n') => {
                self.state.row += 1;
                self.state.col = 0;
            },
            Input::Byte(_) => self.state.col += 1,
            Input::End => {}
        }
        self.state.current = self.source.next_byte()?;
        Ok(())
    }
    /// Put the current byte in the lexeme, then advance.
    fn capture(&mut self) -> Result<(),Error> {
        if let Input::Byte(b) = self.state.current {
            self.lexeme.push(b)?;
        }
        self.advance()
    }
    fn mark_start(&mut self) {
        self.lexeme.begin(self.state.row,self.state.col);
    }
    /// Run the state machine until one token is complete.
    /// Once end of input is reached every further call yields another end-of-input token.
    pub fn next_token(&mut self) -> Result<Token,Error> {
        let mut eol = false;
        let mut eof = false;
        let mut state = State::Start;
        self.mark_start();
        let (mut row,mut col) = (self.state.row,self.state.col);
        while state != State::Done {
            let c = self.state.current;
            state = match state {
                State::Start => {
                    if is_whitespace(c) {
                        self.advance()?;
                        State::Start
                    } else {
                        self.mark_start();
                        (row,col) = (self.state.row,self.state.col);
                        if is_symbol(c) {
                            State::SymbolCapture
                        } else if is_end_of_line(c) {
                            State::EndOfLineCapture
                        } else if is_end_of_input(c) {
                            State::EndOfInputCapture
                        } else if is_single_quote(c) {
                            State::SingleQuoteOpen
                        } else if is_double_quote(c) {
                            State::DoubleQuoteOpen
                        } else if is_comment_initiator(c) {
                            State::CommentSkip
                        } else {
                            State::GenericCapture
                        }
                    }
                },
                State::SymbolCapture => {
                    self.capture()?;
                    State::Done
                },
                State::EndOfLineCapture => {
                    eol = true;
                    self.advance()?;
                    State::Done
                },
                State::EndOfInputCapture => {
                    eof = true;
                    self.advance()?;
                    State::Done
                },
                State::SingleQuoteOpen => {
                    self.capture()?;
                    State::SingleQuoteBody
                },
                State::DoubleQuoteOpen => {
                    self.capture()?;
                    State::DoubleQuoteBody
                },
                State::SingleQuoteBody | State::DoubleQuoteBody => {
                    let closing = match state {
                        State::SingleQuoteBody => is_single_quote(c),
                        _ => is_double_quote(c)
                    };
                    if closing {
                        self.capture()?;
                        State::Done
                    } else if is_end_of_line(c) || is_end_of_input(c) || is_comment_initiator(c) {
                        State::Done
                    } else {
                        self.capture()?;
                        state
                    }
                },
                State::CommentSkip => {
                    if is_end_of_line(c) || is_end_of_input(c) {
                        State::Start
                    } else {
                        self.advance()?;
                        State::CommentSkip
                    }
                },
                State::GenericCapture => {
                    if is_whitespace(c) || is_symbol(c) || is_end_of_line(c) || is_end_of_input(c)
                        || is_single_quote(c) || is_double_quote(c) || is_comment_initiator(c) {
                        State::Done
                    } else {
                        self.capture()?;
                        State::GenericCapture
                    }
                },
                State::Done => State::Done
            };
        }
        let raw = RawLexeme {
            bytes: self.lexeme.take(),
            eol,
            eof,
            row,
            col
        };
        let tok = Token::classify(raw,&self.ints);
        trace!("{} {:?} at row {} col {}",tok.kind(),tok.text(),tok.row(),tok.col());
        Ok(tok)
    }
}

impl<S: ByteSource> Iterator for Scanner<S> {
    type Item = Result<Token,Error>;
    /// Yields tokens up to and including the first end-of-input token, or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let ans = self.next_token();
        match &ans {
            Ok(tok) if tok.kind() != TokenKind::EndOfInput => {},
            _ => self.exhausted = true
        }
        Some(ans)
    }
}
