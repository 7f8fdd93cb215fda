//! # Program Tree
//!
//! The tree has three levels.  The `Program` is the root, its children are the lines of the
//! source in order, and the children of each line are the tokens found on it in order.
//! The end-of-input token closes the program as its last child.
//!
//! The tree is built in one pass by `TreeBuilder`, which only ever appends to the last
//! line it added.  Once built the program is read-only; a later pass that wants to fill in
//! `LineType` takes the lines with `Program::into_lines`.
//!
//! An end-of-line that arrives before any other token opens the first line instead of
//! closing one, so that line begins on the row after the newline.
//!
//! Objects that want to walk the tree can provide the `Visit` trait.

use std::fmt;
use log::trace;
use crate::lexer::{ByteSource,Error,Scanner,Token,TokenKind};


/// Shape of a line, assigned by a later pass.  This module always leaves it `Undefined`.
#[derive(Clone,Copy,PartialEq,Eq,Debug)]
pub enum LineType {
    Undefined,
    Empty,
    LabelOnly,
    LabelAndMnemonic,
    LabelMnemonicOperands,
    MnemonicOnly,
    MnemonicAndOperands
}

/// One physical source line and the tokens found on it
#[derive(Clone,PartialEq,Eq,Debug)]
pub struct Line {
    row: usize,
    line_type: LineType,
    tokens: Vec<Token>
}

impl Line {
    fn new(row: usize) -> Self {
        Self {
            row,
            line_type: LineType::Undefined,
            tokens: Vec::new()
        }
    }
    /// zero based source row where the line begins
    pub fn row(&self) -> usize {
        self.row
    }
    pub fn line_type(&self) -> LineType {
        self.line_type
    }
    pub fn set_line_type(&mut self,line_type: LineType) {
        self.line_type = line_type;
    }
    /// tokens in scan order, never includes end-of-line or end-of-input
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Root of the tree: the lines in source order, closed by the end-of-input token.
#[derive(Clone,PartialEq,Eq,Debug)]
pub struct Program {
    lines: Vec<Line>,
    end: Token
}

impl Program {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
    /// the terminal end-of-input token
    pub fn end(&self) -> &Token {
        &self.end
    }
    /// true if the source held no tokens at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
    pub fn token_count(&self) -> usize {
        self.lines.iter().map(|l| l.tokens.len()).sum()
    }
    /// Give up the tree, keeping the lines.
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }
}

/// A borrowed view of any node in the tree
#[derive(Clone,Copy,Debug)]
pub enum Node<'a> {
    Line(&'a Line),
    Token(&'a Token),
    EndOfInput(&'a Token)
}

pub enum WalkerChoice {
    GotoChild,
    GotoSibling,
    GotoParentSibling,
    Exit
}

pub trait Visit {
    fn visit(&mut self,node: Node) -> WalkerChoice;
    /// Visit lines in order, descending into a line's tokens if the visitor asks for it.
    /// The end-of-input node is visited last unless the visitor exits first.
    fn walk(&mut self,program: &Program) {
        for line in &program.lines {
            match self.visit(Node::Line(line)) {
                WalkerChoice::Exit => return,
                WalkerChoice::GotoChild => {
                    for tok in &line.tokens {
                        match self.visit(Node::Token(tok)) {
                            WalkerChoice::Exit => return,
                            WalkerChoice::GotoParentSibling => break,
                            _ => {}
                        }
                    }
                },
                _ => {}
            }
        }
        self.visit(Node::EndOfInput(&program.end));
    }
}

/// Grows a program one token at a time.
/// The only cursor is the last line added; tokens are appended to it.
pub struct TreeBuilder {
    lines: Vec<Line>
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new()
        }
    }
    fn start_line(&mut self,row: usize) {
        trace!("start line at row {}",row);
        self.lines.push(Line::new(row));
    }
    fn append(&mut self,tok: Token) {
        if self.lines.is_empty() {
            self.start_line(0);
        }
        if let Some(line) = self.lines.last_mut() {
            line.tokens.push(tok);
        }
    }
    /// Add a token that is not the end of input.
    /// An end-of-line token starts the next line, anything else goes on the current line.
    /// A leading end-of-line only opens the first line.
    fn push(&mut self,tok: Token) {
        match tok.kind() {
            TokenKind::EndOfLine => self.start_line(tok.row() + 1),
            _ => self.append(tok)
        }
    }
    /// Close the tree with the end-of-input token.
    fn finish(self,end: Token) -> Program {
        Program {
            lines: self.lines,
            end
        }
    }
    /// Pull tokens from the scanner until end of input and return the finished tree.
    pub fn build<S: ByteSource>(scanner: &mut Scanner<S>) -> Result<Program,Error> {
        let mut builder = Self::new();
        loop {
            let tok = scanner.next_token()?;
            if tok.kind() == TokenKind::EndOfInput {
                return Ok(builder.finish(tok));
            }
            builder.push(tok);
        }
    }
}

/// Debugging dump of the tree, one block per line and token.
impl fmt::Display for Program {
    fn fmt(&self,f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i,line) in self.lines.iter().enumerate() {
            writeln!(f,"Line {}\n",i+1)?;
            if line.is_empty() {
                writeln!(f,"  Empty\n")?;
            }
            for tok in &line.tokens {
                writeln!(f,"  Token")?;
                writeln!(f,"  Lexeme: {}",tok.text())?;
                writeln!(f,"  Type: {}\n",tok.kind())?;
            }
        }
        writeln!(f,"EOF")
    }
}
