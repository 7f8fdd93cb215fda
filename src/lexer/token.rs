//! Token classification and evaluation.
//!
//! The scanner hands over a `RawLexeme` and `Token::classify` decides what it is.
//! Order matters here because numerals with suffixes and identifiers overlap,
//! e.g. `ah` is the hexadecimal integer 10, not an identifier.

use std::borrow::Cow;
use std::fmt;
use log::{debug,warn};
use crate::settings::{Integers,IntegerOverflow};
use super::classify;
use super::Input;

/// digit values are positions in this table, case is ignored
const DIGITS: &[u8;16] = b"0123456789abcdef";

#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    Colon,
    SingleQuotedString,
    DoubleQuotedString,
    EndOfLine,
    EndOfInput,
    Unrecognized
}

impl TokenKind {
    /// English meaning of the token kind, for use in messages
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::IntegerLiteral => "integer",
            Self::Colon => "colon",
            Self::SingleQuotedString => "string",
            Self::DoubleQuotedString => "string",
            Self::EndOfLine => "end-of-line",
            Self::EndOfInput => "end-of-input",
            Self::Unrecognized => "unknown"
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self,f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"{}",self.describe())
    }
}

/// Base of an integer literal, named after its suffix
#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal
}

impl Radix {
    pub fn base(&self) -> u64 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16
        }
    }
    pub fn suffix(&self) -> char {
        match self {
            Self::Binary => 'b',
            Self::Octal => 'o',
            Self::Decimal => 'd',
            Self::Hexadecimal => 'h'
        }
    }
    /// Render a magnitude the way it would be written in source, digits in lower case
    /// followed by the suffix.  The decimal suffix is always included.
    pub fn format(&self,magnitude: u64) -> String {
        let digits = match self {
            Self::Binary => format!("{:b}",magnitude),
            Self::Octal => format!("{:o}",magnitude),
            Self::Decimal => format!("{}",magnitude),
            Self::Hexadecimal => format!("{:x}",magnitude)
        };
        digits + &self.suffix().to_string()
    }
}

#[derive(Clone,PartialEq,Eq,Debug)]
pub enum Value {
    Integer { radix: Radix, magnitude: u64 },
    /// string contents with the delimiters removed
    Text(String)
}

/// What the scanner captured for one token, before classification.
/// At most one of `eol`, `eof`, or a non-empty `bytes` holds.
#[derive(Clone,PartialEq,Eq,Debug)]
pub struct RawLexeme {
    pub bytes: Vec<u8>,
    pub eol: bool,
    pub eof: bool,
    pub row: usize,
    pub col: usize
}

#[derive(Clone,PartialEq,Eq,Debug)]
pub struct Token {
    lexeme: Vec<u8>,
    kind: TokenKind,
    value: Option<Value>,
    row: usize,
    col: usize
}

impl Token {
    /// Classify a raw lexeme and evaluate it, this is a pure function of its arguments.
    pub fn classify(raw: RawLexeme,ints: &Integers) -> Self {
        let (kind,value) = if raw.eol {
            (TokenKind::EndOfLine,None)
        } else if raw.eof {
            (TokenKind::EndOfInput,None)
        } else if raw.bytes == b":" {
            (TokenKind::Colon,None)
        } else if let Some((radix,digits)) = match_integer(&raw.bytes) {
            match evaluate(digits,radix,ints) {
                Some(magnitude) => (TokenKind::IntegerLiteral,Some(Value::Integer { radix, magnitude })),
                None => {
                    warn!("integer {} at row {} col {} does not fit in {} bits",
                        String::from_utf8_lossy(&raw.bytes),raw.row,raw.col,ints.width);
                    (TokenKind::Unrecognized,None)
                }
            }
        } else if is_identifier(&raw.bytes) {
            (TokenKind::Identifier,None)
        } else if let Some(txt) = match_string(&raw.bytes,b'\'') {
            (TokenKind::SingleQuotedString,Some(Value::Text(txt)))
        } else if let Some(txt) = match_string(&raw.bytes,b'"') {
            (TokenKind::DoubleQuotedString,Some(Value::Text(txt)))
        } else {
            debug!("unrecognized lexeme {} at row {} col {}",String::from_utf8_lossy(&raw.bytes),raw.row,raw.col);
            (TokenKind::Unrecognized,None)
        };
        Self {
            lexeme: raw.bytes,
            kind,
            value,
            row: raw.row,
            col: raw.col
        }
    }
    /// the exact bytes that were captured, empty for end-of-line and end-of-input
    pub fn lexeme(&self) -> &[u8] {
        &self.lexeme
    }
    /// the lexeme as text, invalid UTF8 is replaced
    pub fn text(&self) -> Cow<'_,str> {
        String::from_utf8_lossy(&self.lexeme)
    }
    pub fn kind(&self) -> TokenKind {
        self.kind
    }
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
    pub fn integer(&self) -> Option<u64> {
        match self.value {
            Some(Value::Integer { magnitude, .. }) => Some(magnitude),
            _ => None
        }
    }
    pub fn radix(&self) -> Option<Radix> {
        match self.value {
            Some(Value::Integer { radix, .. }) => Some(radix),
            _ => None
        }
    }
    pub fn string(&self) -> Option<&str> {
        match &self.value {
            Some(Value::Text(s)) => Some(s),
            _ => None
        }
    }
    /// zero based row of the first byte
    pub fn row(&self) -> usize {
        self.row
    }
    /// zero based byte column of the first byte
    pub fn col(&self) -> usize {
        self.col
    }
    pub fn is_terminator(&self) -> bool {
        matches!(self.kind,TokenKind::EndOfLine | TokenKind::EndOfInput)
    }
}

/// If the whole of `s` is `digit+ suffix` return the digits.
/// With `optional` the bare `digit+` form is also accepted.
fn match_numeral(s: &[u8],is_digit: fn(Input) -> bool,is_suffix: fn(Input) -> bool,optional: bool) -> Option<&[u8]> {
    let all_digits = |d: &[u8]| !d.is_empty() && d.iter().all(|b| is_digit(Input::Byte(*b)));
    if let Some((last,digits)) = s.split_last() {
        if is_suffix(Input::Byte(*last)) && all_digits(digits) {
            return Some(digits);
        }
    }
    if optional && all_digits(s) {
        return Some(s);
    }
    None
}

/// Try the numeral grammars in order binary, octal, decimal, hexadecimal.
fn match_integer(s: &[u8]) -> Option<(Radix,&[u8])> {
    if let Some(d) = match_numeral(s,classify::is_binary_digit,classify::is_binary_suffix,false) {
        return Some((Radix::Binary,d));
    }
    if let Some(d) = match_numeral(s,classify::is_octal_digit,classify::is_octal_suffix,false) {
        return Some((Radix::Octal,d));
    }
    if let Some(d) = match_numeral(s,classify::is_decimal_digit,classify::is_decimal_suffix,true) {
        return Some((Radix::Decimal,d));
    }
    if let Some(d) = match_numeral(s,classify::is_hexadecimal_digit,classify::is_hexadecimal_suffix,false) {
        return Some((Radix::Hexadecimal,d));
    }
    None
}

fn digit_value(b: u8) -> u64 {
    let lower = b.to_ascii_lowercase();
    DIGITS.iter().position(|d| *d == lower).unwrap_or(0) as u64
}

/// Evaluate digits already known to be valid in `radix`, most significant first.
/// Returns `None` if the value does not fit and the policy is to reject.
pub fn evaluate(digits: &[u8],radix: Radix,ints: &Integers) -> Option<u64> {
    let base = radix.base();
    let max = ints.max_value();
    let mut ans: u64 = 0;
    for b in digits {
        let d = digit_value(*b);
        match ints.overflow {
            IntegerOverflow::Wrap => {
                ans = ans.wrapping_mul(base).wrapping_add(d) & max;
            },
            IntegerOverflow::Reject => {
                ans = ans.checked_mul(base)?.checked_add(d)?;
                if ans > max {
                    return None;
                }
            }
        }
    }
    Some(ans)
}

fn is_identifier(s: &[u8]) -> bool {
    match s.split_first() {
        Some((first,rest)) => {
            let c = Input::Byte(*first);
            (classify::is_letter(c) || classify::is_underscore(c)) && rest.iter().all(|b| {
                let c = Input::Byte(*b);
                classify::is_letter(c) || classify::is_decimal_digit(c) || classify::is_underscore(c)
            })
        },
        None => false
    }
}

/// If `s` is `quote printable* quote`, with no inner quote, return the contents.
fn match_string(s: &[u8],quote: u8) -> Option<String> {
    if s.len() < 2 || s[0] != quote || s[s.len()-1] != quote {
        return None;
    }
    let body = &s[1..s.len()-1];
    if body.iter().all(|b| *b != quote && classify::is_printable(Input::Byte(*b))) {
        // printable bytes are ASCII
        return Some(body.iter().map(|b| *b as char).collect());
    }
    None
}
