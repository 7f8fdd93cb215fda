//! Character classifiers.
//!
//! Pure predicates over one `Input`.  Every function is total, the end-of-input sentinel
//! only satisfies `is_end_of_input`.

use super::Input;

/// tab, vertical tab, carriage return, space; newline is not whitespace
pub fn is_whitespace(c: Input) -> bool {
    matches!(c,Input::Byte(b'\t' | 0x0b | b'\r' | b' '))
}

/// only the colon at present
pub fn is_symbol(c: Input) -> bool {
    c == Input::Byte(b':')
}

pub fn is_end_of_line(c: Input) -> bool {
    c == Input::Byte(b'\n')
}

pub fn is_end_of_input(c: Input) -> bool {
    c == Input::End
}

pub fn is_single_quote(c: Input) -> bool {
    c == Input::Byte(b'\'')
}

pub fn is_double_quote(c: Input) -> bool {
    c == Input::Byte(b'"')
}

pub fn is_comment_initiator(c: Input) -> bool {
    c == Input::Byte(b';')
}

pub fn is_underscore(c: Input) -> bool {
    c == Input::Byte(b'_')
}

pub fn is_letter(c: Input) -> bool {
    matches!(c,Input::Byte(b) if b.is_ascii_alphabetic())
}

pub fn is_decimal_digit(c: Input) -> bool {
    matches!(c,Input::Byte(b'0'..=b'9'))
}

pub fn is_octal_digit(c: Input) -> bool {
    matches!(c,Input::Byte(b'0'..=b'7'))
}

pub fn is_binary_digit(c: Input) -> bool {
    matches!(c,Input::Byte(b'0' | b'1'))
}

pub fn is_hexadecimal_digit(c: Input) -> bool {
    matches!(c,Input::Byte(b) if b.is_ascii_hexdigit())
}

fn is_suffix(c: Input,lower: u8) -> bool {
    matches!(c,Input::Byte(b) if b.to_ascii_lowercase() == lower)
}

pub fn is_binary_suffix(c: Input) -> bool {
    is_suffix(c,b'b')
}

pub fn is_octal_suffix(c: Input) -> bool {
    is_suffix(c,b'o')
}

pub fn is_decimal_suffix(c: Input) -> bool {
    is_suffix(c,b'd')
}

pub fn is_hexadecimal_suffix(c: Input) -> bool {
    is_suffix(c,b'h')
}

/// visible ASCII, 32 through 126
pub fn is_printable(c: Input) -> bool {
    matches!(c,Input::Byte(32..=126))
}
