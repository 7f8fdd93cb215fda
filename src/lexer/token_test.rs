// Classification and evaluation of raw lexemes, independent of the scanner.

#[cfg(test)]
use super::token::{RawLexeme,Token};
#[cfg(test)]
use crate::settings::Settings;

#[cfg(test)]
fn classify(lexeme: &str) -> Token {
	let raw = RawLexeme { bytes: lexeme.as_bytes().to_vec(), eol: false, eof: false, row: 0, col: 0 };
	Token::classify(raw,&Settings::new().integers)
}

mod order {
	use super::super::{TokenKind,Radix};
	use TokenKind::*;
	fn check(lexeme: &str,kind: TokenKind,val: Option<u64>) {
		let tok = super::classify(lexeme);
		assert_eq!(tok.kind(),kind,"lexeme {}",lexeme);
		assert_eq!(tok.integer(),val,"lexeme {}",lexeme);
	}
	#[test]
	fn colon() {
		check(":",Colon,None);
		check("::",Unrecognized,None);
	}
	#[test]
	fn binary_before_octal_and_hex() {
		check("1b",IntegerLiteral,Some(1));
		check("1101B",IntegerLiteral,Some(13));
		assert_eq!(super::classify("0b").radix(),Some(Radix::Binary));
		check("12b",Unrecognized,None);
	}
	#[test]
	fn octal() {
		check("17o",IntegerLiteral,Some(15));
		check("777O",IntegerLiteral,Some(511));
		check("8o",Unrecognized,None);
	}
	#[test]
	fn decimal_suffix_optional() {
		check("42",IntegerLiteral,Some(42));
		check("42d",IntegerLiteral,Some(42));
		check("42D",IntegerLiteral,Some(42));
		check("007",IntegerLiteral,Some(7));
		check("42dd",Unrecognized,None);
	}
	#[test]
	fn hex_needs_suffix() {
		check("0ffh",IntegerLiteral,Some(255));
		check("0FFH",IntegerLiteral,Some(255));
		check("1dh",IntegerLiteral,Some(29));
		check("1bh",IntegerLiteral,Some(27));
		check("0ff",Unrecognized,None);
	}
	#[test]
	fn hex_letters_win_over_identifier() {
		check("ah",IntegerLiteral,Some(10));
		check("beh",IntegerLiteral,Some(190));
		check("add",Identifier,None);
		check("fg",Identifier,None);
	}
	#[test]
	fn identifiers() {
		check("_",Identifier,None);
		check("_start",Identifier,None);
		check("r0",Identifier,None);
		check("Loop_2",Identifier,None);
		check("b",Identifier,None);
		check("2x",Unrecognized,None);
		check("a-b",Unrecognized,None);
	}
	#[test]
	fn strings() {
		let tok = super::classify("'a b'");
		assert_eq!(tok.kind(),SingleQuotedString);
		assert_eq!(tok.string(),Some("a b"));
		let tok = super::classify("\"x\"");
		assert_eq!(tok.kind(),DoubleQuotedString);
		assert_eq!(tok.string(),Some("x"));
		check("'a'b'",Unrecognized,None);
		check("'",Unrecognized,None);
		check("'a\"",Unrecognized,None);
	}
	#[test]
	fn non_ascii() {
		let raw = super::RawLexeme { bytes: vec![0xc3,0xa9], eol: false, eof: false, row: 0, col: 0 };
		let tok = super::Token::classify(raw,&super::Settings::new().integers);
		assert_eq!(tok.kind(),Unrecognized);
		assert_eq!(tok.lexeme().to_vec(),vec![0xc3u8,0xa9]);
	}
}

mod flags {
	use super::super::token::{RawLexeme,Token};
	use super::super::TokenKind;
	use crate::settings::Settings;
	#[test]
	fn terminators_have_no_lexeme() {
		let ints = Settings::new().integers;
		let eol = Token::classify(RawLexeme { bytes: vec![], eol: true, eof: false, row: 3, col: 4 },&ints);
		assert_eq!(eol.kind(),TokenKind::EndOfLine);
		assert!(eol.lexeme().is_empty());
		assert!(eol.value().is_none());
		assert!(eol.is_terminator());
		assert_eq!((eol.row(),eol.col()),(3,4));
		let eof = Token::classify(RawLexeme { bytes: vec![], eol: false, eof: true, row: 0, col: 0 },&ints);
		assert_eq!(eof.kind(),TokenKind::EndOfInput);
		assert!(eof.is_terminator());
	}
	#[test]
	fn classification_is_pure() {
		let ints = Settings::new().integers;
		for lexeme in ["mov","101b","'s'","\"d\"",":","??","0ffh","17o","99"] {
			let raw = RawLexeme { bytes: lexeme.as_bytes().to_vec(), eol: false, eof: false, row: 1, col: 2 };
			assert_eq!(Token::classify(raw.clone(),&ints),Token::classify(raw,&ints));
		}
	}
}

mod evaluation {
	use super::super::token::evaluate;
	use super::super::Radix;
	use crate::settings::{Integers,IntegerOverflow,Settings};
	#[test]
	fn most_significant_first() {
		let ints = Settings::new().integers;
		assert_eq!(evaluate(b"1010",Radix::Binary,&ints),Some(10));
		assert_eq!(evaluate(b"0777",Radix::Octal,&ints),Some(511));
		assert_eq!(evaluate(b"65535",Radix::Decimal,&ints),Some(65535));
		assert_eq!(evaluate(b"DeadBeef",Radix::Hexadecimal,&ints),Some(0xdeadbeef));
	}
	#[test]
	fn full_width() {
		let ints = Settings::new().integers;
		assert_eq!(evaluate(b"ffffffffffffffff",Radix::Hexadecimal,&ints),Some(u64::MAX));
		assert_eq!(evaluate(b"10000000000000000",Radix::Hexadecimal,&ints),None);
		assert_eq!(evaluate(b"18446744073709551616",Radix::Decimal,&ints),None);
	}
	#[test]
	fn wrap_keeps_low_bits() {
		let ints = Integers { width: 16, overflow: IntegerOverflow::Wrap };
		assert_eq!(evaluate(b"65536",Radix::Decimal,&ints),Some(0));
		assert_eq!(evaluate(b"12345",Radix::Hexadecimal,&ints),Some(0x2345));
		let ints = Integers { width: 64, overflow: IntegerOverflow::Wrap };
		assert_eq!(evaluate(b"10000000000000001",Radix::Hexadecimal,&ints),Some(1));
	}
	#[test]
	fn reject_at_width() {
		let ints = Integers { width: 16, overflow: IntegerOverflow::Reject };
		assert_eq!(evaluate(b"65535",Radix::Decimal,&ints),Some(65535));
		assert_eq!(evaluate(b"65536",Radix::Decimal,&ints),None);
		assert_eq!(evaluate(b"0000000000000000000000001",Radix::Binary,&ints),Some(1));
	}
}

mod describe {
	use super::super::TokenKind::*;
	#[test]
	fn meanings() {
		assert_eq!(Identifier.describe(),"identifier");
		assert_eq!(IntegerLiteral.describe(),"integer");
		assert_eq!(Colon.describe(),"colon");
		assert_eq!(SingleQuotedString.describe(),"string");
		assert_eq!(DoubleQuotedString.describe(),"string");
		assert_eq!(EndOfLine.describe(),"end-of-line");
		assert_eq!(EndOfInput.describe(),"end-of-input");
		assert_eq!(Unrecognized.to_string(),"unknown");
	}
}

mod round_trip {
	use super::super::Radix;
	#[test]
	fn format_with_suffix() {
		assert_eq!(Radix::Binary.format(5),"101b");
		assert_eq!(Radix::Octal.format(8),"10o");
		assert_eq!(Radix::Decimal.format(0),"0d");
		assert_eq!(Radix::Hexadecimal.format(255),"ffh");
	}
	#[test]
	fn format_of_evaluate() {
		for lexeme in ["101b","17o","42d","0d","ffh","1234abcdh","11111111b"] {
			let tok = super::classify(lexeme);
			let radix = tok.radix().expect("not an integer");
			let magnitude = tok.integer().expect("not an integer");
			assert_eq!(radix.format(magnitude),lexeme);
		}
	}
}
