//! Character source consumed by the scanner.

use std::io::{BufReader,Bytes,Read};
use log::error;
use super::Error;

/// One character of input, or the end-of-input sentinel which is distinct from every byte.
#[derive(Clone,Copy,PartialEq,Eq,Debug)]
pub enum Input {
    Byte(u8),
    End
}

impl From<u8> for Input {
    fn from(b: u8) -> Self {
        Self::Byte(b)
    }
}

/// Supplies the scanner with one byte at a time.
/// Once the end has been reached, every further call must return `Input::End` again.
pub trait ByteSource {
    fn next_byte(&mut self) -> Result<Input,Error>;
}

/// Byte source over anything that implements `std::io::Read`, buffered.
pub struct ReadSource<R: Read> {
    bytes: Bytes<BufReader<R>>,
    finished: bool
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            finished: false
        }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> Result<Input,Error> {
        if self.finished {
            return Ok(Input::End);
        }
        match self.bytes.next() {
            Some(Ok(b)) => Ok(Input::Byte(b)),
            Some(Err(e)) => {
                error!("unable to read character from source: {}",e);
                Err(Error::Io(e))
            },
            None => {
                self.finished = true;
                Ok(Input::End)
            }
        }
    }
}

#[test]
fn test_end_is_idempotent() {
    let mut src = ReadSource::new("a".as_bytes());
    assert_eq!(src.next_byte().unwrap(),Input::Byte(b'a'));
    for _rep in 0..3 {
        assert_eq!(src.next_byte().unwrap(),Input::End);
    }
}
