//! Capture buffer for the lexeme being scanned.

use log::error;
use super::Error;

/// Growable buffer with an explicit upper limit.
/// Exceeding the limit is fatal for the scan, the lexeme is never truncated.
pub struct LexemeBuffer {
    bytes: Vec<u8>,
    limit: usize,
    row: usize,
    col: usize
}

impl LexemeBuffer {
    pub fn new(limit: usize) -> Self {
        Self {
            bytes: Vec::new(),
            limit,
            row: 0,
            col: 0
        }
    }
    /// Clear the buffer and remember where the next lexeme starts, for error reporting.
    pub fn begin(&mut self,row: usize,col: usize) {
        self.bytes.clear();
        self.row = row;
        self.col = col;
    }
    pub fn push(&mut self,b: u8) -> Result<(),Error> {
        if self.bytes.len() >= self.limit {
            error!("overflow on lexeme starting at row {} col {}",self.row,self.col);
            return Err(Error::LexemeOverflow { limit: self.limit, row: self.row, col: self.col });
        }
        self.bytes.push(b);
        Ok(())
    }
    /// Hand over the captured bytes, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[test]
fn test_limit() {
    let mut buf = LexemeBuffer::new(3);
    buf.begin(2,5);
    for b in b"abc" {
        buf.push(*b).expect("push within limit failed");
    }
    match buf.push(b'd') {
        Err(Error::LexemeOverflow { limit, row, col }) => assert_eq!((limit,row,col),(3,2,5)),
        _ => panic!("expected overflow")
    }
    assert_eq!(buf.take(),b"abc".to_vec());
    assert!(buf.is_empty());
    buf.push(b'x').expect("buffer was not cleared");
    assert_eq!(buf.len(),1);
}
