//! Parse settings string sent by the host.
//!
//! The scanner checks for specific keys that affect its operation, anything else is ignored.
//! Missing keys keep their defaults.  Example:
//! ```json
//! { "lexeme": { "maxLength": 256 }, "integers": { "width": 16, "overflow": "wrap" } }
//! ```

use serde_json;
use log::{debug,warn};
use crate::{DYNERR,STDRESULT};

/// What to do with a numeral whose value does not fit in `Integers::width` bits
#[derive(Clone,Copy,PartialEq,Eq,Debug)]
pub enum IntegerOverflow {
    /// classify the lexeme as unrecognized
    Reject,
    /// keep the low order bits
    Wrap
}

#[derive(Clone,Copy,Debug)]
pub struct Lexeme {
    /// longest lexeme in bytes, anything longer aborts the scan
    pub max_length: usize
}

#[derive(Clone,Copy,Debug)]
pub struct Integers {
    /// bits available to an integer literal, 1 through 64
    pub width: u32,
    pub overflow: IntegerOverflow
}

#[derive(Clone,Debug)]
pub struct Settings {
    pub lexeme: Lexeme,
    pub integers: Integers
}

impl Integers {
    /// largest magnitude an integer literal may have
    pub fn max_value(&self) -> u64 {
        match self.width {
            w if w >= 64 => u64::MAX,
            w => (1u64 << w) - 1
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self {
            lexeme: Lexeme {
                max_length: 256
            },
            integers: Integers {
                width: 64,
                overflow: IntegerOverflow::Reject
            }
        }
    }
    /// Apply whatever keys are found in the JSON string.
    /// The string itself must be valid JSON.
    pub fn update(&mut self,json: &str) -> STDRESULT {
        let root = serde_json::from_str::<serde_json::Value>(json)?;
        let obj = match root.as_object() {
            Some(obj) => obj,
            None => {
                warn!("settings root is not an object, ignoring");
                return Ok(());
            }
        };
        for (key,val) in obj {
            match key.as_str() {
                "lexeme" => {
                    let mut max_length = self.lexeme.max_length;
                    update_json_usize(val,"maxLength",&mut max_length);
                    if max_length == 0 {
                        warn!("lexeme.maxLength must be positive, keeping {}",self.lexeme.max_length);
                    } else {
                        self.lexeme.max_length = max_length;
                    }
                },
                "integers" => {
                    let mut width = self.integers.width;
                    update_json_u32(val,"width",&mut width);
                    if width < 1 || width > 64 {
                        warn!("integers.width {} out of range, keeping {}",width,self.integers.width);
                    } else {
                        self.integers.width = width;
                    }
                    update_json_overflow(val,"overflow",&mut self.integers.overflow);
                },
                _ => debug!("ignoring settings key {}",key)
            }
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse(json: &str) -> Result<Settings,DYNERR> {
    let mut ans = Settings::new();
    ans.update(json)?;
    Ok(ans)
}

fn update_json_usize(maybe_obj: &serde_json::Value,key: &str,curr: &mut usize) {
    if let Some(outer) = maybe_obj.as_object() {
        if let Some(x) = outer.get(key) {
            match x.as_u64() {
                Some(v) => *curr = v as usize,
                None => warn!("{} should be a non-negative integer",key)
            }
        }
    }
}

fn update_json_u32(maybe_obj: &serde_json::Value,key: &str,curr: &mut u32) {
    if let Some(outer) = maybe_obj.as_object() {
        if let Some(x) = outer.get(key) {
            match x.as_u64().and_then(|v| u32::try_from(v).ok()) {
                Some(v) => *curr = v,
                None => warn!("{} should be a small non-negative integer",key)
            }
        }
    }
}

fn update_json_overflow(maybe_obj: &serde_json::Value,key: &str,curr: &mut IntegerOverflow) {
    if let Some(outer) = maybe_obj.as_object() {
        if let Some(x) = outer.get(key) {
            match x.as_str() {
                Some("reject") => *curr = IntegerOverflow::Reject,
                Some("wrap") => *curr = IntegerOverflow::Wrap,
                _ => warn!("{} should be \"reject\" or \"wrap\"",key)
            }
        }
    }
}

#[test]
fn test_defaults() {
    let settings = Settings::new();
    assert_eq!(settings.lexeme.max_length,256);
    assert_eq!(settings.integers.width,64);
    assert_eq!(settings.integers.overflow,IntegerOverflow::Reject);
    assert_eq!(settings.integers.max_value(),u64::MAX);
}

#[test]
fn test_parse_settings() {
    let s = "{
        \"lexeme\": { \"maxLength\": 16 },
        \"integers\": { \"width\": 16, \"overflow\": \"wrap\" },
        \"unknown\": true
    }";
    let settings = parse(s).expect("could not parse test string");
    assert_eq!(settings.lexeme.max_length,16);
    assert_eq!(settings.integers.width,16);
    assert_eq!(settings.integers.overflow,IntegerOverflow::Wrap);
    assert_eq!(settings.integers.max_value(),0xffff);
}

#[test]
fn test_bad_settings() {
    assert!(parse("{ \"lexeme\": ").is_err());
    let settings = parse("{ \"lexeme\": { \"maxLength\": 0 }, \"integers\": { \"width\": 65, \"overflow\": \"saturate\" } }")
        .expect("could not parse test string");
    assert_eq!(settings.lexeme.max_length,256);
    assert_eq!(settings.integers.width,64);
    assert_eq!(settings.integers.overflow,IntegerOverflow::Reject);
}
