//! Branch trace reader.
//!
//! A trace holds one resolved conditional branch per line:
//!
//! ```text
//! 0x40a3f8 1
//! 40a410 0
//! ```
//!
//! The PC is hexadecimal with an optional `0x` prefix; the outcome is `1`
//! for taken and `0` for not taken. Blank lines are ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// A resolved conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub pc: u64,
    pub taken: bool,
}

impl Branch {
    pub fn new(pc: u64, taken: bool) -> Self {
        Self { pc, taken }
    }
}

/// Parses one trace line. `line_no` is 1-based and only used for errors.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Branch>, TraceError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let malformed = || TraceError::Malformed {
        line: line_no,
        content: trimmed.to_string(),
    };

    let mut fields = trimmed.split_whitespace();
    let (Some(pc_field), Some(outcome_field), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };

    let digits = pc_field
        .strip_prefix("0x")
        .or_else(|| pc_field.strip_prefix("0X"))
        .unwrap_or(pc_field);
    // from_str_radix also takes a leading sign.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    let pc = u64::from_str_radix(digits, 16).map_err(|_| malformed())?;

    let taken = match outcome_field {
        "0" => false,
        "1" => true,
        _ => return Err(malformed()),
    };

    Ok(Some(Branch { pc, taken }))
}

/// Iterator over the branches of a trace.
pub struct TraceReader<R> {
    lines: io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl TraceReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<Branch, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(TraceError::Io(e))),
            };
            self.line_no += 1;

            match parse_line(&line, self.line_no) {
                Ok(Some(branch)) => return Some(Ok(branch)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
