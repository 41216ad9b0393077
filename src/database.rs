//! Reader for the ingredient database text format.
//!
//! ```text
//! 3-5
//! 10-14
//! 16-20
//! 12-18
//!
//! 1
//! 5
//! 8
//! ```
//!
//! Range lines come first (`N-M`, or a lone `N` for a single id), then a
//! blank line, then one candidate id per line.

use crate::collection::RangeCollection;
use crate::error::{Error, Result};
use crate::interval::Interval;
use log::{debug, trace};
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Eq, PartialEq, Clone, Debug, Default)]
pub struct Database {
  ranges: RangeCollection,
  candidates: Vec<i64>,
}

impl Database {
  pub fn new(ranges: RangeCollection, candidates: Vec<i64>) -> Database {
    Self { ranges, candidates }
  }

  pub fn parse(text: &str) -> Result<Database> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let separator: usize = lines.iter().position(|line| line.is_empty()).ok_or(Error::MissingSeparator)?;

    let mut intervals: Vec<Interval> = Vec::with_capacity(separator);
    for (idx, line) in lines[..separator].iter().enumerate() {
      intervals.push(parse_range(idx + 1, line)?);
    }

    let mut candidates: Vec<i64> = Vec::new();
    for (idx, line) in lines.iter().enumerate().skip(separator + 1) {
      if line.is_empty() {
        continue;
      }
      candidates.push(parse_id(idx + 1, line)?);
    }

    debug!("parsed {} ranges and {} candidates", intervals.len(), candidates.len());
    Ok(Self::new(RangeCollection::new(intervals), candidates))
  }

  pub fn read<P: AsRef<Path>>(path: P) -> Result<Database> {
    let path = path.as_ref();
    debug!("reading database from {}", path.display());
    let text: String = fs::read_to_string(path)?;
    Self::parse(&text)
  }

  pub fn ranges(&self) -> &RangeCollection {
    &self.ranges
  }

  pub fn candidates(&self) -> &[i64] {
    &self.candidates
  }
}

impl FromStr for Database {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Database::parse(s)
  }
}

fn parse_range(line: usize, text: &str) -> Result<Interval> {
  match text.split_once('-') {
    Some((start, end)) => {
      let start: i64 = parse_number(line, text, start)?;
      let end: i64 = parse_number(line, text, end)?;
      Interval::new(start, end)
    }
    None => Ok(Interval::point(parse_number(line, text, text)?)),
  }
}

fn parse_id(line: usize, text: &str) -> Result<i64> {
  parse_number(line, text, text)
}

fn parse_number(line: usize, text: &str, part: &str) -> Result<i64> {
  part.trim().parse::<i64>().map_err(|err| {
    trace!("line {}: cannot parse {:?}: {}", line, part, err);
    Error::InvalidLine { line, text: text.to_string() }
  })
}

#[cfg(test)]
mod tests {
  use super::Database;
  use crate::error::Error;

  #[test]
  fn parses_both_sections() {
    let db: Database = "3-5\n10-14\n7\n\n1\n5\n\n8\n".parse().unwrap();
    let pairs: Vec<(i64, i64)> = db.ranges().iter().map(|&i| i.into()).collect();
    assert_eq!(pairs, vec![(3, 5), (10, 14), (7, 7)]);
    assert_eq!(db.candidates(), &[1, 5, 8]);
  }

  #[test]
  fn trims_lines() {
    let db = Database::parse("  1 - 5 \r\n   \n 6 \n").unwrap();
    let pairs: Vec<(i64, i64)> = db.ranges().iter().map(|&i| i.into()).collect();
    assert_eq!(pairs, vec![(1, 5)]);
    assert_eq!(db.candidates(), &[6]);
  }

  #[test]
  fn empty_sections() {
    let db = Database::parse("\n").unwrap();
    assert!(db.ranges().is_empty());
    assert!(db.candidates().is_empty());
  }

  #[test]
  fn missing_separator() {
    assert!(matches!(Database::parse("1-5\n6"), Err(Error::MissingSeparator)));
    assert!(matches!(Database::parse(""), Err(Error::MissingSeparator)));
  }

  #[test]
  fn inverted_range() {
    let result = Database::parse("1-5\n9-2\n\n3\n");
    assert!(matches!(result, Err(Error::InvertedInterval { start: 9, end: 2 })));
  }

  #[test]
  fn invalid_lines() {
    match Database::parse("1-5\nx-7\n\n3\n") {
      Err(Error::InvalidLine { line, text }) => {
        assert_eq!(line, 2);
        assert_eq!(text, "x-7");
      }
      other => panic!("unexpected result: {:?}", other),
    }
    assert!(matches!(Database::parse("1-2-3\n\n"), Err(Error::InvalidLine { line: 1, .. })));
    assert!(matches!(Database::parse("1-5\n\n3\nabc\n"), Err(Error::InvalidLine { line: 4, .. })));
  }

  #[test]
  fn missing_file() {
    let result = Database::read("does/not/exist.txt");
    assert!(matches!(result, Err(Error::Io(_))));
  }
}
