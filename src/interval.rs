use crate::error::{Error, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

/// Closed integer interval `[start, end]`, with `start <= end`.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
  start: i64,
  end: i64,
}

impl Interval {
  pub fn new(start: i64, end: i64) -> Result<Interval> {
    if start > end {
      return Err(Error::InvertedInterval { start, end });
    }
    Ok(Self { start, end })
  }

  pub fn point(value: i64) -> Interval {
    Self { start: value, end: value }
  }

  pub fn start(&self) -> i64 {
    self.start
  }

  pub fn end(&self) -> i64 {
    self.end
  }

  pub fn contains(&self, value: i64) -> bool {
    self.start <= value && value <= self.end
  }

  /// Number of integers in the interval.
  ///
  /// Returned as `u128` since `[i64::MIN, i64::MAX]` holds `2^64` values.
  pub fn len(&self) -> u128 {
    u128::from(self.end.abs_diff(self.start)) + 1
  }

  /// Grows the interval to the right. Never shrinks it.
  pub(crate) fn extend_to(&mut self, end: i64) {
    if end > self.end {
      self.end = end;
    }
  }
}

impl Ord for Interval {
  fn cmp(&self, other: &Self) -> Ordering {
    Ord::cmp(&self.start, &other.start).then(Ord::cmp(&self.end, &other.end))
  }
}

impl PartialOrd for Interval {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl TryFrom<(i64, i64)> for Interval {
  type Error = Error;

  fn try_from((start, end): (i64, i64)) -> Result<Self> {
    Interval::new(start, end)
  }
}

impl<'de> Deserialize<'de> for Interval {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct RawInterval {
      start: i64,
      end: i64,
    }

    let raw: RawInterval = RawInterval::deserialize(deserializer)?;
    Interval::new(raw.start, raw.end).map_err(de::Error::custom)
  }
}

impl From<Interval> for (i64, i64) {
  fn from(interval: Interval) -> (i64, i64) {
    (interval.start, interval.end)
  }
}

impl fmt::Debug for Interval {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}..={}", self.start, self.end)
  }
}
