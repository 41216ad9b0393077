use crate::error::Result;
use crate::interval::Interval;
use crate::merge::{merge, MergedRangeSet};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::iter::FromIterator;
use std::slice;

/// Raw intervals exactly as supplied: insertion order kept, overlaps and
/// duplicates allowed.
///
/// There are no mutating methods; build a new collection to change it.
#[derive(Eq, PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeCollection {
  intervals: Vec<Interval>,
}

impl RangeCollection {
  pub fn new(intervals: Vec<Interval>) -> RangeCollection {
    Self { intervals }
  }

  /// Builds a collection from `(start, end)` pairs, failing on the first
  /// inverted pair.
  pub fn from_pairs<I>(pairs: I) -> Result<RangeCollection>
  where
    I: IntoIterator<Item = (i64, i64)>,
  {
    let intervals: Result<Vec<Interval>> = pairs.into_iter().map(Interval::try_from).collect();
    Ok(Self::new(intervals?))
  }

  pub fn intervals(&self) -> &[Interval] {
    &self.intervals
  }

  pub fn len(&self) -> usize {
    self.intervals.len()
  }

  pub fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }

  pub fn iter(&self) -> slice::Iter<'_, Interval> {
    self.intervals.iter()
  }

  pub fn contains(&self, value: i64) -> bool {
    contains(self, value)
  }

  pub fn count_fresh(&self, candidates: &[i64]) -> usize {
    count_fresh(self, candidates)
  }

  pub fn merge(&self) -> MergedRangeSet {
    merge(self)
  }
}

impl FromIterator<Interval> for RangeCollection {
  fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

impl<'a> IntoIterator for &'a RangeCollection {
  type Item = &'a Interval;
  type IntoIter = slice::Iter<'a, Interval>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// Tests `value` against every raw interval.
pub fn contains(collection: &RangeCollection, value: i64) -> bool {
  collection.iter().any(|interval| interval.contains(value))
}

/// Number of candidates inside at least one interval. Duplicate candidates
/// count once each.
pub fn count_fresh(collection: &RangeCollection, candidates: &[i64]) -> usize {
  candidates.iter().filter(|&&candidate| contains(collection, candidate)).count()
}

/// Candidates inside at least one interval, in input order.
pub fn fresh_candidates(collection: &RangeCollection, candidates: &[i64]) -> Vec<i64> {
  candidates
    .iter()
    .copied()
    .filter(|&candidate| contains(collection, candidate))
    .collect()
}
