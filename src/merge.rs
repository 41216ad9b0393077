use crate::collection::RangeCollection;
use crate::interval::Interval;
use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::slice;
use std::str::FromStr;

/// When two sorted intervals are joined during a merge.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MergePolicy {
  /// Join intervals that overlap or touch: `(1, 5)` and `(6, 10)` become `(1, 10)`.
  Adjacent,
  /// Join intervals sharing at least one integer only.
  Overlapping,
}

impl MergePolicy {
  /// `next_start` must not be lower than the start of the current interval.
  fn joins(self, current_end: i64, next_start: i64) -> bool {
    match self {
      MergePolicy::Adjacent => next_start <= current_end.saturating_add(1),
      MergePolicy::Overlapping => next_start <= current_end,
    }
  }
}

impl Default for MergePolicy {
  fn default() -> Self {
    MergePolicy::Adjacent
  }
}

impl FromStr for MergePolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "adjacent" => Ok(MergePolicy::Adjacent),
      "overlapping" => Ok(MergePolicy::Overlapping),
      _ => Err(format!("unknown merge policy: {:?}", s)),
    }
  }
}

/// Sorted, pairwise disjoint intervals derived from a `RangeCollection`.
///
/// Consecutive intervals are separated by a gap of at least one integer
/// (or simply do not overlap with `MergePolicy::Overlapping`). Only built by
/// [`merge`] and [`merge_with`].
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct MergedRangeSet {
  intervals: Vec<Interval>,
  policy: MergePolicy,
}

impl MergedRangeSet {
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

  pub fn policy(&self) -> MergePolicy {
    self.policy
  }

  /// Count of distinct integers covered.
  pub fn total_coverage(&self) -> u128 {
    self.intervals.iter().map(Interval::len).sum()
  }

  /// Binary search over the disjoint intervals.
  pub fn contains(&self, value: i64) -> bool {
    self
      .intervals
      .binary_search_by(|interval| {
        if interval.end() < value {
          Ordering::Less
        } else if interval.start() > value {
          Ordering::Greater
        } else {
          Ordering::Equal
        }
      })
      .is_ok()
  }

  /// Copies the intervals into a plain collection.
  pub fn as_collection(&self) -> RangeCollection {
    RangeCollection::new(self.intervals.clone())
  }
}

impl Serialize for MergedRangeSet {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(&self.intervals)
  }
}

impl<'a> IntoIterator for &'a MergedRangeSet {
  type Item = &'a Interval;
  type IntoIter = slice::Iter<'a, Interval>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

pub fn merge(collection: &RangeCollection) -> MergedRangeSet {
  merge_with(collection, MergePolicy::default())
}

pub fn merge_with(collection: &RangeCollection, policy: MergePolicy) -> MergedRangeSet {
  let mut sorted: Vec<Interval> = collection.intervals().to_vec();
  sorted.sort_unstable();

  let mut intervals: Vec<Interval> = Vec::new();
  let mut sorted = sorted.into_iter();
  if let Some(mut current) = sorted.next() {
    for next in sorted {
      if policy.joins(current.end(), next.start()) {
        current.extend_to(next.end());
      } else {
        intervals.push(current);
        current = next;
      }
    }
    intervals.push(current);
  }

  debug!(
    "merged {} intervals into {} ({:?})",
    collection.len(),
    intervals.len(),
    policy
  );
  MergedRangeSet { intervals, policy }
}

/// Same as [`MergedRangeSet::total_coverage`].
pub fn total_coverage(merged: &MergedRangeSet) -> u128 {
  merged.total_coverage()
}
