use crate::collection::count_fresh;
use crate::database::Database;
use crate::merge::{merge_with, MergePolicy};
use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
  /// Candidates inside at least one raw range.
  pub fresh_count: usize,
  /// Distinct ids covered by the union of all ranges.
  pub total_coverage: u128,
}

pub fn analyze(database: &Database) -> Report {
  analyze_with(database, MergePolicy::default())
}

pub fn analyze_with(database: &Database, policy: MergePolicy) -> Report {
  let fresh_count: usize = count_fresh(database.ranges(), database.candidates());
  let total_coverage: u128 = merge_with(database.ranges(), policy).total_coverage();
  Report { fresh_count, total_coverage }
}

#[cfg(test)]
mod tests {
  use super::{analyze, analyze_with, Report};
  use crate::database::Database;
  use crate::merge::MergePolicy;

  #[test]
  fn example() {
    let db = Database::parse("3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n").unwrap();
    assert_eq!(analyze(&db), Report { fresh_count: 3, total_coverage: 14 });
  }

  #[test]
  fn policy_keeps_coverage_of_touching_ranges() {
    let db = Database::parse("1-5\n6-10\n\n6\n").unwrap();
    let adjacent = analyze(&db);
    let overlapping = analyze_with(&db, MergePolicy::Overlapping);
    assert_eq!(adjacent, overlapping);
    assert_eq!(adjacent, Report { fresh_count: 1, total_coverage: 10 });
  }

  #[test]
  fn empty() {
    let db = Database::parse("\n1\n2\n3\n").unwrap();
    assert_eq!(analyze(&db), Report { fresh_count: 0, total_coverage: 0 });
  }
}
