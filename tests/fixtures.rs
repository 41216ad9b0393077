use id_ranges::{analyze, merge, Database, Report};
use serde_json::{json, Value};
use std::convert::TryFrom;
use std::fs;
use std::path::Path;
use test_generator::test_resources;

#[test_resources("tests/fixtures/*/database.txt")]
fn fixture(resource: &str) {
  let path: &Path = Path::new(resource);
  let expected_path = path.with_file_name("expected.json");
  let expected_json = fs::read_to_string(&expected_path).unwrap();
  let expected: Value = serde_json::from_str(&expected_json).unwrap();

  let db: Database = Database::read(path).unwrap();
  let report: Report = analyze(&db);
  let merged = merge(db.ranges());
  assert_eq!(report.total_coverage, merged.total_coverage());

  let actual: Value = json!({
    "freshCount": report.fresh_count,
    "totalCoverage": u64::try_from(report.total_coverage).unwrap(),
    "merged": merged,
  });
  assert_eq!(actual, expected);
}
