//! Membership and coverage queries over closed integer ranges.
//!
//! A [`RangeCollection`] keeps ranges as supplied and answers per-candidate
//! membership. [`merge`] derives a [`MergedRangeSet`], the only type exposing
//! [`MergedRangeSet::total_coverage`].

pub use collection::*;
pub use database::*;
pub use error::*;
pub use interval::*;
pub use merge::*;
pub use report::*;

mod collection;
mod database;
mod error;
mod interval;
mod merge;
mod report;
