use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  /// An interval was supplied with `start > end`.
  #[error("inverted interval: start {start} is greater than end {end}")]
  InvertedInterval { start: i64, end: i64 },
  /// The database has no blank line between the range and candidate sections.
  #[error("missing blank line between ranges and candidates")]
  MissingSeparator,
  /// `line` is 1-based.
  #[error("invalid line {line}: {text:?}")]
  InvalidLine { line: usize, text: String },
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
