//! Error types for the flat-row codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("nothing to export: the record set is empty")]
  EmptyExport,

  #[error("unrecognized condition value: {0:?}")]
  UnknownCondition(String),

  #[error("invalid number in column {column:?}: {value:?}")]
  InvalidNumber { column: &'static str, value: String },

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
