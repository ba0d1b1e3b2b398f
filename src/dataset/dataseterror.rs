use std::num::ParseFloatError;

use thiserror::Error;

use crate::distance::distanceerror::DistanceError;
use crate::timeseries::sampleserieserror::SampleSeriesError;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error("header has no '{0}' column")]
    MissingTimeColumn(&'static str),
    #[error("column '{0}' given more than once")]
    DuplicateColumn(String),
    #[error("line {line}: expected {expected} values, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize
    },
    #[error("column '{name}' has {found} values for {expected} times")]
    ColumnLength {
        name: String,
        expected: usize,
        found: usize
    },
    #[error("line {line}: cannot parse '{token}' as a number")]
    ParseValue {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError
    },
    #[error("times do not match")]
    TimeMismatch,
    #[error("columns must be equal when calculating the distance, got {observed:?} and {simulated:?}")]
    ColumnMismatch {
        observed: Vec<String>,
        simulated: Vec<String>
    },
    #[error("column '{0}' not found")]
    ColumnNotFound(String),
    #[error(transparent)]
    Series(#[from] SampleSeriesError),
    #[error(transparent)]
    Distance(#[from] DistanceError)
}
