use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleSeriesError {
    #[error("samples contain duplicate time {0}")]
    DuplicateTime(f64),
    #[error("{times} times given for {values} values")]
    LengthMismatch {
        times: usize,
        values: usize
    }
}
