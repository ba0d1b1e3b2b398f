use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("cannot interpolate a series of {0} sample(s), at least 2 are required")]
    InsufficientData(usize),
    #[error("cannot interpolate at negative time {0}")]
    NegativeTime(f64),
    #[error("time {time} is outside of the interpolation domain [{min}, {max}]")]
    OutsideDomain {
        time: f64,
        min: f64,
        max: f64
    }
}
