use std::fmt;

use thiserror::Error;

use crate::math::curve::interpolationerror::InterpolationError;
use crate::timeseries::sampleserieserror::SampleSeriesError;

/// Domain edge on which two interpolants disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainEdge {
    Start,
    End
}

impl fmt::Display for DomainEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainEdge::Start => write!(f, "start"),
            DomainEdge::End => write!(f, "end")
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistanceError {
    #[error("the interpolations must have the same {edge} time, got {lhs} and {rhs}")]
    DomainMismatch {
        edge: DomainEdge,
        lhs: f64,
        rhs: f64
    },
    #[error("distance requires vectors of the same length, got {observed} and {simulated}")]
    LengthMismatch {
        observed: usize,
        simulated: usize
    },
    #[error("unknown distance kind '{0}'")]
    UnknownDistanceKind(String),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
    #[error(transparent)]
    Series(#[from] SampleSeriesError)
}
