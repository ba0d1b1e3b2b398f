use crate::timeseries::sample::Sample;

/// The line `y = slope * x + intercept` carried by one interpolant segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    slope: f64,
    intercept: f64
}

impl LineSegment {
    pub fn new(slope: f64, intercept: f64) -> LineSegment {
        LineSegment { slope, intercept }
    }

    /// The line through both samples. Their times must differ.
    pub fn through(lhs: &Sample, rhs: &Sample) -> LineSegment {
        let slope = (rhs.value() - lhs.value()) / (rhs.time() - lhs.time());
        let intercept = lhs.value() - slope * lhs.time();
        LineSegment { slope, intercept }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn value(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Abscissa where both lines meet, `None` when the slopes are exactly
    /// equal (parallel or coincident lines).
    pub fn crossing(&self, other: &LineSegment) -> Option<f64> {
        if self.slope == other.slope {
            None
        } else {
            Some((other.intercept - self.intercept) / (self.slope - other.slope))
        }
    }
}
