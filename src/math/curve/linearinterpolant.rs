use crate::math::curve::curve::Curve;
use crate::math::curve::interpolationerror::InterpolationError;
use crate::math::curve::linesegment::LineSegment;
use crate::timeseries::sampleseries::SampleSeries;

// ─────────────────────────────────────────────
// LinearInterpolant
// ─────────────────────────────────────────────
//
// Rebuilds a signal by joining neighbouring samples:
//   segments[i] passes through (times[i], v[i]) and (times[i+1], v[i+1])
//   and is only valid on [times[i], times[i+1]].
//
// Breakpoint ownership:
//   an interior breakpoint times[j] belongs to segments[j-1], the segment
//   ending there (left-continuous); times[0] is the only exception and
//   belongs to segments[0]. Crossing detection in the area distance
//   depends on this rule.

#[derive(Debug, Clone)]
pub struct LinearInterpolant {
    times: Vec<f64>,
    segments: Vec<LineSegment>
}

impl LinearInterpolant {
    pub fn new(series: &SampleSeries) -> Result<LinearInterpolant, InterpolationError> {
        if series.len() < 2 {
            return Err(InterpolationError::InsufficientData(series.len()));
        }

        let segments = series
            .samples()
            .windows(2)
            .map(|pair| LineSegment::through(&pair[0], &pair[1]))
            .collect();

        Ok(LinearInterpolant {
            times: series.times(),
            segments
        })
    }

    /// Breakpoints, identical to the times of the source series.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Segment active at `t`, found by binary search over the breakpoints.
    pub fn segment_at(&self, t: f64) -> Result<&LineSegment, InterpolationError> {
        if t < 0.0 {
            return Err(InterpolationError::NegativeTime(t));
        }
        if t == self.times[0] {
            return Ok(&self.segments[0]);
        }

        // smallest j with times[j] >= t
        let upper = self.times.partition_point(|&x| x < t);
        if upper == 0 || upper >= self.times.len() {
            return Err(InterpolationError::OutsideDomain {
                time: t,
                min: self.min_x(),
                max: self.max_x()
            });
        }
        Ok(&self.segments[upper - 1])
    }

    pub fn value_at(&self, t: f64) -> Result<f64, InterpolationError> {
        Ok(self.segment_at(t)?.value(t))
    }
}

impl Curve for LinearInterpolant {
    fn value(&self, x: f64) -> Result<f64, InterpolationError> {
        self.value_at(x)
    }

    fn min_x(&self) -> f64 {
        self.times[0]
    }

    fn max_x(&self) -> f64 {
        self.times[self.times.len() - 1]
    }
}
