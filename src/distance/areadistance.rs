use tracing::{
    debug,
    trace
};

use crate::distance::distanceerror::{
    DistanceError,
    DomainEdge
};
use crate::math::curve::curve::Curve;
use crate::math::curve::linearinterpolant::LinearInterpolant;
use crate::timeseries::sampleseries::SampleSeries;

// ─────────────────────────────────────────────
// Area distance
// ─────────────────────────────────────────────
//
// ∫ |f(t) - g(t)| dt over the shared domain of two piecewise-linear curves.
//
// Between two consecutive breakpoints of the union both curves are affine,
// so f - g changes sign at most once there. Each interval is split at the
// crossing of the segments resolved at its left end (segment_at, so an
// interior breakpoint yields the segment ending there), then every
// sub-interval contributes |trapezoid(f) - trapezoid(g)|.

/// Area enclosed between the graphs of `lhs` and `rhs`.
///
/// Both interpolants must start and end at exactly the same time.
pub fn area_distance(lhs: &LinearInterpolant, rhs: &LinearInterpolant) -> Result<f64, DistanceError> {
    check_same_domain(lhs, rhs)?;

    let mut breakpoints = merge_breakpoints(lhs.times(), rhs.times());
    let crossings = find_crossings(lhs, rhs, &breakpoints)?;
    debug!(
        breakpoints = breakpoints.len(),
        crossings = crossings.len(),
        "merged interpolant breakpoints"
    );
    if !crossings.is_empty() {
        breakpoints.extend(crossings);
        breakpoints.sort_by(f64::total_cmp);
        breakpoints.dedup();
    }

    let mut total = 0.0;
    for pair in breakpoints.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        if start == end {
            continue;
        }
        let lhs_area = lhs.trapezoid(start, end)?;
        let rhs_area = rhs.trapezoid(start, end)?;
        total += (lhs_area - rhs_area).abs();
    }

    debug!(distance = total, "computed area distance");
    Ok(total)
}

/// Area distance between two value columns sampled at the same `times`.
pub fn area_distance_between_columns(
    times: &[f64],
    observed: &[f64],
    simulated: &[f64],
) -> Result<f64, DistanceError> {
    let observed = LinearInterpolant::new(&SampleSeries::from_columns(times, observed)?)?;
    let simulated = LinearInterpolant::new(&SampleSeries::from_columns(times, simulated)?)?;
    area_distance(&observed, &simulated)
}

fn check_same_domain(lhs: &LinearInterpolant, rhs: &LinearInterpolant) -> Result<(), DistanceError> {
    if lhs.min_x() != rhs.min_x() {
        return Err(DistanceError::DomainMismatch {
            edge: DomainEdge::Start,
            lhs: lhs.min_x(),
            rhs: rhs.min_x()
        });
    }
    if lhs.max_x() != rhs.max_x() {
        return Err(DistanceError::DomainMismatch {
            edge: DomainEdge::End,
            lhs: lhs.max_x(),
            rhs: rhs.max_x()
        });
    }
    Ok(())
}

/// Sorted union of both breakpoint lists, equal times kept once.
fn merge_breakpoints(lhs: &[f64], rhs: &[f64]) -> Vec<f64> {
    let mut merged = Vec::with_capacity(lhs.len() + rhs.len());
    merged.extend_from_slice(lhs);
    merged.extend_from_slice(rhs);
    merged.sort_by(f64::total_cmp);
    merged.dedup();
    merged
}

/// Times strictly inside an interval of `breakpoints` where the two
/// interpolants cross.
fn find_crossings(
    lhs: &LinearInterpolant,
    rhs: &LinearInterpolant,
    breakpoints: &[f64],
) -> Result<Vec<f64>, DistanceError> {
    let mut crossings = Vec::new();
    for pair in breakpoints.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let lhs_segment = lhs.segment_at(start)?;
        let rhs_segment = rhs.segment_at(start)?;
        if let Some(x) = lhs_segment.crossing(rhs_segment) {
            if start < x && x < end {
                trace!(start, end, crossing = x, "interpolants cross");
                crossings.push(x);
            }
        }
    }
    Ok(crossings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeseries::sample::Sample;

    fn interpolant(data: &[(f64, f64)]) -> LinearInterpolant {
        let samples: Vec<Sample> = data.iter().map(|&pair| Sample::from(pair)).collect();
        LinearInterpolant::new(&SampleSeries::new(&samples).unwrap()).unwrap()
    }

    #[test]
    fn test_merge_breakpoints() {
        assert_eq!(
            merge_breakpoints(&[0.0, 1.0, 3.0], &[0.0, 2.0, 3.0]),
            vec![0.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_find_crossings_is_strictly_interior() {
        // the lines meet at t = 1, which is a shared breakpoint
        let lhs = interpolant(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let rhs = interpolant(&[(0.0, 2.0), (1.0, 1.0), (2.0, 0.0)]);
        let breakpoints = merge_breakpoints(lhs.times(), rhs.times());
        assert!(find_crossings(&lhs, &rhs, &breakpoints).unwrap().is_empty());
        assert_eq!(area_distance(&lhs, &rhs), Ok(2.0));
    }

    #[test]
    fn test_constant_series() {
        let lhs = interpolant(&[(0.0, 1.0), (2.0, 1.0)]);
        let rhs = interpolant(&[(0.0, 4.0), (1.0, 4.0), (2.0, 4.0)]);
        assert_eq!(area_distance(&lhs, &rhs), Ok(6.0));
    }

    #[test]
    fn test_crossing_series() {
        let lhs = interpolant(&[(0.0, 1.0), (1.0, 5.0)]);
        let rhs = interpolant(&[(0.0, 5.0), (1.0, 1.0)]);
        let breakpoints = merge_breakpoints(lhs.times(), rhs.times());
        assert_eq!(find_crossings(&lhs, &rhs, &breakpoints), Ok(vec![0.5]));
        assert_eq!(area_distance(&lhs, &rhs), Ok(2.0));
    }

    #[test]
    fn test_identical_series() {
        let lhs = interpolant(&[(0.0, 1.0), (1.0, 3.0), (4.0, -2.0)]);
        let rhs = interpolant(&[(0.0, 1.0), (1.0, 3.0), (4.0, -2.0)]);
        assert_eq!(area_distance(&lhs, &rhs), Ok(0.0));
    }

    #[test]
    fn test_nonequal_starting_times() {
        let lhs = interpolant(&[(0.0, 1.0), (2.0, 1.0)]);
        let rhs = interpolant(&[(1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(
            area_distance(&lhs, &rhs),
            Err(DistanceError::DomainMismatch { edge: DomainEdge::Start, lhs: 0.0, rhs: 1.0 })
        );
    }

    #[test]
    fn test_nonequal_ending_times() {
        let lhs = interpolant(&[(0.0, 1.0), (1.0, 1.0)]);
        let rhs = interpolant(&[(0.0, 1.0), (2.0, 2.0)]);
        let error = area_distance(&lhs, &rhs).unwrap_err();
        assert_eq!(
            error,
            DistanceError::DomainMismatch { edge: DomainEdge::End, lhs: 1.0, rhs: 2.0 }
        );
        assert!(error.to_string().contains("same end time"));
    }

    #[test]
    fn test_between_columns() {
        let times = [0.0, 1.0];
        assert_eq!(area_distance_between_columns(&times, &[1.0, 5.0], &[5.0, 1.0]), Ok(2.0));
        assert!(matches!(
            area_distance_between_columns(&times, &[1.0], &[5.0, 1.0]),
            Err(DistanceError::Series(_))
        ));
        assert!(matches!(
            area_distance_between_columns(&[0.0], &[1.0], &[5.0]),
            Err(DistanceError::Interpolation(_))
        ));
    }
}
