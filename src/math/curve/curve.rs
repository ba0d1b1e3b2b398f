use crate::math::curve::interpolationerror::InterpolationError;

/// A real function of time known on the closed domain `[min_x, max_x]`.
pub trait Curve {
    fn value(&self, x: f64) -> Result<f64, InterpolationError>;

    fn min_x(&self) -> f64;

    fn max_x(&self) -> f64;

    /// Trapezoid rule over `[lhs_x, rhs_x]`; exact when the curve is affine
    /// on that interval.
    fn trapezoid(&self, lhs_x: f64, rhs_x: f64) -> Result<f64, InterpolationError> {
        let width = (rhs_x - lhs_x).abs();
        Ok(0.5 * width * (self.value(lhs_x)? + self.value(rhs_x)?))
    }
}
