use crate::distance::distanceerror::DistanceError;

// Distances between two value vectors compared index by index. Both vectors
// are assumed to be sampled at the same times.

fn check_lengths(observed: &[f64], simulated: &[f64]) -> Result<(), DistanceError> {
    if observed.len() != simulated.len() {
        return Err(DistanceError::LengthMismatch {
            observed: observed.len(),
            simulated: simulated.len()
        });
    }
    Ok(())
}

/// Σ (simulated_i - observed_i)²
pub fn l2(observed: &[f64], simulated: &[f64]) -> Result<f64, DistanceError> {
    check_lengths(observed, simulated)?;
    Ok(observed
        .iter()
        .zip(simulated)
        .map(|(obs, sim)| (sim - obs).powi(2))
        .sum())
}

/// Σ (simulated_i - observed_i)² / max(observed_i, 1)
pub fn normalized_l2(observed: &[f64], simulated: &[f64]) -> Result<f64, DistanceError> {
    check_lengths(observed, simulated)?;
    Ok(observed
        .iter()
        .zip(simulated)
        .map(|(obs, sim)| (sim - obs).powi(2) / obs.max(1.0))
        .sum())
}

/// Geometric mean of max((simulated_i - observed_i)² / z_i, 1 / z_i) with
/// z_i = max(observed_i, 1). Empty input gives the empty product, 1.
pub fn geometric(observed: &[f64], simulated: &[f64]) -> Result<f64, DistanceError> {
    check_lengths(observed, simulated)?;
    if observed.is_empty() {
        return Ok(1.0);
    }
    let product: f64 = observed
        .iter()
        .zip(simulated)
        .map(|(obs, sim)| {
            let z = obs.max(1.0);
            ((sim - obs).powi(2) / z).max(1.0 / z)
        })
        .product();
    Ok(product.powf(1.0 / observed.len() as f64))
}
