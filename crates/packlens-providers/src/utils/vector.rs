//! Vector math shared by index implementations
//!
//! Components are stored as `f32`; sums and ratios are taken in `f64`.

/// Compute the L2 norm of a vector
pub fn l2_norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|&x| f64::from(x) * f64::from(x))
        .sum::<f64>()
        .sqrt()
}

/// Cosine distance in `[0, 2]` with precomputed norms
///
/// A zero vector has no direction; its distance to anything is 1.
pub fn cosine_distance(a: &[f32], norm_a: f64, b: &[f32], norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum();
    (1.0 - dot / (norm_a * norm_b)).clamp(0.0, 2.0)
}
