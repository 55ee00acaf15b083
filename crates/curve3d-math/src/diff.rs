//! Numeric differentiation of vector-valued functions of one parameter.

use crate::Vector3;

/// Default step for [`central_difference`].
pub const DEFAULT_STEP: f64 = 1e-5;

/// Estimate `f'(t)` with the central difference `(f(t + h) - f(t - h)) / 2h`.
///
/// The truncation error is `O(h^2)`, so for smooth curves with `h` around
/// `1e-5` the estimate agrees with the analytic derivative to roughly
/// `1e-9` relative.
pub fn central_difference<F>(f: F, t: f64, h: f64) -> Vector3
where
    F: Fn(f64) -> Vector3,
{
    debug_assert!(h > 0.0, "Step must be positive, got {}", h);
    (f(t + h) - f(t - h)) / (2.0 * h)
}
