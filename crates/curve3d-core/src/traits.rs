use crate::error::{CurveError, Result};

/// Validate the construction parameters of a geometric entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Require a geometric parameter to be finite and strictly positive.
///
/// `NaN` and infinities are rejected along with zero and negative values.
pub fn ensure_positive(curve: &'static str, parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CurveError::InvalidParameter {
            curve,
            parameter,
            value,
        })
    }
}
