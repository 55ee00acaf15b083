/// Tolerance for comparing floating-point results of curve computations.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance, used near zero
    pub absolute: f64,
    /// Relative tolerance, scaled by the larger magnitude
    pub relative: f64,
}

impl Tolerance {
    pub const DEFAULT_ABSOLUTE: f64 = 1e-10;
    pub const DEFAULT_RELATIVE: f64 = 1e-9;

    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    pub fn default_precision() -> Self {
        Self {
            absolute: Self::DEFAULT_ABSOLUTE,
            relative: Self::DEFAULT_RELATIVE,
        }
    }

    /// Tolerance suited to finite-difference estimates.
    pub fn loose() -> Self {
        Self {
            absolute: 1e-6,
            relative: 1e-6,
        }
    }

    /// Check if two values are equal within tolerance
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        let diff = (a - b).abs();
        diff <= self.absolute || diff <= self.relative * a.abs().max(b.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
