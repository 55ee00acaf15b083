//! Random generation of curve collections.

use std::ops::Range;
use std::time::{SystemTime, UNIX_EPOCH};

use curve3d_core::{CurveError, Result};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::{AnyCurve, Circle, CurveKind, Ellipse, Helix};

/// Parameters controlling [`generate_curves`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of curves to produce
    pub count: usize,
    /// Half-open range `[low, high)` for radii
    pub radius_range: (f64, f64),
    /// Half-open range `[low, high)` for helix steps
    pub step_range: (f64, f64),
    /// Ellipse minor radius as a fraction of the drawn radius
    pub minor_ratio: f64,
}

impl GeneratorConfig {
    pub const DEFAULT_COUNT: usize = 5;

    pub fn validate(&self) -> Result<()> {
        check_range("radius_range", self.radius_range)?;
        check_range("step_range", self.step_range)?;
        if !(self.minor_ratio.is_finite() && self.minor_ratio > 0.0) {
            return Err(CurveError::InvalidConfig(format!(
                "minor_ratio must be positive, got {}",
                self.minor_ratio
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            radius_range: (1.0, 11.0),
            step_range: (1.0, 6.0),
            minor_ratio: 0.5,
        }
    }
}

fn check_range(name: &str, (low, high): (f64, f64)) -> Result<()> {
    if low.is_finite() && high.is_finite() && low < high {
        Ok(())
    } else {
        Err(CurveError::InvalidConfig(format!(
            "{} must be a non-empty finite range, got [{}, {})",
            name, low, high
        )))
    }
}

fn to_range((low, high): (f64, f64)) -> Range<f64> {
    low..high
}

impl Distribution<CurveKind> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CurveKind {
        CurveKind::ALL[rng.gen_range(0..CurveKind::ALL.len())]
    }
}

/// Generate `config.count` random curves.
///
/// Per curve, a radius, a step and a variant are drawn in that order; the
/// step is drawn even when the variant does not use it, so a given seed
/// always consumes the same amount of randomness per curve.
pub fn generate_curves<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<AnyCurve>> {
    config.validate()?;

    let mut curves = Vec::with_capacity(config.count);
    for index in 0..config.count {
        let radius = rng.gen_range(to_range(config.radius_range));
        let step = rng.gen_range(to_range(config.step_range));
        let kind: CurveKind = rng.gen();

        let curve: AnyCurve = match kind {
            CurveKind::Circle => Circle::new(radius)?.into(),
            CurveKind::Ellipse => Ellipse::new(radius, radius * config.minor_ratio)?.into(),
            CurveKind::Helix => Helix::new(radius, step)?.into(),
        };
        debug!(index, %kind, radius, step, "generated curve");
        curves.push(curve);
    }
    Ok(curves)
}

/// Seed derived from the wall clock, for runs that should differ each time.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
