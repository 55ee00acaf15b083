//! Helix curve.

use std::f64::consts::TAU;

use curve3d_core::{ensure_positive, Result, Validate};
use curve3d_math::{dvec3, Point3, Vector3};
use serde::Serialize;

use super::Curve;

/// A circular helix around the Z axis.
///
/// `step` is the axial distance covered by one full turn, so the curve
/// rises by `step / 2π` per unit of `t`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Helix {
    radius: f64,
    step: f64,
}

impl Helix {
    pub fn new(radius: f64, step: f64) -> Result<Self> {
        let helix = Self { radius, step };
        helix.validate()?;
        Ok(helix)
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    fn rise_per_radian(&self) -> f64 {
        self.step / TAU
    }
}

impl Validate for Helix {
    fn validate(&self) -> Result<()> {
        ensure_positive("Helix", "radius", self.radius)?;
        ensure_positive("Helix", "step", self.step)
    }
}

impl Curve for Helix {
    fn evaluate(&self, t: f64) -> Point3 {
        dvec3(
            self.radius * t.cos(),
            self.radius * t.sin(),
            self.rise_per_radian() * t,
        )
    }

    fn derivative(&self, t: f64) -> Vector3 {
        dvec3(
            -self.radius * t.sin(),
            self.radius * t.cos(),
            self.rise_per_radian(),
        )
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}
