//! Circle curve.

use curve3d_core::{ensure_positive, Result, Validate};
use curve3d_math::{dvec3, Point3, Vector3};
use serde::Serialize;

use super::Curve;

/// A circle of the given radius centered at the origin in the XY plane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        let circle = Self { radius };
        circle.validate()?;
        Ok(circle)
    }
}

impl Validate for Circle {
    fn validate(&self) -> Result<()> {
        ensure_positive("Circle", "radius", self.radius)
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Point3 {
        dvec3(self.radius * t.cos(), self.radius * t.sin(), 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        dvec3(-self.radius * t.sin(), self.radius * t.cos(), 0.0)
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn is_closed(&self) -> bool {
        true
    }
}
