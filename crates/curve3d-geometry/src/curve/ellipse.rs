//! Ellipse curve.

use curve3d_core::{ensure_positive, Result, Validate};
use curve3d_math::{dvec3, Point3, Vector3};
use serde::Serialize;

use super::Curve;

/// An axis-aligned ellipse centered at the origin in the XY plane.
///
/// The major radius lies along X and the minor radius along Y. Nothing
/// forces `major_radius >= minor_radius`; the names follow construction order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ellipse {
    major_radius: f64,
    minor_radius: f64,
}

impl Ellipse {
    pub fn new(major_radius: f64, minor_radius: f64) -> Result<Self> {
        let ellipse = Self {
            major_radius,
            minor_radius,
        };
        ellipse.validate()?;
        Ok(ellipse)
    }

    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }
}

impl Validate for Ellipse {
    fn validate(&self) -> Result<()> {
        ensure_positive("Ellipse", "major radius", self.major_radius)?;
        ensure_positive("Ellipse", "minor radius", self.minor_radius)
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Point3 {
        dvec3(self.major_radius * t.cos(), self.minor_radius * t.sin(), 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        dvec3(-self.major_radius * t.sin(), self.minor_radius * t.cos(), 0.0)
    }

    /// Returns the major radius.
    fn radius(&self) -> f64 {
        self.major_radius
    }

    fn is_closed(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_ellipse_endpoints() {
        let ellipse = Ellipse::new(2.0, 1.0).unwrap();

        // t=0: at major axis end
        let p0 = ellipse.evaluate(0.0);
        assert!((p0.x - 2.0).abs() < 1e-10);
        assert!(p0.y.abs() < 1e-10);

        // t=PI/2: at minor axis end
        let p1 = ellipse.evaluate(PI / 2.0);
        assert!(p1.x.abs() < 1e-10);
        assert!((p1.y - 1.0).abs() < 1e-10);

        // t=PI: at negative major axis
        let p2 = ellipse.evaluate(PI);
        assert!((p2.x + 2.0).abs() < 1e-10);
        assert!(p2.y.abs() < 1e-10);
    }

    #[test]
    fn test_ellipse_satisfies_implicit_equation() {
        let (a, b) = (4.0, 2.0);
        let ellipse = Ellipse::new(a, b).unwrap();
        for i in 0..16 {
            let t = i as f64 * PI / 8.0;
            let p = ellipse.evaluate(t);
            let lhs = (p.x / a).powi(2) + (p.y / b).powi(2);
            assert!((lhs - 1.0).abs() < 1e-10, "Off ellipse at t={}: {}", t, lhs);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_ellipse_radius_is_major() {
        let ellipse = Ellipse::new(4.0, 2.0).unwrap();
        assert_eq!(ellipse.radius(), 4.0);
        assert_eq!(ellipse.minor_radius(), 2.0);
    }

    #[test]
    fn test_ellipse_rejects_either_radius() {
        assert!(Ellipse::new(0.0, 1.0).is_err());
        assert!(Ellipse::new(1.0, -1.0).is_err());
        assert!(Ellipse::new(-1.0, -1.0).is_err());
    }

    #[test]
    fn test_ellipse_is_closed() {
        assert!(Ellipse::new(3.0, 1.0).unwrap().is_closed());
    }
}
