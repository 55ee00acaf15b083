//! Curve traits and implementations.

mod circle;
mod ellipse;
mod helix;

use std::f64::consts::TAU;
use std::fmt;

use curve3d_math::{Point3, Vector3};
use serde::Serialize;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve position at parameter `t`.
    fn evaluate(&self, t: f64) -> Point3;

    /// Evaluate the first derivative with respect to `t`.
    fn derivative(&self, t: f64) -> Vector3;

    /// The defining radius of the curve.
    ///
    /// For an [`Ellipse`] this is the major radius; an ellipse has no single
    /// radius, but sorting and aggregation key on this value.
    fn radius(&self) -> f64;

    /// Return the parameter range of one turn `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    /// Whether the curve returns to its start point after one turn.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Tag identifying a curve variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Circle,
    Ellipse,
    Helix,
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Circle, CurveKind::Ellipse, CurveKind::Helix];

    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Circle => "Circle",
            CurveKind::Ellipse => "Ellipse",
            CurveKind::Helix => "Helix",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An owned curve of any supported variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AnyCurve {
    Circle(Circle),
    Ellipse(Ellipse),
    Helix(Helix),
}

impl AnyCurve {
    pub fn kind(&self) -> CurveKind {
        match self {
            AnyCurve::Circle(_) => CurveKind::Circle,
            AnyCurve::Ellipse(_) => CurveKind::Ellipse,
            AnyCurve::Helix(_) => CurveKind::Helix,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            AnyCurve::Circle(c) => Some(c),
            _ => None,
        }
    }

    fn as_dyn(&self) -> &dyn Curve {
        match self {
            AnyCurve::Circle(c) => c,
            AnyCurve::Ellipse(e) => e,
            AnyCurve::Helix(h) => h,
        }
    }
}

impl Curve for AnyCurve {
    fn evaluate(&self, t: f64) -> Point3 {
        self.as_dyn().evaluate(t)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        self.as_dyn().derivative(t)
    }

    fn radius(&self) -> f64 {
        self.as_dyn().radius()
    }

    fn domain(&self) -> (f64, f64) {
        self.as_dyn().domain()
    }

    fn is_closed(&self) -> bool {
        self.as_dyn().is_closed()
    }
}

impl From<Circle> for AnyCurve {
    fn from(c: Circle) -> Self {
        AnyCurve::Circle(c)
    }
}

impl From<Ellipse> for AnyCurve {
    fn from(e: Ellipse) -> Self {
        AnyCurve::Ellipse(e)
    }
}

impl From<Helix> for AnyCurve {
    fn from(h: Helix) -> Self {
        AnyCurve::Helix(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let curves: Vec<AnyCurve> = vec![
            Circle::new(1.0).unwrap().into(),
            Ellipse::new(2.0, 1.0).unwrap().into(),
            Helix::new(1.0, 3.0).unwrap().into(),
        ];
        let kinds: Vec<_> = curves.iter().map(AnyCurve::kind).collect();
        assert_eq!(kinds, CurveKind::ALL);
    }

    #[test]
    fn test_delegation_matches_concrete() {
        let helix = Helix::new(2.5, 4.0).unwrap();
        let any = AnyCurve::from(helix.clone());
        let t = 1.3;
        assert_eq!(any.evaluate(t), helix.evaluate(t));
        assert_eq!(any.derivative(t), helix.derivative(t));
        assert_eq!(any.radius(), 2.5);
        assert!(!any.is_closed());
    }

    #[test]
    fn test_as_circle_filters() {
        let circle: AnyCurve = Circle::new(3.0).unwrap().into();
        let ellipse: AnyCurve = Ellipse::new(3.0, 1.5).unwrap().into();
        assert_eq!(circle.as_circle().map(Circle::radius), Some(3.0));
        assert!(ellipse.as_circle().is_none());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CurveKind::Helix.to_string(), "Helix");
    }
}
