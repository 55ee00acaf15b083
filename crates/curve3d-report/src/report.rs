//! Report writers.
//!
//! Every writer takes any [`std::io::Write`] so the binary can target
//! standard output and tests can capture into a `Vec<u8>`.

use std::f64::consts::FRAC_PI_4;
use std::fmt;
use std::io::Write;

use curve3d_core::Result;
use curve3d_geometry::{AnyCurve, CircleSubset, Curve};
use tracing::info;

use crate::format::{Real, Triple};

/// Parameter at which the report evaluates every curve.
pub const REPORT_PARAMETER: f64 = FRAC_PI_4;

/// Write the full report: evaluations at `t = PI/4`, then the circle summary.
pub fn write_report<W: Write>(out: &mut W, curves: &[AnyCurve]) -> Result<()> {
    writeln!(out, "Coordinates and Derivatives at t=PI/4:")?;
    write_evaluations(out, curves, REPORT_PARAMETER)?;

    let subset = CircleSubset::from_curves(curves);
    info!(curves = curves.len(), circles = subset.len(), "aggregated circles");
    write_circle_summary(out, &subset)
}

/// Write one block per curve, in collection order.
pub fn write_evaluations<W: Write>(out: &mut W, curves: &[AnyCurve], t: f64) -> Result<()> {
    for curve in curves {
        writeln!(out, "Curve Type: {}", CurveLabel(curve))?;
        writeln!(out, "Point (x, y, z): {}", Triple(curve.evaluate(t)))?;
        writeln!(out, "Derivative (dx, dy, dz): {}", Triple(curve.derivative(t)))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write the sorted circles and the total of their radii.
pub fn write_circle_summary<W: Write>(out: &mut W, subset: &CircleSubset<'_>) -> Result<()> {
    writeln!(out, "Sorted Circles by Radius:")?;
    for circle in subset.circles() {
        writeln!(out, "Circle, Radius: {}", Real(circle.radius()))?;
    }
    writeln!(out, "Total Sum of Radii: {}", Real(subset.total_radius()))?;
    Ok(())
}

/// Variant name with its defining parameters.
struct CurveLabel<'a>(&'a AnyCurve);

impl fmt::Display for CurveLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            AnyCurve::Circle(c) => write!(f, "Circle, Radius: {}", Real(c.radius())),
            AnyCurve::Ellipse(e) => write!(f, "Ellipse, Major Radius: {}", Real(e.major_radius())),
            AnyCurve::Helix(h) => write!(
                f,
                "Helix, Radius: {}, Step: {}",
                Real(h.radius()),
                Real(h.step())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve3d_geometry::{Circle, Ellipse, Helix};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_curve_labels() {
        let circle: AnyCurve = Circle::new(2.0).unwrap().into();
        let ellipse: AnyCurve = Ellipse::new(4.0, 2.0).unwrap().into();
        let helix: AnyCurve = Helix::new(3.0, 1.5).unwrap().into();
        assert_eq!(CurveLabel(&circle).to_string(), "Circle, Radius: 2");
        assert_eq!(CurveLabel(&ellipse).to_string(), "Ellipse, Major Radius: 4");
        assert_eq!(CurveLabel(&helix).to_string(), "Helix, Radius: 3, Step: 1.5");
    }

    #[test]
    fn test_evaluation_block() {
        let curves: Vec<AnyCurve> = vec![Circle::new(2.0).unwrap().into()];
        let text = render(|out| write_evaluations(out, &curves, REPORT_PARAMETER));
        assert_eq!(
            text,
            "Curve Type: Circle, Radius: 2\n\
             Point (x, y, z): (1.41421, 1.41421, 0)\n\
             Derivative (dx, dy, dz): (-1.41421, 1.41421, 0)\n\n"
        );
    }

    #[test]
    fn test_empty_summary() {
        let curves: Vec<AnyCurve> = vec![Helix::new(1.0, 1.0).unwrap().into()];
        let subset = CircleSubset::from_curves(&curves);
        let text = render(|out| write_circle_summary(out, &subset));
        assert_eq!(text, "Sorted Circles by Radius:\nTotal Sum of Radii: 0\n");
    }
}
