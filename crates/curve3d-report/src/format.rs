//! Number formatting matching the default C stream output (`%g`).

use std::fmt;

use curve3d_math::DVec3;

/// Significant digits printed for a real number.
const SIGNIFICANT_DIGITS: i32 = 6;

/// A real number displayed with six significant digits and no trailing zeros.
///
/// Values whose decimal exponent is below -4 or at least 6 switch to
/// scientific notation with a signed, two-digit exponent (`1.5e+06`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real(pub f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
        }
        if v == 0.0 {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }

        // Round to the target precision first; the exponent after rounding
        // decides between fixed and scientific notation.
        let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, v);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return f.write_str(&scientific);
        };
        let exponent: i32 = match exponent.parse() {
            Ok(e) => e,
            Err(_) => return f.write_str(&scientific),
        };

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
        } else {
            let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, v);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// A 3D vector displayed as `(x, y, z)` with [`Real`] components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triple(pub DVec3);

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", Real(self.0.x), Real(self.0.y), Real(self.0.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve3d_math::dvec3;

    fn g(v: f64) -> String {
        Real(v).to_string()
    }

    #[test]
    fn test_integers_drop_fraction() {
        assert_eq!(g(15.0), "15");
        assert_eq!(g(-2.0), "-2");
        assert_eq!(g(100000.0), "100000");
    }

    #[test]
    fn test_six_significant_digits() {
        assert_eq!(g(std::f64::consts::SQRT_2), "1.41421");
        assert_eq!(g(2.8284271247461903), "2.82843");
        assert_eq!(g(-2.1213203435596424), "-2.12132");
        assert_eq!(g(1.0 / std::f64::consts::TAU), "0.159155");
        assert_eq!(g(0.125), "0.125");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(g(9.9999996), "10");
        assert_eq!(g(999999.7), "1e+06");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(g(1234567.0), "1.23457e+06");
        assert_eq!(g(0.00001), "1e-05");
        assert_eq!(g(-0.000012345), "-1.2345e-05");
        assert_eq!(g(0.0001), "0.0001");
    }

    #[test]
    fn test_zero_and_non_finite() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
        assert_eq!(g(f64::NAN), "nan");
    }

    #[test]
    fn test_triple() {
        let t = Triple(dvec3(1.5, -0.25, 0.0));
        assert_eq!(t.to_string(), "(1.5, -0.25, 0)");
    }
}
