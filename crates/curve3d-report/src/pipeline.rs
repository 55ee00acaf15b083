//! Generate, report, and aggregate in one pass.

use std::io::Write;

use curve3d_core::{CurveError, Result};
use curve3d_geometry::{generate_curves, GeneratorConfig};
use rand::Rng;
use tracing::info;

use crate::report::write_report;

/// Generate curves from `config` and write the full report to `out`.
///
/// Every curve is validated before the first byte is written, so an
/// invalid parameter leaves `out` untouched.
pub fn run<R, W>(config: &GeneratorConfig, rng: &mut R, out: &mut W) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    let curves = generate_curves(config, rng)?;
    info!(count = curves.len(), "generated curves");

    write_report(out, &curves)?;
    out.flush()?;
    Ok(())
}

/// The single diagnostic line printed to standard error on failure.
pub fn diagnostic(err: &CurveError) -> String {
    format!("Error: {}", err)
}
