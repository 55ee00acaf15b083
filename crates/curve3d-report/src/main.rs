//! curve3d demo
//!
//! Generates five random curves, prints their points and derivatives at
//! `t = PI/4`, then the circles sorted by radius and the sum of their radii.
//!
//! Diagnostics go to standard error; set `RUST_LOG=debug` to see each
//! generated curve.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use curve3d_geometry::{clock_seed, GeneratorConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    init_tracing();

    let seed = clock_seed();
    info!(seed, "seeding random source");
    let mut rng = StdRng::seed_from_u64(seed);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match curve3d_report::run(&GeneratorConfig::default(), &mut rng, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", curve3d_report::diagnostic(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}
