//! curve3d geometry: parametric curves, random generation, and aggregation.

pub mod aggregate;
pub mod curve;
pub mod generate;

pub use aggregate::CircleSubset;
pub use curve::{AnyCurve, Circle, Curve, CurveKind, Ellipse, Helix};
pub use generate::{clock_seed, generate_curves, GeneratorConfig};
