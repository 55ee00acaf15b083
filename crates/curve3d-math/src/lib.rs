pub mod diff;

pub use glam::{dvec3, DVec3};
pub use diff::central_difference;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
