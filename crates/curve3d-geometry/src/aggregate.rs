//! Circle selection, ordering, and radius reduction.

use rayon::prelude::*;

use crate::curve::{AnyCurve, Circle, Curve};

/// Circles borrowed from a curve collection, sorted ascending by radius.
#[derive(Debug, Clone)]
pub struct CircleSubset<'a> {
    circles: Vec<&'a Circle>,
}

impl<'a> CircleSubset<'a> {
    /// Select the circles of `curves` and sort them by radius.
    ///
    /// The sort is stable, so circles with equal radii keep their
    /// generation order.
    pub fn from_curves(curves: &'a [AnyCurve]) -> Self {
        let mut circles: Vec<&'a Circle> = curves.iter().filter_map(AnyCurve::as_circle).collect();
        sort_by_radius(&mut circles);
        Self { circles }
    }

    pub fn circles(&self) -> &[&'a Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Sum of radii, reduced in parallel.
    ///
    /// Partial sums may combine in any order, so the result can differ from
    /// a sequential sum in the last bits. An empty subset sums to `+0.0`.
    pub fn total_radius(&self) -> f64 {
        self.circles
            .par_iter()
            .map(|c| c.radius())
            .reduce(|| 0.0, |a, b| a + b)
    }
}

/// Stable ascending sort of circles by radius.
pub fn sort_by_radius(circles: &mut [&Circle]) {
    circles.sort_by(|a, b| a.radius().total_cmp(&b.radius()));
}
