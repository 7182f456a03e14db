//! Static scene data: sphere obstacles and the bounding cube
//!
//! Everything here is built once at startup and read-only afterwards.
//! The simulation borrows the field per step and never mutates it.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A spherical obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
}

impl Sphere {
    /// Radius must be positive; violating that is a programmer error.
    pub fn new(center: DVec3, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self { center, radius }
    }
}

/// Immutable, ordered collection of spherical obstacles
///
/// The sequence order is fixed at construction and acts as the
/// tie-break when a point lies inside more than one sphere: the
/// lowest index wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereField {
    spheres: Vec<Sphere>,
}

impl SphereField {
    /// Build a field from an explicit placement list
    pub fn new(spheres: Vec<Sphere>) -> Self {
        debug_assert!(spheres.iter().all(|s| s.radius > 0.0));
        Self { spheres }
    }

    /// Field with no obstacles (the ray only ever exits the volume)
    pub fn empty() -> Self {
        Self {
            spheres: Vec::new(),
        }
    }

    /// Lattice of small spheres forming parallel walls
    ///
    /// One wall per entry in `y_planes`; within a wall, a column of
    /// spheres at each x in `x_columns`, running along z from
    /// `z_range.0` to `z_range.1` inclusive with spacing `z_step`.
    /// Index order is y plane, then x column, then ascending z.
    pub fn wall_lattice(
        x_columns: &[f64],
        y_planes: &[f64],
        z_range: (f64, f64),
        z_step: f64,
        radius: f64,
    ) -> Self {
        let rows = ((z_range.1 - z_range.0) / z_step).round() as i64;
        let mut spheres =
            Vec::with_capacity(x_columns.len() * y_planes.len() * (rows.max(0) as usize + 1));

        for &y in y_planes {
            for &x in x_columns {
                for k in 0..=rows.max(0) {
                    let z = z_range.0 + k as f64 * z_step;
                    spheres.push(Sphere::new(DVec3::new(x, y, z), radius));
                }
            }
        }

        Self { spheres }
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Spheres in field (tie-break) order
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }
}

/// Axial half-extent of the cubic volume centered on the origin
///
/// Used purely as an exit test: a point is outside once any coordinate
/// magnitude exceeds `half_extent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedVolume {
    pub half_extent: f64,
}

impl BoundedVolume {
    pub fn new(half_extent: f64) -> Self {
        Self { half_extent }
    }

    /// Half size of a grid of `cells` cells with edge `cell_size`
    pub fn from_grid(cells: u32, cell_size: f64) -> Self {
        Self::new(cells as f64 * cell_size / 2.0)
    }
}
