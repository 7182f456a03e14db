//! Scene configuration
//!
//! Loaded from a JSON file next to the binary. A missing or malformed
//! file falls back to the built-in scene, which matches the original
//! five-cell grid with four sphere walls.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{CELL_SIZE, GRID_CELLS, RAY_SPEED};
use crate::sim::{BoundedVolume, SphereField};

/// Wall-lattice obstacle placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallLattice {
    /// X position of each sphere column
    pub x_columns: Vec<f64>,
    /// Y height of each wall
    pub y_planes: Vec<f64>,
    /// Inclusive z span of each column
    pub z_range: (f64, f64),
    /// Spacing between spheres along z
    pub z_step: f64,
    /// Radius shared by every sphere
    pub radius: f64,
}

impl Default for WallLattice {
    fn default() -> Self {
        Self {
            x_columns: vec![0.1, 0.2, 0.3, 0.4],
            y_planes: vec![-0.1, 0.0, 0.1, 0.2],
            z_range: (-0.4, 0.4),
            z_step: 0.05,
            radius: 0.02,
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Number of cells along each grid axis
    pub grid_cells: u32,
    /// Edge length of one grid cell
    pub cell_size: f64,
    /// Ray advancement per step
    pub speed: f64,
    /// RNG seed; None means draw one from the wall clock
    pub seed: Option<u64>,
    /// Obstacle placement
    pub obstacles: WallLattice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_cells: GRID_CELLS,
            cell_size: CELL_SIZE,
            speed: RAY_SPEED,
            seed: None,
            obstacles: WallLattice::default(),
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when the file is absent
    /// or malformed
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    /// Bounded volume implied by the grid dimensions
    pub fn volume(&self) -> BoundedVolume {
        BoundedVolume::from_grid(self.grid_cells, self.cell_size)
    }

    /// Sphere field implied by the obstacle placement
    pub fn sphere_field(&self) -> SphereField {
        let o = &self.obstacles;
        SphereField::wall_lattice(&o.x_columns, &o.y_planes, o.z_range, o.z_step, o.radius)
    }
}
