//! Gridray - a ray bouncing around a cubic grid of spherical obstacles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ray state, sphere field, collision)
//! - `geometry`: Vertex data generation for a rendering front end
//! - `settings`: Data-driven scene configuration

pub mod geometry;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::DVec3;

/// Scene configuration constants
pub mod consts {
    /// Number of cells along each grid axis
    pub const GRID_CELLS: u32 = 5;
    /// Edge length of one grid cell
    pub const CELL_SIZE: f64 = 0.2;
    /// Distance the ray advances per step
    pub const RAY_SPEED: f64 = 0.005;

    /// Default launch direction (degrees)
    pub const START_ZENITH_DEG: f64 = 45.0;
    pub const START_AZIMUTH_DEG: f64 = 45.0;

    /// Default sphere tessellation
    pub const SPHERE_RINGS: u32 = 16;
    pub const SPHERE_SEGMENTS: u32 = 16;
}

/// Reduce an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Convert spherical (r, zenith, azimuth) to cartesian (x, y, z)
///
/// Zenith is measured from the vertical +y axis (0 = straight up,
/// 180 = straight down), azimuth in the horizontal plane from +x
/// toward +z. Angles are in degrees and are range-reduced before
/// the radian conversion.
#[inline]
pub fn spherical_to_cartesian(r: f64, zenith_deg: f64, azimuth_deg: f64) -> DVec3 {
    let zen = wrap_degrees(zenith_deg).to_radians();
    let azi = wrap_degrees(azimuth_deg).to_radians();
    DVec3::new(
        r * zen.sin() * azi.cos(),
        r * zen.cos(),
        r * zen.sin() * azi.sin(),
    )
}
