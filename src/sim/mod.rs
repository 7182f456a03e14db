//! Deterministic ray-walk simulation
//!
//! All simulation logic lives here. This module must stay pure and
//! deterministic:
//! - One advance call per frame, fixed step length
//! - Seeded RNG only, injected by the caller
//! - Stable sphere iteration order (first hit by field order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod state;

pub use collision::{first_hit, outside_volume, point_in_sphere};
pub use field::{BoundedVolume, Sphere, SphereField};
pub use state::{RayState, RngState, StepOutcome};
