//! Collision and boundary-exit predicates
//!
//! Point-vs-scene tests for the advancing ray tip. Sphere containment
//! compares squared distances, so there is no sqrt per sphere per step.

use glam::DVec3;

use super::field::{BoundedVolume, Sphere, SphereField};

/// True if `point` lies inside or on the surface of `sphere`
#[inline]
pub fn point_in_sphere(point: DVec3, sphere: &Sphere) -> bool {
    point.distance_squared(sphere.center) <= sphere.radius * sphere.radius
}

/// Index of the first sphere (in field order) containing `point`
///
/// Field order is the tie-break for simultaneous overlaps; reordering
/// the field changes which sphere gets reported.
pub fn first_hit(field: &SphereField, point: DVec3) -> Option<usize> {
    field
        .spheres()
        .iter()
        .position(|sphere| point_in_sphere(point, sphere))
}

/// True if `point` lies strictly outside the cubic volume
#[inline]
pub fn outside_volume(point: DVec3, volume: BoundedVolume) -> bool {
    point.x.abs() > volume.half_extent
        || point.y.abs() > volume.half_extent
        || point.z.abs() > volume.half_extent
}
