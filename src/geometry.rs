//! Vertex data generation for the rendering front end
//!
//! Pure helpers that turn scene data into line/triangle vertex buffers.
//! The simulation never calls these; a renderer uploads the grid and
//! sphere output once at startup and the ray segment every frame.

use bytemuck::{Pod, Zeroable};
use glam::DVec3;

use crate::sim::Sphere;

/// Position-only 3D vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }

    fn from_dvec3(p: DVec3) -> Self {
        Self::new(p.x as f32, p.y as f32, p.z as f32)
    }
}

/// Line-list wireframe for the cubic grid
///
/// For each of the two z faces: lines along x at every y offset and
/// lines along y at every x offset, then front-to-back connectors at
/// every (x, y) lattice point. Every pair of vertices is one line.
pub fn grid_lines(cells: u32, cell_size: f64) -> Vec<Vertex> {
    let half = cells as f64 * cell_size / 2.0;
    let lattice = |i: u32| -half + i as f64 * cell_size;

    let face_lines = 4 * (cells as usize + 1) * 2;
    let connectors = (cells as usize + 1) * (cells as usize + 1) * 2;
    let mut vertices = Vec::with_capacity(face_lines + connectors);

    for &z in &[-half, half] {
        for i in 0..=cells {
            let offset = lattice(i);
            // Along x
            vertices.push(Vertex::from_dvec3(DVec3::new(-half, offset, z)));
            vertices.push(Vertex::from_dvec3(DVec3::new(half, offset, z)));
            // Along y
            vertices.push(Vertex::from_dvec3(DVec3::new(offset, -half, z)));
            vertices.push(Vertex::from_dvec3(DVec3::new(offset, half, z)));
        }
    }

    for i in 0..=cells {
        for j in 0..=cells {
            let (x, y) = (lattice(i), lattice(j));
            vertices.push(Vertex::from_dvec3(DVec3::new(x, y, -half)));
            vertices.push(Vertex::from_dvec3(DVec3::new(x, y, half)));
        }
    }

    vertices
}

/// Lat/long triangle mesh for one sphere
///
/// Returns `(rings + 1) * (segments + 1)` vertices (seam duplicated)
/// and a triangle index list, two triangles per quad.
pub fn sphere_mesh(sphere: &Sphere, rings: u32, segments: u32) -> (Vec<Vertex>, Vec<u32>) {
    use std::f64::consts::PI;

    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    for i in 0..=rings {
        let phi = PI * i as f64 / rings as f64;
        for j in 0..=segments {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            let offset = DVec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            vertices.push(Vertex::from_dvec3(sphere.center + sphere.radius * offset));
        }
    }

    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    for i in 0..rings {
        let row = i * (segments + 1);
        let next_row = (i + 1) * (segments + 1);
        for j in 0..segments {
            indices.push(row + j);
            indices.push(next_row + j);
            indices.push(row + j + 1);

            indices.push(row + j + 1);
            indices.push(next_row + j);
            indices.push(next_row + j + 1);
        }
    }

    (vertices, indices)
}

/// Two-point line segment from the origin to the ray tip
pub fn ray_segment(endpoint: DVec3) -> [Vertex; 2] {
    [Vertex::new(0.0, 0.0, 0.0), Vertex::from_dvec3(endpoint)]
}
