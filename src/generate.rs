//! Primitive shape generators
//!
//! Generators insert vertices through [`Mesh::add_vertex`], so corners shared
//! between primitives (e.g. adjacent cube faces) reuse existing vertex
//! indices instead of duplicating them.

use crate::math::Vec3;
use crate::mesh::{Face, Mesh, Vertex};

/// Coordinate axis selector for plane orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Corner order of a generated quad face
///
/// The winding determines which way the face normal points; cube assembly
/// mixes both so that all six faces point outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Corners emitted in order `[0, 1, 3, 2]`
    Forward,
    /// Corners emitted in order `[2, 3, 1, 0]`
    Reverse,
}

/// Add a square plane to the mesh
///
/// The plane has half-extent `size`, is centered at `offset` and lies
/// perpendicular to `axis`. The four corners are generated by iterating the
/// two in-plane coordinates over `{-size, +size}` (outer then inner), so the
/// corner order is deterministic, and a single quad face is appended with
/// the corner order selected by `winding`.
pub fn add_plane(mesh: &mut Mesh, offset: Vec3, size: f64, axis: Axis, winding: Winding) {
    let mut corners = [0usize; 4];
    let mut next = 0;

    for u in [-1.0, 1.0] {
        for w in [-1.0, 1.0] {
            let position = match axis {
                Axis::X => Vec3::new(0.0, size * u, size * w),
                Axis::Y => Vec3::new(size * u, 0.0, size * w),
                Axis::Z => Vec3::new(size * u, size * w, 0.0),
            } + offset;

            corners[next] = mesh.add_vertex(Vertex::new(position, Vec3::zeros()));
            next += 1;
        }
    }

    let order: [usize; 4] = match winding {
        Winding::Forward => [0, 1, 3, 2],
        Winding::Reverse => [2, 3, 1, 0],
    };

    mesh.add_face(Face::new(order.iter().map(|&k| corners[k]).collect()));
}

/// Add a cube to the mesh
///
/// The cube has half-extent `size` and is centered at `offset`. It is
/// composed of six planes, one per face, each offset by `size` along its
/// axis, with windings chosen so all face normals point outward. Shared
/// corners are deduplicated, so a cube on a fresh mesh contributes exactly
/// 8 vertices and 6 faces.
pub fn add_cube(mesh: &mut Mesh, offset: Vec3, size: f64) {
    add_plane(mesh, offset + Vec3::new(0.0, 0.0, size), size, Axis::Z, Winding::Reverse);
    add_plane(mesh, offset + Vec3::new(0.0, 0.0, -size), size, Axis::Z, Winding::Forward);
    add_plane(mesh, offset + Vec3::new(size, 0.0, 0.0), size, Axis::X, Winding::Reverse);
    add_plane(mesh, offset + Vec3::new(-size, 0.0, 0.0), size, Axis::X, Winding::Forward);
    add_plane(mesh, offset + Vec3::new(0.0, size, 0.0), size, Axis::Y, Winding::Forward);
    add_plane(mesh, offset + Vec3::new(0.0, -size, 0.0), size, Axis::Y, Winding::Reverse);
}
