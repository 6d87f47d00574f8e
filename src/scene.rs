//! Scene container aggregating named meshes

use std::collections::HashSet;

use crate::mesh::Mesh;

/// Ordered collection of meshes forming one interchange unit
///
/// No two meshes in a scene may share the same non-empty name.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub meshes: Vec<Mesh>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self { meshes: Vec::new() }
    }

    /// Append a mesh, taking ownership
    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    /// Get number of meshes
    pub fn num_meshes(&self) -> usize {
        self.meshes.len()
    }

    /// Get total number of vertices across all meshes
    pub fn num_vertices(&self) -> usize {
        self.meshes.iter().map(Mesh::num_vertices).sum()
    }

    /// Check mesh-name uniqueness and per-mesh validity
    ///
    /// Non-empty names must be unique across the scene, and every contained
    /// mesh must itself validate. Returns false on the first violation.
    pub fn validate(&self) -> bool {
        let mut seen = HashSet::new();
        for mesh in &self.meshes {
            if !mesh.name.is_empty() && !seen.insert(mesh.name.as_str()) {
                return false;
            }
            if !mesh.validate() {
                return false;
            }
        }

        true
    }
}

impl From<Vec<Mesh>> for Scene {
    fn from(meshes: Vec<Mesh>) -> Self {
        Self { meshes }
    }
}
