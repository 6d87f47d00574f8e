//! Core mesh data structures

use crate::math::{vector_almost_equal, Vec3};

/// Smoothing group value meaning "no smoothing" (`s off` in OBJ terms)
pub const NO_SMOOTHING: u32 = 0;

/// Mesh vertex with a position and an optional normal
///
/// A vertex with no meaningful normal carries the zero vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }

    /// Create a vertex at the given position with a zero normal
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            normal: Vec3::zeros(),
        }
    }

    /// Check whether both position and normal are within the given tolerance
    pub fn almost_equal(&self, other: &Vertex, tolerance: f64) -> bool {
        vector_almost_equal(&self.position, &other.position, tolerance)
            && vector_almost_equal(&self.normal, &other.normal, tolerance)
    }
}

/// Polygonal face referencing vertices of the owning mesh by index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// Vertex indices in winding order
    pub vertices: Vec<usize>,
    /// Smoothing group tag, [`NO_SMOOTHING`] when unset
    pub smoothing_group: u32,
}

impl Face {
    /// Create a face with no smoothing group
    pub fn new(vertices: Vec<usize>) -> Self {
        Self {
            vertices,
            smoothing_group: NO_SMOOTHING,
        }
    }

    /// Create a face belonging to the given smoothing group
    pub fn with_smoothing_group(vertices: Vec<usize>, smoothing_group: u32) -> Self {
        Self {
            vertices,
            smoothing_group,
        }
    }
}

/// Named collection of vertices and faces
///
/// Vertex order is insertion order and is meaningful: face indices point
/// into it. Vertices are only ever appended, never updated or removed.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Create a new empty mesh with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Get total number of vertices
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get total number of faces
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Find the first vertex matching `target` within the given tolerance
    ///
    /// Linear scan in insertion order comparing position and normal; the
    /// first match wins.
    pub fn find_vertex(&self, target: &Vertex, tolerance: f64) -> Option<usize> {
        self.vertices
            .iter()
            .position(|v| v.almost_equal(target, tolerance))
    }

    /// Append a vertex unconditionally and return its index
    ///
    /// No deduplication is performed; this is the decoder path, where the
    /// input stream dictates the exact vertex list.
    pub fn push_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Insert a vertex with exact-match deduplication and return its index
    ///
    /// If an identical vertex (position and normal, tolerance 0) already
    /// exists, its index is returned instead of appending a duplicate. This
    /// is the generator path.
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        match self.find_vertex(&vertex, 0.0) {
            Some(index) => index,
            None => self.push_vertex(vertex),
        }
    }

    /// Append a face
    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Check that every face index is within `[0, vertices.len())`
    ///
    /// Returns false on the first violation found.
    pub fn validate(&self) -> bool {
        self.faces
            .iter()
            .all(|face| face.vertices.iter().all(|&index| index < self.vertices.len()))
    }
}
