//! Wavemesh Library
//!
//! Minimal in-memory 3D mesh representation with primitive-shape generators
//! and a Wavefront OBJ subset reader/writer.

pub mod error;
pub mod generate;
pub mod io;
pub mod math;
pub mod mesh;
pub mod scene;

pub use error::{MeshError, Result};
pub use mesh::{Face, Mesh, Vertex, NO_SMOOTHING};
pub use scene::Scene;
