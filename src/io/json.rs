//! Simple JSON scene format for testing and tooling (alternative to OBJ)

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, Result};
use crate::math::Vec3;
use crate::mesh::{Face, Mesh, Vertex};
use crate::scene::Scene;

#[derive(Debug, Serialize, Deserialize)]
struct JsonVertex {
    position: [f64; 3],
    #[serde(default)]
    normal: [f64; 3],
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonFace {
    vertices: Vec<usize>,
    #[serde(default)]
    smoothing_group: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonMesh {
    #[serde(default)]
    name: String,
    vertices: Vec<JsonVertex>,
    faces: Vec<JsonFace>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonScene {
    meshes: Vec<JsonMesh>,
}

/// Read a [`Scene`] from a JSON stream
///
/// The decoded scene is validated; structurally invalid data fails with
/// [`MeshError::InvalidScene`].
pub fn read_json_scene<R: Read>(reader: R) -> Result<Scene> {
    let json_scene: JsonScene = serde_json::from_reader(reader)
        .map_err(|e| MeshError::UnsupportedFormat(format!("failed to parse JSON scene: {}", e)))?;

    let mut scene = Scene::new();
    for json_mesh in json_scene.meshes {
        let mut mesh = Mesh::new(json_mesh.name);
        for v in json_mesh.vertices {
            mesh.push_vertex(Vertex::new(Vec3::from(v.position), Vec3::from(v.normal)));
        }
        for f in json_mesh.faces {
            mesh.add_face(Face::with_smoothing_group(f.vertices, f.smoothing_group));
        }
        scene.add_mesh(mesh);
    }

    if !scene.validate() {
        return Err(MeshError::InvalidScene(
            "decoded JSON scene violates mesh invariants".to_string(),
        ));
    }

    Ok(scene)
}

/// Write a [`Scene`] to a JSON stream
pub fn write_json_scene<W: Write>(writer: W, scene: &Scene) -> Result<()> {
    let json_scene = JsonScene {
        meshes: scene
            .meshes
            .iter()
            .map(|mesh| JsonMesh {
                name: mesh.name.clone(),
                vertices: mesh
                    .vertices
                    .iter()
                    .map(|v| JsonVertex {
                        position: v.position.into(),
                        normal: v.normal.into(),
                    })
                    .collect(),
                faces: mesh
                    .faces
                    .iter()
                    .map(|f| JsonFace {
                        vertices: f.vertices.clone(),
                        smoothing_group: f.smoothing_group,
                    })
                    .collect(),
            })
            .collect(),
    };

    serde_json::to_writer_pretty(writer, &json_scene)
        .map_err(|e| MeshError::UnsupportedFormat(format!("failed to write JSON scene: {}", e)))?;

    Ok(())
}
