//! Wavefront OBJ subset codec
//!
//! The decoder understands `v` (vertex position) and `f` (face) lines; every
//! other line, including comments and `o`/`s`/`vn` directives, is ignored.
//! Lines are classified by their first whitespace-separated token rather
//! than by pattern matching the whole line, so integer-valued coordinates
//! (`v 1 2 3`) are accepted. A face line with no indices is rejected as
//! unsupported.
//!
//! Known limitation: the decoder always produces a single mesh named
//! [`DEFAULT_MESH_NAME`]. `o` directives do not split the input into
//! separate meshes, so multi-object files collapse into one mesh.

use std::io::{BufRead, Write};

use crate::error::{MeshError, Result};
use crate::math::Vec3;
use crate::mesh::{Face, Mesh, Vertex, NO_SMOOTHING};
use crate::scene::Scene;

/// Name given to the single mesh produced by [`decode`]
pub const DEFAULT_MESH_NAME: &str = "ImportMesh";

/// Object name written by [`encode`] for a mesh with an empty name
const FALLBACK_OBJECT_NAME: &str = "Wavemesh";

/// Read a one-mesh [`Scene`] from a Wavefront OBJ stream
///
/// Single pass, line by line; only the current line is held in memory.
/// Malformed `v`/`f` lines fail the whole decode with
/// [`MeshError::UnsupportedFormat`]; out-of-range face indices fail with
/// [`MeshError::InvalidScene`]. There is no skip-and-continue recovery.
pub fn decode<R: BufRead>(reader: R) -> Result<Scene> {
    let mut mesh = Mesh::new(DEFAULT_MESH_NAME);

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let position = parse_vertex_line(tokens, number + 1)?;
                mesh.push_vertex(Vertex::new(position, Vec3::zeros()));
            }
            Some("f") => {
                let face = parse_face_line(tokens, number + 1)?;
                mesh.add_face(face);
            }
            // Comments, o/s/vn directives, blank lines
            _ => {}
        }
    }

    log::debug!(
        "decoded OBJ stream: {} vertices, {} faces",
        mesh.num_vertices(),
        mesh.num_faces()
    );

    let scene = Scene::from(vec![mesh]);
    if !scene.validate() {
        return Err(MeshError::InvalidScene(
            "decoded OBJ data references out-of-range vertex indices".to_string(),
        ));
    }

    Ok(scene)
}

fn parse_vertex_line<'a>(tokens: impl Iterator<Item = &'a str>, number: usize) -> Result<Vec3> {
    let mut fields = [0.0f64; 3];
    let mut count = 0;

    for token in tokens {
        if count == 3 {
            count += 1;
            break;
        }
        fields[count] = token.parse().map_err(|_| {
            MeshError::UnsupportedFormat(format!(
                "line {}: vertex coordinate '{}' is not a number",
                number, token
            ))
        })?;
        count += 1;
    }

    if count != 3 {
        return Err(MeshError::UnsupportedFormat(format!(
            "line {}: vertex line must have exactly 3 coordinates",
            number
        )));
    }

    Ok(Vec3::new(fields[0], fields[1], fields[2]))
}

fn parse_face_line<'a>(tokens: impl Iterator<Item = &'a str>, number: usize) -> Result<Face> {
    let mut indices = Vec::new();

    for token in tokens {
        let index: i64 = token.parse().map_err(|_| {
            MeshError::UnsupportedFormat(format!(
                "line {}: face index '{}' is not an integer",
                number, token
            ))
        })?;

        // OBJ vertex counting starts with 1
        if index < 1 {
            return Err(MeshError::InvalidScene(format!(
                "line {}: face index {} is out of range",
                number, index
            )));
        }

        indices.push((index - 1) as usize);
    }

    if indices.is_empty() {
        return Err(MeshError::UnsupportedFormat(format!(
            "line {}: face line has no indices",
            number
        )));
    }

    Ok(Face::new(indices))
}

/// Write a [`Scene`] to the stream in Wavefront OBJ format
///
/// Face indices are written 1-based with a running global vertex offset, as
/// OBJ indices are global across the file rather than per object. No
/// validation is performed; the scene is expected to be valid already.
pub fn encode<W: Write>(mut writer: W, scene: &Scene) -> Result<()> {
    writeln!(writer, "# Exported by wavemesh")?;
    writeln!(writer, "# Wavefront OBJ subset: vertex and face data only")?;

    let mut vertex_offset = 0;
    for mesh in &scene.meshes {
        if mesh.name.is_empty() {
            writeln!(writer, "o {}", FALLBACK_OBJECT_NAME)?;
        } else {
            writeln!(writer, "o {}", mesh.name)?;
        }

        for vertex in &mesh.vertices {
            writeln!(
                writer,
                "v {:.6} {:.6} {:.6}",
                vertex.position.x, vertex.position.y, vertex.position.z
            )?;
        }

        for face in &mesh.faces {
            if face.smoothing_group == NO_SMOOTHING {
                writeln!(writer, "s off")?;
            } else {
                writeln!(writer, "s {}", face.smoothing_group)?;
            }

            write!(writer, "f")?;
            for &index in &face.vertices {
                write!(writer, " {}", index + vertex_offset + 1)?;
            }
            writeln!(writer)?;
        }

        vertex_offset += mesh.num_vertices();
    }

    log::debug!(
        "encoded OBJ stream: {} meshes, {} vertices",
        scene.num_meshes(),
        vertex_offset
    );

    Ok(())
}
