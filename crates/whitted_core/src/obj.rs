//! Wavefront OBJ loading into flat-shaded triangles.

use std::path::Path;

use whitted_math::{Vec2, Vec3};

use crate::error::{SceneError, SceneResult};
use crate::surface::Triangle;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

/// Load an OBJ file into triangles.
///
/// Every model in the file contributes its faces. Material libraries are
/// ignored; the scene file assigns the material.
pub fn load_obj<P: AsRef<Path>>(path: P) -> SceneResult<Vec<Triangle>> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(path, &load_options())?;

    let triangles = triangles_from_models(&models);
    if triangles.is_empty() {
        return Err(SceneError::EmptyMesh(path.display().to_string()));
    }

    log::debug!(
        "Loaded mesh {} ({} models, {} triangles)",
        path.display(),
        models.len(),
        triangles.len()
    );

    Ok(triangles)
}

/// Parse OBJ source text into triangles.
pub fn parse_obj(source: &str) -> SceneResult<Vec<Triangle>> {
    let (models, _materials) = tobj::load_obj_buf(&mut source.as_bytes(), &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })?;

    let triangles = triangles_from_models(&models);
    if triangles.is_empty() {
        return Err(SceneError::EmptyMesh("<inline>".to_string()));
    }

    Ok(triangles)
}

fn triangles_from_models(models: &[tobj::Model]) -> Vec<Triangle> {
    let mut triangles = Vec::new();

    for model in models {
        let mesh = &model.mesh;
        let has_normals = !mesh.normals.is_empty();
        let has_tex_coords = !mesh.texcoords.is_empty();

        for face in mesh.indices.chunks_exact(3) {
            let [i0, i1, i2] = [face[0] as usize, face[1] as usize, face[2] as usize];

            let (Some(a), Some(b), Some(c)) = (
                vec3_at(&mesh.positions, i0),
                vec3_at(&mesh.positions, i1),
                vec3_at(&mesh.positions, i2),
            ) else {
                log::warn!("Skipping face with out-of-range index in {}", model.name);
                continue;
            };

            // Flat shading: the face takes the normal of its first vertex
            let file_normal = if has_normals {
                vec3_at(&mesh.normals, i0).filter(|n| n.length_squared() > 0.0)
            } else {
                None
            };
            let normal = file_normal.unwrap_or_else(|| (b - a).cross(c - a));

            if normal.length_squared() == 0.0 {
                log::warn!("Skipping degenerate face in {}", model.name);
                continue;
            }

            let tex_coords = if has_tex_coords {
                [
                    vec2_at(&mesh.texcoords, i0),
                    vec2_at(&mesh.texcoords, i1),
                    vec2_at(&mesh.texcoords, i2),
                ]
            } else {
                [Vec2::ZERO; 3]
            };

            triangles.push(Triangle::new([a, b, c], tex_coords, normal));
        }
    }

    triangles
}

fn vec3_at(data: &[f32], index: usize) -> Option<Vec3> {
    data.get(index * 3..index * 3 + 3).map(Vec3::from_slice)
}

fn vec2_at(data: &[f32], index: usize) -> Vec2 {
    data.get(index * 2..index * 2 + 2)
        .map(Vec2::from_slice)
        .unwrap_or(Vec2::ZERO)
}
