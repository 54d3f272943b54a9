//! Convert a parsed scene document into a [`Scene`].

use std::path::Path;
use std::time::Instant;

use whitted_math::Vec3;

use crate::camera::Camera;
use crate::error::{SceneError, SceneResult};
use crate::light::Light;
use crate::material::{Material, Phong};
use crate::obj::load_obj;
use crate::scene::Scene;
use crate::surface::{Mesh, Sphere, Surface};
use crate::texture::TextureCache;
use crate::xml::types::{CameraDoc, LightDoc, MaterialDoc, SceneDoc, SurfaceDoc};

/// Load a scene from an XML file.
///
/// Meshes and textures are resolved relative to the file's directory.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let start = Instant::now();

    let source = std::fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let scene = parse_scene(&source, base_dir)?;

    log::info!(
        "Loaded scene {} ({} lights, {} surfaces) in {:.2?}",
        path.display(),
        scene.lights.len(),
        scene.surfaces.len(),
        start.elapsed()
    );

    Ok(scene)
}

/// Parse a scene from XML text.
///
/// `base_dir` is used to resolve mesh and texture names.
pub fn parse_scene(source: &str, base_dir: &Path) -> SceneResult<Scene> {
    let doc: SceneDoc = serde_xml_rs::from_str(source)?;

    let camera = build_camera(&doc.camera)?;
    let mut scene = Scene::new(doc.output_file, doc.background_color.into(), camera);

    for light in doc.lights.items {
        scene.add_light(build_light(light));
    }

    let mut textures = TextureCache::with_base_dir(base_dir);
    for surface in doc.surfaces.items {
        scene.add_surface(build_surface(surface, base_dir, &mut textures)?);
    }

    if !textures.is_empty() {
        log::debug!("Scene uses {} textures", textures.len());
    }

    Ok(scene)
}

fn build_camera(doc: &CameraDoc) -> SceneResult<Camera> {
    let width = doc.resolution.horizontal;
    let height = doc.resolution.vertical;

    if width == 0 || height == 0 {
        return Err(SceneError::Invalid(format!(
            "camera resolution must be positive, got {}x{}",
            width, height
        )));
    }

    let position: Vec3 = doc.position.into();
    let look_at: Vec3 = doc.lookat.into();
    let up: Vec3 = doc.up.into();

    if (position - look_at).length_squared() == 0.0 {
        return Err(SceneError::Invalid("camera position equals lookat".to_string()));
    }
    if up.cross(position - look_at).length_squared() == 0.0 {
        return Err(SceneError::Invalid(
            "camera up vector is parallel to the viewing direction".to_string(),
        ));
    }

    Ok(Camera::new(
        position,
        look_at,
        up,
        doc.horizontal_fov.angle,
        width,
        height,
        doc.max_bounces.n,
    ))
}

fn build_light(doc: LightDoc) -> Light {
    match doc {
        LightDoc::AmbientLight(l) => Light::Ambient {
            color: l.color.into(),
        },
        LightDoc::PointLight(l) => Light::Point {
            color: l.color.into(),
            position: l.position.into(),
        },
        LightDoc::ParallelLight(l) => Light::Parallel {
            color: l.color.into(),
            direction: Vec3::from(l.direction).normalize_or_zero(),
        },
        LightDoc::SpotLight(l) => Light::Spot {
            color: l.color.into(),
            position: l.position.into(),
            direction: Vec3::from(l.direction).normalize_or_zero(),
            falloff_start: l.falloff.alpha1,
            falloff_end: l.falloff.alpha2,
        },
    }
}

fn build_surface(doc: SurfaceDoc, base_dir: &Path, textures: &mut TextureCache) -> SceneResult<Surface> {
    match doc {
        SurfaceDoc::Sphere(sphere) => {
            let material = build_material(
                sphere.material_solid,
                sphere.material_textured,
                "sphere",
                textures,
            )?;
            Ok(Sphere::new(sphere.position.into(), sphere.radius, material).into())
        }
        SurfaceDoc::Mesh(mesh) => {
            let material = build_material(
                mesh.material_solid,
                mesh.material_textured,
                &mesh.name,
                textures,
            )?;
            let triangles = load_obj(base_dir.join(&mesh.name))?;
            Ok(Mesh::new(mesh.name, triangles, material)?.into())
        }
    }
}

fn build_material(
    solid: Option<MaterialDoc>,
    textured: Option<MaterialDoc>,
    owner: &str,
    textures: &mut TextureCache,
) -> SceneResult<Material> {
    let (doc, is_textured) = match (solid, textured) {
        (Some(doc), None) => (doc, false),
        (None, Some(doc)) => (doc, true),
        (Some(_), Some(_)) => {
            return Err(SceneError::Invalid(format!(
                "{} has both a solid and a textured material",
                owner
            )))
        }
        (None, None) => return Err(SceneError::MissingMaterial(owner.to_string())),
    };

    let phong = Phong::new(doc.phong.ka, doc.phong.kd, doc.phong.ks, doc.phong.exponent);

    let material = if is_textured {
        let texture = match &doc.texture {
            Some(texture) => Some(textures.load(&texture.name)?),
            None => {
                log::warn!("Textured material on {} names no texture, it will render black", owner);
                None
            }
        };
        Material::textured(texture, phong)
    } else {
        let color = doc.color.map(Vec3::from).unwrap_or(Vec3::ZERO);
        Material::solid(color, phong)
    };

    Ok(material.with_optics(
        doc.reflectance.map_or(0.0, |r| r.r),
        doc.transmittance.map_or(0.0, |t| t.t),
        doc.refraction.map_or(1.0, |r| r.iof),
    ))
}
