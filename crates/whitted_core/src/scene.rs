//! Scene container and animation snapshots.
//!
//! A `Scene` is read-only while it is being rendered. Animation effects
//! derive a fresh snapshot per frame instead of editing geometry in place.

use whitted_math::{Color, Vec3};

use crate::camera::Camera;
use crate::light::Light;
use crate::surface::{Sphere, Surface};

/// Everything needed to render one frame.
#[derive(Clone, Debug)]
pub struct Scene {
    /// File name the rendered image is written to
    pub output_file: String,

    /// Color of rays that hit nothing
    pub background: Color,

    pub camera: Camera,

    /// Lights in document order
    pub lights: Vec<Light>,

    /// Surfaces in document order
    pub surfaces: Vec<Surface>,
}

impl Scene {
    pub fn new(output_file: impl Into<String>, background: Color, camera: Camera) -> Self {
        Self {
            output_file: output_file.into(),
            background,
            camera,
            lights: Vec::new(),
            surfaces: Vec::new(),
        }
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add a surface.
    pub fn add_surface(&mut self, surface: impl Into<Surface>) {
        self.surfaces.push(surface.into());
    }

    /// Snapshot with every sphere moved by `offset`. Meshes are untouched.
    pub fn with_spheres_translated(&self, offset: Vec3) -> Scene {
        self.map_spheres(|sphere| sphere.center += offset)
    }

    /// Snapshot with `delta` added to every sphere radius.
    pub fn with_sphere_radii_offset(&self, delta: f32) -> Scene {
        self.map_spheres(|sphere| sphere.radius += delta)
    }

    fn map_spheres(&self, f: impl Fn(&mut Sphere)) -> Scene {
        let mut scene = self.clone();
        for surface in &mut scene.surfaces {
            if let Surface::Sphere(sphere) = surface {
                f(sphere);
            }
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::material::Material;
    use crate::surface::{Mesh, Triangle};

    fn test_scene() -> Scene {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y, 45.0, 4, 4, 2);
        let mut scene = Scene::new("out.png", Color::ZERO, camera);
        scene.add_light(Light::Ambient { color: Color::ONE });
        scene.add_surface(Sphere::new(Vec3::ZERO, 1.0, Material::default()));
        scene.add_surface(
            Mesh::new(
                "tri",
                vec![Triangle::from_vertices(Vec3::ZERO, Vec3::X, Vec3::Y)],
                Material::default(),
            )
            .unwrap(),
        );
        scene
    }

    #[test]
    fn test_scene_counts() {
        let scene = test_scene();
        assert_eq!(scene.lights.len(), 1);
        assert_eq!(scene.surfaces.len(), 2);
    }

    #[test]
    fn test_translated_snapshot_leaves_original() {
        let scene = test_scene();
        let moved = scene.with_spheres_translated(Vec3::new(0.0, -0.5, 0.0));

        let Surface::Sphere(original) = &scene.surfaces[0] else {
            panic!("expected sphere");
        };
        let Surface::Sphere(shifted) = &moved.surfaces[0] else {
            panic!("expected sphere");
        };

        assert_eq!(original.center, Vec3::ZERO);
        assert_eq!(shifted.center, Vec3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn test_radius_snapshot_shares_meshes() {
        let scene = test_scene();
        let grown = scene.with_sphere_radii_offset(0.25);

        let Surface::Sphere(sphere) = &grown.surfaces[0] else {
            panic!("expected sphere");
        };
        assert!((sphere.radius - 1.25).abs() < 1e-6);

        match (&scene.surfaces[1], &grown.surfaces[1]) {
            (Surface::Mesh(a), Surface::Mesh(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("expected meshes"),
        }
    }
}
