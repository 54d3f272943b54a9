//! Geometric surfaces: spheres and triangle meshes.
//!
//! These are data only. Ray intersection is implemented in
//! `whitted_renderer`.

use std::sync::Arc;

use whitted_math::{Point3, Vec2, Vec3};

use crate::error::{SceneError, SceneResult};
use crate::material::Material;

/// A sphere with a material.
#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A flat-shaded triangle. Only ever stored inside a [`Mesh`].
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3; 3],

    /// Texture coordinates per vertex (zero when the mesh has none)
    pub tex_coords: [Vec2; 3],

    /// Unit face normal
    pub normal: Vec3,
}

impl Triangle {
    /// Create a triangle. `normal` is normalized here.
    pub fn new(vertices: [Point3; 3], tex_coords: [Vec2; 3], normal: Vec3) -> Self {
        Self {
            vertices,
            tex_coords,
            normal: normal.normalize_or_zero(),
        }
    }

    /// Create an untextured triangle with its geometric normal
    /// `normalize((b - a) × (c - a))`.
    pub fn from_vertices(a: Point3, b: Point3, c: Point3) -> Self {
        let normal = (b - a).cross(c - a);
        Self::new([a, b, c], [Vec2::ZERO; 3], normal)
    }
}

/// A named triangle mesh with one material. Never empty.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub name: String,
    pub triangles: Vec<Triangle>,
    pub material: Material,
}

impl Mesh {
    /// Create a mesh, rejecting an empty triangle list.
    pub fn new(name: impl Into<String>, triangles: Vec<Triangle>, material: Material) -> SceneResult<Self> {
        let name = name.into();
        if triangles.is_empty() {
            return Err(SceneError::EmptyMesh(name));
        }

        Ok(Self {
            name,
            triangles,
            material,
        })
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Always false for a constructed mesh.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// A renderable surface. The variant set is closed.
#[derive(Clone, Debug)]
pub enum Surface {
    Sphere(Sphere),

    /// Shared so scene snapshots don't copy triangle data.
    Mesh(Arc<Mesh>),
}

impl Surface {
    /// The surface's material.
    pub fn material(&self) -> &Material {
        match self {
            Surface::Sphere(sphere) => &sphere.material,
            Surface::Mesh(mesh) => &mesh.material,
        }
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl From<Mesh> for Surface {
    fn from(mesh: Mesh) -> Self {
        Surface::Mesh(Arc::new(mesh))
    }
}
