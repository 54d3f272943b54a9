//! Hittable trait for ray-surface intersection.

use whitted_core::Surface;
use whitted_math::Ray;

use crate::intersection::Intersection;

/// Trait for surfaces that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Intersect `ray` with this surface.
    ///
    /// Hits closer than `epsilon` are ignored so that rays leaving a surface
    /// don't immediately hit it again. Returns [`Intersection::miss`] when
    /// nothing is hit.
    fn intersect(&self, ray: &Ray, epsilon: f32) -> Intersection;
}

impl Hittable for Surface {
    fn intersect(&self, ray: &Ray, epsilon: f32) -> Intersection {
        match self {
            Surface::Sphere(sphere) => sphere.intersect(ray, epsilon),
            Surface::Mesh(mesh) => mesh.intersect(ray, epsilon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::{Material, Mesh, Sphere, Triangle};
    use whitted_math::Vec3;

    #[test]
    fn test_surface_dispatch() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);

        let sphere = Surface::from(Sphere::new(Vec3::ZERO, 1.0, Material::default()));
        assert!((sphere.intersect(&ray, 0.01).t - 4.0).abs() < 1e-5);

        let tri = Triangle::from_vertices(
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        let mesh = Surface::from(Mesh::new("tri", vec![tri], Material::default()).unwrap());
        assert!((mesh.intersect(&ray, 0.01).t - 5.0).abs() < 1e-5);
    }
}
