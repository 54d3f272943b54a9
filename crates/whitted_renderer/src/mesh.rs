//! Ray-mesh intersection by linear scan over triangles.

use whitted_core::Mesh;
use whitted_math::Ray;

use crate::hittable::Hittable;
use crate::intersection::{Intersection, TriangleHit};
use crate::triangle::intersect_triangle;

impl Hittable for Mesh {
    fn intersect(&self, ray: &Ray, epsilon: f32) -> Intersection {
        let mut closest: Option<TriangleHit> = None;

        for triangle in &self.triangles {
            let candidate = intersect_triangle(triangle, ray, epsilon);
            if !candidate.has_hit() {
                continue;
            }
            if closest.map_or(true, |best| candidate.hit.t < best.hit.t) {
                closest = Some(candidate);
            }
        }

        match closest {
            Some(TriangleHit { hit, u, v }) => Intersection {
                color: self.material.color_at(u, v),
                ..hit
            },
            None => Intersection::miss(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use whitted_core::{Material, Phong, Texture, Triangle};
    use whitted_math::{Color, Vec2, Vec3};

    fn quad_at(z: f32) -> Vec<Triangle> {
        vec![
            Triangle::from_vertices(
                Vec3::new(-1.0, -1.0, z),
                Vec3::new(1.0, -1.0, z),
                Vec3::new(1.0, 1.0, z),
            ),
            Triangle::from_vertices(
                Vec3::new(-1.0, -1.0, z),
                Vec3::new(1.0, 1.0, z),
                Vec3::new(-1.0, 1.0, z),
            ),
        ]
    }

    #[test]
    fn test_mesh_keeps_closest_triangle() {
        let mut triangles = quad_at(-2.0);
        triangles.extend(quad_at(1.0));
        let mesh = Mesh::new("layers", triangles, Material::default()).unwrap();

        let ray = Ray::new(Vec3::new(0.1, 0.2, 5.0), Vec3::NEG_Z);
        let hit = mesh.intersect(&ray, 0.01);

        assert!(hit.has_hit());
        assert!((hit.t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_mesh_miss() {
        let mesh = Mesh::new("quad", quad_at(0.0), Material::default()).unwrap();
        let ray = Ray::new(Vec3::new(5.0, 5.0, 5.0), Vec3::NEG_Z);

        let hit = mesh.intersect(&ray, 0.01);
        assert!(!hit.has_hit());
        assert_eq!(hit.t, Intersection::MISS_T);
    }

    #[test]
    fn test_mesh_resolves_texture_color() {
        let tex = Texture::new(2, 1, vec![Color::X, Color::Y], "<test>");
        let material = Material::textured(Some(Arc::new(tex)), Phong::default());

        let tri = Triangle::new(
            [Vec3::ZERO, Vec3::X, Vec3::Y],
            [Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.0)],
            Vec3::Z,
        );
        let mesh = Mesh::new("tex", vec![tri], material).unwrap();

        let ray = Ray::new(Vec3::new(0.2, 0.2, 1.0), Vec3::NEG_Z);
        let hit = mesh.intersect(&ray, 0.01);
        // u = 1 everywhere picks the right-hand texel
        assert_eq!(hit.color, Color::Y);
    }
}
