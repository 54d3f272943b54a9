//! Ray-triangle intersection.
//!
//! Uses the Möller-Trumbore algorithm.

use whitted_core::Triangle;
use whitted_math::Ray;

use crate::intersection::{Intersection, TriangleHit};

/// Intersect a ray with a flat-shaded triangle.
///
/// `epsilon` is both the minimum hit distance and the determinant threshold
/// below which the ray counts as parallel to the triangle. On a hit the
/// texture coordinates are interpolated barycentrically; the normal is the
/// triangle's face normal.
pub fn intersect_triangle(triangle: &Triangle, ray: &Ray, epsilon: f32) -> TriangleHit {
    let ray = Ray::new(ray.origin(), ray.direction().normalize());
    let direction = ray.direction();
    let [a, b, c] = triangle.vertices;

    let edge1 = b - a;
    let edge2 = c - a;
    let pvec = direction.cross(edge2);
    let det = edge1.dot(pvec);

    if det.abs() < epsilon {
        return TriangleHit::miss();
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin() - a;

    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return TriangleHit::miss();
    }

    let qvec = tvec.cross(edge1);
    let v = direction.dot(qvec) * inv_det;
    if !(0.0..=1.0).contains(&v) || u + v > 1.0 {
        return TriangleHit::miss();
    }

    let t = edge2.dot(qvec) * inv_det;
    if t <= epsilon {
        return TriangleHit::miss();
    }

    let [ta, tb, tc] = triangle.tex_coords;
    let uv = ta * (1.0 - u - v) + tb * u + tc * v;

    TriangleHit {
        hit: Intersection {
            t,
            normal: triangle.normal,
            point: ray.at(t),
            color: Default::default(),
        },
        u: uv.x,
        v: uv.y,
    }
}
