//! Ray-sphere intersection.

use std::f32::consts::PI;

use whitted_core::Sphere;
use whitted_math::{Ray, Vec3};

use crate::hittable::Hittable;
use crate::intersection::Intersection;

/// Solve `a t² + b t + c = 0`.
///
/// Returns both roots in ascending order, or `None` when the discriminant is
/// negative. A zero discriminant yields the double root twice. The roots are
/// computed through `q = -½(b ± √disc)` to avoid cancellation.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let (x0, x1) = if discriminant == 0.0 {
        let x = -0.5 * b / a;
        (x, x)
    } else {
        let sqrtd = discriminant.sqrt();
        let q = if b > 0.0 {
            -0.5 * (b + sqrtd)
        } else {
            -0.5 * (b - sqrtd)
        };
        (q / a, c / q)
    };

    Some(if x0 > x1 { (x1, x0) } else { (x0, x1) })
}

/// Spherical texture coordinates for a unit direction from the centre.
///
/// u = 0.5 + atan2(x, z) / 2π, v = 0.5 − asin(y) / π
pub fn sphere_uv(d: Vec3) -> (f32, f32) {
    let u = 0.5 + d.x.atan2(d.z) / (2.0 * PI);
    let v = 0.5 - d.y.clamp(-1.0, 1.0).asin() / PI;
    (u, v)
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray, epsilon: f32) -> Intersection {
        let ray = Ray::new(ray.origin(), ray.direction().normalize());
        let direction = ray.direction();
        let oc = ray.origin() - self.center;

        let a = direction.dot(direction);
        let b = 2.0 * direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let Some((t0, t1)) = solve_quadratic(a, b, c) else {
            return Intersection::miss();
        };

        // Nearest root past epsilon
        let t = if t0 >= epsilon {
            t0
        } else if t1 >= epsilon {
            t1
        } else {
            return Intersection::miss();
        };

        let point = ray.at(t);
        let outward = (point - self.center).normalize_or_zero();
        let (u, v) = sphere_uv(outward);

        Intersection::new(t, outward, point, self.material.color_at(u, v))
    }
}
