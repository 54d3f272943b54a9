//! Phong direct illumination, shadow rays, and reflection/refraction
//! directions.

use whitted_core::{Light, Surface};
use whitted_math::{Color, Ray, Vec3};

use crate::hittable::Hittable;
use crate::intersection::Intersection;

/// Minimum hit distance for all rays, guarding against self-intersection.
pub const EPSILON: f32 = 0.01;

/// Mirror `direction` about `normal`.
///
/// `direction` points toward the surface; the result points away from it
/// and is normalized.
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    (direction - normal * 2.0 * direction.dot(normal)).normalize()
}

/// Refract `incoming` (pointing toward the surface) through a boundary with
/// index of refraction `refraction_index` on the inside.
///
/// The side is decided by the sign of `normal · incoming`: a non-negative
/// value means the ray is leaving the material, so the normal is flipped and
/// the indices swap. Total internal reflection returns the mirror direction.
pub fn refract(incoming: Vec3, normal: Vec3, refraction_index: f32) -> Vec3 {
    let mut n_dot_i = normal.dot(incoming);
    let mut normal = normal;
    let (mut ior_before, mut ior_after) = (1.0, refraction_index);

    if n_dot_i < 0.0 {
        n_dot_i = -n_dot_i;
    } else {
        normal = -normal;
        std::mem::swap(&mut ior_before, &mut ior_after);
    }

    let eta = ior_before / ior_after;
    let k = 1.0 - eta * eta * (1.0 - n_dot_i * n_dot_i);

    if k < 0.0 {
        return reflect(incoming, normal);
    }

    (incoming * eta + normal * (eta * n_dot_i - k.sqrt())).normalize()
}

/// Direct contribution of one light at an intersection.
///
/// Ambient lights give `ka · light ⊙ surface`. Other lights add a Lambert
/// term and, when that is positive, a Phong highlight, scaled by the spot
/// falloff for spot lights.
pub fn illuminate(surface: &Surface, ray: &Ray, hit: &Intersection, light: &Light) -> Color {
    let phong = &surface.material().phong;
    let light_color = light.color();

    if let Light::Ambient { .. } = light {
        return light_color * hit.color * phong.ka;
    }

    let to_light = light.direction_from(hit.point);

    let intensity = light.spot_intensity(to_light);
    if intensity == 0.0 {
        return Color::ZERO;
    }

    let lambertian = to_light.dot(hit.normal).max(0.0);

    let specular = if lambertian > 0.0 {
        let reflected = reflect(-to_light, hit.normal);
        let view = -ray.direction().normalize();
        reflected.dot(view).max(0.0).powf(phong.exponent)
    } else {
        0.0
    };

    let diffuse = light_color * hit.color * (phong.kd * lambertian);
    let highlight = light_color * (phong.ks * specular);

    (diffuse + highlight) * intensity
}

/// Whether `light` is blocked at the intersection point.
///
/// Surfaces are scanned in order and the first one hit by the shadow ray
/// decides: any hit blocks a parallel light, while point and spot lights are
/// blocked only by a hit closer than the light itself. Later surfaces are
/// not consulted even if they are closer.
pub fn is_in_shadow(light: &Light, hit: &Intersection, surfaces: &[Surface]) -> bool {
    if let Light::Ambient { .. } = light {
        return false;
    }

    let shadow_ray = Ray::new(hit.point, light.direction_from(hit.point));
    let light_distance = light.position().map(|p| (p - hit.point).length());

    for surface in surfaces {
        let blocker = surface.intersect(&shadow_ray, EPSILON);
        if blocker.has_hit() {
            return match light_distance {
                Some(distance) => blocker.t < distance,
                None => true,
            };
        }
    }

    false
}
