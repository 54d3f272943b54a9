//! Recursive Whitted ray tracer.

use whitted_core::{Light, Scene, Surface};
use whitted_math::{Color, Ray};

use crate::hittable::Hittable;
use crate::intersection::Intersection;
use crate::shading::{illuminate, is_in_shadow, reflect, refract, EPSILON};

/// Traces rays against a borrowed scene.
///
/// Holds no mutable state; one tracer can be shared by every render thread.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    surfaces: &'a [Surface],
    lights: &'a [Light],
    background: Color,
    max_bounces: u32,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            surfaces: &scene.surfaces,
            lights: &scene.lights,
            background: scene.background,
            max_bounces: scene.camera.max_bounces,
        }
    }

    /// Color seen along `ray`. Primary rays start at depth 0.
    ///
    /// Reflection and refraction recurse until `depth` reaches the camera's
    /// bounce limit, so a limit of 0 gives direct lighting only. The result
    /// is not clamped.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let Some((surface, hit)) = self.closest_hit(ray) else {
            return self.background;
        };

        let direct = self.direct_light(surface, ray, &hit);

        if depth >= self.max_bounces {
            return direct;
        }

        let material = surface.material();
        let direction = ray.direction().normalize();

        let reflected = if material.reflectance > 0.0 {
            let bounce = Ray::new(hit.point, reflect(direction, hit.normal));
            self.trace(&bounce, depth + 1) * material.reflectance
        } else {
            Color::ZERO
        };

        let refracted = if material.transmittance > 0.0 {
            let bounce = Ray::new(
                hit.point,
                refract(direction, hit.normal, material.refraction_index),
            );
            self.trace(&bounce, depth + 1) * material.transmittance
        } else {
            Color::ZERO
        };

        direct * (1.0 - material.reflectance - material.transmittance) + reflected + refracted
    }

    /// Nearest surface hit along `ray`, scanning every surface.
    pub fn closest_hit(&self, ray: &Ray) -> Option<(&'a Surface, Intersection)> {
        let mut closest: Option<(&'a Surface, Intersection)> = None;

        for surface in self.surfaces {
            let hit = surface.intersect(ray, EPSILON);
            if !hit.has_hit() {
                continue;
            }
            if closest.map_or(true, |(_, best)| hit.t < best.t) {
                closest = Some((surface, hit));
            }
        }

        closest
    }

    /// Sum of unshadowed light contributions.
    fn direct_light(&self, surface: &Surface, ray: &Ray, hit: &Intersection) -> Color {
        self.lights
            .iter()
            .filter(|light| !is_in_shadow(light, hit, self.surfaces))
            .map(|light| illuminate(surface, ray, hit, light))
            .sum()
    }
}
