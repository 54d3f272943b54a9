use crate::Vec3;

/// A half-line from `origin` along `direction`.
///
/// Rays carry no intersection state of their own: every intersection test
/// returns the hit distance in its result, so a ray can be shared freely
/// between concurrent traces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Direction as given; not necessarily unit length.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point at distance `t` along the ray, in units of `direction`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let ray = Ray::new(Vec3::new(-1.0, 4.0, 2.0), Vec3::NEG_Z);
        assert_eq!(ray.origin(), Vec3::new(-1.0, 4.0, 2.0));
        assert_eq!(ray.direction(), Vec3::NEG_Z);
    }

    #[test]
    fn test_point_along_ray() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, 0.0, 0.0));

        assert_eq!(ray.at(0.0), ray.origin());
        // Unnormalized direction scales the distance
        assert_eq!(ray.at(1.5), Vec3::new(3.0, 1.0, 0.0));
        assert_eq!(ray.at(-0.5), Vec3::new(-1.0, 1.0, 0.0));
    }
}
