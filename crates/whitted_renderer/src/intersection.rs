//! Intersection records.

use whitted_math::{Color, Point3, Vec3};

/// Result of a ray-surface intersection test.
///
/// `t <= 0` means no intersection. Tests always return a record, so a miss
/// is just a record with the sentinel distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Distance along the ray
    pub t: f32,
    /// Unit surface normal
    pub normal: Vec3,
    /// World-space hit point
    pub point: Point3,
    /// Surface color at the hit point
    pub color: Color,
}

impl Intersection {
    /// Distance stored in a miss.
    pub const MISS_T: f32 = -1.0;

    pub fn new(t: f32, normal: Vec3, point: Point3, color: Color) -> Self {
        Self {
            t,
            normal: normal.normalize_or_zero(),
            point,
            color,
        }
    }

    /// A record meaning "no intersection".
    pub fn miss() -> Self {
        Self {
            t: Self::MISS_T,
            normal: Vec3::ZERO,
            point: Vec3::ZERO,
            color: Color::ZERO,
        }
    }

    /// True when this record is a real hit.
    #[inline]
    pub fn has_hit(&self) -> bool {
        self.t > 0.0
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::miss()
    }
}

/// Triangle intersection with interpolated texture coordinates.
///
/// The color is left black; the owning mesh resolves it from `(u, v)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    pub hit: Intersection,
    pub u: f32,
    pub v: f32,
}

impl TriangleHit {
    pub fn miss() -> Self {
        Self {
            hit: Intersection::miss(),
            u: 0.0,
            v: 0.0,
        }
    }

    #[inline]
    pub fn has_hit(&self) -> bool {
        self.hit.has_hit()
    }
}
