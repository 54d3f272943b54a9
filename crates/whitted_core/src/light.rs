//! Light sources.

use whitted_math::{Color, Point3, Vec3};

/// A light in the scene.
///
/// The variant set is closed; shading and the shadow test match on it
/// exhaustively.
#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    /// Uniform light with no position, never shadowed.
    Ambient { color: Color },

    /// Omnidirectional light at a position.
    Point { color: Color, position: Point3 },

    /// Infinitely distant light shining along `direction`.
    Parallel { color: Color, direction: Vec3 },

    /// Point light restricted to a cone around `direction`.
    ///
    /// Full intensity below `falloff_start` degrees, zero above
    /// `falloff_end`, linear in between.
    Spot {
        color: Color,
        position: Point3,
        direction: Vec3,
        falloff_start: f32,
        falloff_end: f32,
    },
}

impl Light {
    /// Light color.
    pub fn color(&self) -> Color {
        match self {
            Light::Ambient { color }
            | Light::Point { color, .. }
            | Light::Parallel { color, .. }
            | Light::Spot { color, .. } => *color,
        }
    }

    /// Position for lights that have one.
    pub fn position(&self) -> Option<Point3> {
        match self {
            Light::Point { position, .. } | Light::Spot { position, .. } => Some(*position),
            Light::Ambient { .. } | Light::Parallel { .. } => None,
        }
    }

    /// Direction for lights that have one.
    pub fn direction(&self) -> Option<Vec3> {
        match self {
            Light::Parallel { direction, .. } | Light::Spot { direction, .. } => Some(*direction),
            Light::Ambient { .. } | Light::Point { .. } => None,
        }
    }

    /// Unit vector from `point` toward the light.
    ///
    /// Parallel lights give their inverted direction. Ambient lights have no
    /// direction and give zero.
    pub fn direction_from(&self, point: Point3) -> Vec3 {
        match self {
            Light::Point { position, .. } | Light::Spot { position, .. } => {
                (*position - point).normalize_or_zero()
            }
            Light::Parallel { direction, .. } => (-*direction).normalize_or_zero(),
            Light::Ambient { .. } => Vec3::ZERO,
        }
    }

    /// Intensity in [0, 1] for light arriving along `to_light`.
    ///
    /// Only spot lights attenuate. The angle is measured in degrees between
    /// the light's aim direction and `to_light`, both normalized.
    pub fn spot_intensity(&self, to_light: Vec3) -> f32 {
        let Light::Spot {
            direction,
            falloff_start,
            falloff_end,
            ..
        } = self
        else {
            return 1.0;
        };

        let cos = direction
            .normalize_or_zero()
            .dot(to_light.normalize_or_zero())
            .clamp(-1.0, 1.0);
        let angle = cos.acos().to_degrees();

        if angle < *falloff_start {
            1.0
        } else if angle > *falloff_end || falloff_end <= falloff_start {
            0.0
        } else {
            (falloff_end - angle) / (falloff_end - falloff_start)
        }
    }
}
