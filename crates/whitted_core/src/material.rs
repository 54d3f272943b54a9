//! Surface materials.

use std::sync::Arc;

use whitted_math::Color;

use crate::texture::Texture;

/// Phong reflection coefficients.
///
/// The coefficients are not required to sum to one; energy conservation is
/// left to the scene author.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phong {
    /// Ambient coefficient
    pub ka: f32,
    /// Diffuse coefficient
    pub kd: f32,
    /// Specular coefficient
    pub ks: f32,
    /// Specular exponent
    pub exponent: f32,
}

impl Phong {
    pub fn new(ka: f32, kd: f32, ks: f32, exponent: f32) -> Self {
        Self { ka, kd, ks, exponent }
    }
}

impl Default for Phong {
    fn default() -> Self {
        Self::new(0.3, 0.9, 1.0, 200.0)
    }
}

/// Where a material takes its surface color from.
#[derive(Clone, Debug)]
pub enum MaterialKind {
    /// Constant color, independent of (u, v).
    Solid(Color),

    /// Image lookup. `None` renders black.
    Textured(Option<Arc<Texture>>),
}

/// A surface material: Phong coefficients plus mirror and glass terms.
#[derive(Clone, Debug)]
pub struct Material {
    pub phong: Phong,

    /// Fraction of the final color taken from the reflected ray
    pub reflectance: f32,

    /// Fraction of the final color taken from the refracted ray
    pub transmittance: f32,

    /// Index of refraction of the material's interior
    pub refraction_index: f32,

    pub kind: MaterialKind,
}

impl Material {
    /// An opaque, non-reflective solid material.
    pub fn solid(color: Color, phong: Phong) -> Self {
        Self {
            phong,
            reflectance: 0.0,
            transmittance: 0.0,
            refraction_index: 1.0,
            kind: MaterialKind::Solid(color),
        }
    }

    /// An opaque, non-reflective textured material.
    pub fn textured(texture: Option<Arc<Texture>>, phong: Phong) -> Self {
        Self {
            phong,
            reflectance: 0.0,
            transmittance: 0.0,
            refraction_index: 1.0,
            kind: MaterialKind::Textured(texture),
        }
    }

    /// Set reflectance, transmittance and index of refraction.
    pub fn with_optics(mut self, reflectance: f32, transmittance: f32, refraction_index: f32) -> Self {
        self.reflectance = reflectance;
        self.transmittance = transmittance;
        self.refraction_index = refraction_index;
        self
    }

    /// Surface color at texture coordinates (u, v).
    pub fn color_at(&self, u: f32, v: f32) -> Color {
        match &self.kind {
            MaterialKind::Solid(color) => *color,
            MaterialKind::Textured(Some(texture)) => texture.sample(u, v),
            MaterialKind::Textured(None) => Color::ZERO,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::solid(Color::splat(0.5), Phong::default())
    }
}
