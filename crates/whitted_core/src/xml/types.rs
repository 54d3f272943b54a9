//! Serde mirror of the XML scene document.
//!
//! Attributes and child elements both map to plain field names. Mixed child
//! lists (`<lights>`, `<surfaces>`) deserialize through `$value` into enums
//! keyed by element name.

use serde::Deserialize;
use whitted_math::Vec3;

#[derive(Debug, Deserialize)]
pub struct SceneDoc {
    #[serde(default)]
    pub output_file: String,
    pub background_color: ColorDoc,
    pub camera: CameraDoc,
    #[serde(default)]
    pub lights: LightsDoc,
    #[serde(default)]
    pub surfaces: SurfacesDoc,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ColorDoc {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl From<ColorDoc> for Vec3 {
    fn from(c: ColorDoc) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VectorDoc {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<VectorDoc> for Vec3 {
    fn from(v: VectorDoc) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

#[derive(Debug, Deserialize)]
pub struct CameraDoc {
    pub position: VectorDoc,
    pub lookat: VectorDoc,
    pub up: VectorDoc,
    pub horizontal_fov: FovDoc,
    pub resolution: ResolutionDoc,
    pub max_bounces: BouncesDoc,
}

#[derive(Debug, Deserialize)]
pub struct FovDoc {
    pub angle: f32,
}

#[derive(Debug, Deserialize)]
pub struct ResolutionDoc {
    pub horizontal: u32,
    pub vertical: u32,
}

#[derive(Debug, Deserialize)]
pub struct BouncesDoc {
    pub n: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct LightsDoc {
    #[serde(rename = "$value", default)]
    pub items: Vec<LightDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightDoc {
    AmbientLight(AmbientLightDoc),
    PointLight(PointLightDoc),
    ParallelLight(ParallelLightDoc),
    SpotLight(SpotLightDoc),
}

#[derive(Debug, Deserialize)]
pub struct AmbientLightDoc {
    pub color: ColorDoc,
}

#[derive(Debug, Deserialize)]
pub struct PointLightDoc {
    pub color: ColorDoc,
    pub position: VectorDoc,
}

#[derive(Debug, Deserialize)]
pub struct ParallelLightDoc {
    pub color: ColorDoc,
    pub direction: VectorDoc,
}

#[derive(Debug, Deserialize)]
pub struct SpotLightDoc {
    pub color: ColorDoc,
    pub position: VectorDoc,
    pub direction: VectorDoc,
    pub falloff: FalloffDoc,
}

#[derive(Debug, Deserialize)]
pub struct FalloffDoc {
    pub alpha1: f32,
    pub alpha2: f32,
}

#[derive(Debug, Default, Deserialize)]
pub struct SurfacesDoc {
    #[serde(rename = "$value", default)]
    pub items: Vec<SurfaceDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceDoc {
    Sphere(SphereDoc),
    Mesh(MeshDoc),
}

#[derive(Debug, Deserialize)]
pub struct SphereDoc {
    pub radius: f32,
    pub position: VectorDoc,
    pub material_solid: Option<MaterialDoc>,
    pub material_textured: Option<MaterialDoc>,
}

#[derive(Debug, Deserialize)]
pub struct MeshDoc {
    pub name: String,
    pub material_solid: Option<MaterialDoc>,
    pub material_textured: Option<MaterialDoc>,
}

/// Shared body of `<material_solid>` and `<material_textured>`.
#[derive(Debug, Deserialize)]
pub struct MaterialDoc {
    pub color: Option<ColorDoc>,
    pub texture: Option<TextureDoc>,
    pub phong: PhongDoc,
    pub reflectance: Option<ReflectanceDoc>,
    pub transmittance: Option<TransmittanceDoc>,
    pub refraction: Option<RefractionDoc>,
}

#[derive(Debug, Deserialize)]
pub struct TextureDoc {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PhongDoc {
    pub ka: f32,
    pub kd: f32,
    pub ks: f32,
    pub exponent: f32,
}

#[derive(Debug, Deserialize)]
pub struct ReflectanceDoc {
    pub r: f32,
}

#[derive(Debug, Deserialize)]
pub struct TransmittanceDoc {
    pub t: f32,
}

#[derive(Debug, Deserialize)]
pub struct RefractionDoc {
    pub iof: f32,
}
