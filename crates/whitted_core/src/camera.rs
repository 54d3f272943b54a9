//! Pinhole camera and primary ray generation.

use whitted_math::{camera_to_world, Mat4, Mat4Ext, Point3, Ray, Vec3};

/// A pinhole camera looking from `position` toward `look_at`.
///
/// The camera-to-world transform is derived once at construction.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Point3,
    pub look_at: Point3,
    pub up: Vec3,

    /// Horizontal field of view in degrees
    pub fov: f32,

    /// Horizontal resolution
    pub width: u32,

    /// Vertical resolution
    pub height: u32,

    /// Reflection/refraction bounces allowed after the primary hit
    pub max_bounces: u32,

    transform: Mat4,
}

impl Camera {
    pub fn new(
        position: Point3,
        look_at: Point3,
        up: Vec3,
        fov: f32,
        width: u32,
        height: u32,
        max_bounces: u32,
    ) -> Self {
        Self {
            position,
            look_at,
            up,
            fov,
            width,
            height,
            max_bounces,
            transform: camera_to_world(position, look_at, up),
        }
    }

    /// Generate the world-space ray for a pixel.
    ///
    /// With `samples_per_axis <= 1` the ray passes through the pixel centre.
    /// Otherwise the pixel is split into an n×n grid and `sample_index`
    /// (row-major) picks the centre of one cell, so supersampling is fully
    /// deterministic.
    pub fn ray_for_pixel(&self, x: u32, y: u32, sample_index: u32, samples_per_axis: u32) -> Ray {
        let (offset_x, offset_y) = subpixel_offset(sample_index, samples_per_axis);

        let width = self.width as f32;
        let height = self.height as f32;

        let fov_x = self.fov.to_radians();
        let fov_y = fov_x * (height / width);

        // Pixel -> [-1, 1] device coordinates -> image plane at z = -1
        let ndc_x = 2.0 * ((x as f32 + offset_x) / width) - 1.0;
        let ndc_y = 2.0 * ((y as f32 + offset_y) / height) - 1.0;

        let direction = Vec3::new(ndc_x * fov_x.tan(), ndc_y * fov_y.tan(), -1.0).normalize();

        Ray::new(
            self.transform.transform_position(Vec3::ZERO),
            self.transform.transform_direction(direction).normalize(),
        )
    }
}

/// Sub-pixel offset of a stratified sample, both components in (0, 1).
fn subpixel_offset(sample_index: u32, samples_per_axis: u32) -> (f32, f32) {
    if samples_per_axis <= 1 {
        return (0.5, 0.5);
    }

    let n = samples_per_axis as f32;
    let column = (sample_index % samples_per_axis) as f32;
    let row = (sample_index / samples_per_axis) as f32;

    ((column + 0.5) / n, (row + 0.5) / n)
}
