//! Parallel frame driver.
//!
//! Rows are independent: each rayon task owns exactly one output row and
//! writes nothing else, so the result does not depend on scheduling.

use std::time::Instant;

use rayon::prelude::*;
use whitted_core::{Camera, Scene};
use whitted_math::{color_to_rgb8, Color};

use crate::error::{OutputError, OutputResult};
use crate::tracer::Tracer;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Trace a stratified grid of sub-rays per pixel instead of one
    pub super_sampling: bool,
    /// Grid size per axis when supersampling (5 gives 25 rays per pixel)
    pub samples_per_axis: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            super_sampling: false,
            samples_per_axis: 5,
        }
    }
}

impl RenderConfig {
    /// Default configuration with supersampling turned on.
    pub fn supersampled() -> Self {
        Self {
            super_sampling: true,
            ..Default::default()
        }
    }

    /// Number of primary rays traced per pixel.
    pub fn samples_per_pixel(&self) -> u32 {
        if self.super_sampling {
            self.samples_per_axis.max(1).pow(2)
        } else {
            1
        }
    }
}

/// Render a single pixel, averaging sub-rays when supersampling.
///
/// `y` is in scene coordinates, growing upward.
pub fn render_pixel(tracer: &Tracer, camera: &Camera, x: u32, y: u32, config: &RenderConfig) -> Color {
    if !config.super_sampling {
        let ray = camera.ray_for_pixel(x, y, 0, 1);
        return tracer.trace(&ray, 0);
    }

    let axis = config.samples_per_axis.max(1);
    let samples = axis * axis;

    let mut pixel_color = Color::ZERO;
    for sample in 0..samples {
        let ray = camera.ray_for_pixel(x, y, sample, axis);
        pixel_color += tracer.trace(&ray, 0);
    }

    pixel_color / samples as f32
}

/// Row-major image of linear colors, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> &[Color] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// True when the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Convert to RGB bytes, clamping each channel on its own.
    pub fn to_rgb8(&self) -> Vec<u8> {
        (0..self.height)
            .flat_map(|y| self.row(y))
            .flat_map(|color| color_to_rgb8(*color))
            .collect()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the whole scene.
///
/// Scene row `y` (growing upward) lands in image row `height - 1 - y`.
pub fn render(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let camera = &scene.camera;
    let (width, height) = (camera.width, camera.height);
    let tracer = Tracer::new(scene);

    let start = Instant::now();
    if config.super_sampling {
        log::info!(
            "Supersampling enabled ({} rays per pixel)",
            config.samples_per_pixel()
        );
    }

    let mut image = ImageBuffer::new(width, height);
    if image.is_empty() {
        return image;
    }

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, pixels)| {
            let y = height - 1 - row as u32;
            for (x, pixel) in pixels.iter_mut().enumerate() {
                *pixel = render_pixel(&tracer, camera, x as u32, y, config);
            }
        });

    log::info!(
        "Rendered {}x{} in {:.2?}",
        width,
        height,
        start.elapsed()
    );

    image
}

/// Average frames pixel by pixel with equal weights.
pub fn average_frames(frames: &[ImageBuffer]) -> OutputResult<ImageBuffer> {
    let first = frames.first().ok_or(OutputError::NoFrames)?;
    let expected = (first.width, first.height);

    for frame in frames {
        if (frame.width, frame.height) != expected {
            return Err(OutputError::FrameSizeMismatch {
                expected,
                found: (frame.width, frame.height),
            });
        }
    }

    let mut average = ImageBuffer::new(first.width, first.height);
    for frame in frames {
        for (sum, color) in average.pixels.iter_mut().zip(&frame.pixels) {
            *sum += *color;
        }
    }

    let scale = 1.0 / frames.len() as f32;
    for pixel in &mut average.pixels {
        *pixel *= scale;
    }

    Ok(average)
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::{Light, Material, Phong, Sphere};
    use whitted_math::Vec3;

    fn ambient_scene(width: u32, height: u32) -> Scene {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y, 45.0, width, height, 2);
        let mut scene = Scene::new("test.png", Color::ZERO, camera);
        scene.add_light(Light::Ambient { color: Color::ONE });
        scene.add_surface(Sphere::new(
            Vec3::ZERO,
            1.0,
            Material::solid(Color::ONE, Phong::new(1.0, 1.0, 0.0, 1.0)),
        ));
        scene
    }

    #[test]
    fn test_end_to_end_two_by_two() {
        // Make the sphere big enough to catch at least one primary ray
        let mut scene = ambient_scene(2, 2);
        scene.surfaces = vec![Sphere::new(
            Vec3::ZERO,
            3.0,
            Material::solid(Color::ONE, Phong::new(1.0, 1.0, 0.0, 1.0)),
        )
        .into()];

        let image = render(&scene, &RenderConfig::default());
        assert_eq!(image.pixels.len(), 4);

        let mut hits = 0;
        for pixel in &image.pixels {
            if *pixel == Color::ONE {
                hits += 1;
            } else {
                assert_eq!(*pixel, Color::ZERO);
            }
        }
        assert!(hits >= 1);
    }

    #[test]
    fn test_supersampling_matches_single_sample_on_flat_ambient() {
        // Every sub-ray of the centre pixels lands on the sphere
        let scene = ambient_scene(9, 9);
        let tracer = Tracer::new(&scene);

        let single = render_pixel(&tracer, &scene.camera, 4, 4, &RenderConfig::default());
        let multi = render_pixel(&tracer, &scene.camera, 4, 4, &RenderConfig::supersampled());

        assert!((single - multi).length() < 1e-5);
        assert!((single - Color::ONE).length() < 1e-6);
    }

    #[test]
    fn test_row_flip() {
        // Sphere only in the upper half of the view
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y, 45.0, 4, 4, 0);
        let mut scene = Scene::new("flip.png", Color::ZERO, camera);
        scene.add_light(Light::Ambient { color: Color::ONE });
        scene.add_surface(Sphere::new(
            Vec3::new(0.0, 3.0, 0.0),
            1.5,
            Material::solid(Color::ONE, Phong::new(1.0, 0.0, 0.0, 1.0)),
        ));

        let image = render(&scene, &RenderConfig::default());

        // Scene y = 3 (top) is output row 0
        assert_eq!(image.get(2, 0), Color::ONE);
        assert_eq!(image.get(2, 3), Color::ZERO);
    }

    #[test]
    fn test_render_is_deterministic() {
        let scene = ambient_scene(8, 6);
        let a = render(&scene, &RenderConfig::supersampled());
        let b = render(&scene, &RenderConfig::supersampled());
        assert_eq!(a, b);
    }

    #[test]
    fn test_average_frames() {
        let mut a = ImageBuffer::new(2, 1);
        let mut b = ImageBuffer::new(2, 1);
        a.set(0, 0, Color::ONE);
        b.set(0, 0, Color::ZERO);
        a.set(1, 0, Color::new(0.2, 0.4, 0.6));
        b.set(1, 0, Color::new(0.4, 0.8, 1.2));

        let avg = average_frames(&[a, b]).unwrap();
        assert!((avg.get(0, 0) - Color::splat(0.5)).length() < 1e-6);
        assert!((avg.get(1, 0) - Color::new(0.3, 0.6, 0.9)).length() < 1e-6);
    }

    #[test]
    fn test_average_frames_errors() {
        assert!(matches!(average_frames(&[]), Err(OutputError::NoFrames)));

        let result = average_frames(&[ImageBuffer::new(2, 2), ImageBuffer::new(3, 2)]);
        assert!(matches!(
            result,
            Err(OutputError::FrameSizeMismatch {
                expected: (2, 2),
                found: (3, 2)
            })
        ));
    }

    #[test]
    fn test_to_rgb8_clamps_channels() {
        let mut image = ImageBuffer::new(1, 1);
        image.set(0, 0, Color::new(2.0, 0.5, -1.0));
        assert_eq!(image.to_rgb8(), vec![255, 127, 0]);
        assert_eq!(image.row(0).len(), 1);
    }
}
