//! Multi-frame effects built from scene snapshots.
//!
//! Each frame renders an independent snapshot of the scene with its spheres
//! moved or resized; the source scene is never modified.

use whitted_core::Scene;
use whitted_math::Vec3;

use crate::error::OutputResult;
use crate::renderer::{average_frames, render, ImageBuffer, RenderConfig};

/// Vertical sphere offsets for the motion blur frames.
///
/// Three frames sliding down, then three sliding up, each relative to the
/// loaded position.
pub fn motion_blur_offsets() -> [f32; 6] {
    [-0.09, -0.15, -0.18, 0.03, 0.09, 0.18]
}

/// Sphere radius offsets for the pulse animation frames.
///
/// Five frames shrinking, then five growing, each relative to the loaded
/// radius.
pub fn pulse_radius_offsets() -> [f32; 10] {
    [-0.5, -0.4, -0.3, -0.2, -0.1, 0.1, 0.3, 0.6, 1.0, 1.5]
}

/// Render the motion blur frames and average them into one image.
///
/// Frames are rendered without supersampling.
pub fn render_motion_blur(scene: &Scene) -> OutputResult<ImageBuffer> {
    let config = RenderConfig::default();

    let frames: Vec<ImageBuffer> = motion_blur_offsets()
        .iter()
        .map(|&dy| {
            log::debug!("Motion blur frame, sphere offset {:+.2}", dy);
            render(&scene.with_spheres_translated(Vec3::new(0.0, dy, 0.0)), &config)
        })
        .collect();

    log::info!("Averaging {} motion blur frames", frames.len());
    average_frames(&frames)
}

/// Render the pulse animation frames in playback order.
pub fn render_pulse_animation(scene: &Scene) -> Vec<ImageBuffer> {
    let config = RenderConfig::default();

    pulse_radius_offsets()
        .iter()
        .map(|&dr| {
            log::debug!("Animation frame, radius offset {:+.2}", dr);
            render(&scene.with_sphere_radii_offset(dr), &config)
        })
        .collect()
}
