//! Whitted Renderer - recursive CPU ray tracing.
//!
//! Classic Whitted-style tracing over a brute-force surface list:
//! Phong direct lighting with hard shadows, mirror reflection and Snell
//! refraction up to a fixed bounce depth, deterministic stratified
//! supersampling, and rows rendered in parallel with rayon.

mod animation;
mod error;
mod hittable;
mod intersection;
mod mesh;
mod output;
mod renderer;
mod shading;
mod sphere;
mod tracer;
mod triangle;

pub use animation::{
    motion_blur_offsets, pulse_radius_offsets, render_motion_blur, render_pulse_animation,
};
pub use error::{OutputError, OutputResult};
pub use hittable::Hittable;
pub use intersection::{Intersection, TriangleHit};
pub use output::{save_gif, save_png, GIF_FRAME_DELAY_MS};
pub use renderer::{average_frames, render, render_pixel, ImageBuffer, RenderConfig};
pub use shading::{illuminate, is_in_shadow, reflect, refract, EPSILON};
pub use sphere::{solve_quadratic, sphere_uv};
pub use tracer::Tracer;
pub use triangle::intersect_triangle;

/// Re-export common math types from whitted_math
pub use whitted_math::{Color, Ray, Vec3};
