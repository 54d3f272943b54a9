// Re-export glam for convenience
pub use glam::*;

// Whitted math types
mod color;
mod ray;
mod transform;

pub use color::{color_to_rgb8, Color, Point3};
pub use ray::Ray;
pub use transform::{camera_to_world, Mat4Ext};
