//! XML scene description support.
//!
//! A scene file names its output image, background, camera, lights and
//! surfaces. Meshes (`.obj`) and textures referenced by name are resolved
//! relative to the directory containing the scene file.
//!
//! ```ignore
//! use whitted_core::xml::load_scene;
//!
//! let scene = load_scene("scenes/example1.xml")?;
//! ```

mod loader;
mod types;

pub use loader::{load_scene, parse_scene};
