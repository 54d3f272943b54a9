//! Whitted Core - Scene graph and scene file loading.
//!
//! This crate provides:
//!
//! - **Scene graph types**: `Scene`, `Camera`, `Light`, `Material`, `Surface`
//! - **Geometry data**: `Sphere`, `Triangle`, `Mesh`
//! - **Loaders**: XML scene descriptions and Wavefront OBJ meshes
//!
//! Everything here is plain data; intersection and shading live in
//! `whitted_renderer`.
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::load_scene;
//!
//! let scene = load_scene("scenes/example1.xml")?;
//! println!("{} lights, {} surfaces", scene.lights.len(), scene.surfaces.len());
//! ```

pub mod camera;
pub mod error;
pub mod light;
pub mod material;
pub mod obj;
pub mod scene;
pub mod surface;
pub mod texture;
pub mod xml;

// Re-export commonly used types
pub use camera::Camera;
pub use error::{SceneError, SceneResult};
pub use light::Light;
pub use material::{Material, MaterialKind, Phong};
pub use obj::{load_obj, parse_obj};
pub use scene::Scene;
pub use surface::{Mesh, Sphere, Surface, Triangle};
pub use texture::{Texture, TextureCache, TextureError, TextureResult};
pub use xml::{load_scene, parse_scene};
