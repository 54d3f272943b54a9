//! Errors raised while building a scene.
//!
//! Geometry itself never fails; everything that can go wrong is caught while
//! the scene file and its assets are being read.

use thiserror::Error;

use crate::texture::TextureError;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Malformed scene document")]
    Xml(#[from] serde_xml_rs::Error),

    #[error("Failed to load mesh")]
    Obj(#[from] tobj::LoadError),

    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error("Mesh {0} contains no triangles")]
    EmptyMesh(String),

    #[error("Surface has no material: {0}")]
    MissingMaterial(String),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
