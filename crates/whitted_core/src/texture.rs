//! Texture loading and caching for textured materials.
//!
//! Images are decoded exactly once when the scene is loaded and shared
//! between materials through `Arc`, so tracing only ever reads plain pixel
//! buffers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use whitted_math::Color;

/// Texture decode failures.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture {path}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Texture {0} has no pixels")]
    Empty(String),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A decoded texture.
///
/// Pixels are stored row-major with row 0 at the top of the image. Channels
/// are the raw 8-bit values divided by 255; no gamma conversion is applied.
#[derive(Clone, Debug)]
pub struct Texture {
    pub width: u32,

    pub height: u32,

    /// Pixel colors, `width * height` entries
    pub pixels: Vec<Color>,

    /// Source path, kept for log messages
    pub path: String,
}

impl Texture {
    pub fn new(width: u32, height: u32, pixels: Vec<Color>, path: impl Into<String>) -> Self {
        Self {
            width,
            height,
            pixels,
            path: path.into(),
        }
    }

    /// Decode an image file into a texture.
    pub fn load(path: &Path) -> TextureResult<Self> {
        let display = path.to_string_lossy().to_string();

        let img = image::open(path).map_err(|source| TextureError::Load {
            path: display.clone(),
            source,
        })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty(display));
        }

        let pixels = rgb
            .pixels()
            .map(|p| {
                Color::new(
                    p[0] as f32 / 255.0,
                    p[1] as f32 / 255.0,
                    p[2] as f32 / 255.0,
                )
            })
            .collect();

        Ok(Self::new(width, height, pixels, display))
    }

    /// Sample the texture at UV coordinates (nearest pixel).
    ///
    /// Coordinates above 1 wrap around (`u mod 1`); the pixel is
    /// `(⌊u·(w−1)⌋, ⌊v·(h−1)⌋)` with v = 0 on the top row.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let u = if u > 1.0 { u % 1.0 } else { u };
        let v = if v > 1.0 { v % 1.0 } else { v };

        // `as` saturates negative coordinates to the first pixel
        let x = ((u * (self.width as f32 - 1.0)) as u32).min(self.width.saturating_sub(1));
        let y = ((v * (self.height as f32 - 1.0)) as u32).min(self.height.saturating_sub(1));

        self.get_pixel(x, y)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Color {
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied().unwrap_or(Color::ZERO)
    }
}

/// Cache for decoded textures.
///
/// Relative names resolve against the directory of the scene file.
pub struct TextureCache {
    /// Keyed by resolved path
    textures: HashMap<PathBuf, Arc<Texture>>,

    base_dir: Option<PathBuf>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            base_dir: None,
        }
    }

    /// Resolve relative names against `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            textures: HashMap::new(),
            base_dir: Some(base_dir.into()),
        }
    }

    /// Load a texture, decoding it only on first use.
    pub fn load(&mut self, name: &str) -> TextureResult<Arc<Texture>> {
        let full_path = self.resolve_path(name);

        if let Some(texture) = self.textures.get(&full_path) {
            return Ok(Arc::clone(texture));
        }

        let texture = Arc::new(Texture::load(&full_path)?);
        self.textures.insert(full_path, Arc::clone(&texture));

        log::debug!(
            "Loaded texture: {} ({}x{})",
            name,
            texture.width,
            texture.height
        );

        Ok(texture)
    }

    /// Number of distinct decoded images.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    fn resolve_path(&self, name: &str) -> PathBuf {
        let path = Path::new(name);

        match &self.base_dir {
            Some(base) if !path.is_absolute() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Texture {
        // 2x2: red, green / blue, white
        Texture::new(
            2,
            2,
            vec![
                Color::new(1.0, 0.0, 0.0),
                Color::new(0.0, 1.0, 0.0),
                Color::new(0.0, 0.0, 1.0),
                Color::ONE,
            ],
            "<checker>",
        )
    }

    #[test]
    fn test_sample_corners() {
        let tex = checker();
        assert_eq!(tex.sample(0.0, 0.0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(tex.sample(1.0, 0.0), Color::new(0.0, 1.0, 0.0));
        assert_eq!(tex.sample(0.0, 1.0), Color::new(0.0, 0.0, 1.0));
        assert_eq!(tex.sample(1.0, 1.0), Color::ONE);
    }

    #[test]
    fn test_sample_wraps_above_one() {
        let tex = checker();
        // 1.25 mod 1 = 0.25 -> floor(0.25) = column 0
        assert_eq!(tex.sample(1.25, 0.0), tex.sample(0.25, 0.0));
        assert_eq!(tex.sample(2.0, 0.0), tex.sample(0.0, 0.0));
    }

    #[test]
    fn test_sample_negative_clamps() {
        let tex = checker();
        assert_eq!(tex.sample(-0.5, -3.0), Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_load_png_without_gamma() {
        let dir = std::env::temp_dir().join("whitted_texture_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("gray.png");

        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([51, 102, 255]));
        img.save(&path).unwrap();

        let tex = Texture::load(&path).unwrap();
        assert_eq!(tex.width, 3);
        assert_eq!(tex.height, 2);
        assert_eq!(tex.pixels.len(), 6);

        let c = tex.sample(0.5, 0.5);
        assert!((c.x - 0.2).abs() < 0.001);
        assert!((c.y - 0.4).abs() < 0.001);
        assert!((c.z - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_cache_decodes_once() {
        let dir = std::env::temp_dir().join("whitted_texture_cache_test");
        std::fs::create_dir_all(&dir).unwrap();
        image::RgbImage::from_pixel(1, 1, image::Rgb([0, 0, 0]))
            .save(dir.join("black.png"))
            .unwrap();

        let mut cache = TextureCache::with_base_dir(&dir);
        assert!(cache.is_empty());

        let a = cache.load("black.png").unwrap();
        let b = cache.load("black.png").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_missing_texture_is_error() {
        let mut cache = TextureCache::with_base_dir(std::env::temp_dir());
        assert!(matches!(
            cache.load("does_not_exist_whitted.png"),
            Err(TextureError::Load { .. })
        ));
    }
}
