//! PNG and animated GIF output.
//!
//! This is the only place colors are clamped to 8 bits.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbImage, RgbaImage};

use crate::error::{OutputError, OutputResult};
use crate::renderer::ImageBuffer;

/// Delay between animation frames.
pub const GIF_FRAME_DELAY_MS: u32 = 200;

/// Write an image as PNG.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let rgb = to_rgb_image(image)?;
    rgb.save(path.as_ref())?;

    log::info!("Saved {}", path.as_ref().display());
    Ok(())
}

/// Write frames as a GIF that loops forever.
pub fn save_gif<P: AsRef<Path>>(frames: &[ImageBuffer], path: P, frame_delay_ms: u32) -> OutputResult<()> {
    if frames.is_empty() {
        return Err(OutputError::NoFrames);
    }

    let file = BufWriter::new(File::create(path.as_ref())?);
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
    for image in frames {
        let rgba = to_rgba_image(image)?;
        encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))?;
    }

    log::info!(
        "Saved {} ({} frames)",
        path.as_ref().display(),
        frames.len()
    );
    Ok(())
}

fn to_rgb_image(image: &ImageBuffer) -> OutputResult<RgbImage> {
    if image.is_empty() {
        return Err(OutputError::EmptyImage);
    }
    RgbImage::from_raw(image.width, image.height, image.to_rgb8()).ok_or(OutputError::EmptyImage)
}

fn to_rgba_image(image: &ImageBuffer) -> OutputResult<RgbaImage> {
    let rgb = to_rgb_image(image)?;
    Ok(image::DynamicImage::ImageRgb8(rgb).to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_math::Color;

    fn gradient(width: u32, height: u32) -> ImageBuffer {
        let mut image = ImageBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                image.set(x, y, Color::new(x as f32 / width as f32, y as f32 / height as f32, 2.0));
            }
        }
        image
    }

    #[test]
    fn test_save_png_round_trip() {
        let dir = std::env::temp_dir().join("whitted_output_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("gradient.png");

        let image = gradient(4, 3);
        save_png(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (4, 3));
        // Overexposed blue clamps on its own channel
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 255]);
        assert_eq!(decoded.get_pixel(2, 0).0, [127, 0, 255]);
    }

    #[test]
    fn test_save_png_empty_image() {
        let path = std::env::temp_dir().join("whitted_empty.png");
        let result = save_png(&ImageBuffer::new(0, 0), &path);
        assert!(matches!(result, Err(OutputError::EmptyImage)));
    }

    #[test]
    fn test_save_gif() {
        let dir = std::env::temp_dir().join("whitted_output_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("anim.gif");

        let frames = vec![gradient(4, 4), ImageBuffer::new(4, 4)];
        save_gif(&frames, &path, GIF_FRAME_DELAY_MS).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], b"GIF");
    }

    #[test]
    fn test_save_gif_without_frames() {
        let path = std::env::temp_dir().join("whitted_no_frames.gif");
        assert!(matches!(
            save_gif(&[], &path, GIF_FRAME_DELAY_MS),
            Err(OutputError::NoFrames)
        ));
    }
}
