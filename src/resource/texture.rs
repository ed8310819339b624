//! CPU-side textures.

use image::{self, DynamicImage, GenericImageView};
use std::path::Path;

use crate::color::Color;
use crate::error::LoadError;

/// An RGBA8 image ready to be uploaded by a rendering backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    /// Where the texture came from (URL, path or a user-chosen name).
    pub name: String,
    /// Texture dimensions (width, height).
    pub size: (u32, u32),
    /// Tightly packed RGBA8 pixels, row-major, top row first.
    pub pixels: Vec<u8>,
    /// Whether the backend must flip rows on upload.
    ///
    /// glTF models expect unflipped textures, so loaded textures clear this.
    pub flip_y: bool,
    /// Set when the pixels changed and the backend copy is stale.
    pub needs_update: bool,
}

impl Texture {
    /// Creates a texture from raw RGBA8 pixels.
    ///
    /// Returns `None` if `pixels` does not hold exactly `width * height * 4` bytes.
    pub fn new(name: &str, width: u32, height: u32, pixels: Vec<u8>) -> Option<Texture> {
        if pixels.len() != width as usize * height as usize * 4 {
            return None;
        }

        Some(Texture {
            name: name.to_string(),
            size: (width, height),
            pixels,
            flip_y: true,
            needs_update: true,
        })
    }

    /// Creates a texture filled with a single color.
    pub fn solid(name: &str, width: u32, height: u32, color: Color) -> Texture {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        let texel = [to_u8(color.r), to_u8(color.g), to_u8(color.b), to_u8(color.a)];
        let pixels = texel
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();

        Texture {
            name: name.to_string(),
            size: (width, height),
            pixels,
            flip_y: true,
            needs_update: true,
        }
    }

    /// Converts a decoded image.
    pub fn from_image(name: &str, image: DynamicImage) -> Texture {
        let (width, height) = image.dimensions();
        let rgba_image = image.to_rgba8();

        Texture {
            name: name.to_string(),
            size: (width, height),
            pixels: rgba_image.into_raw(),
            flip_y: true,
            needs_update: true,
        }
    }

    /// Decodes an encoded image (PNG, JPEG, ...) held in memory.
    pub fn from_memory(name: &str, data: &[u8]) -> Result<Texture, LoadError> {
        let image = image::load_from_memory(data).map_err(|e| LoadError::from_image(name, e))?;
        Ok(Texture::from_image(name, image))
    }

    /// Reads and decodes an image file.
    pub fn from_file(name: &str, path: &Path) -> Result<Texture, LoadError> {
        let image = image::open(path).map_err(|e| LoadError::from_image(name, e))?;
        Ok(Texture::from_image(name, image))
    }

    /// The texture width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.size.0
    }

    /// The texture height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.size.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::WHITE;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    #[test]
    fn raw_pixels_must_match_dimensions() {
        assert!(Texture::new("t", 2, 2, vec![0; 16]).is_some());
        assert!(Texture::new("t", 2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn solid_texture_is_filled() {
        let t = Texture::solid("white", 256, 256, WHITE);
        assert_eq!(t.size, (256, 256));
        assert_eq!(t.pixels.len(), 256 * 256 * 4);
        assert!(t.pixels.iter().all(|p| *p == 255));
    }

    #[test]
    fn decodes_png_from_memory() {
        let mut encoded = Vec::new();
        RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
            .unwrap();

        let t = Texture::from_memory("mem.png", &encoded).unwrap();
        assert_eq!(t.size, (3, 2));
        assert_eq!(&t.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let err = Texture::from_memory("junk.png", b"not an image").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert_eq!(err.url(), "junk.png");
    }

    #[test]
    fn missing_file_is_a_fetch_error() {
        let err = Texture::from_file("nope.png", Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, LoadError::Fetch { .. }));
    }
}
