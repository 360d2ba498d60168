//! Decoded RGBA pixel data.
//!
//! Images are decoded once, when the view is constructed, and owned by the
//! view for its lifetime.

use std::path::Path;

use crate::error::{Error, Result};

/// An owned RGBA8 bitmap.
#[derive(Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Pixmap {
    /// Wrap raw RGBA pixel data.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(Error::PixmapSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// A pixmap filled with a single color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self { width, height, data }
    }

    /// Decode an encoded image (PNG, JPEG, ...) from memory.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::from_image(img.to_rgba8()))
    }

    /// Decode an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let img = image::open(path.as_ref())?;
        Ok(Self::from_image(img.to_rgba8()))
    }

    fn from_image(rgba: image::RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            data: rgba.into_raw(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Zero width or height.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGBA value at `(x, y)`, or `None` outside the bitmap.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_checks_length() {
        assert!(Pixmap::from_rgba(2, 2, vec![0; 16]).is_ok());
        match Pixmap::from_rgba(2, 2, vec![0; 15]) {
            Err(Error::PixmapSizeMismatch { expected, actual, .. }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("expected size mismatch, got {:?}", other),
        }
    }

    #[test]
    fn solid_fill_and_pixel_lookup() {
        let p = Pixmap::solid(3, 2, [1, 2, 3, 4]);
        assert_eq!(p.data().len(), 24);
        assert_eq!(p.pixel(2, 1), Some([1, 2, 3, 4]));
        assert_eq!(p.pixel(3, 0), None);
    }

    #[test]
    fn zero_sized_is_empty() {
        assert!(Pixmap::solid(0, 10, [0; 4]).is_empty());
        assert!(!Pixmap::solid(1, 1, [0; 4]).is_empty());
    }

    #[test]
    fn decode_png_roundtrip_dimensions() {
        let img = image::RgbaImage::from_pixel(5, 7, image::Rgba([9, 8, 7, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let p = Pixmap::decode(&bytes).unwrap();
        assert_eq!((p.width(), p.height()), (5, 7));
        assert_eq!(p.pixel(4, 6), Some([9, 8, 7, 255]));
    }

    #[test]
    fn decode_garbage_fails() {
        assert!(matches!(Pixmap::decode(b"not an image"), Err(Error::Image(_))));
    }
}
