//! Core primitive types for Picto.
//!
//! Geometry is integer pixels, matching what a host layout system hands out.
//! Only text origins are fractional, because centring a glyph run uses half of
//! its measured width.

use crate::error::{Error, Result};

/// A point in 2D space. Used for text origins, where `y` is the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Final size reported back to the host after a layout pass.
pub type ResolvedSize = Size;

/// An edge-based rectangle in widget-local pixel coordinates.
///
/// Edges are stored independently so a paint pass can move one edge
/// (e.g. carving the text band off the bottom) without touching the others.
/// Edges may be negative or inverted when content overflows the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Rectangle anchored at the origin covering `size`.
    #[inline]
    pub fn from_size(size: Size) -> Self {
        Self {
            left: 0,
            top: 0,
            right: px(size.width),
            bottom: px(size.height),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// True when the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Get the intersection of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let r = Rect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        if r.is_empty() { None } else { Some(r) }
    }
}

/// Convert an unsigned pixel extent into a signed coordinate.
#[inline]
pub(crate) fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// RGBA color with components in 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const CYAN: Self = Self {
        r: 0.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a color from RGBA values (0-255).
    #[inline]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba8(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Quantize to 8-bit channels.
    #[inline]
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Padding around content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    /// Create padding with explicit values for each side.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Uniform padding on all sides.
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Symmetric padding (horizontal, vertical).
    pub const fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Rect tests
    // =========================================================================

    #[test]
    fn rect_from_size() {
        let r = Rect::from_size(Size::new(100, 50));
        assert_eq!(r, Rect::new(0, 0, 100, 50));
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 50);
    }

    #[test]
    fn rect_inverted_is_empty() {
        // Carving a tall text band off a short widget inverts the rect.
        let r = Rect::new(0, 10, 20, 4);
        assert!(r.is_empty());
        assert_eq!(r.height(), -6);
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 150, 150);
        assert_eq!(a.intersection(&b), Some(Rect::new(50, 50, 100, 100)));

        let c = Rect::new(200, 200, 250, 250);
        assert!(a.intersection(&c).is_none());
    }

    // =========================================================================
    // Color tests
    // =========================================================================

    #[test]
    fn color_constants() {
        assert_eq!(Color::BLACK.to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(Color::CYAN.to_rgba8(), [0, 255, 255, 255]);
        assert_eq!(Color::TRANSPARENT.to_rgba8(), [0, 0, 0, 0]);
        assert_eq!(Color::rgba8(0, 255, 255, 255), Color::CYAN);
    }

    #[test]
    fn color_from_hex() {
        assert_eq!(Color::from_hex("#00FFFF").unwrap(), Color::CYAN);
        assert_eq!(Color::from_hex("#ff000080").unwrap().to_rgba8(), [255, 0, 0, 128]);
    }

    #[test]
    fn color_from_hex_rejects_garbage() {
        assert!(matches!(Color::from_hex("00FFFF"), Err(Error::InvalidColor(_))));
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    // =========================================================================
    // Padding tests
    // =========================================================================

    #[test]
    fn padding_totals() {
        let p = Padding::new(1, 2, 3, 4);
        assert_eq!(p.horizontal(), 6);
        assert_eq!(p.vertical(), 4);
        assert_eq!(Padding::symmetric(5, 7), Padding::new(7, 5, 7, 5));
        assert_eq!(Padding::all(3).horizontal(), 6);
    }
}
