//! Drawing surfaces.
//!
//! The paint pipeline only talks to a [`Surface`]. [`DisplayList`] records
//! the calls in order, which is what hosts with their own renderer (and the
//! tests) consume. See [`crate::raster::RasterSurface`] for a CPU rasterizer.

use crate::pixmap::Pixmap;
use crate::primitives::{Color, Point, Rect};

/// The drawing primitives a view needs from its host.
pub trait Surface {
    /// Stroke the outline of `rect`, centred on its edges. Never filled.
    fn stroke_rect(&mut self, rect: Rect, stroke_width: f32, color: Color);

    /// Fill `text` starting at `origin`. `origin.y` is the baseline.
    fn fill_text(&mut self, text: &str, origin: Point, font_size: f32, color: Color);

    /// Draw the whole of `pixmap` scaled into `dst`.
    fn draw_pixmap(&mut self, pixmap: &Pixmap, dst: Rect);
}

/// A stroked, unfilled rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub rect: Rect,
    pub border_width: f32,
    pub color: Color,
}

/// A pre-positioned text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Left edge and baseline.
    pub position: Point,
    pub font_size: f32,
    pub color: Color,
}

/// An image blit. Records the source size rather than the pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePrimitive {
    pub rect: Rect,
    pub source_width: u32,
    pub source_height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Border(Border),
    Text(TextRun),
    Image(ImagePrimitive),
}

/// A surface that records primitives in issue order.
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    primitives: Vec<Primitive>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all primitives.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn borders(&self) -> impl Iterator<Item = &Border> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Border(b) => Some(b),
            _ => None,
        })
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImagePrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Image(i) => Some(i),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn stroke_rect(&mut self, rect: Rect, stroke_width: f32, color: Color) {
        self.primitives.push(Primitive::Border(Border {
            rect,
            border_width: stroke_width,
            color,
        }));
    }

    fn fill_text(&mut self, text: &str, origin: Point, font_size: f32, color: Color) {
        self.primitives.push(Primitive::Text(TextRun {
            text: text.to_string(),
            position: origin,
            font_size,
            color,
        }));
    }

    fn draw_pixmap(&mut self, pixmap: &Pixmap, dst: Rect) {
        self.primitives.push(Primitive::Image(ImagePrimitive {
            rect: dst,
            source_width: pixmap.width(),
            source_height: pixmap.height(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_issue_order() {
        let mut list = DisplayList::new();
        list.draw_pixmap(&Pixmap::solid(2, 3, [0; 4]), Rect::new(0, 0, 4, 6));
        list.fill_text("hi", Point::new(1.0, 9.0), 12.0, Color::BLACK);
        list.stroke_rect(Rect::new(0, 0, 10, 10), 4.0, Color::CYAN);

        assert_eq!(list.len(), 3);
        assert!(matches!(list.primitives()[0], Primitive::Image(_)));
        assert!(matches!(list.primitives()[1], Primitive::Text(_)));
        assert!(matches!(list.primitives()[2], Primitive::Border(_)));

        let image = list.images().next().unwrap();
        assert_eq!((image.source_width, image.source_height), (2, 3));
        assert_eq!(list.text_runs().next().unwrap().text, "hi");
        assert_eq!(list.borders().next().unwrap().border_width, 4.0);
    }

    #[test]
    fn clear_empties() {
        let mut list = DisplayList::new();
        list.stroke_rect(Rect::default(), 1.0, Color::BLACK);
        list.clear();
        assert!(list.is_empty());
    }
}
