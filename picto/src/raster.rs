//! CPU rasterizer implementing [`Surface`] over an `image::RgbaImage`.
//!
//! Text is shaped and rasterized with cosmic-text's `SwashCache`, images are
//! scaled with nearest-neighbour sampling. Everything is clipped to the
//! canvas and blended source-over.

use std::path::Path;

use cosmic_text::SwashCache;
use image::{Rgba, RgbaImage};

use crate::error::Result;
use crate::pixmap::Pixmap;
use crate::primitives::{Color, Point, Rect, Size, px};
use crate::surface::Surface;
use crate::text::{font_system, shape_buffer};

pub struct RasterSurface {
    canvas: RgbaImage,
    swash_cache: SwashCache,
}

impl RasterSurface {
    /// A canvas of `size` filled with `background`.
    pub fn new(size: Size, background: Color) -> Self {
        Self {
            canvas: RgbaImage::from_pixel(size.width, size.height, Rgba(background.to_rgba8())),
            swash_cache: SwashCache::new(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    /// Encode the canvas; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.canvas.save(path.as_ref())?;
        Ok(())
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, px(self.canvas.width()), px(self.canvas.height()))
    }
}

/// Source-over blend of straight-alpha `src` onto `dst`.
fn blend(dst: &mut Rgba<u8>, src: [u8; 4]) {
    let sa = src[3] as f32 / 255.0;
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for i in 0..3 {
        let sc = src[i] as f32 / 255.0;
        let dc = dst[i] as f32 / 255.0;
        let c = (sc * sa + dc * da * (1.0 - sa)) / out_a;
        dst[i] = (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    dst[3] = (out_a.clamp(0.0, 1.0) * 255.0).round() as u8;
}

fn fill_rect(canvas: &mut RgbaImage, rect: Rect, rgba: [u8; 4]) {
    let bounds = Rect::new(0, 0, px(canvas.width()), px(canvas.height()));
    let Some(clipped) = rect.intersection(&bounds) else {
        return;
    };
    for y in clipped.top..clipped.bottom {
        for x in clipped.left..clipped.right {
            blend(canvas.get_pixel_mut(x as u32, y as u32), rgba);
        }
    }
}

impl Surface for RasterSurface {
    fn stroke_rect(&mut self, rect: Rect, stroke_width: f32, color: Color) {
        // The stroke straddles each edge: `outer` pixels outside, `inner` inside.
        let outer = (stroke_width / 2.0).floor() as i32;
        let inner = stroke_width.ceil() as i32 - outer;
        if outer + inner <= 0 {
            return;
        }
        let rgba = color.to_rgba8();
        let Rect { left, top, right, bottom } = rect;

        let (out_l, out_t) = (left.saturating_sub(outer), top.saturating_sub(outer));
        let (out_r, out_b) = (right.saturating_add(outer), bottom.saturating_add(outer));
        let (in_l, in_t) = (left.saturating_add(inner), top.saturating_add(inner));
        let (in_r, in_b) = (right.saturating_sub(inner), bottom.saturating_sub(inner));

        let bands = [
            Rect::new(out_l, out_t, out_r, in_t),
            Rect::new(out_l, in_b, out_r, out_b),
            Rect::new(out_l, in_t, in_l, in_b),
            Rect::new(in_r, in_t, out_r, in_b),
        ];
        for band in bands {
            fill_rect(&mut self.canvas, band, rgba);
        }
    }

    fn fill_text(&mut self, text: &str, origin: Point, font_size: f32, color: Color) {
        if text.is_empty() || font_size <= 0.0 {
            return;
        }
        let mut font_system = font_system();
        let buffer = shape_buffer(&mut font_system, text, font_size);

        // Buffer coordinates start at the line top; shift so the first
        // baseline lands on `origin.y`.
        let ascent = buffer.layout_runs().next().map_or(font_size, |run| run.line_y);
        let left = origin.x.round() as i32;
        let top = (origin.y - ascent).round() as i32;

        let [r, g, b, a] = color.to_rgba8();
        let canvas = &mut self.canvas;
        buffer.draw(
            &mut font_system,
            &mut self.swash_cache,
            cosmic_text::Color::rgba(r, g, b, a),
            |x, y, w, h, c| {
                let (x, y) = (left.saturating_add(x), top.saturating_add(y));
                let rect = Rect::new(x, y, x.saturating_add(px(w)), y.saturating_add(px(h)));
                fill_rect(canvas, rect, [c.r(), c.g(), c.b(), c.a()]);
            },
        );
    }

    fn draw_pixmap(&mut self, pixmap: &Pixmap, dst: Rect) {
        if pixmap.is_empty() || dst.is_empty() {
            return;
        }
        let Some(clipped) = dst.intersection(&self.bounds()) else {
            return;
        };
        let dw = dst.right as i64 - dst.left as i64;
        let dh = dst.bottom as i64 - dst.top as i64;
        let (sw, sh) = (pixmap.width() as i64, pixmap.height() as i64);

        for y in clipped.top..clipped.bottom {
            let sy = ((y as i64 - dst.top as i64) * sh / dh) as u32;
            for x in clipped.left..clipped.right {
                let sx = ((x as i64 - dst.left as i64) * sw / dw) as u32;
                if let Some(src) = pixmap.pixel(sx, sy) {
                    blend(self.canvas.get_pixel_mut(x as u32, y as u32), src);
                }
            }
        }
    }
}
