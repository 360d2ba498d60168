//! Paint pipeline: partition the resolved size into border, title and image
//! regions and issue the drawing calls.
//!
//! Every pass re-derives all rectangles from its inputs; nothing is carried
//! over from the previous paint.
//!
//! # Geometry quirks
//!
//! Two behaviours are kept exactly as the original widget had them:
//!
//! - The title fit test compares the measured width with the whole view
//!   width (unless [`TextFit::ContentWidth`] is chosen), while truncation
//!   targets the padded content width.
//! - The image region is the content box minus a text band at its bottom,
//!   but the title baseline sits on the content box's bottom edge. The band
//!   and the glyphs do not necessarily line up.

use crate::error::{Error, Result};
use crate::primitives::{Color, Padding, Point, Rect, ResolvedSize, px};
use crate::style::{ScaleMode, StyleInputs, TextFit};
use crate::surface::Surface;
use crate::text::{TextMeasurer, TextMetrics};

/// Stroke width of the outline drawn around the whole view.
pub const BORDER_STROKE_WIDTH: f32 = 4.0;
/// Color of the outline drawn around the whole view.
pub const BORDER_COLOR: Color = Color::CYAN;

/// Rectangles derived for one paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRects {
    /// The whole view, `(0, 0)` to the resolved size.
    pub border: Rect,
    /// The view inset by padding.
    pub content: Rect,
    /// `content` with the text band removed from its bottom.
    pub image_region: Rect,
    /// Where the image is drawn.
    pub image: Rect,
}

/// Where and what title text is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TitlePlacement {
    /// The string actually drawn (possibly ellipsized).
    pub text: String,
    /// Left edge and baseline.
    pub origin: Point,
    pub truncated: bool,
}

/// Everything one paint pass will draw.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintPlan {
    pub rects: LayoutRects,
    pub title: TitlePlacement,
    pub font_size: f32,
}

/// Compute the paint plan without drawing.
///
/// A missing image is planned as zero-sized; [`paint`] refuses to draw it.
pub fn plan(
    size: ResolvedSize,
    style: &StyleInputs,
    text: &TextMetrics,
    padding: &Padding,
    measurer: &mut dyn TextMeasurer,
) -> PaintPlan {
    let width = px(size.width);
    let height = px(size.height);
    let text_height = px(text.height);

    let border = Rect::from_size(size);
    let content = Rect {
        left: px(padding.left),
        top: px(padding.top),
        right: width.saturating_sub(px(padding.right)),
        bottom: height.saturating_sub(px(padding.bottom)),
    };

    let font_size = style.font_px();
    let title = place_title(size, style, text, padding, font_size, measurer);

    let mut image_region = content;
    image_region.bottom = image_region.bottom.saturating_sub(text_height);

    let image = match style.scale_mode {
        ScaleMode::FitStretch => image_region,
        ScaleMode::CenterNative => {
            let (image_width, image_height) = style.image_size();
            let (image_width, image_height) = (px(image_width), px(image_height));
            let left = width / 2 - image_width / 2;
            let top = height.saturating_sub(text_height) / 2 - image_height / 2;
            Rect {
                left,
                top,
                right: left.saturating_add(image_width),
                bottom: top.saturating_add(image_height),
            }
        }
    };

    PaintPlan {
        rects: LayoutRects {
            border,
            content,
            image_region,
            image,
        },
        title,
        font_size,
    }
}

fn place_title(
    size: ResolvedSize,
    style: &StyleInputs,
    text: &TextMetrics,
    padding: &Padding,
    font_size: f32,
    measurer: &mut dyn TextMeasurer,
) -> TitlePlacement {
    let baseline = size.height as f32 - padding.bottom as f32;
    let limit = match style.text_fit {
        TextFit::ViewWidth => size.width,
        TextFit::ContentWidth => size.width.saturating_sub(padding.horizontal()),
    };

    if text.width > limit {
        let available = size.width as f32 - padding.left as f32 - padding.right as f32;
        let truncated = measurer.ellipsize(&style.title, font_size, available);
        tracing::debug!(
            measured = text.width,
            limit,
            available,
            kept = truncated.chars().count(),
            "title ellipsized"
        );
        TitlePlacement {
            text: truncated,
            origin: Point::new(padding.left as f32, baseline),
            truncated: true,
        }
    } else {
        let x = (size.width / 2) as f32 - text.width as f32 / 2.0;
        TitlePlacement {
            text: style.title.clone(),
            origin: Point::new(x, baseline),
            truncated: false,
        }
    }
}

/// Paint one frame: border, then title, then image.
///
/// The image is a required input. Without one, nothing is drawn and
/// [`Error::MissingImage`] is returned.
pub fn paint(
    surface: &mut dyn Surface,
    size: ResolvedSize,
    style: &StyleInputs,
    text: &TextMetrics,
    padding: &Padding,
    measurer: &mut dyn TextMeasurer,
) -> Result<PaintPlan> {
    let image = style.image.as_ref().ok_or(Error::MissingImage)?;
    let plan = plan(size, style, text, padding, measurer);

    surface.stroke_rect(plan.rects.border, BORDER_STROKE_WIDTH, BORDER_COLOR);
    if !plan.title.text.is_empty() {
        surface.fill_text(&plan.title.text, plan.title.origin, plan.font_size, style.title_color);
    }
    surface.draw_pixmap(image, plan.rects.image);

    Ok(plan)
}
