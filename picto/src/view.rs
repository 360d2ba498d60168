//! The image-and-title view.
//!
//! Owns its style inputs, padding and current title metrics. Layout and paint
//! are separate calls: the host feeds the size returned by [`ImageLabelView::measure`]
//! back into [`ImageLabelView::paint`], so no layout state hides inside the view.

use crate::constraints::LayoutConstraints;
use crate::error::Result;
use crate::layout;
use crate::paint::{self, PaintPlan};
use crate::pixmap::Pixmap;
use crate::primitives::{Color, Padding, ResolvedSize};
use crate::style::{ScaleMode, StyleInputs, TextSize};
use crate::surface::Surface;
use crate::text::{CosmicMeasurer, TextMeasurer, TextMetrics};

pub struct ImageLabelView {
    style: StyleInputs,
    padding: Padding,
    metrics: TextMetrics,
    measurer: Box<dyn TextMeasurer>,
}

impl ImageLabelView {
    /// Create a view that measures text with cosmic-text.
    pub fn new(style: StyleInputs) -> Self {
        Self::with_measurer(style, Box::new(CosmicMeasurer::new()))
    }

    /// Create a view with a specific text measurer.
    pub fn with_measurer(style: StyleInputs, mut measurer: Box<dyn TextMeasurer>) -> Self {
        let metrics = measurer.measure(&style.title, style.font_px());
        Self {
            style,
            padding: Padding::default(),
            metrics,
            measurer,
        }
    }

    /// Set padding (builder style).
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.style.title = title.into();
        self.remeasure();
    }

    pub fn set_title_size(&mut self, size: TextSize) {
        self.style.title_size = size;
        self.remeasure();
    }

    pub fn set_title_color(&mut self, color: Color) {
        self.style.title_color = color;
    }

    pub fn set_image(&mut self, image: Option<Pixmap>) {
        self.style.image = image;
    }

    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.style.scale_mode = mode;
    }

    fn remeasure(&mut self) {
        self.metrics = self.measurer.measure(&self.style.title, self.style.font_px());
    }

    pub fn style(&self) -> &StyleInputs {
        &self.style
    }

    pub fn text_metrics(&self) -> TextMetrics {
        self.metrics
    }

    /// Layout pass: resolve the view's size under `constraints`.
    pub fn measure(&self, constraints: LayoutConstraints) -> ResolvedSize {
        layout::measure(constraints, &self.style, &self.metrics, &self.padding)
    }

    /// Compute what [`paint`](Self::paint) would draw at `size`, without drawing.
    pub fn plan(&mut self, size: ResolvedSize) -> PaintPlan {
        paint::plan(size, &self.style, &self.metrics, &self.padding, self.measurer.as_mut())
    }

    /// Paint pass at a size previously returned by [`measure`](Self::measure).
    pub fn paint(&mut self, surface: &mut dyn Surface, size: ResolvedSize) -> Result<PaintPlan> {
        paint::paint(
            surface,
            size,
            &self.style,
            &self.metrics,
            &self.padding,
            self.measurer.as_mut(),
        )
    }
}
