//! Style inputs for an image-and-title view.
//!
//! This is declarative: it doesn't compute layout until the view does.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pixmap::Pixmap;
use crate::primitives::Color;

/// Default title size, in scale-independent pixels.
pub const DEFAULT_TITLE_SIZE_SP: f32 = 16.0;

/// How the image is placed inside its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Stretch to fill the image region exactly.
    #[default]
    FitStretch,
    /// Native pixel size, centered above the title band.
    CenterNative,
}

impl ScaleMode {
    /// Decode a host-supplied enum value (`0` stretch, `1` center).
    pub fn from_raw(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::FitStretch),
            1 => Ok(Self::CenterNative),
            other => Err(Error::UnknownScaleMode(other)),
        }
    }
}

/// What the title's fit test compares the measured text width against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextFit {
    /// Full resolved view width, padding included.
    ///
    /// Text slightly wider than the padded content box is still centered and
    /// may overlap the padding.
    #[default]
    ViewWidth,
    /// Resolved width minus horizontal padding.
    ContentWidth,
}

/// A font size, either in device pixels or scale-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    Px(f32),
    Sp(f32),
}

impl Default for TextSize {
    fn default() -> Self {
        Self::Sp(DEFAULT_TITLE_SIZE_SP)
    }
}

impl TextSize {
    /// Resolve to whole device pixels.
    ///
    /// Rounds to nearest, but never rounds a positive size down to zero.
    pub fn to_px(self, scaled_density: f32) -> f32 {
        let raw = match self {
            Self::Px(px) => px,
            Self::Sp(sp) => sp * scaled_density,
        };
        if !raw.is_finite() || raw <= 0.0 {
            return 0.0;
        }
        raw.round().max(1.0)
    }
}

/// Everything the layout and paint passes read. Immutable per pass.
#[derive(Debug, Clone)]
pub struct StyleInputs {
    /// Decoded image. Required for painting; measures as `(0, 0)` when absent.
    pub image: Option<Pixmap>,
    pub scale_mode: ScaleMode,
    pub title: String,
    pub title_color: Color,
    pub title_size: TextSize,
    /// Multiplier from sp to device pixels.
    pub scaled_density: f32,
    pub text_fit: TextFit,
}

impl Default for StyleInputs {
    fn default() -> Self {
        Self {
            image: None,
            scale_mode: ScaleMode::default(),
            title: String::new(),
            title_color: Color::BLACK,
            title_size: TextSize::default(),
            scaled_density: 1.0,
            text_fit: TextFit::default(),
        }
    }
}

impl StyleInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image.
    pub fn image(mut self, image: Pixmap) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the image scale mode.
    pub fn scale_mode(mut self, mode: ScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }

    /// Set the title text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the title color.
    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    /// Set the title font size.
    pub fn title_size(mut self, size: TextSize) -> Self {
        self.title_size = size;
        self
    }

    /// Set the sp-to-pixel multiplier.
    pub fn scaled_density(mut self, density: f32) -> Self {
        self.scaled_density = density;
        self
    }

    /// Choose what the title fit test compares against.
    pub fn text_fit(mut self, fit: TextFit) -> Self {
        self.text_fit = fit;
        self
    }

    /// Title font size in device pixels.
    pub fn font_px(&self) -> f32 {
        self.title_size.to_px(self.scaled_density)
    }

    /// Native image size, `(0, 0)` when there is no image.
    pub fn image_size(&self) -> (u32, u32) {
        self.image
            .as_ref()
            .map_or((0, 0), |img| (img.width(), img.height()))
    }
}
