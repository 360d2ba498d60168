//! JSON view descriptions.
//!
//! A host that does not build [`StyleInputs`] in code can describe the view
//! in a small JSON document:
//!
//! ```json
//! {
//!   "image": "cat.png",
//!   "image_scale_type": "center_native",
//!   "title_text": "A cat",
//!   "title_text_color": "#336699",
//!   "title_text_size": { "sp": 16 },
//!   "scaled_density": 2.0,
//!   "padding": { "top": 8, "right": 8, "bottom": 8, "left": 8 }
//! }
//! ```
//!
//! Relative image paths resolve against the directory of the JSON file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::pixmap::Pixmap;
use crate::primitives::{Color, Padding};
use crate::style::{ScaleMode, StyleInputs, TextFit, TextSize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaddingConfig {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl From<PaddingConfig> for Padding {
    fn from(p: PaddingConfig) -> Self {
        Padding::new(p.top, p.right, p.bottom, p.left)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub image: Option<PathBuf>,
    pub image_scale_type: ScaleMode,
    pub title_text: String,
    pub title_text_color: String,
    pub title_text_size: TextSize,
    pub scaled_density: f32,
    pub text_fit: TextFit,
    pub padding: PaddingConfig,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            image: None,
            image_scale_type: ScaleMode::default(),
            title_text: String::new(),
            title_text_color: "#000000".to_string(),
            title_text_size: TextSize::default(),
            scaled_density: 1.0,
            text_fit: TextFit::default(),
            padding: PaddingConfig::default(),
        }
    }
}

impl ViewConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Decode the image and build style inputs.
    ///
    /// Relative image paths are joined onto `base_dir`.
    pub fn into_style(self, base_dir: impl AsRef<Path>) -> Result<(StyleInputs, Padding)> {
        let mut style = StyleInputs::new()
            .scale_mode(self.image_scale_type)
            .title(self.title_text)
            .title_color(Color::from_hex(&self.title_text_color)?)
            .title_size(self.title_text_size)
            .scaled_density(self.scaled_density)
            .text_fit(self.text_fit);

        if let Some(path) = self.image {
            let path = if path.is_relative() { base_dir.as_ref().join(path) } else { path };
            tracing::debug!(path = %path.display(), "decoding image");
            style = style.image(Pixmap::open(&path)?);
        }

        Ok((style, self.padding.into()))
    }
}
