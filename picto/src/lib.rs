//! Picto: an image-with-title view core.
//!
//! Lays out and paints a bitmap stacked above a single-line title inside a
//! bordered box. The host supplies decoded pixels, text style and per-pass
//! size constraints, and receives a resolved size plus drawing calls on a
//! [`Surface`] it provides.
//!
//! # Architecture
//!
//! ```text
//! StyleInputs + TextMetrics --measure(constraints)--> ResolvedSize
//! ResolvedSize + StyleInputs --paint(surface)-----> border, title, image
//! ```
//!
//! Both passes are pure functions of their inputs. [`ImageLabelView`] bundles
//! the inputs and keeps the title metrics current.
//!
//! # Usage
//!
//! ```ignore
//! use picto::{DisplayList, ImageLabelView, LayoutConstraints, Pixmap, StyleInputs};
//!
//! let style = StyleInputs::new().image(Pixmap::open("cat.png")?).title("A cat");
//! let mut view = ImageLabelView::new(style);
//! let size = view.measure(LayoutConstraints::at_most(320, 240));
//! let mut list = DisplayList::new();
//! view.paint(&mut list, size)?;
//! ```

// Core primitives
pub mod error;
pub mod primitives;
pub mod constraints;
pub mod pixmap;

// Text measurement (cosmic-text integration)
pub mod text;

// Inputs
pub mod style;
pub mod config;

// Layout engine and paint pipeline
pub mod layout;
pub mod paint;

// Drawing surfaces
pub mod surface;
pub mod raster;

// View component
pub mod view;

// Re-export core types
pub use error::{Error, Result};
pub use primitives::{Color, Padding, Point, Rect, ResolvedSize, Size};
pub use constraints::{LayoutConstraints, SizeConstraint};
pub use pixmap::Pixmap;
pub use text::{CosmicMeasurer, ELLIPSIS, MonospaceMeasurer, TextMeasurer, TextMetrics};
pub use style::{ScaleMode, StyleInputs, TextFit, TextSize};
pub use config::ViewConfig;
pub use layout::{intrinsic_size, measure};
pub use paint::{
    BORDER_COLOR, BORDER_STROKE_WIDTH, LayoutRects, PaintPlan, TitlePlacement, paint, plan,
};
pub use surface::{DisplayList, Primitive, Surface};
pub use raster::RasterSurface;
pub use view::ImageLabelView;
