//! Layout engine: resolve the view's size from constraints and content.
//!
//! The image and the title are stacked vertically, so the desired width is
//! the wider of the two and the desired height is their sum. Padding is added
//! on both axes. Each axis is resolved independently against its constraint.

use crate::constraints::LayoutConstraints;
use crate::primitives::{Padding, ResolvedSize};
use crate::style::StyleInputs;
use crate::text::TextMetrics;

/// Content-driven size before constraints are applied.
pub fn intrinsic_size(style: &StyleInputs, text: &TextMetrics, padding: &Padding) -> ResolvedSize {
    let (image_width, image_height) = style.image_size();
    ResolvedSize {
        width: padding
            .horizontal()
            .saturating_add(image_width.max(text.width)),
        height: padding
            .vertical()
            .saturating_add(image_height)
            .saturating_add(text.height),
    }
}

/// Resolve the final size for one layout pass.
///
/// `Exact` axes take the given size regardless of content. `AtMost` axes take
/// the intrinsic size, capped at the bound. A missing image contributes
/// nothing to the intrinsic size.
pub fn measure(
    constraints: LayoutConstraints,
    style: &StyleInputs,
    text: &TextMetrics,
    padding: &Padding,
) -> ResolvedSize {
    let desired = intrinsic_size(style, text, padding);

    let width = constraints.width.resolve(desired.width);
    tracing::trace!(
        axis = "width",
        branch = constraints.width.kind(),
        desired = desired.width,
        resolved = width,
        "measured axis"
    );

    let height = constraints.height.resolve(desired.height);
    tracing::trace!(
        axis = "height",
        branch = constraints.height.kind(),
        desired = desired.height,
        resolved = height,
        "measured axis"
    );

    tracing::debug!(width, height, "resolved view size");
    ResolvedSize { width, height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::SizeConstraint;
    use crate::pixmap::Pixmap;

    fn style_with_image(width: u32, height: u32) -> StyleInputs {
        StyleInputs::new().image(Pixmap::solid(width, height, [0, 0, 0, 255]))
    }

    #[test]
    fn exact_ignores_content() {
        let style = style_with_image(500, 500);
        let text = TextMetrics::new(900, 40);
        let size = measure(LayoutConstraints::exact(30, 20), &style, &text, &Padding::all(8));
        assert_eq!(size, ResolvedSize::new(30, 20));
    }

    #[test]
    fn at_most_width_caps_at_bound() {
        // Image wants 20, text wants 50, bound is 30.
        let style = style_with_image(20, 10);
        let text = TextMetrics::new(50, 10);
        let size = measure(LayoutConstraints::at_most(30, 100), &style, &text, &Padding::default());
        assert_eq!(size.width, 30);
    }

    #[test]
    fn at_most_width_takes_wider_content_plus_padding() {
        let style = style_with_image(10, 10);
        let text = TextMetrics::new(5, 10);
        let padding = Padding::new(0, 3, 0, 4);
        let size = measure(LayoutConstraints::at_most(100, 100), &style, &text, &padding);
        assert_eq!(size.width, 17);
    }

    #[test]
    fn at_most_height_sums_image_and_text() {
        let style = style_with_image(10, 40);
        let text = TextMetrics::new(5, 10);
        let size = measure(LayoutConstraints::at_most(100, 100), &style, &text, &Padding::default());
        assert_eq!(size.height, 50);
    }

    #[test]
    fn at_most_height_includes_vertical_padding() {
        let style = style_with_image(10, 40);
        let text = TextMetrics::new(5, 10);
        let padding = Padding::symmetric(0, 5);
        let size = measure(LayoutConstraints::at_most(100, 100), &style, &text, &padding);
        assert_eq!(size.height, 60);

        let capped = measure(LayoutConstraints::at_most(100, 55), &style, &text, &padding);
        assert_eq!(capped.height, 55);
    }

    #[test]
    fn axes_resolve_independently() {
        let style = style_with_image(10, 40);
        let text = TextMetrics::new(5, 10);
        let constraints = LayoutConstraints::new(SizeConstraint::Exact(200), SizeConstraint::AtMost(100));
        let size = measure(constraints, &style, &text, &Padding::default());
        assert_eq!(size, ResolvedSize::new(200, 50));
    }

    #[test]
    fn missing_image_measures_text_only() {
        let style = StyleInputs::new();
        let text = TextMetrics::new(42, 18);
        let size = measure(LayoutConstraints::at_most(100, 100), &style, &text, &Padding::all(2));
        assert_eq!(size, ResolvedSize::new(46, 22));
    }

    #[test]
    fn empty_content_is_just_padding() {
        let size = measure(
            LayoutConstraints::at_most(100, 100),
            &StyleInputs::new(),
            &TextMetrics::ZERO,
            &Padding::new(1, 2, 3, 4),
        );
        assert_eq!(size, ResolvedSize::new(6, 4));
    }
}
