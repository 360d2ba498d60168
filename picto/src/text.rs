//! Text measurement and end-ellipsis truncation.
//!
//! The view measures its title once per text/size change and reuses the
//! resulting [`TextMetrics`] for every layout and paint pass. Two measurers
//! are provided: [`CosmicMeasurer`] shapes with cosmic-text against the
//! system fonts, [`MonospaceMeasurer`] is a font-independent estimate.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use lru::LruCache;
use unicode_width::UnicodeWidthChar;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "\u{2026}";

// Cell metrics for the monospace estimate, at a 14px base size.
pub const CHAR_WIDTH: f32 = 8.4;
pub const LINE_HEIGHT: f32 = 18.0;
pub const BASE_FONT_SIZE: f32 = 14.0;

/// Bounding box of a rendered string, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct TextMetrics {
    pub width: u32,
    pub height: u32,
}

impl TextMetrics {
    pub const ZERO: Self = Self { width: 0, height: 0 };

    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Round a fractional extent up to whole pixels.
#[inline]
fn ceil_px(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 { value.ceil() as u32 } else { 0 }
}

/// Measures strings at a given font size.
pub trait TextMeasurer {
    /// Horizontal advance of `text` in fractional pixels.
    fn advance(&mut self, text: &str, font_size: f32) -> f32;

    /// Bounding box of `text`. Empty text measures `(0, 0)`.
    fn measure(&mut self, text: &str, font_size: f32) -> TextMetrics;

    /// Truncate `text` at the end so that it fits in `available` pixels.
    ///
    /// Text that already fits is returned unchanged. Otherwise the result is
    /// the longest prefix (on a char boundary) followed by [`ELLIPSIS`] that
    /// fits. If not even the ellipsis fits, the result is empty.
    fn ellipsize(&mut self, text: &str, font_size: f32, available: f32) -> String {
        if text.is_empty() || self.advance(text, font_size) <= available {
            return text.to_string();
        }
        let ellipsis = self.advance(ELLIPSIS, font_size);
        if ellipsis > available {
            return String::new();
        }

        // Byte offset where each char starts: prefix of k chars is `..ends[k]`.
        let ends: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let mut lo = 0;
        let mut hi = ends.len() - 1;
        while lo < hi {
            let mid = (lo + hi + 1) / 2;
            if self.advance(&text[..ends[mid]], font_size) + ellipsis <= available {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }

        let mut out = String::with_capacity(ends[lo] + ELLIPSIS.len());
        out.push_str(&text[..ends[lo]]);
        out.push_str(ELLIPSIS);
        out
    }
}

// =========================================================================
// MonospaceMeasurer
// =========================================================================

/// Estimate display width in cell units (1 for Latin, 2 for CJK, 0 for combining marks).
pub(crate) fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

/// Cell-count estimate that scales linearly with font size.
///
/// Independent of installed fonts, so layouts are reproducible.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasurer {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            char_width: CHAR_WIDTH,
            line_height: LINE_HEIGHT,
        }
    }
}

impl MonospaceMeasurer {
    fn scale(&self, font_size: f32) -> f32 {
        font_size / BASE_FONT_SIZE
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn advance(&mut self, text: &str, font_size: f32) -> f32 {
        unicode_display_width(text) * self.char_width * self.scale(font_size)
    }

    fn measure(&mut self, text: &str, font_size: f32) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::ZERO;
        }
        TextMetrics {
            width: ceil_px(self.advance(text, font_size)),
            height: ceil_px(self.line_height * self.scale(font_size)),
        }
    }
}

// =========================================================================
// CosmicMeasurer
// =========================================================================

/// Global font system (expensive to create, shared across measurers and surfaces).
static FONT_SYSTEM: OnceLock<Mutex<FontSystem>> = OnceLock::new();

pub(crate) fn font_system() -> MutexGuard<'static, FontSystem> {
    FONT_SYSTEM
        .get_or_init(|| Mutex::new(FontSystem::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Line metrics used for every shaped title.
#[inline]
pub(crate) fn line_metrics(font_size: f32) -> Metrics {
    Metrics::new(font_size, font_size * 1.2)
}

/// Attributes used for every shaped title.
#[inline]
pub(crate) fn title_attrs() -> Attrs<'static> {
    Attrs::new().family(Family::SansSerif)
}

/// Shape a single title string into a buffer.
pub(crate) fn shape_buffer(font_system: &mut FontSystem, text: &str, font_size: f32) -> Buffer {
    let mut buffer = Buffer::new(font_system, line_metrics(font_size));
    buffer.set_size(font_system, Some(f32::MAX), Some(f32::MAX));
    buffer.set_text(font_system, text, title_attrs(), Shaping::Advanced);
    buffer.shape_until_scroll(font_system, false);
    buffer
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    size_bits: u32,
}

impl CacheKey {
    fn new(text: &str, font_size: f32) -> Self {
        Self {
            text: text.to_string(),
            size_bits: font_size.to_bits(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Shaped {
    width: f32,
    height: f32,
}

/// Measures with cosmic-text shaping, caching results per (text, size).
pub struct CosmicMeasurer {
    cache: LruCache<CacheKey, Shaped>,
}

impl CosmicMeasurer {
    /// Create a measurer with default cache size.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a measurer with the given cache capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn shaped(&mut self, text: &str, font_size: f32) -> Shaped {
        let key = CacheKey::new(text, font_size);
        if let Some(cached) = self.cache.get(&key) {
            return *cached;
        }
        let shaped = Self::shape_uncached(text, font_size);
        self.cache.put(key, shaped);
        shaped
    }

    fn shape_uncached(text: &str, font_size: f32) -> Shaped {
        let mut font_system = font_system();
        let buffer = shape_buffer(&mut font_system, text, font_size);

        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        let mut glyphs = 0;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
            glyphs += run.glyphs.len();
        }

        // No usable fonts: fall back to a rough per-char estimate.
        if glyphs == 0 && !text.is_empty() {
            width = text.chars().count() as f32 * font_size * 0.6;
            height = font_size * 1.2;
        }

        Shaped { width, height }
    }
}

impl Default for CosmicMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CosmicMeasurer {
    fn advance(&mut self, text: &str, font_size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.shaped(text, font_size).width
    }

    fn measure(&mut self, text: &str, font_size: f32) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::ZERO;
        }
        let shaped = self.shaped(text, font_size);
        TextMetrics {
            width: ceil_px(shaped.width),
            height: ceil_px(shaped.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_measure_scales_with_font_size() {
        let mut m = MonospaceMeasurer::default();
        assert_eq!(m.measure("abcde", 14.0), TextMetrics::new(42, 18));
        assert_eq!(m.measure("abcde", 28.0), TextMetrics::new(84, 36));
    }

    #[test]
    fn empty_text_measures_zero() {
        assert_eq!(MonospaceMeasurer::default().measure("", 16.0), TextMetrics::ZERO);
        assert_eq!(CosmicMeasurer::new().measure("", 16.0), TextMetrics::ZERO);
    }

    #[test]
    fn wide_chars_take_two_cells() {
        let mut m = MonospaceMeasurer::default();
        assert_eq!(m.advance("日本", 14.0), 4.0 * CHAR_WIDTH);
    }

    #[test]
    fn ellipsize_keeps_text_that_fits() {
        let mut m = MonospaceMeasurer::default();
        assert_eq!(m.ellipsize("hello", 14.0, 43.0), "hello");
        assert_eq!(m.ellipsize("", 14.0, -5.0), "");
    }

    #[test]
    fn ellipsize_truncates_at_end() {
        let mut m = MonospaceMeasurer::default();
        // Five and a half cells: 4 chars + the ellipsis.
        let available = 5.5 * CHAR_WIDTH;
        let out = m.ellipsize("hello world", 14.0, available);
        assert_eq!(out, "hell\u{2026}");
        assert!(m.advance(&out, 14.0) <= available);
    }

    #[test]
    fn ellipsize_respects_char_boundaries() {
        let mut m = MonospaceMeasurer::default();
        // Each CJK char is two cells, so only two fit beside the ellipsis.
        let out = m.ellipsize("日本語テキスト", 14.0, 5.5 * CHAR_WIDTH);
        assert_eq!(out, "日本\u{2026}");
    }

    #[test]
    fn ellipsize_without_room_for_marker_is_empty() {
        let mut m = MonospaceMeasurer::default();
        assert_eq!(m.ellipsize("hello", 14.0, CHAR_WIDTH / 2.0), "");
        assert_eq!(m.ellipsize("hello", 14.0, -10.0), "");
    }

    #[test]
    fn ellipsize_marker_only() {
        let mut m = MonospaceMeasurer::default();
        assert_eq!(m.ellipsize("hello", 14.0, CHAR_WIDTH * 1.5), ELLIPSIS);
    }

    #[test]
    fn cosmic_cache_hit() {
        let mut m = CosmicMeasurer::new();
        let first = m.measure("Hello", 16.0);
        assert_eq!(m.cache_len(), 1);

        let second = m.measure("Hello", 16.0);
        assert_eq!(m.cache_len(), 1);
        assert_eq!(first, second);
        assert!(first.width > 0);
        assert!(first.height > 0);
    }

    #[test]
    fn cosmic_different_sizes_different_cache() {
        let mut m = CosmicMeasurer::new();
        let _ = m.measure("Hello", 14.0);
        let _ = m.measure("Hello", 16.0);
        assert_eq!(m.cache_len(), 2);
    }

    #[test]
    fn cache_key_compares_full_text() {
        assert_eq!(CacheKey::new("ab", 14.0), CacheKey::new("ab", 14.0));
        assert_ne!(CacheKey::new("ab", 14.0), CacheKey::new("ba", 14.0));
        assert_ne!(CacheKey::new("ab", 14.0), CacheKey::new("ab", 15.0));

        let mut m = CosmicMeasurer::new();
        let short = m.measure("i", 16.0);
        let long = m.measure("iiiiiiii", 16.0);
        assert_eq!(m.cache_len(), 2);
        assert!(long.width > short.width);
    }
}
