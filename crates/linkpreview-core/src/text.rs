//! Text measurement.
//!
//! The layout engine never shapes text itself. It asks a [`TextMeasurer`]
//! how large a label would be when wrapped at a given width, the same
//! question a toolkit label answers with its "size that fits".

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use crate::geometry::Size;

/// Font weight of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Regular,
    /// Medium weight.
    Medium,
}

/// How a label is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Point size.
    pub font_size: f32,
    /// Weight.
    pub weight: FontWeight,
    /// Line limit; `0` means unlimited. A limit of one truncates instead of
    /// wrapping.
    pub max_lines: usize,
}

impl TextStyle {
    /// A single-line regular style.
    #[must_use]
    pub const fn new(font_size: f32) -> Self {
        Self {
            font_size,
            weight: FontWeight::Regular,
            max_lines: 1,
        }
    }

    /// Sets the weight.
    #[must_use]
    pub const fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the line limit.
    #[must_use]
    pub const fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }
}

/// Measures the size a label needs.
pub trait TextMeasurer {
    /// Size of `text` set in `style` and wrapped at `max_width`.
    ///
    /// The result may be fractional; callers round it up.
    fn measure(&self, text: &str, style: &TextStyle, max_width: f32) -> Size;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle, max_width: f32) -> Size {
        (**self).measure(text, style, max_width)
    }
}

/// Fixed-advance measurer.
///
/// Every display column (as counted by `unicode-width`) advances by
/// `font_size * advance_ratio`; wide characters count twice. Words wrap
/// greedily with `textwrap`. Deterministic and platform independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMeasurer {
    /// Advance per column as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line height as a multiple of the font size.
    pub line_height_ratio: f32,
    /// Extra advance applied to medium-weight text.
    pub medium_weight_factor: f32,
}

impl Default for GlyphMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.55,
            line_height_ratio: 1.2,
            medium_weight_factor: 1.05,
        }
    }
}

impl GlyphMeasurer {
    fn advance(&self, style: &TextStyle) -> f32 {
        let base = style.font_size * self.advance_ratio;
        match style.weight {
            FontWeight::Regular => base,
            FontWeight::Medium => base * self.medium_weight_factor,
        }
    }
}

impl TextMeasurer for GlyphMeasurer {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )] // column counts are small and non-negative
    fn measure(&self, text: &str, style: &TextStyle, max_width: f32) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let max_width = max_width.max(0.0);
        let advance = self.advance(style);
        let columns = ((max_width / advance).floor() as usize).max(1);

        let lines: Vec<Cow<'_, str>> = if style.max_lines == 1 {
            vec![Cow::Borrowed(text)]
        } else {
            textwrap::wrap(text, columns)
        };
        let shown = match style.max_lines {
            0 => lines.len(),
            limit => lines.len().min(limit),
        };
        let widest = lines
            .iter()
            .take(shown)
            .map(|line| line.width())
            .max()
            .unwrap_or(0);

        let width = (widest as f32 * advance).min(max_width);
        let height = shown as f32 * style.font_size * self.line_height_ratio;
        Size::new(width, height)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const MEASURER: GlyphMeasurer = GlyphMeasurer {
        advance_ratio: 0.5,
        line_height_ratio: 1.0,
        medium_weight_factor: 1.0,
    };

    #[test]
    fn empty_text_has_no_size() {
        let size = MEASURER.measure("", &TextStyle::new(10.0), 100.0);
        assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn single_line_truncates_to_width() {
        // 40 columns * 5 units = 200, capped at 100.
        let text = "a".repeat(40);
        let size = MEASURER.measure(&text, &TextStyle::new(10.0), 100.0);
        assert_eq!(size, Size::new(100.0, 10.0));
    }

    #[test]
    fn short_single_line_hugs_text() {
        let size = MEASURER.measure("abcd", &TextStyle::new(10.0), 100.0);
        assert_eq!(size, Size::new(20.0, 10.0));
    }

    #[test]
    fn wraps_words_and_respects_line_limit() {
        // 20 columns per line at width 100.
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        let style = TextStyle::new(10.0).max_lines(2);
        let size = MEASURER.measure(text, &style, 100.0);
        assert_eq!(size.height, 20.0);
        assert!(size.width <= 100.0);

        let unlimited = MEASURER.measure(text, &TextStyle::new(10.0).max_lines(0), 100.0);
        assert!(unlimited.height > size.height);
    }

    #[test]
    fn wide_characters_take_two_columns() {
        let size = MEASURER.measure("日本", &TextStyle::new(10.0), 100.0);
        assert_eq!(size.width, 20.0);
    }

    #[test]
    fn medium_weight_is_wider() {
        let measurer = GlyphMeasurer::default();
        let regular = measurer.measure("headline", &TextStyle::new(17.0), 500.0);
        let medium = measurer.measure(
            "headline",
            &TextStyle::new(17.0).weight(FontWeight::Medium),
            500.0,
        );
        assert!(medium.width > regular.width);
    }

    #[test]
    fn negative_width_is_clamped() {
        let size = MEASURER.measure("abc", &TextStyle::new(10.0), -5.0);
        assert_eq!(size.width, 0.0);
        assert_eq!(size.height, 10.0);
    }
}
