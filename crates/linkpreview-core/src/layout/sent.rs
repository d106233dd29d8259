//! Sent-mode layout: hero and thumbnail sub-modes.

use super::{PlacedLabel, PreviewLayout, centered};
use crate::geometry::{Point, Rect, Size};
use crate::labels::{Label, sent_domain_label, sent_title_label};
use crate::metrics::{
    HERO_H_MARGIN, HERO_MAX_HEIGHT_FRACTION, HERO_MIN_HEIGHT_FRACTION, HERO_V_MARGIN,
    NON_HERO_H_MARGIN, NON_HERO_H_SPACING, NON_HERO_IMAGE_SIZE, NON_HERO_V_MARGIN,
    SENT_VERTICAL_SPACING,
};
use crate::mode::{PreviewMode, SentLayout};
use crate::state::PreviewState;
use crate::text::TextMeasurer;

/// Size of the hero image for a bubble of `max_width`.
///
/// The image always spans the full width; its height follows the aspect
/// ratio, clamped to `[0.5, 1.0] * max_width`. A zero-width image uses the
/// lower bound instead of dividing by zero.
#[must_use]
pub fn hero_image_size(max_width: f32, natural_size: Size) -> Size {
    let min_height = max_width * HERO_MIN_HEIGHT_FRACTION;
    let max_height = max_width * HERO_MAX_HEIGHT_FRACTION;
    let raw_height = if natural_size.width > 0.0 {
        max_width * natural_size.height / natural_size.width
    } else {
        min_height
    };
    Size::new(max_width, raw_height.max(min_height).min(max_height)).ceil()
}

/// Title over domain, each wrapped independently at the same width.
struct TextStack {
    title: Option<(Label, Size)>,
    domain: (Label, Size),
    size: Size,
}

impl TextStack {
    fn measure(state: &PreviewState, max_width: f32, measurer: &impl TextMeasurer) -> Self {
        let domain = sent_domain_label(state);
        let domain_size = domain.measure(measurer, max_width);
        let mut size = domain_size;

        let title = sent_title_label(state).map(|label| {
            let title_size = label.measure(measurer, max_width);
            size.width = size.width.max(title_size.width);
            size.height += title_size.height + SENT_VERTICAL_SPACING;
            (label, title_size)
        });

        Self {
            title,
            domain: (domain, domain_size),
            size,
        }
    }

    fn place(self, origin: Point, layout: &mut PreviewLayout) {
        let mut y = origin.y;
        if let Some((label, size)) = self.title {
            layout.title = Some(PlacedLabel {
                frame: Rect::from_origin_size(Point::new(origin.x, y), size),
                label,
            });
            y += size.height + SENT_VERTICAL_SPACING;
        }
        let (label, size) = self.domain;
        layout.domain = Some(PlacedLabel {
            frame: Rect::from_origin_size(Point::new(origin.x, y), size),
            label,
        });
    }
}

pub(super) fn layout(
    state: &PreviewState,
    sub_mode: SentLayout,
    max_width: f32,
    measurer: &impl TextMeasurer,
) -> PreviewLayout {
    match sub_mode {
        SentLayout::Hero => hero(state, max_width, measurer),
        SentLayout::Thumbnail => non_hero(state, true, max_width, measurer),
        SentLayout::TextOnly => non_hero(state, false, max_width, measurer),
    }
}

fn hero(state: &PreviewState, max_width: f32, measurer: &impl TextMeasurer) -> PreviewLayout {
    let natural_size = state.natural_image_size().unwrap_or(Size::ZERO);
    let image_size = hero_image_size(max_width, natural_size);
    let text = TextStack::measure(state, max_width - 2.0 * HERO_H_MARGIN, measurer);

    let body_height = text.size.height + 2.0 * HERO_V_MARGIN;
    let size = Size::new(max_width, image_size.height + body_height).ceil();

    let mut layout = PreviewLayout::empty(PreviewMode::Sent(SentLayout::Hero), size);
    let image_frame = Rect::from_origin_size(Point::ORIGIN, image_size);
    layout.image = Some(image_frame);
    layout.hero_image_border = Some(image_frame);
    layout.body_border = Some(Rect::new(0.0, image_size.height, size.width, body_height));
    text.place(
        Point::new(HERO_H_MARGIN, image_size.height + HERO_V_MARGIN),
        &mut layout,
    );
    layout
}

fn non_hero(
    state: &PreviewState,
    has_image: bool,
    max_width: f32,
    measurer: &impl TextMeasurer,
) -> PreviewLayout {
    let image_column = NON_HERO_IMAGE_SIZE + NON_HERO_H_SPACING;

    let mut max_text_width = max_width - 2.0 * NON_HERO_H_MARGIN;
    if has_image {
        max_text_width -= image_column;
    }
    let text = TextStack::measure(state, max_text_width, measurer);

    let mut content = text.size;
    if has_image {
        content.width += image_column;
        content.height = content.height.max(NON_HERO_IMAGE_SIZE);
    }
    let size = Size::new(
        content.width + 2.0 * NON_HERO_H_MARGIN,
        content.height + 2.0 * NON_HERO_V_MARGIN,
    )
    .ceil();

    let sub_mode = if has_image {
        SentLayout::Thumbnail
    } else {
        SentLayout::TextOnly
    };
    let mut layout = PreviewLayout::empty(PreviewMode::Sent(sub_mode), size);
    layout.body_border = Some(Rect::from_origin_size(Point::ORIGIN, size));

    let mut text_x = NON_HERO_H_MARGIN;
    if has_image {
        layout.image = Some(Rect::new(
            NON_HERO_H_MARGIN,
            NON_HERO_V_MARGIN + centered(content.height, NON_HERO_IMAGE_SIZE),
            NON_HERO_IMAGE_SIZE,
            NON_HERO_IMAGE_SIZE,
        ));
        text_x += image_column;
    }
    let text_y = NON_HERO_V_MARGIN + centered(content.height, text.size.height);
    text.place(Point::new(text_x, text_y), &mut layout);
    layout
}
