//! Approval-mode layout.
//!
//! Fixed height row: optional square image, text column, cancel button.
//! The height is UI chrome, not part of the bubble measurement contract.

use super::{PlacedLabel, PreviewLayout, centered};
use crate::geometry::{Point, Rect, Size};
use crate::labels::{approval_domain_label, approval_title_label};
use crate::metrics::{
    APPROVAL_HEIGHT, APPROVAL_SPACING, APPROVAL_TEXT_SPACING, CANCEL_BUTTON_SIZE, HAIRLINE_WIDTH,
};
use crate::mode::PreviewMode;
use crate::state::PreviewState;
use crate::text::TextMeasurer;

pub(super) fn layout(
    state: &PreviewState,
    available_width: f32,
    measurer: &impl TextMeasurer,
) -> PreviewLayout {
    let size = Size::new(available_width.max(0.0), APPROVAL_HEIGHT).ceil();
    let mut layout = PreviewLayout::empty(PreviewMode::Approval, size);

    let mut x = 0.0;
    if state.image_state().is_loaded() {
        layout.image = Some(Rect::new(0.0, 0.0, APPROVAL_HEIGHT, APPROVAL_HEIGHT));
        x = APPROVAL_HEIGHT + APPROVAL_SPACING;
    }

    let right = Rect::new(x, 0.0, (size.width - x).max(0.0), size.height);
    let cancel = Rect::new(
        (right.max_x() - CANCEL_BUTTON_SIZE).max(x),
        0.0,
        CANCEL_BUTTON_SIZE,
        CANCEL_BUTTON_SIZE,
    );
    layout.cancel_button = Some(cancel);
    layout.hairline = Some(Rect::new(
        right.min_x(),
        size.height - HAIRLINE_WIDTH,
        right.width(),
        HAIRLINE_WIDTH,
    ));

    let text_width = (cancel.min_x() - APPROVAL_SPACING - x).max(0.0);
    let title = approval_title_label(state).map(|label| {
        let size = label.measure(measurer, text_width);
        (label, size)
    });
    let domain = approval_domain_label(state).map(|label| {
        let size = label.measure(measurer, text_width);
        (label, size)
    });

    let mut text_height = 0.0;
    if let Some((_, size)) = &title {
        text_height += size.height;
    }
    if let Some((_, size)) = &domain {
        text_height += size.height;
        if title.is_some() {
            text_height += APPROVAL_TEXT_SPACING;
        }
    }

    let mut y = centered(size.height, text_height);
    if let Some((label, title_size)) = title {
        layout.title = Some(PlacedLabel {
            frame: Rect::from_origin_size(Point::new(x, y), title_size),
            label,
        });
        y += title_size.height + APPROVAL_TEXT_SPACING;
    }
    if let Some((label, domain_size)) = domain {
        layout.domain = Some(PlacedLabel {
            frame: Rect::from_origin_size(Point::new(x, y), domain_size),
            label,
        });
    }
    layout
}
