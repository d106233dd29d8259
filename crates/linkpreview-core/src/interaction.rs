//! Tap handling for the approval row.
//!
//! The whole row listens for taps only to enlarge the cancel button's
//! target; any tap outside the enlarged area is ignored.

use crate::geometry::{Point, Rect};
use crate::layout::PreviewContent;
use crate::metrics::CANCEL_HIT_SLOP;
use crate::mode::PreviewMode;

/// Receives cancel requests from an approval preview.
pub trait PreviewDelegate {
    /// Whether the preview offers a cancel affordance.
    fn can_cancel(&self) -> bool;

    /// Called once the user confirmed a cancel.
    fn did_cancel(&mut self);
}

/// Delegate for views that never cancel (sent previews).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelegate;

impl PreviewDelegate for NoDelegate {
    fn can_cancel(&self) -> bool {
        false
    }

    fn did_cancel(&mut self) {}
}

/// Phase of a tap gesture as reported by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Touch went down.
    Began,
    /// Touch moved.
    Changed,
    /// The gesture completed as a tap.
    Recognized,
    /// The toolkit cancelled the gesture.
    Cancelled,
    /// The gesture was not a tap.
    Failed,
}

/// What a tap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tap hit the cancel area.
    Cancel,
    /// Nothing happened.
    Ignored,
}

/// The cancel button's bounds grown by the hit slop on every side.
#[must_use]
pub fn cancel_hot_area(button: Rect) -> Rect {
    button.expanded(CANCEL_HIT_SLOP)
}

/// Hit-tests a tap at `point` (preview coordinates) against `content`.
#[must_use]
pub fn hit_test(content: &PreviewContent, phase: GesturePhase, point: Point) -> TapOutcome {
    if phase != GesturePhase::Recognized || content.mode() != PreviewMode::Approval {
        return TapOutcome::Ignored;
    }
    match content.cancel_button() {
        Some(button) if cancel_hot_area(button).contains(point) => TapOutcome::Cancel,
        _ => TapOutcome::Ignored,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::layout::build_content;
    use crate::record::LinkPreviewDraft;
    use crate::state::{DraftPreview, PreviewState};
    use crate::text::GlyphMeasurer;

    fn approval_content() -> PreviewContent {
        let state = PreviewState::Draft(DraftPreview::new(LinkPreviewDraft::new(
            "https://example.com",
        )));
        build_content(&state, true, 320.0, &GlyphMeasurer::default()).unwrap()
    }

    #[test]
    fn tap_on_button_cancels() {
        let content = approval_content();
        let button = content.cancel_button().unwrap();
        let center = Point::new(button.min_x() + 12.0, button.min_y() + 12.0);
        assert_eq!(
            hit_test(&content, GesturePhase::Recognized, center),
            TapOutcome::Cancel
        );
    }

    #[test]
    fn slop_extends_target() {
        let content = approval_content();
        let button = content.cancel_button().unwrap();
        let left_of = |distance: f32| Point::new(button.min_x() - distance, button.min_y() + 5.0);

        assert_eq!(
            hit_test(&content, GesturePhase::Recognized, left_of(15.0)),
            TapOutcome::Cancel
        );
        assert_eq!(
            hit_test(&content, GesturePhase::Recognized, left_of(25.0)),
            TapOutcome::Ignored
        );
    }

    #[test]
    fn unrecognized_phases_are_ignored() {
        let content = approval_content();
        let button = content.cancel_button().unwrap();
        let point = Point::new(button.min_x() + 1.0, button.min_y() + 1.0);
        for phase in [
            GesturePhase::Began,
            GesturePhase::Changed,
            GesturePhase::Cancelled,
            GesturePhase::Failed,
        ] {
            assert_eq!(hit_test(&content, phase, point), TapOutcome::Ignored);
        }
    }

    #[test]
    fn sent_content_never_cancels() {
        let content =
            build_content(&PreviewState::Loading, false, 320.0, &GlyphMeasurer::default())
                .unwrap();
        assert_eq!(
            hit_test(&content, GesturePhase::Recognized, Point::ORIGIN),
            TapOutcome::Ignored
        );
    }

    #[test]
    fn hot_area_is_twenty_wider_each_side() {
        let area = cancel_hot_area(Rect::new(100.0, 0.0, 24.0, 24.0));
        assert_eq!(area, Rect::new(80.0, -20.0, 64.0, 64.0));
    }

    #[test]
    fn no_delegate_cannot_cancel() {
        let mut delegate = NoDelegate;
        assert!(!delegate.can_cancel());
        delegate.did_cancel();
    }
}
