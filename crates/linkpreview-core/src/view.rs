//! The view holder: one current state, rebuilt on assignment.

use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::Point;
use crate::interaction::{GesturePhase, PreviewDelegate, TapOutcome, hit_test};
use crate::layout::{PreviewContent, build_content};
use crate::mode::PreviewMode;
use crate::state::PreviewState;
use crate::text::{GlyphMeasurer, TextMeasurer};

/// Holds the state a link preview renders and the content built from it.
///
/// A view with a delegate is an approval view; without one it renders sent
/// content. The state is assigned once per lifecycle: assigning over an
/// existing state is a programming error. Call [`Self::clear_state`] first
/// to start a new lifecycle.
#[derive(Debug)]
pub struct LinkPreviewView<D, M = GlyphMeasurer> {
    delegate: Option<D>,
    measurer: M,
    available_width: f32,
    tap_enabled: bool,
    state: Option<PreviewState>,
    content: Option<PreviewContent>,
}

impl<D: PreviewDelegate, M: TextMeasurer> LinkPreviewView<D, M> {
    /// Creates an empty view.
    ///
    /// Taps are only handled when the delegate can cancel at construction.
    #[must_use]
    pub fn new(delegate: Option<D>, measurer: M, available_width: f32) -> Self {
        let tap_enabled = delegate.as_ref().is_some_and(PreviewDelegate::can_cancel);
        Self {
            delegate,
            measurer,
            available_width,
            tap_enabled,
            state: None,
            content: None,
        }
    }

    /// Returns true if this is an approval view.
    #[must_use]
    pub const fn is_approval(&self) -> bool {
        self.delegate.is_some()
    }

    /// Returns true if taps are hit-tested.
    #[must_use]
    pub const fn is_tap_enabled(&self) -> bool {
        self.tap_enabled
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> Option<&PreviewState> {
        self.state.as_ref()
    }

    /// The content built from the current state.
    #[must_use]
    pub const fn content(&self) -> Option<&PreviewContent> {
        self.content.as_ref()
    }

    /// Mode of the current content.
    #[must_use]
    pub fn mode(&self) -> Option<PreviewMode> {
        self.content.as_ref().map(PreviewContent::mode)
    }

    /// The delegate.
    #[must_use]
    pub const fn delegate(&self) -> Option<&D> {
        self.delegate.as_ref()
    }

    /// The delegate, mutably.
    pub const fn delegate_mut(&mut self) -> Option<&mut D> {
        self.delegate.as_mut()
    }

    /// Assigns the state and rebuilds the content.
    ///
    /// Replacing an already-set state panics in debug builds and is ignored
    /// in release builds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ImageLoad`] if the state's image file cannot
    /// be read. The state is kept; the content stays empty.
    pub fn set_state(&mut self, state: PreviewState) -> Result<()> {
        if self.state.is_some() {
            debug_assert!(false, "link preview state may only be set once");
            warn!("Ignoring replacement of an already-set link preview state");
            return Ok(());
        }
        self.state = Some(state);
        self.rebuild()
    }

    /// Returns the view to "no state".
    pub fn clear_state(&mut self) -> Option<PreviewState> {
        self.content = None;
        self.state.take()
    }

    /// Changes the width content is laid out in and rebuilds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ImageLoad`] if the state's image file cannot
    /// be read.
    pub fn set_available_width(&mut self, available_width: f32) -> Result<()> {
        if (self.available_width - available_width).abs() < f32::EPSILON {
            return Ok(());
        }
        self.available_width = available_width;
        self.rebuild()
    }

    fn rebuild(&mut self) -> Result<()> {
        self.content = None;
        let Some(state) = self.state.as_ref() else {
            return Ok(());
        };
        let content = build_content(
            state,
            self.is_approval(),
            self.available_width,
            &self.measurer,
        )?;
        debug!(mode = ?content.mode(), size = ?content.size(), "rebuilt link preview");
        self.content = Some(content);
        Ok(())
    }

    /// Handles a tap at `point`, in preview coordinates.
    ///
    /// Forwards a cancel to the delegate when the tap lands in the cancel
    /// button's enlarged hot area.
    pub fn handle_tap(&mut self, phase: GesturePhase, point: Point) -> TapOutcome {
        if !self.tap_enabled {
            return TapOutcome::Ignored;
        }
        let Some(content) = self.content.as_ref() else {
            return TapOutcome::Ignored;
        };
        let outcome = hit_test(content, phase, point);
        if outcome == TapOutcome::Cancel
            && let Some(delegate) = self.delegate.as_mut()
        {
            delegate.did_cancel();
        }
        outcome
    }

    /// Handles a direct press of the cancel button.
    pub fn press_cancel(&mut self) {
        if self.mode() != Some(PreviewMode::Approval) {
            return;
        }
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_cancel();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::interaction::NoDelegate;
    use crate::record::{ConversationStyle, LinkPreviewDraft, LinkPreviewRecord};
    use crate::state::{DraftPreview, SentPreview};

    #[derive(Debug, Default)]
    struct RecordingDelegate {
        can_cancel: bool,
        cancels: usize,
    }

    impl PreviewDelegate for RecordingDelegate {
        fn can_cancel(&self) -> bool {
            self.can_cancel
        }

        fn did_cancel(&mut self) {
            self.cancels += 1;
        }
    }

    fn draft_state() -> PreviewState {
        PreviewState::Draft(DraftPreview::new(
            LinkPreviewDraft::new("https://example.com").with_title("Example"),
        ))
    }

    fn approval_view(can_cancel: bool) -> LinkPreviewView<RecordingDelegate> {
        LinkPreviewView::new(
            Some(RecordingDelegate {
                can_cancel,
                cancels: 0,
            }),
            GlyphMeasurer::default(),
            320.0,
        )
    }

    mod lifecycle_tests {
        use super::*;

        #[test]
        fn starts_empty() {
            let view = approval_view(true);
            assert!(view.state().is_none());
            assert!(view.content().is_none());
            assert!(view.is_approval());
        }

        #[test]
        fn loading_then_draft() {
            let mut view = approval_view(true);
            view.set_state(PreviewState::Loading).unwrap();
            assert_eq!(view.mode(), Some(PreviewMode::Loading));

            assert_eq!(view.clear_state(), Some(PreviewState::Loading));
            assert!(view.content().is_none());

            view.set_state(draft_state()).unwrap();
            assert_eq!(view.mode(), Some(PreviewMode::Approval));
        }

        #[test]
        #[cfg(debug_assertions)]
        #[should_panic(expected = "may only be set once")]
        fn replacing_state_panics_in_debug() {
            let mut view = approval_view(true);
            view.set_state(PreviewState::Loading).unwrap();
            let _ = view.set_state(draft_state());
        }

        #[test]
        fn width_change_rebuilds() {
            let mut view = approval_view(true);
            view.set_state(draft_state()).unwrap();
            view.set_available_width(400.0).unwrap();
            assert!((view.content().unwrap().size().width - 400.0).abs() < f32::EPSILON);
        }

        #[test]
        fn sent_view_without_delegate() {
            let mut view: LinkPreviewView<NoDelegate> =
                LinkPreviewView::new(None, GlyphMeasurer::default(), 300.0);
            let sent = SentPreview::new(
                LinkPreviewRecord {
                    url_string: Some("https://example.com".into()),
                    ..Default::default()
                },
                None,
                ConversationStyle::new(300.0),
            );
            view.set_state(PreviewState::Sent(sent)).unwrap();
            assert!(!view.is_approval());
            assert!(!view.is_tap_enabled());
            assert!(matches!(view.mode(), Some(PreviewMode::Sent(_))));
        }
    }

    mod tap_tests {
        use super::*;

        fn cancel_origin(view: &LinkPreviewView<RecordingDelegate>) -> Point {
            view.content().unwrap().cancel_button().unwrap().origin
        }

        #[test]
        fn tap_in_slop_cancels() {
            let mut view = approval_view(true);
            view.set_state(draft_state()).unwrap();
            let origin = cancel_origin(&view);

            let outcome = view.handle_tap(
                GesturePhase::Recognized,
                Point::new(origin.x - 15.0, origin.y + 4.0),
            );
            assert_eq!(outcome, TapOutcome::Cancel);
            assert_eq!(view.delegate().unwrap().cancels, 1);
        }

        #[test]
        fn tap_outside_slop_is_ignored() {
            let mut view = approval_view(true);
            view.set_state(draft_state()).unwrap();
            let origin = cancel_origin(&view);

            let outcome = view.handle_tap(
                GesturePhase::Recognized,
                Point::new(origin.x - 25.0, origin.y + 4.0),
            );
            assert_eq!(outcome, TapOutcome::Ignored);
            assert_eq!(view.delegate().unwrap().cancels, 0);
        }

        #[test]
        fn taps_disabled_when_delegate_cannot_cancel() {
            let mut view = approval_view(false);
            view.set_state(draft_state()).unwrap();
            let origin = cancel_origin(&view);

            let outcome = view.handle_tap(GesturePhase::Recognized, origin);
            assert_eq!(outcome, TapOutcome::Ignored);
        }

        #[test]
        fn loading_row_ignores_taps() {
            let mut view = approval_view(true);
            view.set_state(PreviewState::Loading).unwrap();
            assert_eq!(
                view.handle_tap(GesturePhase::Recognized, Point::new(300.0, 5.0)),
                TapOutcome::Ignored
            );
        }

        #[test]
        fn press_cancel_only_in_approval() {
            let mut view = approval_view(true);
            view.set_state(PreviewState::Loading).unwrap();
            view.press_cancel();
            assert_eq!(view.delegate().unwrap().cancels, 0);

            view.clear_state();
            view.set_state(draft_state()).unwrap();
            view.press_cancel();
            assert_eq!(view.delegate_mut().unwrap().cancels, 1);
        }
    }
}
