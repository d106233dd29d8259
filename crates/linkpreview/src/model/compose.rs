//! Compose bar: the URL being typed and its approval preview.

use linkpreview_core::{
    DraftPreview, GesturePhase, GlyphMeasurer, LinkPreviewDraft, LinkPreviewView, Point,
    PreviewDelegate, PreviewState, TapOutcome,
};
use tracing::{debug, info};

/// Receives the approval row's cancel.
#[derive(Debug, Default)]
pub struct ComposeDelegate {
    cancel_requested: bool,
}

impl ComposeDelegate {
    /// Returns and resets the pending cancel request.
    pub fn take_cancel(&mut self) -> bool {
        std::mem::take(&mut self.cancel_requested)
    }
}

impl PreviewDelegate for ComposeDelegate {
    fn can_cancel(&self) -> bool {
        true
    }

    fn did_cancel(&mut self) {
        self.cancel_requested = true;
    }
}

/// State of the compose bar.
#[derive(Debug)]
pub struct ComposeState {
    /// Text in the URL field.
    pub url_input: String,
    /// Approval preview above the field.
    pub preview: LinkPreviewView<ComposeDelegate>,
    /// Last cursor position over the approval row, in preview coordinates.
    pub cursor: Option<Point>,
    /// Incremented on every fetch and cancel so late results are dropped.
    generation: u64,
}

impl ComposeState {
    /// Creates an empty compose bar laid out in `width`.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            url_input: String::new(),
            preview: LinkPreviewView::new(
                Some(ComposeDelegate::default()),
                GlyphMeasurer::default(),
                width,
            ),
            cursor: None,
            generation: 0,
        }
    }

    /// Shows the loading row and returns the generation the fetch belongs to.
    pub fn begin_fetch(&mut self) -> linkpreview_core::Result<u64> {
        self.generation += 1;
        self.preview.clear_state();
        self.preview.set_state(PreviewState::Loading)?;
        debug!(generation = self.generation, "fetching link preview");
        Ok(self.generation)
    }

    /// Replaces the loading row with the fetched draft.
    ///
    /// Returns false if the fetch was superseded or cancelled.
    pub fn accept_draft(
        &mut self,
        generation: u64,
        draft: LinkPreviewDraft,
    ) -> linkpreview_core::Result<bool> {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale preview");
            return Ok(false);
        }
        self.preview.clear_state();
        self.preview
            .set_state(PreviewState::Draft(DraftPreview::new(draft)))?;
        Ok(true)
    }

    /// Clears the loading row after a failed fetch.
    ///
    /// Returns false if the fetch was already superseded.
    pub fn abandon_fetch(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.cancel();
        true
    }

    /// Drops the preview and any in-flight fetch.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.cursor = None;
        if self.preview.clear_state().is_some() {
            info!("Link preview cancelled");
        }
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.preview.state(), Some(PreviewState::Loading))
    }

    /// The draft that would be sent.
    #[must_use]
    pub fn draft(&self) -> Option<&LinkPreviewDraft> {
        match self.preview.state() {
            Some(PreviewState::Draft(draft)) => Some(draft.draft()),
            _ => None,
        }
    }

    /// Handles a tap at the last cursor position. Returns true if it cancelled.
    pub fn tap(&mut self) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        let outcome = self.preview.handle_tap(GesturePhase::Recognized, cursor);
        self.finish_cancel(outcome == TapOutcome::Cancel)
    }

    /// Handles a press of the cancel button itself. Returns true if it cancelled.
    pub fn press_cancel(&mut self) -> bool {
        self.preview.press_cancel();
        self.finish_cancel(true)
    }

    fn finish_cancel(&mut self, attempted: bool) -> bool {
        let requested = self
            .preview
            .delegate_mut()
            .is_some_and(ComposeDelegate::take_cancel);
        if attempted && requested {
            self.cancel();
            return true;
        }
        false
    }

    /// Takes the draft for sending and resets the bar.
    pub fn take_draft(&mut self) -> Option<LinkPreviewDraft> {
        let draft = self.draft().cloned()?;
        self.cancel();
        self.url_input.clear();
        Some(draft)
    }
}
