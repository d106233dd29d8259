//! Rendering mode selection.

use tracing::debug;

use crate::geometry::Size;
use crate::metrics::HERO_MIN_IMAGE_SIZE;
use crate::state::PreviewState;

/// Sub-mode of a sent preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentLayout {
    /// Full-width image above the text.
    Hero,
    /// Square thumbnail beside the text.
    Thumbnail,
    /// Text only.
    TextOnly,
}

impl SentLayout {
    /// Picks the sub-mode for a state.
    ///
    /// Uses the image's intrinsic size. An image with no known area (zero
    /// width or height, or unknown) gets no image slot at all.
    #[must_use]
    pub fn for_state(state: &PreviewState) -> Self {
        if !state.image_state().is_loaded() {
            return Self::TextOnly;
        }
        match state.natural_image_size() {
            Some(size) if size.has_area() && is_hero_size(size) => Self::Hero,
            Some(size) if size.has_area() => Self::Thumbnail,
            _ => Self::TextOnly,
        }
    }

    /// Returns true if an image slot is shown.
    #[must_use]
    pub const fn has_image(self) -> bool {
        !matches!(self, Self::TextOnly)
    }
}

/// Returns true if an image is large enough for the hero layout.
#[must_use]
pub fn is_hero_size(natural_size: Size) -> bool {
    natural_size.width >= HERO_MIN_IMAGE_SIZE && natural_size.height >= HERO_MIN_IMAGE_SIZE
}

/// How a preview is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewMode {
    /// Activity indicator while the draft is fetched.
    Loading,
    /// Draft awaiting approval, with a cancel affordance.
    Approval,
    /// Attached to a message.
    Sent(SentLayout),
}

impl PreviewMode {
    /// Selects the mode for a view.
    ///
    /// A view without an approval delegate always renders sent content,
    /// even for a loading state; that combination is not expected and
    /// simply falls back to a text-only preview.
    #[must_use]
    pub fn select(is_approval: bool, state: &PreviewState) -> Self {
        let mode = if !is_approval {
            Self::Sent(SentLayout::for_state(state))
        } else if state.is_loaded() {
            Self::Approval
        } else {
            Self::Loading
        };
        debug!(?mode, is_approval, "selected link preview mode");
        mode
    }
}
