//! Preview states.
//!
//! A preview is backed by one of three very different sources: nothing yet
//! (the fetch is still running), a locally fetched draft, or a persisted
//! record on a sent message. [`PreviewState`] normalizes them behind one set
//! of accessors. States are immutable values; when the underlying data
//! changes a new state is created and handed to the view.

mod draft;
mod image;
mod sent;

pub use draft::DraftPreview;
pub use image::{ImageState, PreviewImage, resolve_image_state};
pub use sent::SentPreview;

use crate::error::Result;
use crate::geometry::Size;

/// Treats empty and whitespace-only titles as missing.
fn normalized_title(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
}

/// The state a link preview view renders.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    /// Metadata is still being fetched.
    Loading,
    /// Fetched locally, awaiting the sender's approval.
    Draft(DraftPreview),
    /// Attached to a sent or received message.
    Sent(SentPreview),
}

impl PreviewState {
    /// Returns true once metadata is available.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        match self {
            Self::Loading => false,
            Self::Draft(_) | Self::Sent(_) => true,
        }
    }

    /// The previewed URL.
    #[must_use]
    pub fn url_string(&self) -> Option<&str> {
        match self {
            Self::Loading => None,
            Self::Draft(draft) => Some(draft.url_string()),
            Self::Sent(sent) => sent.url_string(),
        }
    }

    /// Domain shown under the title.
    ///
    /// Never empty for loaded states; when it is missing the failure is
    /// logged and the label renderer falls back to a generic label.
    #[must_use]
    pub fn display_domain(&self) -> Option<String> {
        match self {
            Self::Loading => None,
            Self::Draft(draft) => draft.display_domain(),
            Self::Sent(sent) => sent.display_domain(),
        }
    }

    /// Page title, `None` for missing or blank titles.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        match self {
            Self::Loading => None,
            Self::Draft(draft) => draft.title(),
            Self::Sent(sent) => sent.title(),
        }
    }

    /// Readiness of the preview image.
    #[must_use]
    pub fn image_state(&self) -> ImageState {
        match self {
            Self::Loading => ImageState::None,
            Self::Draft(draft) => draft.image_state(),
            Self::Sent(sent) => sent.image_state(),
        }
    }

    /// Intrinsic image size, known only for materialized sent attachments.
    #[must_use]
    pub fn natural_image_size(&self) -> Option<Size> {
        match self {
            Self::Sent(sent) => sent.natural_image_size(),
            Self::Loading | Self::Draft(_) => None,
        }
    }

    /// Opens the preview image.
    ///
    /// Must only be called when [`Self::image_state`] is
    /// [`ImageState::Loaded`]; debug builds panic otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ImageLoad`] if the image file cannot be read.
    pub fn image(&self) -> Result<Option<PreviewImage>> {
        match self {
            Self::Loading => {
                debug_assert!(false, "image() requires a loaded image state");
                Ok(None)
            }
            Self::Draft(draft) => draft.image(),
            Self::Sent(sent) => sent.image(),
        }
    }

    /// Returns the sent preview, if this is one.
    #[must_use]
    pub const fn as_sent(&self) -> Option<&SentPreview> {
        match self {
            Self::Sent(sent) => Some(sent),
            Self::Loading | Self::Draft(_) => None,
        }
    }
}

impl From<DraftPreview> for PreviewState {
    fn from(draft: DraftPreview) -> Self {
        Self::Draft(draft)
    }
}

impl From<SentPreview> for PreviewState {
    fn from(sent: SentPreview) -> Self {
        Self::Sent(sent)
    }
}
