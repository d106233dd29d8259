//! Draft preview: metadata fetched while composing.

use tracing::warn;

use super::image::{ImageState, PreviewImage, load_preview_image};
use super::normalized_title;
use crate::error::Result;
use crate::record::LinkPreviewDraft;

/// A preview the sender has not sent yet.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPreview {
    draft: LinkPreviewDraft,
}

impl DraftPreview {
    /// Wraps fetched draft metadata.
    #[must_use]
    pub const fn new(draft: LinkPreviewDraft) -> Self {
        Self { draft }
    }

    /// The underlying draft.
    #[must_use]
    pub const fn draft(&self) -> &LinkPreviewDraft {
        &self.draft
    }

    /// The previewed URL.
    #[must_use]
    pub fn url_string(&self) -> &str {
        &self.draft.url_string
    }

    /// Domain derived from the URL.
    #[must_use]
    pub fn display_domain(&self) -> Option<String> {
        let domain = self.draft.display_domain();
        if domain.is_none() {
            warn!("Missing display domain for {}", self.draft.url_string);
        }
        domain
    }

    /// Page title, `None` for missing or blank titles.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        normalized_title(self.draft.title.as_deref())
    }

    /// Drafts only know whether a local file exists; they are never
    /// loading or invalid.
    #[must_use]
    pub const fn image_state(&self) -> ImageState {
        if self.draft.image_file_path.is_some() {
            ImageState::Loaded
        } else {
            ImageState::None
        }
    }

    /// Opens the local image file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ImageLoad`] if the file cannot be read.
    pub fn image(&self) -> Result<Option<PreviewImage>> {
        debug_assert!(
            self.image_state().is_loaded(),
            "image() requires a loaded image state"
        );
        let Some(path) = self.draft.image_file_path.as_deref() else {
            return Ok(None);
        };
        load_preview_image(path, None).map(Some)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn image_state_follows_file_path() {
        let with_image =
            DraftPreview::new(LinkPreviewDraft::new("https://a.example").with_image_file_path("/x"));
        let without_image = DraftPreview::new(LinkPreviewDraft::new("https://a.example"));

        assert_eq!(with_image.image_state(), ImageState::Loaded);
        assert_eq!(without_image.image_state(), ImageState::None);
    }

    #[test]
    fn accessors() {
        let draft = DraftPreview::new(
            LinkPreviewDraft::new("https://Blog.Example.com/post/1").with_title("   "),
        );
        assert_eq!(draft.url_string(), "https://Blog.Example.com/post/1");
        assert_eq!(draft.display_domain(), Some("blog.example.com".to_string()));
        assert_eq!(draft.title(), None);
    }

    #[test]
    fn image_probes_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");
        image::RgbImage::new(8, 5).save(&path).unwrap();

        let draft =
            DraftPreview::new(LinkPreviewDraft::new("https://a.example").with_image_file_path(&path));
        let image = draft.image().unwrap().unwrap();
        assert_eq!(image.natural_size(), Size::new(8.0, 5.0));
    }

    #[test]
    fn unreadable_image_is_a_hard_failure() {
        let dir = tempfile::tempdir().unwrap();
        let draft = DraftPreview::new(
            LinkPreviewDraft::new("https://a.example")
                .with_image_file_path(dir.path().join("missing.png")),
        );
        assert!(draft.image().is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "image() requires a loaded image state")]
    fn image_without_file_panics_in_debug() {
        let draft = DraftPreview::new(LinkPreviewDraft::new("https://a.example"));
        let _ = draft.image();
    }
}
