//! Sent preview: a persisted record on a message.

use tracing::warn;

use super::image::{ImageState, PreviewImage, load_preview_image, resolve_image_state};
use super::normalized_title;
use crate::error::Result;
use crate::geometry::Size;
use crate::record::{Attachment, ConversationStyle, LinkPreviewRecord};

/// A preview attached to a sent or received message.
#[derive(Debug, Clone, PartialEq)]
pub struct SentPreview {
    record: LinkPreviewRecord,
    image_attachment: Option<Attachment>,
    conversation_style: ConversationStyle,
}

impl SentPreview {
    /// Wraps a persisted record with its resolved image attachment.
    #[must_use]
    pub const fn new(
        record: LinkPreviewRecord,
        image_attachment: Option<Attachment>,
        conversation_style: ConversationStyle,
    ) -> Self {
        Self {
            record,
            image_attachment,
            conversation_style,
        }
    }

    /// The underlying record.
    #[must_use]
    pub const fn record(&self) -> &LinkPreviewRecord {
        &self.record
    }

    /// The resolved image attachment.
    #[must_use]
    pub const fn image_attachment(&self) -> Option<&Attachment> {
        self.image_attachment.as_ref()
    }

    /// Layout context of the enclosing conversation.
    #[must_use]
    pub const fn conversation_style(&self) -> ConversationStyle {
        self.conversation_style
    }

    /// Widest content the enclosing bubble may hold.
    #[must_use]
    pub const fn max_message_width(&self) -> f32 {
        self.conversation_style.max_message_width
    }

    /// The previewed URL.
    #[must_use]
    pub fn url_string(&self) -> Option<&str> {
        let url = self.record.url_string.as_deref();
        if url.is_none() {
            warn!("Missing url on sent link preview");
        }
        url
    }

    /// Domain shown under the title.
    #[must_use]
    pub fn display_domain(&self) -> Option<String> {
        let domain = self.record.display_domain();
        if domain.is_none() {
            warn!("Missing display domain on sent link preview");
        }
        domain
    }

    /// Page title, `None` for missing or blank titles.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        normalized_title(self.record.title.as_deref())
    }

    /// Readiness of the image attachment.
    #[must_use]
    pub fn image_state(&self) -> ImageState {
        resolve_image_state(
            self.record.image_attachment_id.is_some(),
            self.image_attachment.as_ref(),
        )
    }

    /// Intrinsic size of the materialized image, if any.
    #[must_use]
    pub fn natural_image_size(&self) -> Option<Size> {
        self.image_attachment
            .as_ref()
            .and_then(Attachment::as_stream)
            .map(|stream| stream.natural_image_size)
    }

    /// Opens the downloaded image.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ImageLoad`] if the downloaded file cannot be read.
    pub fn image(&self) -> Result<Option<PreviewImage>> {
        debug_assert!(
            self.image_state().is_loaded(),
            "image() requires a loaded image state"
        );
        let Some(stream) = self.image_attachment.as_ref().and_then(Attachment::as_stream) else {
            warn!("Could not load image: attachment is not downloaded");
            return Ok(None);
        };
        if !stream.is_valid_image {
            return Ok(None);
        }
        let Some(path) = stream.original_file_path.as_deref() else {
            warn!("Attachment {} is missing its file path", stream.id);
            return Ok(None);
        };
        load_preview_image(path, Some(stream.natural_image_size)).map(Some)
    }
}
