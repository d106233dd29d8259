//! Input records handed over by the fetch and persistence collaborators.
//!
//! These are plain data. The state types in [`crate::state`] wrap them and
//! derive everything the view needs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::geometry::Size;

/// Derives a display domain from a URL: its lower-cased host.
///
/// Scheme-less input such as `example.com/page` is accepted.
#[must_use]
pub fn display_domain_for_url(url_string: &str) -> Option<String> {
    let trimmed = url_string.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = Url::parse(trimmed)
        .or_else(|_| Url::parse(&format!("https://{trimmed}")))
        .ok()?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_lowercase)
}

/// Identifier of a stored attachment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentId(pub String);

impl AttachmentId {
    /// Creates a new attachment identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata fetched locally while the sender is composing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkPreviewDraft {
    /// The previewed URL.
    pub url_string: String,
    /// Page title, if one was found.
    #[serde(default)]
    pub title: Option<String>,
    /// Downloaded preview image, if any.
    #[serde(default)]
    pub image_file_path: Option<PathBuf>,
}

impl LinkPreviewDraft {
    /// Creates a draft without title or image.
    #[must_use]
    pub fn new(url_string: impl Into<String>) -> Self {
        Self {
            url_string: url_string.into(),
            title: None,
            image_file_path: None,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the image file path.
    #[must_use]
    pub fn with_image_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_file_path = Some(path.into());
        self
    }

    /// Display domain derived from the URL.
    #[must_use]
    pub fn display_domain(&self) -> Option<String> {
        display_domain_for_url(&self.url_string)
    }
}

/// A persisted preview attached to a sent or received message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreviewRecord {
    /// The previewed URL.
    #[serde(default)]
    pub url_string: Option<String>,
    /// Page title.
    #[serde(default)]
    pub title: Option<String>,
    /// Domain shown under the title.
    #[serde(default)]
    pub display_domain: Option<String>,
    /// Attachment holding the preview image.
    #[serde(default)]
    pub image_attachment_id: Option<AttachmentId>,
}

impl LinkPreviewRecord {
    /// The explicit display domain, or the URL host when none was stored.
    #[must_use]
    pub fn display_domain(&self) -> Option<String> {
        self.display_domain
            .as_deref()
            .map(str::trim)
            .filter(|domain| !domain.is_empty())
            .map(str::to_string)
            .or_else(|| self.url_string.as_deref().and_then(display_domain_for_url))
    }
}

/// An attachment that is known but whose bytes have not been downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentPointer {
    /// Attachment identifier.
    pub id: AttachmentId,
}

/// An attachment whose bytes are available locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentStream {
    /// Attachment identifier.
    pub id: AttachmentId,
    /// Whether the attachment pipeline validated the bytes as an image.
    pub is_valid_image: bool,
    /// Location of the downloaded file.
    #[serde(default)]
    pub original_file_path: Option<PathBuf>,
    /// Intrinsic size of the image.
    #[serde(default)]
    pub natural_image_size: Size,
}

/// A resolved attachment, either still a pointer or materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Attachment {
    /// Not downloaded yet.
    Pointer(AttachmentPointer),
    /// Downloaded.
    Stream(AttachmentStream),
}

impl Attachment {
    /// Attachment identifier.
    #[must_use]
    pub const fn id(&self) -> &AttachmentId {
        match self {
            Self::Pointer(pointer) => &pointer.id,
            Self::Stream(stream) => &stream.id,
        }
    }

    /// Returns true while the bytes are not yet materialized.
    #[must_use]
    pub const fn is_pointer_only(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    /// Returns the materialized stream, if any.
    #[must_use]
    pub const fn as_stream(&self) -> Option<&AttachmentStream> {
        match self {
            Self::Stream(stream) => Some(stream),
            Self::Pointer(_) => None,
        }
    }
}

/// Layout context of the enclosing conversation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversationStyle {
    /// Widest content a message bubble may hold.
    pub max_message_width: f32,
}

impl ConversationStyle {
    /// Creates a conversation style.
    #[must_use]
    pub const fn new(max_message_width: f32) -> Self {
        Self { max_message_width }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod display_domain_tests {
        use super::*;

        #[test]
        fn host_of_full_url() {
            assert_eq!(
                display_domain_for_url("https://www.Example.com/path?q=1"),
                Some("www.example.com".to_string())
            );
        }

        #[test]
        fn scheme_less_url() {
            assert_eq!(
                display_domain_for_url("example.org/article"),
                Some("example.org".to_string())
            );
        }

        #[test]
        fn no_host() {
            assert_eq!(display_domain_for_url("mailto:someone@example.com"), None);
            assert_eq!(display_domain_for_url("   "), None);
        }

        #[test]
        fn record_prefers_explicit_domain() {
            let record = LinkPreviewRecord {
                url_string: Some("https://example.com".into()),
                display_domain: Some("news.example".into()),
                ..Default::default()
            };
            assert_eq!(record.display_domain(), Some("news.example".to_string()));
        }

        #[test]
        fn record_falls_back_to_url_host() {
            let record = LinkPreviewRecord {
                url_string: Some("https://signal.org/blog".into()),
                display_domain: Some(String::new()),
                ..Default::default()
            };
            assert_eq!(record.display_domain(), Some("signal.org".to_string()));
        }

        #[test]
        fn record_without_url_or_domain() {
            assert_eq!(LinkPreviewRecord::default().display_domain(), None);
        }
    }

    mod attachment_tests {
        use super::*;

        #[test]
        fn pointer_is_pointer_only() {
            let attachment = Attachment::Pointer(AttachmentPointer {
                id: AttachmentId::new("a1"),
            });
            assert!(attachment.is_pointer_only());
            assert!(attachment.as_stream().is_none());
            assert_eq!(attachment.id(), &AttachmentId::new("a1"));
        }

        #[test]
        fn deserializes_tagged_stream() {
            let json = r#"{
                "kind": "stream",
                "id": "img-7",
                "is_valid_image": true,
                "original_file_path": "/tmp/img-7.png",
                "natural_image_size": { "width": 640.0, "height": 480.0 }
            }"#;
            let attachment: Attachment = serde_json::from_str(json).unwrap();
            let stream = attachment.as_stream().unwrap();
            assert!(stream.is_valid_image);
            assert_eq!(stream.natural_image_size, Size::new(640.0, 480.0));
        }

        #[test]
        fn deserializes_sparse_record() {
            let record: LinkPreviewRecord =
                serde_json::from_str(r#"{ "url_string": "https://example.com" }"#).unwrap();
            assert_eq!(record.title, None);
            assert_eq!(record.image_attachment_id, None);
        }
    }
}
