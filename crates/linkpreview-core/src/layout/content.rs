//! Content builder.
//!
//! Produces a flat list of positioned nodes for a toolkit to render. The
//! frames come straight from [`compute_layout`], so the content's size is
//! exactly what [`super::measure`] reported.

use tracing::warn;

use super::{PreviewLayout, compute_layout};
use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::labels::Label;
use crate::mode::PreviewMode;
use crate::state::{PreviewImage, PreviewState};
use crate::text::TextMeasurer;

/// A renderable element of a preview.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    /// Image, scaled to fill and cropped to its frame.
    Image {
        /// Position and size.
        frame: Rect,
        /// The image.
        image: PreviewImage,
    },
    /// Title text, primary color.
    Title {
        /// Position and size.
        frame: Rect,
        /// Text and style.
        label: Label,
    },
    /// Domain text, secondary color.
    Domain {
        /// Position and size.
        frame: Rect,
        /// Text and style.
        label: Label,
    },
    /// Activity indicator.
    Spinner {
        /// Position and size.
        frame: Rect,
    },
    /// Cancel button.
    CancelButton {
        /// Position and size.
        frame: Rect,
    },
    /// Separator stroke.
    Hairline {
        /// Position and size.
        frame: Rect,
    },
}

impl ContentNode {
    /// Frame of the node.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        match self {
            Self::Image { frame, .. }
            | Self::Title { frame, .. }
            | Self::Domain { frame, .. }
            | Self::Spinner { frame }
            | Self::CancelButton { frame }
            | Self::Hairline { frame } => *frame,
        }
    }
}

/// Stroke style of a bubble border region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderTone {
    /// Around a hero image, primary text color.
    HeroImage,
    /// Around the text body, neutral border color.
    Body,
}

/// A region the enclosing bubble strokes with its own shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderRegion {
    /// Region, in preview coordinates.
    pub frame: Rect,
    /// Stroke style.
    pub tone: BorderTone,
}

/// Built preview content.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewContent {
    mode: PreviewMode,
    size: Size,
    nodes: Vec<ContentNode>,
    borders: Vec<BorderRegion>,
}

impl PreviewContent {
    /// Mode the content was built for.
    #[must_use]
    pub const fn mode(&self) -> PreviewMode {
        self.mode
    }

    /// Total size, identical to the layout size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Nodes in paint order.
    #[must_use]
    pub fn nodes(&self) -> &[ContentNode] {
        &self.nodes
    }

    /// Regions the bubble should stroke.
    #[must_use]
    pub fn border_regions(&self) -> &[BorderRegion] {
        &self.borders
    }

    /// Frame of the cancel button, if the content has one.
    #[must_use]
    pub fn cancel_button(&self) -> Option<Rect> {
        self.nodes.iter().find_map(|node| match node {
            ContentNode::CancelButton { frame } => Some(*frame),
            _ => None,
        })
    }

    fn from_layout(state: &PreviewState, layout: PreviewLayout) -> Result<Self> {
        let mut nodes = Vec::new();

        if let Some(frame) = layout.image {
            match state.image()? {
                Some(image) => nodes.push(ContentNode::Image { frame, image }),
                None => warn!("Could not load image for link preview"),
            }
        }
        if let Some(title) = layout.title {
            nodes.push(ContentNode::Title {
                frame: title.frame,
                label: title.label,
            });
        }
        if let Some(domain) = layout.domain {
            nodes.push(ContentNode::Domain {
                frame: domain.frame,
                label: domain.label,
            });
        }
        if let Some(frame) = layout.spinner {
            nodes.push(ContentNode::Spinner { frame });
        }
        if let Some(frame) = layout.cancel_button {
            nodes.push(ContentNode::CancelButton { frame });
        }
        if let Some(frame) = layout.hairline {
            nodes.push(ContentNode::Hairline { frame });
        }

        let borders = [
            layout.hero_image_border.map(|frame| BorderRegion {
                frame,
                tone: BorderTone::HeroImage,
            }),
            layout.body_border.map(|frame| BorderRegion {
                frame,
                tone: BorderTone::Body,
            }),
        ]
        .into_iter()
        .flatten()
        .collect();

        Ok(Self {
            mode: layout.mode,
            size: layout.size,
            nodes,
            borders,
        })
    }
}

/// Builds the content for `state`.
///
/// Views without an approval delegate render sent content; approval views
/// render the loading indicator until the state is loaded.
///
/// # Errors
///
/// Returns [`crate::Error::ImageLoad`] if the state reports a loaded image
/// whose file cannot be read.
pub fn build_content(
    state: &PreviewState,
    is_approval: bool,
    available_width: f32,
    measurer: &impl TextMeasurer,
) -> Result<PreviewContent> {
    let mode = PreviewMode::select(is_approval, state);
    if matches!(mode, PreviewMode::Sent(_)) && state.as_sent().is_none() {
        warn!("Building sent link preview content from a non-sent state");
    }
    let layout = compute_layout(state, mode, available_width, measurer);
    PreviewContent::from_layout(state, layout)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::layout::measure;
    use crate::mode::SentLayout;
    use crate::record::{
        Attachment, AttachmentId, AttachmentStream, ConversationStyle, LinkPreviewDraft,
        LinkPreviewRecord,
    };
    use crate::state::{DraftPreview, SentPreview};
    use crate::text::GlyphMeasurer;

    fn sent(path: Option<std::path::PathBuf>, natural: Size) -> PreviewState {
        let record = LinkPreviewRecord {
            url_string: Some("https://example.com/a".into()),
            title: Some("A title long enough to wrap onto a second line somewhere".into()),
            display_domain: None,
            image_attachment_id: Some(AttachmentId::new("img")),
        };
        let stream = Attachment::Stream(AttachmentStream {
            id: AttachmentId::new("img"),
            is_valid_image: true,
            original_file_path: path,
            natural_image_size: natural,
        });
        PreviewState::Sent(SentPreview::new(
            record,
            Some(stream),
            ConversationStyle::new(280.0),
        ))
    }

    #[test]
    fn sent_content_matches_measurement() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.png");
        image::RgbImage::new(2, 2).save(&path).unwrap();
        let measurer = GlyphMeasurer::default();

        for natural in [Size::new(640.0, 480.0), Size::new(64.0, 64.0)] {
            let state = sent(Some(path.clone()), natural);
            let content = build_content(&state, false, 280.0, &measurer).unwrap();
            assert_eq!(content.size(), measure(&state, 280.0, &measurer));
            assert!(matches!(content.nodes()[0], ContentNode::Image { .. }));
        }
    }

    #[test]
    fn hero_exposes_both_border_regions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.png");
        image::RgbImage::new(2, 2).save(&path).unwrap();

        let content = build_content(
            &sent(Some(path), Size::new(640.0, 480.0)),
            false,
            280.0,
            &GlyphMeasurer::default(),
        )
        .unwrap();
        assert_eq!(content.mode(), PreviewMode::Sent(SentLayout::Hero));
        let tones: Vec<_> = content.border_regions().iter().map(|b| b.tone).collect();
        assert_eq!(tones, vec![BorderTone::HeroImage, BorderTone::Body]);
    }

    #[test]
    fn missing_file_path_skips_image_but_keeps_slot() {
        let state = sent(None, Size::new(64.0, 64.0));
        let measurer = GlyphMeasurer::default();
        let content = build_content(&state, false, 280.0, &measurer).unwrap();
        assert!(
            !content
                .nodes()
                .iter()
                .any(|node| matches!(node, ContentNode::Image { .. }))
        );
        assert_eq!(content.size(), measure(&state, 280.0, &measurer));
    }

    #[test]
    fn corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"nope").unwrap();
        let result = build_content(
            &sent(Some(path), Size::new(64.0, 64.0)),
            false,
            280.0,
            &GlyphMeasurer::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn approval_has_cancel_button() {
        let state = PreviewState::Draft(DraftPreview::new(
            LinkPreviewDraft::new("https://example.com").with_title("Hi"),
        ));
        let content = build_content(&state, true, 320.0, &GlyphMeasurer::default()).unwrap();
        assert_eq!(content.mode(), PreviewMode::Approval);
        assert!(content.cancel_button().is_some());
        assert!(content.border_regions().is_empty());
    }

    #[test]
    fn loading_has_only_spinner() {
        let content =
            build_content(&PreviewState::Loading, true, 320.0, &GlyphMeasurer::default()).unwrap();
        assert_eq!(content.mode(), PreviewMode::Loading);
        assert_eq!(content.nodes().len(), 1);
        assert!(matches!(content.nodes()[0], ContentNode::Spinner { .. }));
    }

    #[test]
    fn loading_without_approval_falls_back_to_sent() {
        let content =
            build_content(&PreviewState::Loading, false, 320.0, &GlyphMeasurer::default())
                .unwrap();
        assert_eq!(content.mode(), PreviewMode::Sent(SentLayout::TextOnly));
        assert!(
            content
                .nodes()
                .iter()
                .any(|node| matches!(node, ContentNode::Domain { .. }))
        );
    }
}
