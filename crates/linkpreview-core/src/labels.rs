//! Label renderers.
//!
//! Each preview label is text plus a fixed [`TextStyle`]. The same label is
//! used for measurement and for the built content, so both agree on what
//! is being sized.

use crate::geometry::Size;
use crate::metrics::{
    APPROVAL_DOMAIN_FONT_SIZE, APPROVAL_TITLE_FONT_SIZE, SENT_DOMAIN_FONT_SIZE,
    SENT_TITLE_FONT_SIZE, SENT_TITLE_MAX_LINES,
};
use crate::state::PreviewState;
use crate::text::{FontWeight, TextMeasurer, TextStyle};

/// Shown when a loaded preview has no usable domain.
pub const UNKNOWN_DOMAIN_LABEL: &str = "UNKNOWN SITE";

/// Text with the style it is set in.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Displayed text.
    pub text: String,
    /// Style.
    pub style: TextStyle,
}

impl Label {
    /// Size at `max_width`, rounded up to whole units.
    #[must_use]
    pub fn measure(&self, measurer: &impl TextMeasurer, max_width: f32) -> Size {
        measurer.measure(&self.text, &self.style, max_width).ceil()
    }
}

/// Title label of a sent preview: medium weight, up to two lines.
#[must_use]
pub fn sent_title_label(state: &PreviewState) -> Option<Label> {
    state.title().map(|text| Label {
        text,
        style: TextStyle::new(SENT_TITLE_FONT_SIZE)
            .weight(FontWeight::Medium)
            .max_lines(SENT_TITLE_MAX_LINES),
    })
}

/// Domain label of a sent preview, upper-cased.
///
/// Always present: a missing domain renders [`UNKNOWN_DOMAIN_LABEL`].
#[must_use]
pub fn sent_domain_label(state: &PreviewState) -> Label {
    let text = state
        .display_domain()
        .filter(|domain| !domain.is_empty())
        .map_or_else(|| UNKNOWN_DOMAIN_LABEL.to_string(), |domain| domain.to_uppercase());
    Label {
        text,
        style: TextStyle::new(SENT_DOMAIN_FONT_SIZE),
    }
}

/// Title label of the approval row.
#[must_use]
pub fn approval_title_label(state: &PreviewState) -> Option<Label> {
    state.title().map(|text| Label {
        text,
        style: TextStyle::new(APPROVAL_TITLE_FONT_SIZE),
    })
}

/// Domain label of the approval row; omitted when the domain is missing.
#[must_use]
pub fn approval_domain_label(state: &PreviewState) -> Option<Label> {
    state
        .display_domain()
        .filter(|domain| !domain.is_empty())
        .map(|domain| Label {
            text: domain.to_uppercase(),
            style: TextStyle::new(APPROVAL_DOMAIN_FONT_SIZE),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ConversationStyle, LinkPreviewDraft, LinkPreviewRecord};
    use crate::state::{DraftPreview, SentPreview};

    fn sent(record: LinkPreviewRecord) -> PreviewState {
        PreviewState::Sent(SentPreview::new(record, None, ConversationStyle::new(300.0)))
    }

    #[test]
    fn domain_is_uppercased() {
        let state = sent(LinkPreviewRecord {
            url_string: Some("https://example.com".into()),
            ..Default::default()
        });
        assert_eq!(sent_domain_label(&state).text, "EXAMPLE.COM");
    }

    #[test]
    fn missing_domain_falls_back() {
        let state = sent(LinkPreviewRecord::default());
        assert_eq!(sent_domain_label(&state).text, UNKNOWN_DOMAIN_LABEL);
        assert_eq!(approval_domain_label(&state), None);
    }

    #[test]
    fn sent_title_wraps_to_two_lines() {
        let state = sent(LinkPreviewRecord {
            title: Some("Title".into()),
            ..Default::default()
        });
        let label = sent_title_label(&state);
        assert_eq!(label.map(|l| l.style.max_lines), Some(SENT_TITLE_MAX_LINES));
    }

    #[test]
    fn approval_labels_from_draft() {
        let state = PreviewState::Draft(DraftPreview::new(
            LinkPreviewDraft::new("https://news.example/a").with_title("Headline"),
        ));
        assert_eq!(
            approval_title_label(&state).map(|l| l.text),
            Some("Headline".to_string())
        );
        assert_eq!(
            approval_domain_label(&state).map(|l| l.text),
            Some("NEWS.EXAMPLE".to_string())
        );
    }
}
