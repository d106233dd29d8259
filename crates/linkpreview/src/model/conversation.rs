//! Sent messages and their link previews.

use linkpreview_core::{
    Attachment, AttachmentId, AttachmentStream, ConversationStyle, GlyphMeasurer,
    LinkPreviewDraft, LinkPreviewRecord, LinkPreviewView, NoDelegate, PreviewState, SentPreview,
    Size,
};
use tracing::{error, info, warn};

/// Bubble identifier, unique within a conversation.
pub type BubbleId = usize;

/// A message bubble, optionally carrying a link preview.
#[derive(Debug)]
pub struct Bubble {
    /// Identifier.
    pub id: BubbleId,
    /// Sent by the local user.
    pub outgoing: bool,
    /// Message text.
    pub body: String,
    /// Sent preview, rendered without a delegate.
    pub preview: Option<LinkPreviewView<NoDelegate>>,
    /// Image attachment that has not been downloaded yet.
    pub pending_download: Option<AttachmentStream>,
    /// A download is in flight.
    pub downloading: bool,
    /// Last error for this bubble.
    pub error: Option<String>,
}

impl Bubble {
    fn new(id: BubbleId, outgoing: bool, body: String) -> Self {
        Self {
            id,
            outgoing,
            body,
            preview: None,
            pending_download: None,
            downloading: false,
            error: None,
        }
    }

    fn show_preview(&mut self, sent: SentPreview) {
        let mut view = LinkPreviewView::new(None, GlyphMeasurer::default(), sent.max_message_width());
        if let Err(e) = view.set_state(PreviewState::Sent(sent)) {
            error!("Failed to build link preview for bubble {}: {}", self.id, e);
            self.error = Some(e.to_string());
        }
        self.preview = Some(view);
    }

    /// Replaces the image pointer with the downloaded stream.
    ///
    /// The preview state is set once per lifecycle, so the old state is
    /// cleared and a fresh one assigned.
    pub fn apply_download(&mut self, stream: AttachmentStream) {
        self.downloading = false;
        self.pending_download = None;
        let Some(view) = self.preview.as_mut() else {
            warn!("Download finished for bubble {} without a preview", self.id);
            return;
        };
        let Some(PreviewState::Sent(old)) = view.clear_state() else {
            warn!("Download finished for bubble {} without a sent state", self.id);
            return;
        };
        let sent = SentPreview::new(
            old.record().clone(),
            Some(Attachment::Stream(stream)),
            old.conversation_style(),
        );
        self.error = None;
        if let Err(e) = view.set_state(PreviewState::Sent(sent)) {
            error!("Failed to show downloaded image for bubble {}: {}", self.id, e);
            self.error = Some(e.to_string());
        }
    }
}

/// All bubbles plus the width they lay out in.
#[derive(Debug)]
pub struct Conversation {
    bubbles: Vec<Bubble>,
    style: ConversationStyle,
    next_id: BubbleId,
}

impl Conversation {
    /// Creates an empty conversation.
    #[must_use]
    pub fn new(style: ConversationStyle) -> Self {
        Self {
            bubbles: Vec::new(),
            style,
            next_id: 0,
        }
    }

    /// Bubbles in display order.
    #[must_use]
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Looks up a bubble.
    pub fn bubble_mut(&mut self, id: BubbleId) -> Option<&mut Bubble> {
        self.bubbles.iter_mut().find(|bubble| bubble.id == id)
    }

    /// Layout style shared by every bubble.
    #[must_use]
    pub const fn style(&self) -> ConversationStyle {
        self.style
    }

    /// Appends a plain text bubble.
    pub fn push_text(&mut self, outgoing: bool, body: impl Into<String>) -> BubbleId {
        let id = self.allocate_id();
        self.bubbles.push(Bubble::new(id, outgoing, body.into()));
        id
    }

    /// Appends a bubble with a sent link preview.
    ///
    /// `pending_download` is the stream a pointer attachment becomes once
    /// downloaded.
    pub fn push_preview(
        &mut self,
        outgoing: bool,
        body: impl Into<String>,
        record: LinkPreviewRecord,
        attachment: Option<Attachment>,
        pending_download: Option<AttachmentStream>,
    ) -> BubbleId {
        let id = self.allocate_id();
        let mut bubble = Bubble::new(id, outgoing, body.into());
        bubble.show_preview(SentPreview::new(record, attachment, self.style));
        bubble.pending_download = pending_download;
        self.bubbles.push(bubble);
        id
    }

    /// Sends an approved draft as an outgoing bubble.
    pub fn send_draft(&mut self, draft: &LinkPreviewDraft) -> BubbleId {
        let id = self.next_id;
        let (record, attachment) = record_from_draft(draft, &format!("sent-{id}"));
        info!("Sending link preview for {}", draft.url_string);
        self.push_preview(true, draft.url_string.clone(), record, attachment, None)
    }

    const fn allocate_id(&mut self) -> BubbleId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Turns an approved draft into the record and attachment a sent message
/// carries.
///
/// The image file is probed for its natural size; a file that cannot be
/// decoded becomes an invalid image stream.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn record_from_draft(
    draft: &LinkPreviewDraft,
    attachment_id: &str,
) -> (LinkPreviewRecord, Option<Attachment>) {
    let attachment = draft.image_file_path.as_ref().map(|path| {
        let (is_valid_image, natural_image_size) = match image::image_dimensions(path) {
            Ok((width, height)) => (true, Size::new(width as f32, height as f32)),
            Err(e) => {
                warn!("Attachment {:?} is not a readable image: {}", path, e);
                (false, Size::ZERO)
            }
        };
        Attachment::Stream(AttachmentStream {
            id: AttachmentId::new(attachment_id),
            is_valid_image,
            original_file_path: Some(path.clone()),
            natural_image_size,
        })
    });

    let record = LinkPreviewRecord {
        url_string: Some(draft.url_string.clone()),
        title: draft.title.clone(),
        display_domain: draft.display_domain(),
        image_attachment_id: attachment.as_ref().map(|a| a.id().clone()),
    };
    (record, attachment)
}
