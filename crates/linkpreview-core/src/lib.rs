//! # linkpreview-core
//!
//! State model and layout engine for chat link previews.
//!
//! This crate provides:
//! - **Preview states** - `Loading`, `Draft` and `Sent` normalized behind one enum
//! - **Image readiness** - the four-state resolver for preview image attachments
//! - **Mode selection** - loading / approval / sent, and hero vs. thumbnail
//! - **Measurement** - the size a sent preview needs inside a message bubble,
//!   computed without building any widgets
//! - **Content building** - a toolkit-agnostic tree of positioned nodes that
//!   always matches the measured size
//! - **Interaction** - cancel hit-testing with a generous slop area
//!
//! ## Example
//!
//! ```ignore
//! use linkpreview_core::{GlyphMeasurer, PreviewState, measure};
//!
//! let state = PreviewState::Sent(sent);
//! let size = measure(&state, 300.0, &GlyphMeasurer::default());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod geometry;
pub mod interaction;
pub mod labels;
pub mod layout;
pub mod metrics;
pub mod mode;
pub mod record;
pub mod state;
pub mod text;
mod view;

pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use interaction::{GesturePhase, NoDelegate, PreviewDelegate, TapOutcome, hit_test};
pub use layout::{
    BorderRegion, BorderTone, ContentNode, PreviewContent, PreviewLayout, build_content,
    compute_layout, measure,
};
pub use mode::{PreviewMode, SentLayout};
pub use record::{
    Attachment, AttachmentId, AttachmentPointer, AttachmentStream, ConversationStyle,
    LinkPreviewDraft, LinkPreviewRecord,
};
pub use state::{DraftPreview, ImageState, PreviewImage, PreviewState, SentPreview};
pub use text::{FontWeight, GlyphMeasurer, TextMeasurer, TextStyle};
pub use view::LinkPreviewView;
