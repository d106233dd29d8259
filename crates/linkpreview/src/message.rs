//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use linkpreview_core::{AttachmentStream, LinkPreviewDraft};

use crate::model::{AppSettings, BubbleId, DemoAssets};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Settings
    /// Settings loaded from disk.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings written to disk.
    SettingsSaved(Result<(), String>),
    /// Switch between light and dark mode.
    ToggleTheme,

    // Conversation
    /// Demo images generated.
    DemoReady(Result<DemoAssets, String>),
    /// Download a bubble's pending image.
    DownloadAttachment(BubbleId),
    /// Download finished.
    AttachmentDownloaded(BubbleId, Result<AttachmentStream, String>),

    // Compose
    /// Compose bar messages.
    Compose(ComposeMessage),

    // Misc
    /// Keyboard shortcut triggered.
    KeyPressed(KeyboardAction),
    /// Hide the error banner.
    DismissError,
    /// Event with no effect.
    Ignore,
}

/// Compose bar messages.
#[derive(Debug, Clone)]
pub enum ComposeMessage {
    /// URL field edited.
    UrlChanged(String),
    /// Fetch a preview for the URL field.
    FetchPreview,
    /// Fetch finished, tagged with the generation it was started in.
    PreviewFetched(u64, Result<LinkPreviewDraft, String>),
    /// Cursor moved over the approval row, in row coordinates.
    PreviewCursorMoved(iced::Point),
    /// Approval row clicked.
    PreviewTapped,
    /// Cancel button pressed.
    CancelPressed,
    /// Send the approved preview.
    Send,
}

/// Keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Escape: drop the compose preview.
    Cancel,
    /// Ctrl+Enter: send.
    Send,
    /// Ctrl+Shift+L: toggle theme.
    ToggleTheme,
}
