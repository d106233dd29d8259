//! `LinkPreview` - desktop demo of chat link previews
//!
//! Shows a conversation with sent previews in every layout and a compose bar
//! that fetches a draft preview, lets the user cancel it, and sends it.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Subscription, Task};
use linkpreview_core::{ConversationStyle, Point};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{ComposeMessage, KeyboardAction, Message};
use model::{
    AppSettings, ComposeState, Conversation, DemoAssets, demo_thread, download_attachment,
    fetch_preview, load_settings, prepare_demo_assets, save_settings,
};
use style::widgets::palette;
use style::widgets::{error_banner_style, root_style, secondary_button_style};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkpreview=debug,linkpreview_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting LinkPreview");

    iced::application(LinkPreviewApp::new, LinkPreviewApp::update, LinkPreviewApp::view)
        .title("Link Previews")
        .subscription(LinkPreviewApp::subscription)
        .run()
}

/// Main application state.
struct LinkPreviewApp {
    /// Persisted settings.
    settings: AppSettings,
    /// Generated demo images, once ready.
    assets: Option<DemoAssets>,
    /// Sent and received bubbles.
    conversation: Conversation,
    /// Compose bar.
    compose: ComposeState,
    /// Error message to display.
    error_message: Option<String>,
}

impl Default for LinkPreviewApp {
    fn default() -> Self {
        let settings = AppSettings::default();
        Self {
            settings,
            assets: None,
            conversation: Conversation::new(ConversationStyle::new(settings.max_message_width)),
            compose: ComposeState::new(settings.compose_width),
            error_message: None,
        }
    }
}

impl LinkPreviewApp {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        (app, Task::perform(load_settings(), Message::SettingsLoaded))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        palette::set_theme(self.settings.theme_mode);
    }

    fn save(&self) -> Task<Message> {
        Task::perform(save_settings(self.settings), Message::SettingsSaved)
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SettingsLoaded(result) => {
                match result {
                    Ok(settings) => self.settings = settings,
                    Err(e) => warn!("Failed to load settings, using defaults: {}", e),
                }
                self.apply_theme();
                self.conversation =
                    Conversation::new(ConversationStyle::new(self.settings.max_message_width));
                if let Err(e) = self
                    .compose
                    .preview
                    .set_available_width(self.settings.compose_width)
                {
                    self.error_message = Some(e.to_string());
                }
                return Task::perform(prepare_demo_assets(), Message::DemoReady);
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    error!("Failed to save settings: {}", e);
                }
            }
            Message::ToggleTheme => {
                self.settings.theme_mode = self.settings.theme_mode.toggled();
                self.apply_theme();
                return self.save();
            }
            Message::DemoReady(Ok(assets)) => {
                self.seed_conversation(&assets);
                self.assets = Some(assets);
            }
            Message::DemoReady(Err(e)) => {
                error!("Failed to prepare demo assets: {}", e);
                self.error_message = Some(format!("Demo images unavailable: {e}"));
            }
            Message::DownloadAttachment(id) => {
                if let Some(bubble) = self.conversation.bubble_mut(id)
                    && let Some(stream) = bubble.pending_download.clone()
                    && !bubble.downloading
                {
                    bubble.downloading = true;
                    return Task::perform(download_attachment(stream), move |result| {
                        Message::AttachmentDownloaded(id, result)
                    });
                }
            }
            Message::AttachmentDownloaded(id, result) => {
                if let Some(bubble) = self.conversation.bubble_mut(id) {
                    match result {
                        Ok(stream) => bubble.apply_download(stream),
                        Err(e) => {
                            warn!("Download for bubble {} failed: {}", id, e);
                            bubble.downloading = false;
                            bubble.error = Some(e);
                        }
                    }
                }
            }
            Message::Compose(compose_msg) => return self.update_compose(compose_msg),
            Message::KeyPressed(action) => return self.handle_keyboard_action(action),
            Message::DismissError => self.error_message = None,
            Message::Ignore => {}
        }
        Task::none()
    }

    fn update_compose(&mut self, message: ComposeMessage) -> Task<Message> {
        match message {
            ComposeMessage::UrlChanged(value) => self.compose.url_input = value,
            ComposeMessage::FetchPreview => {
                let url = self.compose.url_input.trim().to_string();
                if url.is_empty() {
                    return Task::none();
                }
                let Some(assets) = self.assets.clone() else {
                    self.error_message = Some("Demo images are still being prepared".into());
                    return Task::none();
                };
                match self.compose.begin_fetch() {
                    Ok(generation) => {
                        return Task::perform(fetch_preview(url, assets), move |result| {
                            Message::Compose(ComposeMessage::PreviewFetched(generation, result))
                        });
                    }
                    Err(e) => self.error_message = Some(e.to_string()),
                }
            }
            ComposeMessage::PreviewFetched(generation, Ok(draft)) => {
                if let Err(e) = self.compose.accept_draft(generation, draft) {
                    error!("Failed to show link preview: {}", e);
                    self.compose.cancel();
                    self.error_message = Some(e.to_string());
                }
            }
            ComposeMessage::PreviewFetched(generation, Err(e)) => {
                if self.compose.abandon_fetch(generation) {
                    self.error_message = Some(e);
                }
            }
            ComposeMessage::PreviewCursorMoved(point) => {
                self.compose.cursor = Some(Point::new(point.x, point.y));
            }
            ComposeMessage::PreviewTapped => {
                self.compose.tap();
            }
            ComposeMessage::CancelPressed => {
                self.compose.press_cancel();
            }
            ComposeMessage::Send => {
                if let Some(draft) = self.compose.take_draft() {
                    self.conversation.send_draft(&draft);
                }
            }
        }
        Task::none()
    }

    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::Cancel => {
                if self.error_message.take().is_none() {
                    self.compose.cancel();
                }
                Task::none()
            }
            KeyboardAction::Send => self.update_compose(ComposeMessage::Send),
            KeyboardAction::ToggleTheme => self.update(Message::ToggleTheme),
        }
    }

    fn seed_conversation(&mut self, assets: &DemoAssets) {
        for message in demo_thread(assets) {
            match message.preview {
                Some(preview) => {
                    self.conversation.push_preview(
                        message.outgoing,
                        message.body,
                        preview.record,
                        preview.attachment,
                        preview.pending_download,
                    );
                }
                None => {
                    self.conversation.push_text(message.outgoing, message.body);
                }
            }
        }
        info!(
            "Seeded conversation with {} bubbles",
            self.conversation.bubbles().len()
        );
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let header = view::view_header(self.settings.theme_mode);

        let mut content = column![header];

        if let Some(error) = &self.error_message {
            let banner = container(
                row![
                    text(error.as_str()).size(13).width(Length::Fill),
                    button(text("\u{2715}").size(12))
                        .padding([2, 8])
                        .style(secondary_button_style)
                        .on_press(Message::DismissError),
                ]
                .align_y(Alignment::Center)
                .spacing(8),
            )
            .padding([8, 12])
            .width(Length::Fill)
            .style(error_banner_style);
            content = content.push(container(banner).padding([8, 16]));
        }

        content = content
            .push(view::view_conversation(&self.conversation))
            .push(view::view_compose(&self.compose));

        container(content.width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(root_style)
            .into()
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(&key, modifiers).unwrap_or(Message::Ignore)
            } else {
                Message::Ignore
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        }
        Key::Named(keyboard::key::Named::Enter) if ctrl => {
            Some(Message::KeyPressed(KeyboardAction::Send))
        }
        Key::Character(c) if ctrl && modifiers.shift() && c.as_str().eq_ignore_ascii_case("l") => {
            Some(Message::KeyPressed(KeyboardAction::ToggleTheme))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_cancels() {
        let message = handle_key_press(
            &Key::Named(keyboard::key::Named::Escape),
            Modifiers::empty(),
        );
        assert!(matches!(
            message,
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        ));
    }

    #[test]
    fn enter_sends_only_with_command() {
        let enter = Key::Named(keyboard::key::Named::Enter);
        assert!(handle_key_press(&enter, Modifiers::empty()).is_none());
        assert!(matches!(
            handle_key_press(&enter, Modifiers::COMMAND),
            Some(Message::KeyPressed(KeyboardAction::Send))
        ));
    }

    #[test]
    fn ctrl_shift_l_toggles_theme() {
        let key = Key::Character("L".into());
        assert!(matches!(
            handle_key_press(&key, Modifiers::COMMAND | Modifiers::SHIFT),
            Some(Message::KeyPressed(KeyboardAction::ToggleTheme))
        ));
        assert!(handle_key_press(&key, Modifiers::COMMAND).is_none());
    }
}
