//! Conversation view: message bubbles with their link previews.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Element, Length, Padding};
use linkpreview_core::LinkPreviewView;

use super::link_preview::view_sent_preview;
use crate::message::Message;
use crate::model::{Bubble, Conversation};
use crate::style::widgets::{bubble_style, palette, scrollable_style, secondary_button_style};

/// Renders every bubble, outgoing ones aligned right.
pub fn view_conversation(conversation: &Conversation) -> Element<'_, Message> {
    let max_width = conversation.style().max_message_width;
    let bubbles = conversation
        .bubbles()
        .iter()
        .map(|bubble| view_bubble(bubble, max_width));

    scrollable(column(bubbles).spacing(12).padding(16).width(Length::Fill))
        .height(Length::Fill)
        .style(scrollable_style)
        .into()
}

fn view_bubble(bubble: &Bubble, max_width: f32) -> Element<'_, Message> {
    let mut content = column![];

    if let Some(preview) = bubble.preview.as_ref().and_then(LinkPreviewView::content) {
        content = content.push(view_sent_preview(preview));
    }

    content = content.push(
        container(text(bubble.body.as_str()).size(15)).padding(Padding {
            top: 8.0,
            right: 12.0,
            bottom: 8.0,
            left: 12.0,
        }),
    );

    if bubble.pending_download.is_some() {
        let label = if bubble.downloading {
            "Downloading\u{2026}"
        } else {
            "Download image"
        };
        let download = button(text(label).size(13))
            .padding([4, 10])
            .style(secondary_button_style)
            .on_press_maybe(
                (!bubble.downloading).then_some(Message::DownloadAttachment(bubble.id)),
            );
        content = content.push(container(download).padding([0, 12]));
    }

    if let Some(error) = &bubble.error {
        content = content.push(
            container(text(error.as_str()).size(12).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.accent_red),
                }
            }))
            .padding([0, 12]),
        );
    }

    let bubble_box = container(content.padding(Padding {
        bottom: 4.0,
        ..Padding::ZERO
    }))
    .max_width(max_width)
    .clip(true)
    .style(bubble_style(bubble.outgoing));

    if bubble.outgoing {
        row![Space::new().width(Length::Fill), bubble_box].into()
    } else {
        row![bubble_box, Space::new().width(Length::Fill)].into()
    }
}
