//! Compose bar: approval preview above the URL field.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use super::link_preview::view_approval_preview;
use crate::message::{ComposeMessage, Message};
use crate::model::ComposeState;
use crate::style::widgets::{
    compose_bar_style, primary_button_style, secondary_button_style, url_input_style,
};

/// Renders the compose bar.
pub fn view_compose(compose: &ComposeState) -> Element<'_, Message> {
    let mut bar = column![].spacing(8);

    if let Some(content) = compose.preview.content() {
        bar = bar.push(view_approval_preview(content));
    }

    let input = text_input("Paste a link\u{2026}", &compose.url_input)
        .width(Length::Fill)
        .padding([10, 16])
        .style(url_input_style)
        .on_input(|value| Message::Compose(ComposeMessage::UrlChanged(value)))
        .on_submit(Message::Compose(ComposeMessage::FetchPreview));

    let can_fetch = !compose.url_input.trim().is_empty() && !compose.is_loading();
    let fetch = button(text("Preview"))
        .padding([10, 16])
        .style(secondary_button_style)
        .on_press_maybe(can_fetch.then_some(Message::Compose(ComposeMessage::FetchPreview)));

    let send = button(text("Send"))
        .padding([10, 20])
        .style(primary_button_style)
        .on_press_maybe(
            compose
                .draft()
                .map(|_| Message::Compose(ComposeMessage::Send)),
        );

    bar = bar.push(
        row![input, fetch, send]
            .spacing(8)
            .align_y(Alignment::Center),
    );

    container(bar)
        .padding(12)
        .width(Length::Fill)
        .style(compose_bar_style)
        .into()
}
