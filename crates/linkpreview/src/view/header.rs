//! Header bar with the theme toggle.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::style::widgets::palette::{self, ThemeMode};
use crate::style::widgets::{header_style, secondary_button_style};

/// Renders the header.
pub fn view_header(theme_mode: ThemeMode) -> Element<'static, Message> {
    let title = text("Link Previews")
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let theme_label = match theme_mode {
        ThemeMode::Light => "\u{263E} Dark",
        ThemeMode::Dark => "\u{2600} Light",
    };
    let toggle = button(text(theme_label).size(13))
        .padding([6, 12])
        .style(secondary_button_style)
        .on_press(Message::ToggleTheme);

    container(
        row![title, Space::new().width(Length::Fill), toggle]
            .align_y(Alignment::Center)
            .padding([10, 16]),
    )
    .width(Length::Fill)
    .style(header_style)
    .into()
}
