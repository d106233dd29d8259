//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Window background.
pub fn root_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text_primary),
        ..Default::default()
    }
}

/// Header bar with a bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        ..Default::default()
    }
}

/// Message bubble; outgoing bubbles use the tinted color.
pub fn bubble_style(outgoing: bool) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        let fill = if outgoing {
            p.bubble_outgoing
        } else {
            p.bubble_incoming
        };

        container::Style {
            background: Some(Background::Color(fill)),
            text_color: Some(p.text_primary),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::BUBBLE.into(),
            },
            shadow: shadows::subtle(),
            ..Default::default()
        }
    }
}

/// Compose bar at the bottom of the window.
pub fn compose_bar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Error banner.
pub fn error_banner_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(Color { a: 0.12, ..p.accent_red })),
        text_color: Some(p.accent_red),
        border: Border {
            color: p.accent_red,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}

/// Separator stroke under the approval row's text.
pub fn hairline_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.border_medium)),
        ..Default::default()
    }
}

/// Stroke around a hero image.
pub fn hero_image_border_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: None,
        border: Border {
            color: Color { a: 0.2, ..p.text_primary },
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Stroke around the preview's text body.
pub fn preview_body_border_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: None,
        border: Border {
            color: p.preview_border,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}
