//! Renders built preview content with iced widgets.
//!
//! Every node is placed at its computed frame inside a fixed-size stack, so
//! iced never re-measures the text and the bubble gets exactly the measured
//! size.

use iced::widget::{Space, Stack, button, container, image, mouse_area, text};
use iced::{ContentFit, Element, Font, Length, Padding};
use linkpreview_core::labels::Label;
use linkpreview_core::{
    BorderRegion, BorderTone, ContentNode, FontWeight, PreviewContent, PreviewMode, Rect,
};

use crate::message::{ComposeMessage, Message};
use crate::style::widgets::{
    cancel_button_style, hairline_style, hero_image_border_style, palette,
    preview_body_border_style,
};

/// Renders sent content.
pub fn view_sent_preview(content: &PreviewContent) -> Element<'static, Message> {
    view_layers(content, false)
}

/// Renders the approval row.
///
/// Clicks anywhere on the row are reported so they can be hit-tested
/// against the cancel button's enlarged target.
pub fn view_approval_preview(content: &PreviewContent) -> Element<'static, Message> {
    let layers = view_layers(content, content.mode() == PreviewMode::Approval);
    mouse_area(layers)
        .on_move(|point| Message::Compose(ComposeMessage::PreviewCursorMoved(point)))
        .on_press(Message::Compose(ComposeMessage::PreviewTapped))
        .into()
}

fn view_layers(content: &PreviewContent, cancellable: bool) -> Element<'static, Message> {
    let size = content.size();
    let nodes = content
        .nodes()
        .iter()
        .map(|node| place(node.frame(), view_node(node, cancellable)));
    let borders = content
        .border_regions()
        .iter()
        .map(|region| place(region.frame, view_border(region)));

    Stack::with_children(nodes.chain(borders))
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .into()
}

fn place(frame: Rect, child: Element<'static, Message>) -> Element<'static, Message> {
    let sized = container(child)
        .width(Length::Fixed(frame.width()))
        .height(Length::Fixed(frame.height()))
        .clip(true);

    container(sized)
        .padding(Padding {
            top: frame.min_y(),
            right: 0.0,
            bottom: 0.0,
            left: frame.min_x(),
        })
        .into()
}

fn view_node(node: &ContentNode, cancellable: bool) -> Element<'static, Message> {
    match node {
        ContentNode::Image { image: preview, .. } => {
            image(image::Handle::from_path(preview.path()))
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into()
        }
        ContentNode::Title { label, .. } => view_label(label, false),
        ContentNode::Domain { label, .. } => view_label(label, true),
        ContentNode::Spinner { .. } => container(text("\u{2026}").size(18).style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_secondary),
            }
        }))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),
        ContentNode::CancelButton { .. } if cancellable => button(
            container(text("\u{2715}").size(12))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(cancel_button_style)
        .on_press(Message::Compose(ComposeMessage::CancelPressed))
        .into(),
        ContentNode::CancelButton { .. } => Space::new().into(),
        ContentNode::Hairline { .. } => container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(hairline_style)
            .into(),
    }
}

fn view_label(label: &Label, secondary: bool) -> Element<'static, Message> {
    let weight = match label.style.weight {
        FontWeight::Regular => iced::font::Weight::Normal,
        FontWeight::Medium => iced::font::Weight::Medium,
    };
    let wrapping = if label.style.max_lines == 1 {
        text::Wrapping::None
    } else {
        text::Wrapping::Word
    };

    text(label.text.clone())
        .size(label.style.font_size)
        .line_height(text::LineHeight::Relative(1.2))
        .wrapping(wrapping)
        .font(Font {
            weight,
            ..Font::DEFAULT
        })
        .style(move |_theme| {
            let p = palette::current();
            text::Style {
                color: Some(if secondary {
                    p.text_secondary
                } else {
                    p.text_primary
                }),
            }
        })
        .into()
}

fn view_border(region: &BorderRegion) -> Element<'static, Message> {
    let style = match region.tone {
        BorderTone::HeroImage => hero_image_border_style,
        BorderTone::Body => preview_body_border_style,
    };
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style)
        .into()
}
