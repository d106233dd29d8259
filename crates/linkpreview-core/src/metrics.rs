//! Fixed layout constants.
//!
//! These are part of the measurement contract: the bubble layout reserves
//! space using exactly these values, so they are not configurable.

/// Minimum natural width and height for the hero (large image) layout.
pub const HERO_MIN_IMAGE_SIZE: f32 = 200.0;
/// Hero image height lower bound, as a fraction of the message width.
pub const HERO_MIN_HEIGHT_FRACTION: f32 = 0.5;
/// Hero image height upper bound, as a fraction of the message width.
pub const HERO_MAX_HEIGHT_FRACTION: f32 = 1.0;

/// Title font size in sent previews.
pub const SENT_TITLE_FONT_SIZE: f32 = 17.0;
/// Title line limit in sent previews.
pub const SENT_TITLE_MAX_LINES: usize = 2;
/// Domain font size in sent previews.
pub const SENT_DOMAIN_FONT_SIZE: f32 = 12.0;
/// Gap between the title and the domain.
pub const SENT_VERTICAL_SPACING: f32 = 4.0;

/// Horizontal margin of the thumbnail layout.
pub const NON_HERO_H_MARGIN: f32 = 6.0;
/// Vertical margin of the thumbnail layout.
pub const NON_HERO_V_MARGIN: f32 = 6.0;
/// Side of the square thumbnail.
pub const NON_HERO_IMAGE_SIZE: f32 = 72.0;
/// Gap between the thumbnail and the text.
pub const NON_HERO_H_SPACING: f32 = 8.0;

/// Horizontal margin around the hero text block.
pub const HERO_H_MARGIN: f32 = 12.0;
/// Vertical margin around the hero text block.
pub const HERO_V_MARGIN: f32 = 7.0;

/// Height of the approval and loading modes.
pub const APPROVAL_HEIGHT: f32 = 76.0;
/// Gap between approval columns.
pub const APPROVAL_SPACING: f32 = 8.0;
/// Gap between the approval title and domain.
pub const APPROVAL_TEXT_SPACING: f32 = 2.0;
/// Approval title font size.
pub const APPROVAL_TITLE_FONT_SIZE: f32 = 17.0;
/// Approval domain font size.
pub const APPROVAL_DOMAIN_FONT_SIZE: f32 = 12.0;

/// Side of the cancel button.
pub const CANCEL_BUTTON_SIZE: f32 = 24.0;
/// Extra tap area around the cancel button on every side.
pub const CANCEL_HIT_SLOP: f32 = 20.0;

/// Side of the loading activity indicator.
pub const SPINNER_SIZE: f32 = 25.0;
/// Thickness of separator strokes.
pub const HAIRLINE_WIDTH: f32 = 1.0;
