//! Layout engine.
//!
//! [`compute_layout`] is the single place where preview geometry is decided.
//! [`measure`] reports its size for the bubble layout, and
//! [`build_content`] turns the very same frames into renderable nodes, so
//! the reserved space and the rendered content cannot disagree.
//!
//! Every size component is rounded up: reserving one unit too much is
//! harmless, reserving too little clips the preview.

mod approval;
mod content;
mod sent;

pub use content::{BorderRegion, BorderTone, ContentNode, PreviewContent, build_content};
pub use sent::hero_image_size;

use crate::geometry::{Rect, Size};
use crate::labels::Label;
use crate::metrics::{APPROVAL_HEIGHT, SPINNER_SIZE};
use crate::mode::{PreviewMode, SentLayout};
use crate::state::PreviewState;
use crate::text::TextMeasurer;

/// A label and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    /// Position and size, in preview coordinates.
    pub frame: Rect,
    /// The label.
    pub label: Label,
}

/// Frames of every element of a preview, in preview coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewLayout {
    /// Mode the layout was computed for.
    pub mode: PreviewMode,
    /// Total size, whole units.
    pub size: Size,
    /// Image slot.
    pub image: Option<Rect>,
    /// Title label.
    pub title: Option<PlacedLabel>,
    /// Domain label.
    pub domain: Option<PlacedLabel>,
    /// Cancel button (approval only).
    pub cancel_button: Option<Rect>,
    /// Activity indicator (loading only).
    pub spinner: Option<Rect>,
    /// Separator along the bottom of the approval text area.
    pub hairline: Option<Rect>,
    /// Region stroked around a hero image.
    pub hero_image_border: Option<Rect>,
    /// Region stroked around the text body of a sent preview.
    pub body_border: Option<Rect>,
}

impl PreviewLayout {
    const fn empty(mode: PreviewMode, size: Size) -> Self {
        Self {
            mode,
            size,
            image: None,
            title: None,
            domain: None,
            cancel_button: None,
            spinner: None,
            hairline: None,
            hero_image_border: None,
            body_border: None,
        }
    }
}

/// Offset that centers `inner` within `outer`, snapped to whole units.
fn centered(outer: f32, inner: f32) -> f32 {
    ((outer - inner) / 2.0).floor()
}

/// Computes the layout of `state` in `mode`.
///
/// `available_width` is the maximum message width for sent modes and the
/// row width for approval and loading modes.
#[must_use]
pub fn compute_layout(
    state: &PreviewState,
    mode: PreviewMode,
    available_width: f32,
    measurer: &impl TextMeasurer,
) -> PreviewLayout {
    match mode {
        PreviewMode::Loading => loading_layout(available_width),
        PreviewMode::Approval => approval::layout(state, available_width, measurer),
        PreviewMode::Sent(sub_mode) => sent::layout(state, sub_mode, available_width, measurer),
    }
}

/// Size a sent preview needs inside a bubble of `max_width`.
///
/// Pure and deterministic; touches neither the filesystem nor any widget.
#[must_use]
pub fn measure(state: &PreviewState, max_width: f32, measurer: &impl TextMeasurer) -> Size {
    let mode = PreviewMode::Sent(SentLayout::for_state(state));
    compute_layout(state, mode, max_width, measurer).size
}

fn loading_layout(available_width: f32) -> PreviewLayout {
    let size = Size::new(available_width.max(0.0), APPROVAL_HEIGHT).ceil();
    let mut layout = PreviewLayout::empty(PreviewMode::Loading, size);
    layout.spinner = Some(Rect::new(
        centered(size.width, SPINNER_SIZE),
        centered(size.height, SPINNER_SIZE),
        SPINNER_SIZE,
        SPINNER_SIZE,
    ));
    layout
}
