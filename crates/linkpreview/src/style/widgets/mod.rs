//! Widget styles for bubbles, previews and the compose bar.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use containers::{
    bubble_style, compose_bar_style, error_banner_style, hairline_style, header_style,
    hero_image_border_style, preview_body_border_style, root_style,
};

pub use buttons::{cancel_button_style, primary_button_style, secondary_button_style};

pub use inputs::{scrollable_style, url_input_style};
