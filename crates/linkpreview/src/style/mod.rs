//! Styling for the demo conversation.

pub mod widgets;
