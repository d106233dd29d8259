//! View components for the application.

mod compose;
mod conversation;
mod header;
mod link_preview;

pub use compose::view_compose;
pub use conversation::view_conversation;
pub use header::view_header;
