//! Application data model.

mod compose;
mod conversation;
mod demo;
mod settings;

pub use compose::ComposeState;
pub use conversation::{Bubble, BubbleId, Conversation};
pub use demo::{DemoAssets, demo_thread, download_attachment, fetch_preview, prepare_demo_assets};
pub use settings::{AppSettings, load_settings, save_settings};
