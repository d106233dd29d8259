//! Error types for the core library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building preview content.
///
/// Data-consistency problems (a missing domain, an unresolved attachment)
/// are logged and degrade gracefully; they never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// A file the state reported as a loaded image could not be read.
    #[error("Could not load image {}: {source}", path.display())]
    ImageLoad {
        /// Path of the image file.
        path: PathBuf,
        /// Underlying decoder or I/O failure.
        #[source]
        source: image::ImageError,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
