//! Preview image readiness.

use std::path::{Path, PathBuf};

use tracing::{error, warn};

use crate::error::{Error, Result};
use crate::geometry::Size;
use crate::record::Attachment;

/// Readiness of a preview's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageState {
    /// No image is attached.
    None,
    /// An attachment exists but its bytes are not materialized yet.
    Loading,
    /// Materialized and validated.
    Loaded,
    /// Materialized but not a usable image.
    Invalid,
}

impl ImageState {
    /// Returns true for [`ImageState::Loaded`].
    #[must_use]
    pub const fn is_loaded(self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// Resolves the image state of a sent preview.
///
/// `has_attachment_id` says whether the record names an image attachment;
/// `attachment` is what that identifier resolved to. Rules apply in order:
/// no identifier, unresolved identifier, pointer, invalid stream, valid stream.
#[must_use]
pub fn resolve_image_state(has_attachment_id: bool, attachment: Option<&Attachment>) -> ImageState {
    if !has_attachment_id {
        return ImageState::None;
    }
    let Some(attachment) = attachment else {
        warn!("Missing image attachment for link preview");
        return ImageState::None;
    };
    match attachment {
        Attachment::Pointer(_) => ImageState::Loading,
        Attachment::Stream(stream) if !stream.is_valid_image => ImageState::Invalid,
        Attachment::Stream(_) => ImageState::Loaded,
    }
}

/// A preview image ready to hand to the toolkit.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    path: PathBuf,
    natural_size: Size,
}

impl PreviewImage {
    /// Location of the image file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Intrinsic size of the image.
    #[must_use]
    pub const fn natural_size(&self) -> Size {
        self.natural_size
    }
}

/// Opens an image the caller believes to be valid.
///
/// Only the header is probed; decoding belongs to the toolkit. Failure here
/// means local storage is corrupt, so it is reported as an error rather than
/// degraded.
#[allow(clippy::cast_precision_loss)] // image dimensions are far below f32 precision limits
pub(crate) fn load_preview_image(path: &Path, known_size: Option<Size>) -> Result<PreviewImage> {
    let (width, height) = image::image_dimensions(path).map_err(|source| {
        error!("Could not load image {}: {source}", path.display());
        Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(PreviewImage {
        path: path.to_path_buf(),
        natural_size: known_size.unwrap_or_else(|| Size::new(width as f32, height as f32)),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::record::{AttachmentId, AttachmentPointer, AttachmentStream};

    fn attachment(pointer_only: bool, valid: bool) -> Attachment {
        let id = AttachmentId::new("img");
        if pointer_only {
            Attachment::Pointer(AttachmentPointer { id })
        } else {
            Attachment::Stream(AttachmentStream {
                id,
                is_valid_image: valid,
                original_file_path: None,
                natural_image_size: Size::new(100.0, 100.0),
            })
        }
    }

    /// Expected outcome for one combination of the four inputs.
    fn expected(has_id: bool, resolved: bool, pointer_only: bool, valid: bool) -> ImageState {
        match (has_id, resolved, pointer_only, valid) {
            (false, ..) | (true, false, ..) => ImageState::None,
            (true, true, true, _) => ImageState::Loading,
            (true, true, false, false) => ImageState::Invalid,
            (true, true, false, true) => ImageState::Loaded,
        }
    }

    #[test]
    fn resolver_covers_every_combination() {
        for has_id in [false, true] {
            for resolved in [false, true] {
                for pointer_only in [false, true] {
                    for valid in [false, true] {
                        let resolved_attachment = resolved.then(|| attachment(pointer_only, valid));
                        let state = resolve_image_state(has_id, resolved_attachment.as_ref());
                        assert_eq!(
                            state,
                            expected(has_id, resolved, pointer_only, valid),
                            "has_id={has_id} resolved={resolved} pointer_only={pointer_only} valid={valid}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn load_reads_dimensions_from_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thumb.png");
        image::RgbImage::new(3, 2).save(&path).unwrap();

        let loaded = load_preview_image(&path, None).unwrap();
        assert_eq!(loaded.natural_size(), Size::new(3.0, 2.0));
        assert_eq!(loaded.path(), path.as_path());
    }

    #[test]
    fn load_keeps_known_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thumb.png");
        image::RgbImage::new(3, 2).save(&path).unwrap();

        let loaded = load_preview_image(&path, Some(Size::new(640.0, 480.0))).unwrap();
        assert_eq!(loaded.natural_size(), Size::new(640.0, 480.0));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_preview_image(&dir.path().join("gone.png"), None);
        assert!(matches!(result, Err(Error::ImageLoad { .. })));
    }

    #[test]
    fn load_garbage_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(load_preview_image(&path, None).is_err());
    }
}
