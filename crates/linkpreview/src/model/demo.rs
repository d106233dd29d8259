//! Demo fixtures: generated images, a seeded thread, a simulated fetcher.
//!
//! The app has no network stack. Fetching and downloading sleep briefly and
//! hand back files generated at startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use linkpreview_core::{
    Attachment, AttachmentId, AttachmentPointer, AttachmentStream, LinkPreviewDraft,
    LinkPreviewRecord, Size,
};
use tracing::{debug, info};

const FETCH_DELAY: Duration = Duration::from_millis(800);
const DOWNLOAD_DELAY: Duration = Duration::from_millis(1200);

/// Images generated for the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAssets {
    /// Large landscape image, rendered as a hero.
    pub hero: PathBuf,
    /// Small square image, rendered as a thumbnail.
    pub thumbnail: PathBuf,
    /// Image only available after a download.
    pub remote: PathBuf,
}

/// A message in the seeded thread.
#[derive(Debug, Clone)]
pub struct DemoMessage {
    /// Sent by the local user.
    pub outgoing: bool,
    /// Message text.
    pub body: &'static str,
    /// Link preview, if any.
    pub preview: Option<DemoPreview>,
}

/// Link preview attached to a seeded message.
#[derive(Debug, Clone)]
pub struct DemoPreview {
    /// Record as received.
    pub record: LinkPreviewRecord,
    /// Image attachment as received.
    pub attachment: Option<Attachment>,
    /// What a pointer attachment becomes once downloaded.
    pub pending_download: Option<AttachmentStream>,
}

fn gradient(width: u32, height: u32, from: [u8; 3], to: [u8; 3]) -> image::RgbImage {
    let span = (width + height).max(1);
    image::RgbImage::from_fn(width, height, |x, y| {
        let t = (x + y) * 255 / span;
        let mix = |a: u8, b: u8| {
            let value = (u32::from(a) * (255 - t) + u32::from(b) * t) / 255;
            u8::try_from(value).unwrap_or(u8::MAX)
        };
        image::Rgb([mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2])])
    })
}

fn write_assets(dir: &Path) -> anyhow::Result<DemoAssets> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating demo directory {}", dir.display()))?;

    let assets = DemoAssets {
        hero: dir.join("hero.png"),
        thumbnail: dir.join("thumbnail.png"),
        remote: dir.join("remote.png"),
    };
    gradient(640, 420, [255, 140, 60], [90, 40, 180])
        .save(&assets.hero)
        .context("writing hero image")?;
    gradient(96, 96, [40, 170, 120], [20, 60, 140])
        .save(&assets.thumbnail)
        .context("writing thumbnail image")?;
    gradient(160, 120, [230, 60, 90], [250, 210, 80])
        .save(&assets.remote)
        .context("writing remote image")?;

    debug!("Demo assets written to {}", dir.display());
    Ok(assets)
}

/// Generates the demo images under the cache directory.
pub async fn prepare_demo_assets() -> Result<DemoAssets, String> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("linkpreview")
        .join("demo");

    tokio::task::spawn_blocking(move || write_assets(&dir))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| format!("{e:#}"))
}

/// Natural size of an image file, read from its header.
#[allow(clippy::cast_precision_loss)]
fn natural_size(path: &Path) -> Size {
    image::image_dimensions(path)
        .map(|(width, height)| Size::new(width as f32, height as f32))
        .unwrap_or(Size::ZERO)
}

fn stream(id: &str, path: &Path) -> AttachmentStream {
    AttachmentStream {
        id: AttachmentId::new(id),
        is_valid_image: true,
        original_file_path: Some(path.to_path_buf()),
        natural_image_size: natural_size(path),
    }
}

fn record(url: &str, title: Option<&str>, image_id: Option<&str>) -> LinkPreviewRecord {
    LinkPreviewRecord {
        url_string: Some(url.to_string()),
        title: title.map(str::to_string),
        display_domain: None,
        image_attachment_id: image_id.map(AttachmentId::new),
    }
}

/// The seeded conversation: one bubble per sent layout, plus a pending
/// download and a broken image.
#[must_use]
pub fn demo_thread(assets: &DemoAssets) -> Vec<DemoMessage> {
    let hero = stream("hero", &assets.hero);
    let thumbnail = stream("thumbnail", &assets.thumbnail);
    let remote = stream("remote", &assets.remote);

    vec![
        DemoMessage {
            outgoing: false,
            body: "Have you seen this?",
            preview: Some(DemoPreview {
                record: record(
                    "https://photos.example.org/sunset",
                    Some("Sunset over the harbour, shot on a rainy evening in late autumn"),
                    Some("hero"),
                ),
                attachment: Some(Attachment::Stream(hero)),
                pending_download: None,
            }),
        },
        DemoMessage {
            outgoing: true,
            body: "Nice. Here's the write-up",
            preview: Some(DemoPreview {
                record: record(
                    "https://blog.example.com/posts/harbour",
                    Some("Harbour notes"),
                    Some("thumbnail"),
                ),
                attachment: Some(Attachment::Stream(thumbnail)),
                pending_download: None,
            }),
        },
        DemoMessage {
            outgoing: false,
            body: "And the map",
            preview: Some(DemoPreview {
                record: record(
                    "https://maps.example.net/place/42",
                    Some("Harbour Point"),
                    Some("remote"),
                ),
                attachment: Some(Attachment::Pointer(AttachmentPointer {
                    id: AttachmentId::new("remote"),
                })),
                pending_download: Some(remote),
            }),
        },
        DemoMessage {
            outgoing: false,
            body: "This one has no title",
            preview: Some(DemoPreview {
                record: record("https://news.example.com/a/1", None, None),
                attachment: None,
                pending_download: None,
            }),
        },
        DemoMessage {
            outgoing: true,
            body: "Broken image upload",
            preview: Some(DemoPreview {
                record: record(
                    "https://files.example.com/broken",
                    Some("Corrupt attachment"),
                    Some("broken"),
                ),
                attachment: Some(Attachment::Stream(AttachmentStream {
                    id: AttachmentId::new("broken"),
                    is_valid_image: false,
                    original_file_path: None,
                    natural_image_size: Size::ZERO,
                })),
                pending_download: None,
            }),
        },
        DemoMessage {
            outgoing: true,
            body: "Paste a link below to try the compose preview.",
            preview: None,
        },
    ]
}

/// Simulates fetching a preview for `url`.
///
/// URLs whose path has an even number of characters get the hero image,
/// odd ones the thumbnail. Hosts starting with "plain." get no image.
pub async fn fetch_preview(url: String, assets: DemoAssets) -> Result<LinkPreviewDraft, String> {
    tokio::time::sleep(FETCH_DELAY).await;

    let url = url.trim().to_string();
    let draft = LinkPreviewDraft::new(url.clone());
    let Some(domain) = draft.display_domain() else {
        return Err(format!("No preview available for \"{url}\""));
    };

    let title = format!("A page on {domain}");
    let draft = draft.with_title(title);
    info!("Fetched preview for {}", url);

    if domain.starts_with("plain.") {
        return Ok(draft);
    }
    let image = if url.len() % 2 == 0 {
        assets.hero
    } else {
        assets.thumbnail
    };
    Ok(draft.with_image_file_path(image))
}

/// Simulates downloading an attachment's bytes.
pub async fn download_attachment(stream: AttachmentStream) -> Result<AttachmentStream, String> {
    tokio::time::sleep(DOWNLOAD_DELAY).await;

    if let Some(path) = &stream.original_file_path {
        tokio::fs::metadata(path)
            .await
            .map_err(|e| format!("Attachment {} unavailable: {e}", stream.id))?;
    }
    info!("Downloaded attachment {}", stream.id);
    Ok(stream)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn assets_are_readable_images() {
        let dir = tempfile::tempdir().unwrap();
        let assets = write_assets(dir.path()).unwrap();
        assert_eq!(natural_size(&assets.hero), Size::new(640.0, 420.0));
        assert_eq!(natural_size(&assets.thumbnail), Size::new(96.0, 96.0));
        assert_eq!(natural_size(&assets.remote), Size::new(160.0, 120.0));
    }

    #[test]
    fn missing_file_has_no_natural_size() {
        assert_eq!(natural_size(Path::new("/nonexistent/x.png")), Size::ZERO);
    }

    #[test]
    fn thread_has_one_pending_download() {
        let dir = tempfile::tempdir().unwrap();
        let assets = write_assets(dir.path()).unwrap();
        let thread = demo_thread(&assets);
        let pending: Vec<_> = thread
            .iter()
            .filter_map(|message| message.preview.as_ref())
            .filter(|preview| preview.pending_download.is_some())
            .collect();
        assert_eq!(pending.len(), 1);
        assert!(
            pending[0]
                .attachment
                .as_ref()
                .is_some_and(Attachment::is_pointer_only)
        );
    }

    #[tokio::test]
    async fn fetch_rejects_non_links() {
        let dir = tempfile::tempdir().unwrap();
        let assets = write_assets(dir.path()).unwrap();
        assert!(fetch_preview("not a url at all".into(), assets).await.is_err());
    }

    #[tokio::test]
    async fn fetch_picks_image_by_url() {
        let dir = tempfile::tempdir().unwrap();
        let assets = write_assets(dir.path()).unwrap();

        let plain = fetch_preview("https://plain.example.com".into(), assets.clone())
            .await
            .unwrap();
        assert!(plain.image_file_path.is_none());

        let even = fetch_preview("https://example.com/ab".into(), assets.clone())
            .await
            .unwrap();
        assert_eq!(even.image_file_path.as_ref(), Some(&assets.hero));
        assert_eq!(even.title.as_deref(), Some("A page on example.com"));
    }

    #[tokio::test]
    async fn download_fails_for_missing_file() {
        let stream = AttachmentStream {
            id: AttachmentId::new("gone"),
            is_valid_image: true,
            original_file_path: Some(PathBuf::from("/nonexistent/gone.png")),
            natural_image_size: Size::new(10.0, 10.0),
        };
        assert!(download_attachment(stream).await.is_err());
    }
}
