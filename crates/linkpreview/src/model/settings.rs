//! Settings that persist across sessions.

use std::path::PathBuf;

use crate::style::widgets::palette::ThemeMode;

/// Default bubble width used for sent previews.
pub const DEFAULT_MAX_MESSAGE_WIDTH: f32 = 300.0;

/// Default width of the approval row.
pub const DEFAULT_COMPOSE_WIDTH: f32 = 420.0;

/// Application settings that persist across sessions.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
    /// Widest a message bubble may be.
    pub max_message_width: f32,
    /// Width the approval row is laid out in.
    pub compose_width: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            max_message_width: DEFAULT_MAX_MESSAGE_WIDTH,
            compose_width: DEFAULT_COMPOSE_WIDTH,
        }
    }
}

impl AppSettings {
    /// Replaces widths too narrow to lay anything out in with the defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let usable = |width: f32, fallback: f32| {
            if width.is_finite() && width >= 100.0 {
                width
            } else {
                fallback
            }
        };
        Self {
            max_message_width: usable(self.max_message_width, DEFAULT_MAX_MESSAGE_WIDTH),
            compose_width: usable(self.compose_width, DEFAULT_COMPOSE_WIDTH),
            ..self
        }
    }
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "dark" => Ok(ThemeMode::Dark),
            _ => Ok(ThemeMode::Light),
        }
    }
}

fn settings_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("linkpreview")
}

/// Load application settings from file.
pub async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = settings_dir().join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str::<AppSettings>(&contents)
        .map(AppSettings::sanitized)
        .map_err(|e| e.to_string())
}

/// Save application settings to file.
pub async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let config_dir = settings_dir();

    tokio::fs::create_dir_all(&config_dir)
        .await
        .map_err(|e| e.to_string())?;

    let settings_path = config_dir.join("settings.json");
    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;

    tokio::fs::write(&settings_path, contents)
        .await
        .map_err(|e| e.to_string())?;

    tracing::info!("Settings saved to {:?}", settings_path);
    Ok(())
}
