use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracklet/config.toml` or `~/.config/tracklet/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKLET__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound: SoundSettings,
    pub track: TrackSettings,
    pub script: ScriptSettings,
}

/// Category play volumes on a 0..100 scale.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    /// Volume for music and sound tracks started by scripts.
    pub sound_volume: f32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            sound_volume: 100.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrackSettings {
    /// Whether new track handles start with looping enabled.
    pub looping: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScriptSettings {
    /// Directory relative file names are resolved against.
    /// Unset means the process working directory.
    pub base_path: Option<PathBuf>,
}
