use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `TRACKLET__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TRACKLET")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let v = self.sound.sound_volume;
        if !(0.0..=100.0).contains(&v) {
            return Err(format!("sound.sound_volume must be within 0..=100, got {v}"));
        }
        if let Some(base) = &self.script.base_path {
            if base.as_os_str().is_empty() {
                return Err("script.base_path must not be empty".to_string());
            }
        }
        Ok(())
    }

    /// Load and validate, falling back to defaults on any problem.
    ///
    /// Hosts embedding track handles build their `FrontendContext` from this,
    /// so it lives next to the schema rather than in the demo binary. Config
    /// is optional; failures are logged and never prevent a host from starting.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(s) => match s.validate() {
                Ok(()) => s,
                Err(msg) => {
                    log::warn!("invalid config, using defaults: {msg}");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to load config, using defaults: {e}");
                Self::default()
            }
        }
    }
}

/// Resolve the config path from `TRACKLET_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TRACKLET_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tracklet/config.toml`
/// or `~/.config/tracklet/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tracklet").join("config.toml"))
}
