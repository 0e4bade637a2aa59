use serde::Deserialize;
use std::{
    env, fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use finder_types::ui::UiOptions;

use crate::session::LoadingTimings;

const ENV_ASCII: &str = "FINDER_ASCII";
const ENV_HIGH_CONTRAST: &str = "FINDER_HIGH_CONTRAST";
const ENV_REDUCED_MOTION: &str = "FINDER_REDUCED_MOTION";

#[derive(Debug, Default, Deserialize)]
pub struct FinderConfig {
    pub app: Option<AppConfig>,
    pub loading: Option<LoadingConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Freeze the loading dots.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Pacing of the simulated loading sequence.
#[derive(Debug, Default, Deserialize)]
pub struct LoadingConfig {
    /// Time each stage stays on screen. Default: 1500.
    pub stage_interval_ms: Option<u64>,
    /// Extra wait after the last stage before results appear. Default: 1000.
    pub settle_delay_ms: Option<u64>,
}

impl FinderConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// UI options from `[app]`, overridden by `FINDER_*` environment flags.
    #[must_use]
    pub fn ui_options(config: Option<&Self>) -> UiOptions {
        Self::ui_options_with(config, |name| env::var(name).ok())
    }

    fn ui_options_with(
        config: Option<&Self>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> UiOptions {
        let app = config.and_then(|cfg| cfg.app.as_ref());
        let flag = |name: &str, configured: bool| {
            lookup(name)
                .as_deref()
                .and_then(parse_flag)
                .unwrap_or(configured)
        };
        UiOptions {
            ascii_only: flag(ENV_ASCII, app.is_some_and(|cfg| cfg.ascii_only)),
            high_contrast: flag(ENV_HIGH_CONTRAST, app.is_some_and(|cfg| cfg.high_contrast)),
            reduced_motion: flag(ENV_REDUCED_MOTION, app.is_some_and(|cfg| cfg.reduced_motion)),
        }
    }

    #[must_use]
    pub fn loading_timings(config: Option<&Self>) -> LoadingTimings {
        let defaults = LoadingTimings::default();
        let Some(loading) = config.and_then(|cfg| cfg.loading.as_ref()) else {
            return defaults;
        };
        LoadingTimings {
            stage_interval: loading
                .stage_interval_ms
                .map_or(defaults.stage_interval, Duration::from_millis),
            settle_delay: loading
                .settle_delay_ms
                .map_or(defaults.settle_delay, Duration::from_millis),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        other => {
            tracing::warn!("Ignoring unrecognized flag value: {}", other);
            None
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".finder").join("config.toml"))
}
