//! Game settings, read from a YAML file. Any key can be left out.

use super::{Error, Result, DEFAULT_ALPHA};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    /// Minimum distance between a freshly spawned apple and the head.
    pub alpha: u16,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Milliseconds between ticks. Only the host looks at this.
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            alpha: DEFAULT_ALPHA,
            seed: None,
            tick_ms: 250,
        }
    }
}

impl Config {
    pub fn from_yaml(src: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&contents)
    }

    /// Like [`load`](Self::load) but a missing or broken file just means
    /// defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Config::default();
        }

        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Config::default()
            }
        }
    }
}
