use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{fs::config_dir, preferences::UserId};

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "matchbox.toml";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access configuration file: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed configuration file: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The core configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    version: u16,
    /// Owner stamped on produced records when none is given explicitly
    pub owner_id: Option<UserId>,
    /// Pretty-print JSON batches
    pub pretty: bool,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl CoreConfig {
    /// Load the configuration from the user's config directory, writing the defaults there if
    /// no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&contents)?;

        debug!("Loaded configuration from {}", path.display());

        Ok(cfg)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;

        Ok(())
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(FILE_NAME))
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            owner_id: None,
            pretty: false,
            log_level: "info".into(),
        }
    }
}
