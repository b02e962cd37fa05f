use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fetch::USER_AGENT;

/// Directory used when neither the command line nor the config names one.
pub const DEFAULT_DOWNLOAD_DIR: &str = "Fetched_Images";

/// Global configuration loaded from `~/.config/uif/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UifConfig {
    /// Directory downloads land in. Relative paths resolve against the
    /// working directory of the invocation.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// User-Agent header sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl UifConfig {
    /// Picks the download directory: command line, then config, then
    /// [`DEFAULT_DOWNLOAD_DIR`].
    pub fn resolve_download_dir(&self, cli_dir: Option<&Path>) -> PathBuf {
        if let Some(dir) = cli_dir {
            return dir.to_path_buf();
        }
        self.download_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_DIR))
    }

    /// The User-Agent to send, falling back to the built-in one.
    pub fn resolve_user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(USER_AGENT)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uif")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UifConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UifConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UifConfig = toml::from_str(&data)?;
    Ok(cfg)
}
