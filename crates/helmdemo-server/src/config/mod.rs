//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use helmdemo_core::error::{DemoError, Result};

pub use schema::{AppConfig, LogSection, ServerSection};

/// Path tried when no config file is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "helmdemo.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        DemoError::Internal(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AppConfig> {
    let cfg: AppConfig = serde_yaml::from_str(s)
        .map_err(|e| DemoError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_from_file(path)
    } else {
        Ok(AppConfig::default())
    }
}
