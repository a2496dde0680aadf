//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;
use crate::progress::AttemptPolicy;
use crate::reorder::ReorderPolicy;

/// Top-level pathwise configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathwiseConfig {
    /// Default catalog file or directory.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Engine thresholds.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Attempt bookkeeping.
    #[serde(default)]
    pub attempts: AttemptPolicy,
    /// Learning-style mapping.
    #[serde(default)]
    pub reorder: ReorderPolicy,
}

/// Expand `${VAR_NAME}` references in a string.
///
/// Substituted values are not expanded again. Unset variables expand to an
/// empty string; an unterminated `${` is kept as-is.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + len];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `pathwise.toml` in the current directory
/// 2. `~/.config/pathwise/config.toml`
///
/// Environment variable override: `PATHWISE_CATALOG`.
pub fn load_config_from(path: Option<&Path>) -> Result<PathwiseConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("pathwise.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<PathwiseConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => PathwiseConfig::default(),
    };

    if let Ok(catalog) = std::env::var("PATHWISE_CATALOG") {
        config.catalog = Some(PathBuf::from(catalog));
    }

    config.catalog = config
        .catalog
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    config
        .engine
        .validate()
        .context("invalid [engine] configuration")?;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("pathwise"))
}
