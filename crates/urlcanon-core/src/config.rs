use crate::chain::scope;
use crate::normalize::TailReconciliation;
use crate::schemes::SchemeTable;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/urlcanon/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlcanonConfig {
    /// "structural" (default) or "length" (legacy positional tail append).
    #[serde(default)]
    pub tail_reconciliation: TailReconciliation,
    /// Maximum passes over a scope's normalizer chain.
    #[serde(default = "default_loop_count")]
    pub loop_count: usize,
    /// Scope used when the caller supplies none.
    #[serde(default = "default_scope")]
    pub default_scope: String,
    /// Optional scheme -> default port table; replaces http/https/ftp when set.
    #[serde(default)]
    pub schemes: Option<BTreeMap<String, u16>>,
}

fn default_loop_count() -> usize {
    1
}

fn default_scope() -> String {
    scope::DEFAULT.to_string()
}

impl Default for UrlcanonConfig {
    fn default() -> Self {
        Self {
            tail_reconciliation: TailReconciliation::default(),
            loop_count: default_loop_count(),
            default_scope: default_scope(),
            schemes: None,
        }
    }
}

impl UrlcanonConfig {
    /// Scheme table to normalize with: the configured one or the built-in.
    pub fn scheme_table(&self) -> SchemeTable {
        match &self.schemes {
            Some(map) => SchemeTable::from_pairs(
                map.iter().map(|(s, p)| (s.to_ascii_lowercase(), *p)),
            ),
            None => SchemeTable::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcanon")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlcanonConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlcanonConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file; it must exist.
pub fn load_from(path: &Path) -> Result<UrlcanonConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlcanonConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
