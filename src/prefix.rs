//! Prefix layout and persisted settings
//!
//! A prefix is one isolated compatibility-layer environment:
//!
//! ```text
//! <root>/
//!   applications/   per-application data
//!   cache/          DXVK shader cache
//!   config.json     subsystem -> setting -> value
//!   tweaks.reg      last registry import
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::WinpatableError;
use crate::logic::environment::SHADER_CACHE_DIR;

/// Directory name of the default prefix under `$HOME`.
pub const DEFAULT_PREFIX_DIR: &str = ".winpatable";

/// Subsystem under which installed catalog keys are recorded.
pub const APPLICATIONS_SUBSYSTEM: &str = "applications";

/// A compatibility-layer prefix rooted at a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    root: PathBuf,
}

impl Prefix {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `~/.winpatable`
    pub fn default_location() -> crate::error::Result<Self> {
        let home = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .ok_or_else(|| WinpatableError::config("HOME is not set; pass --prefix"))?;
        Ok(Self::new(PathBuf::from(home).join(DEFAULT_PREFIX_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn applications_dir(&self) -> PathBuf {
        self.root.join("applications")
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.root.join(SHADER_CACHE_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    pub fn registry_file(&self) -> PathBuf {
        self.root.join("tweaks.reg")
    }

    /// Create the root and `applications/`. Idempotent.
    pub fn ensure_layout(&self) -> crate::error::Result<()> {
        fs::create_dir_all(self.applications_dir())?;
        debug!("Prefix layout ready at {}", self.root.display());
        Ok(())
    }

    pub fn load_settings(&self) -> Result<PrefixSettings> {
        PrefixSettings::load(self.config_path())
    }

    pub fn save_settings(&self, settings: &PrefixSettings) -> Result<()> {
        settings.save(self.config_path())
    }

    /// Record `key` as installed in `config.json`.
    pub fn record_installed(&self, key: &str) -> Result<()> {
        let mut settings = self.load_settings()?;
        settings.set(APPLICATIONS_SUBSYSTEM, key, Value::Bool(true));
        self.save_settings(&settings)
    }

    /// Keys recorded as installed, sorted.
    pub fn installed_applications(&self) -> Result<Vec<String>> {
        let settings = self.load_settings()?;
        Ok(settings
            .subsystem(APPLICATIONS_SUBSYSTEM)
            .map(|apps| {
                apps.iter()
                    .filter(|(_, v)| v.as_bool() == Some(true))
                    .map(|(k, _)| k.clone())
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Contents of `config.json`: subsystem -> setting -> JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixSettings {
    subsystems: BTreeMap<String, BTreeMap<String, Value>>,
}

impl PrefixSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults written by runtime setup.
    pub fn runtime_defaults() -> Self {
        let mut settings = Self::new();
        settings.set("DXVK", "dxvk.hud", Value::from("off"));
        settings.set("DXVK", "dxvk.numCompilerThreads", Value::from("4"));
        settings.set("Wine", "CSMT", Value::from("enabled"));
        settings.set("Wine", "Staging", Value::from("enabled"));
        settings
    }

    pub fn get(&self, subsystem: &str, name: &str) -> Option<&Value> {
        self.subsystems.get(subsystem)?.get(name)
    }

    pub fn set(&mut self, subsystem: &str, name: &str, value: Value) {
        self.subsystems
            .entry(subsystem.to_string())
            .or_default()
            .insert(name.to_string(), value);
    }

    pub fn subsystem(&self, subsystem: &str) -> Option<&BTreeMap<String, Value>> {
        self.subsystems.get(subsystem)
    }

    /// Copy every setting from `other`, replacing existing values.
    pub fn merge(&mut self, other: &PrefixSettings) {
        for (subsystem, values) in &other.subsystems {
            for (name, value) in values {
                self.set(subsystem, name, value.clone());
            }
        }
    }

    /// Load settings from a JSON file. A missing file yields empty settings.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings JSON in {:?}", path))?;

        Ok(settings)
    }

    /// Save settings as pretty JSON, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?;
        fs::write(path, json).with_context(|| format!("Failed to write settings to {:?}", path))?;

        Ok(())
    }
}
