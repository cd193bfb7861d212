//! CLI configuration, persisted as JSON.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How scan results and compiled formats are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output mode: {other} (expected text or json)"),
        }
    }
}

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputMode,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Format used by `scan` when none is given.
    #[serde(default)]
    pub default_format: Option<String>,
}

fn default_log_filter() -> String {
    "warn,scanfx=info".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::default(),
            log_filter: default_log_filter(),
            default_format: None,
        }
    }
}

impl AppConfig {
    /// Platform config directory: `~/.config/scanfx/`
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scanfx")
    }

    fn config_file() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Load from disk, or return defaults if the file doesn't exist.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let path = Self::config_file();
        if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = Self::config_dir();
        std::fs::create_dir_all(&dir)?;
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(Self::config_file(), data)?;
        Ok(())
    }

    /// Update one key from its string form.
    pub fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        match key {
            "output" => self.output = value.parse()?,
            "log_filter" => self.log_filter = value,
            "default_format" => {
                self.default_format = if value.is_empty() { None } else { Some(value) }
            }
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.output, OutputMode::Text);
        assert_eq!(cfg.log_filter, "warn,scanfx=info");
        assert!(cfg.default_format.is_none());

        let cfg: AppConfig = serde_json::from_str(r#"{"output":"json"}"#).unwrap();
        assert_eq!(cfg.output, OutputMode::Json);
    }

    #[test]
    fn set_known_and_unknown_keys() {
        let mut cfg = AppConfig::default();
        cfg.set("output", "json".into()).unwrap();
        cfg.set("default_format", "%d %d".into()).unwrap();
        assert_eq!(cfg.output, OutputMode::Json);
        assert_eq!(cfg.default_format.as_deref(), Some("%d %d"));

        cfg.set("default_format", String::new()).unwrap();
        assert!(cfg.default_format.is_none());

        assert!(cfg.set("output", "yaml".into()).is_err());
        assert!(cfg.set("port", "8080".into()).is_err());
    }
}
