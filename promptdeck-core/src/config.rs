use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{PromptDeckError, Result};
use crate::favorites::{BuiltinFavorites, Favorite, FavoritesSource, StaticFavorites};
use crate::prompt::DEFAULT_BUSY_RESET;
use crate::submit::{JsonlSink, LogSink, SubmitSink};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "PROMPTDECK_CONFIG";

/// Commented starting point written by `promptdeck config init`
pub const CONFIG_TEMPLATE: &str = include_str!("../config.template.toml");

/// Configuration for promptdeck (`~/.promptdeck/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDeckConfig {
    pub ui: UiConfig,
    pub submit: SubmitConfig,
    pub logging: LoggingConfig,

    /// Replaces the built-in favorites when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorites: Option<Vec<Favorite>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Milliseconds before the send button leaves its busy state
    pub busy_reset_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            busy_reset_ms: DEFAULT_BUSY_RESET.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Log the prompt via tracing
    #[default]
    Log,
    /// Append to a JSONL file
    Jsonl,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    pub sink: SinkKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file (defaults to ~/.promptdeck/promptdeck.log)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl PromptDeckConfig {
    /// Load from an explicit path; a missing file means defaults
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut config: Self =
            toml::from_str(&content).map_err(|e| PromptDeckError::config_parse(path, e))?;

        config.expand_variables();
        config.validate()?;

        Ok(config)
    }

    /// Directory holding config, log and default submission files
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".promptdeck")
    }

    /// Config file path: $PROMPTDECK_CONFIG or ~/.promptdeck/config.toml
    pub fn config_path() -> PathBuf {
        env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::config_dir().join("config.toml"))
    }

    /// Effective log file path
    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("promptdeck.log"))
    }

    pub fn busy_reset(&self) -> Duration {
        Duration::from_millis(self.ui.busy_reset_ms)
    }

    /// Favorites source described by this config
    pub fn favorites_source(&self) -> Box<dyn FavoritesSource> {
        match &self.favorites {
            Some(list) => Box::new(StaticFavorites::new(list.clone())),
            None => Box::new(BuiltinFavorites),
        }
    }

    /// Open the configured submission sink
    pub fn open_sink(&self) -> Result<Box<dyn SubmitSink>> {
        match self.submit.sink {
            SinkKind::Log => Ok(Box::new(LogSink)),
            SinkKind::Jsonl => {
                let path = self.submit.path.as_ref().ok_or_else(|| {
                    PromptDeckError::config("submit.path is required for the jsonl sink")
                })?;
                Ok(Box::new(JsonlSink::open(path)?))
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.submit.sink == SinkKind::Jsonl && self.submit.path.is_none() {
            return Err(PromptDeckError::config(
                "submit.path is required for the jsonl sink",
            ));
        }
        if let Some(favorites) = &self.favorites {
            StaticFavorites::new(favorites.clone()).favorites()?;
        }
        Ok(())
    }

    /// Expand ${var} references in path values
    fn expand_variables(&mut self) {
        let mut vars = HashMap::new();
        let home = env::var("HOME")
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.display().to_string()))
            .unwrap_or_default();
        vars.insert("HOME".to_string(), home);

        if let Some(ref path) = self.submit.path {
            self.submit.path = Some(Self::expand_path(path, &vars));
        }
        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(Self::expand_path(file, &vars));
        }
    }

    fn expand_path(path: &Path, vars: &HashMap<String, String>) -> PathBuf {
        PathBuf::from(Self::expand_string(&path.display().to_string(), vars))
    }

    fn expand_string(s: &str, vars: &HashMap<String, String>) -> String {
        let mut result = s.to_string();

        for (key, value) in vars {
            let pattern = format!("${{{}}}", key);
            result = result.replace(&pattern, value);
        }

        result
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PromptDeckConfig::load_from(dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, PromptDeckConfig::default());
        assert_eq!(config.busy_reset(), Duration::from_millis(300));
        assert_eq!(config.submit.sink, SinkKind::Log);
        assert_eq!(config.favorites_source().favorites().unwrap().len(), 3);
    }

    #[test]
    fn test_template_parses() {
        let config: PromptDeckConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.ui.busy_reset_ms, 300);
        assert!(config.favorites.is_none());
    }

    #[test]
    fn test_favorites_and_delay_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[ui]
busy_reset_ms = 750

[[favorites]]
id = "review"
label = "Code Review"
prompt = "Prüfe diesen Code auf Fehler."
"#,
        );

        let config = PromptDeckConfig::load_from(&path).unwrap();
        assert_eq!(config.busy_reset(), Duration::from_millis(750));

        let favorites = config.favorites_source().favorites().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id.as_str(), "review");
        assert_eq!(favorites[0].prompt, "Prüfe diesen Code auf Fehler.");
    }

    #[test]
    fn test_duplicate_favorites_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[[favorites]]
id = "x"
label = "One"
prompt = "1"

[[favorites]]
id = "x"
label = "Two"
prompt = "2"
"#,
        );

        let err = PromptDeckConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, PromptDeckError::DuplicateFavorite { .. }));
    }

    #[test]
    fn test_jsonl_sink_requires_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[submit]\nsink = \"jsonl\"\n");

        let err = PromptDeckConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, PromptDeckError::Config { .. }));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[ui\nbusy_reset_ms = ");

        let err = PromptDeckConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, PromptDeckError::ConfigParse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_expand_string() {
        let mut vars = HashMap::new();
        vars.insert("HOME".to_string(), "/home/test".to_string());

        assert_eq!(
            PromptDeckConfig::expand_string("${HOME}/.promptdeck/out.jsonl", &vars),
            "/home/test/.promptdeck/out.jsonl"
        );
        assert_eq!(PromptDeckConfig::expand_string("/tmp/x", &vars), "/tmp/x");
    }

    #[test]
    fn test_jsonl_sink_opens_configured_path() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.jsonl");
        let config = PromptDeckConfig {
            submit: SubmitConfig {
                sink: SinkKind::Jsonl,
                path: Some(out.clone()),
            },
            ..Default::default()
        };

        let sink = config.open_sink().unwrap();
        sink.submit("hello").unwrap();
        assert!(fs::read_to_string(out).unwrap().contains("\"hello\""));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = PromptDeckConfig {
            favorites: Some(crate::favorites::builtin_favorites()),
            ..Default::default()
        };
        let text = config.to_toml().unwrap();
        let parsed: PromptDeckConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
