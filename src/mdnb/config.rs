use crate::error::{MdnbError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATALOG_FILENAME: &str = "README.md";

/// Configuration for mdnb, stored in .mdnb/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MdnbConfig {
    /// Treat an unterminated code fence as a hard conversion failure
    #[serde(default)]
    pub strict: bool,

    /// Extensions picked up when converting or cataloging a directory
    #[serde(default = "default_markdown_extensions")]
    pub markdown_extensions: Vec<String>,

    /// Extensions considered by the dedup command
    #[serde(default = "default_dedup_extensions")]
    pub dedup_extensions: Vec<String>,

    /// File the catalog command writes its listing to
    #[serde(default = "default_catalog_filename")]
    pub catalog_filename: String,
}

fn default_markdown_extensions() -> Vec<String> {
    vec![".md".to_string()]
}

fn default_dedup_extensions() -> Vec<String> {
    vec![".jpg".to_string(), ".png".to_string()]
}

fn default_catalog_filename() -> String {
    DEFAULT_CATALOG_FILENAME.to_string()
}

impl Default for MdnbConfig {
    fn default() -> Self {
        Self {
            strict: false,
            markdown_extensions: default_markdown_extensions(),
            dedup_extensions: default_dedup_extensions(),
            catalog_filename: default_catalog_filename(),
        }
    }
}

impl MdnbConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MdnbError::Io)?;
        let config: MdnbConfig =
            serde_json::from_str(&content).map_err(MdnbError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MdnbError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MdnbError::Serialization)?;
        fs::write(config_path, content).map_err(MdnbError::Io)?;
        Ok(())
    }

    /// All known keys with their current values, for `config` with no args
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            ("strict", self.strict.to_string()),
            ("markdown-exts", self.markdown_extensions.join(",")),
            ("dedup-exts", self.dedup_extensions.join(",")),
            ("catalog-file", self.catalog_filename.clone()),
        ]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.list_all()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "strict" => {
                self.strict = value.parse().map_err(|_| {
                    MdnbError::Api(format!("Expected true or false, got '{}'", value))
                })?;
            }
            "markdown-exts" => {
                self.markdown_extensions = parse_extensions(value);
            }
            "dedup-exts" => {
                self.dedup_extensions = parse_extensions(value);
            }
            "catalog-file" => {
                self.catalog_filename = value.to_string();
            }
            other => {
                return Err(MdnbError::Api(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }
}

/// Comma-separated extensions, each normalized to start with a dot
fn parse_extensions(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.starts_with('.') {
                s.to_string()
            } else {
                format!(".{}", s)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = MdnbConfig::default();
        assert!(!config.strict);
        assert_eq!(config.markdown_extensions, vec![".md"]);
        assert_eq!(config.catalog_filename, "README.md");
    }

    #[test]
    fn test_set_strict() {
        let mut config = MdnbConfig::default();
        config.set("strict", "true").unwrap();
        assert!(config.strict);
        assert!(config.set("strict", "maybe").is_err());
    }

    #[test]
    fn test_set_extensions_normalizes_dots() {
        let mut config = MdnbConfig::default();
        config.set("markdown-exts", "md, markdown").unwrap();
        assert_eq!(config.markdown_extensions, vec![".md", ".markdown"]);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let mut config = MdnbConfig::default();
        assert!(config.set("no-such-key", "x").is_err());
        assert!(config.get("no-such-key").is_none());
    }

    #[test]
    fn test_load_missing_config_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = MdnbConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, MdnbConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = MdnbConfig::default();
        config.set("strict", "true").unwrap();
        config.set("catalog-file", "INDEX.md").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = MdnbConfig::load(temp_dir.path()).unwrap();
        assert!(loaded.strict);
        assert_eq!(loaded.catalog_filename, "INDEX.md");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = MdnbConfig {
            strict: true,
            markdown_extensions: vec![".md".to_string()],
            dedup_extensions: vec![".png".to_string()],
            catalog_filename: "TOC.md".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: MdnbConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
