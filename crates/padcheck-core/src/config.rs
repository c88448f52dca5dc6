use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PadError, Result};
use crate::extract::NumberPosition;
use crate::format::InconclusivePolicy;
use crate::scan::ScanOptions;

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# padcheck configuration file
# Location: ~/.padcheck/config.toml

[scan]
# Glob matched against file names when scanning a directory
# Default: unset (all files)
# Example: pattern = "*.exr"

# Descend into subdirectories
recursive = false

# Which digit run of a file name is the sequence number: "first" or "last"
position = "last"

# Include dotfiles and dot-directories
include_hidden = false

[format]
# Padding for generated numbers when the samples are inconclusive
# "unpadded" or "min-length" (pad to the shortest sample)
inconclusive = "unpadded"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub format: FormatConfig,
}

/// Directory scan defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScanConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default)]
    pub recursive: bool,

    #[serde(default)]
    pub position: NumberPosition,

    #[serde(default)]
    pub include_hidden: bool,
}

/// Number generation defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormatConfig {
    #[serde(default)]
    pub inconclusive: InconclusivePolicy,
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| PadError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| PadError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "scan.pattern" => Some(self.scan.pattern.clone().unwrap_or_default()),
            "scan.recursive" => Some(self.scan.recursive.to_string()),
            "scan.position" => Some(self.scan.position.to_string()),
            "scan.include_hidden" => Some(self.scan.include_hidden.to_string()),
            "format.inconclusive" => Some(self.format.inconclusive.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key. An empty pattern unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || PadError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "scan.pattern" => {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    glob::Pattern::new(trimmed)?;
                }
                self.scan.pattern = (!trimmed.is_empty()).then(|| trimmed.to_string());
            }
            "scan.recursive" => self.scan.recursive = parse_bool(value).ok_or_else(invalid)?,
            "scan.position" => self.scan.position = value.parse().map_err(|_| invalid())?,
            "scan.include_hidden" => {
                self.scan.include_hidden = parse_bool(value).ok_or_else(invalid)?
            }
            "format.inconclusive" => {
                self.format.inconclusive = value.parse().map_err(|_| invalid())?
            }
            _ => {
                return Err(PadError::ConfigKeyNotFound {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        [
            "scan.pattern",
            "scan.recursive",
            "scan.position",
            "scan.include_hidden",
            "format.inconclusive",
        ]
        .iter()
        .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
        .collect()
    }

    /// Convert to ScanOptions for use in scan
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            pattern: self.scan.pattern.clone(),
            recursive: self.scan.recursive,
            position: self.scan.position,
            include_hidden: self.scan.include_hidden,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_template_parses() {
        let temp = TempDir::new().unwrap();
        let path = Config::init(temp.path()).unwrap();
        assert!(path.exists());

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_keeps_existing() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.scan.recursive = true;
        config.save(temp.path()).unwrap();

        Config::init(temp.path()).unwrap();
        assert!(Config::load(temp.path()).unwrap().scan.recursive);
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("scan.pattern", "*.exr").unwrap();
        config.set("scan.position", "first").unwrap();
        config.set("format.inconclusive", "min-length").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = Config::load(temp.path()).unwrap();
        assert_eq!(loaded.scan.pattern.as_deref(), Some("*.exr"));
        assert_eq!(loaded.scan.position, NumberPosition::First);
        assert_eq!(loaded.format.inconclusive, InconclusivePolicy::MinLength);
    }

    #[test]
    fn test_load_partial_file() {
        let temp = TempDir::new().unwrap();
        fs::write(Config::path(temp.path()), "[scan]\nrecursive = true\n").unwrap();

        let config = Config::load(temp.path()).unwrap();
        assert!(config.scan.recursive);
        assert_eq!(config.scan.position, NumberPosition::Last);
        assert_eq!(config.format, FormatConfig::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let temp = TempDir::new().unwrap();
        fs::write(Config::path(temp.path()), "[scan]\nposition = \"middle\"\n").unwrap();

        let err = Config::load(temp.path()).unwrap_err();
        assert!(matches!(err, PadError::ConfigParse { .. }));
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();

        config.set("scan.recursive", "yes").unwrap();
        assert_eq!(config.get("scan.recursive").as_deref(), Some("true"));

        config.set("scan.pattern", "*.png").unwrap();
        config.set("scan.pattern", "").unwrap();
        assert_eq!(config.scan.pattern, None);

        assert!(config.get("scan.depth").is_none());
    }

    #[test]
    fn test_config_set_errors() {
        let mut config = Config::default();

        assert!(matches!(
            config.set("scan.depth", "3"),
            Err(PadError::ConfigKeyNotFound { .. })
        ));
        assert!(matches!(
            config.set("scan.recursive", "maybe"),
            Err(PadError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("format.inconclusive", "zeros"),
            Err(PadError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("scan.pattern", "[abc"),
            Err(PadError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_list_and_scan_options() {
        let mut config = Config::default();
        config.scan.include_hidden = true;

        let list = config.list();
        assert_eq!(list.len(), 5);
        assert!(list.contains(&("scan.include_hidden".to_string(), "true".to_string())));

        let options = config.scan_options();
        assert!(options.include_hidden);
        assert_eq!(options.pattern, None);
    }
}
