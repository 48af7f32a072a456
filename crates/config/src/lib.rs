//! Configuration loading and validation for lorebrief.
//!
//! Every setting has a built-in default matching the standard repository
//! layout (run from the `worlds/` directory). A `lorebrief.toml` in the
//! working directory, or a file passed explicitly, overrides them.

use lorebrief_core::{EntryOrder, Sources};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "lorebrief.toml";

/// The root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefConfig {
    /// Interface definition file
    #[serde(default = "default_interface_path")]
    pub interface_path: PathBuf,

    /// Inventory definition file
    #[serde(default = "default_inventory_path")]
    pub inventory_path: PathBuf,

    /// World content directory settings
    #[serde(default)]
    pub world: WorldConfig,
}

fn default_interface_path() -> PathBuf {
    PathBuf::from("../core/interfaces/interfaces.go")
}
fn default_inventory_path() -> PathBuf {
    PathBuf::from("../core/interfaces/inventory.go")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    #[serde(default = "default_world_dir")]
    pub dir: PathBuf,

    /// File-name suffix of world content files
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// "sorted" (by file name) or "listing" (directory order)
    #[serde(default)]
    pub order: EntryOrder,
}

fn default_world_dir() -> PathBuf {
    PathBuf::from("./simple_example/")
}
fn default_suffix() -> String {
    ".go".into()
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            dir: default_world_dir(),
            suffix: default_suffix(),
            order: EntryOrder::default(),
        }
    }
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            interface_path: default_interface_path(),
            inventory_path: default_inventory_path(),
            world: WorldConfig::default(),
        }
    }
}

impl BriefConfig {
    /// Load configuration for a run.
    ///
    /// An explicit path must exist. Without one, `./lorebrief.toml` is used
    /// when present and the built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                Self::require_file(path)?;
                Self::load_from(path)
            }
            None => Self::load_from(&Self::config_path(None)),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Check that an explicitly given config path names a regular file.
    pub fn require_file(path: &Path) -> Result<(), ConfigError> {
        let reason = if !path.exists() {
            "file does not exist"
        } else if !path.is_file() {
            "not a file"
        } else {
            return Ok(());
        };
        Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: reason.into(),
        })
    }

    /// The config file a run would use.
    pub fn config_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.world.suffix.is_empty() {
            return Err(ConfigError::ValidationError(
                "world.suffix must not be empty".into(),
            ));
        }

        for (name, path) in [
            ("interface_path", &self.interface_path),
            ("inventory_path", &self.inventory_path),
            ("world.dir", &self.world.dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must not be empty"
                )));
            }
        }

        Ok(())
    }

    /// The source locations the assembler reads from.
    pub fn sources(&self) -> Sources {
        Sources {
            interface: self.interface_path.clone(),
            inventory: self.inventory_path.clone(),
            world_dir: self.world.dir.clone(),
            suffix: self.world.suffix.clone(),
            order: self.world.order,
        }
    }

    /// Generate a default config TOML string (for `config init`).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_repository_layout() {
        let config = BriefConfig::default();
        assert_eq!(
            config.interface_path,
            PathBuf::from("../core/interfaces/interfaces.go")
        );
        assert_eq!(
            config.inventory_path,
            PathBuf::from("../core/interfaces/inventory.go")
        );
        assert_eq!(config.world.dir, PathBuf::from("./simple_example/"));
        assert_eq!(config.world.suffix, ".go");
        assert_eq!(config.world.order, EntryOrder::Sorted);
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = BriefConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: BriefConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let toml_str = r#"
[world]
dir = "./castle/"
order = "listing"
"#;
        let config: BriefConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.world.dir, PathBuf::from("./castle/"));
        assert_eq!(config.world.order, EntryOrder::Listing);
        assert_eq!(config.world.suffix, ".go");
        assert_eq!(config.interface_path, default_interface_path());
    }

    #[test]
    fn empty_suffix_rejected() {
        let mut config = BriefConfig::default();
        config.world.suffix.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn empty_path_rejected() {
        let config = BriefConfig {
            inventory_path: PathBuf::new(),
            ..BriefConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("inventory_path"));
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let result = BriefConfig::load_from(Path::new("/nonexistent/lorebrief.toml"));
        assert_eq!(result.unwrap(), BriefConfig::default());
    }

    #[test]
    fn explicit_missing_config_file_fails() {
        let result = BriefConfig::load(Some(Path::new("/nonexistent/lorebrief.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn explicit_directory_is_not_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = BriefConfig::load(Some(tmp.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("not a file"));
    }

    #[test]
    fn require_file_accepts_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "").unwrap();

        assert!(BriefConfig::require_file(&path).is_ok());
        let err = BriefConfig::require_file(&tmp.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("file does not exist"));
    }

    #[test]
    fn load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "interface_path = \"api/interfaces.go\"\n[world]\nsuffix = \".txt\"\n",
        )
        .unwrap();

        let config = BriefConfig::load(Some(&path)).unwrap();
        assert_eq!(config.interface_path, PathBuf::from("api/interfaces.go"));
        assert_eq!(config.world.suffix, ".txt");
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "world = [not toml").unwrap();

        assert!(matches!(
            BriefConfig::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn invalid_order_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[world]\norder = \"random\"\n").unwrap();

        assert!(matches!(
            BriefConfig::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn sources_mirror_config() {
        let config = BriefConfig::default();
        let sources = config.sources();
        assert_eq!(sources.interface, config.interface_path);
        assert_eq!(sources.inventory, config.inventory_path);
        assert_eq!(sources.world_dir, config.world.dir);
        assert_eq!(sources.suffix, ".go");
        assert_eq!(sources.order, EntryOrder::Sorted);
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = BriefConfig::default_toml();
        assert!(toml_str.contains("interfaces.go"));
        assert!(toml_str.contains("simple_example"));
        assert!(toml_str.contains("sorted"));
    }

    #[test]
    fn config_path_defaults_to_working_directory() {
        assert_eq!(BriefConfig::config_path(None), PathBuf::from(CONFIG_FILE));
        assert_eq!(
            BriefConfig::config_path(Some(Path::new("/etc/lorebrief.toml"))),
            PathBuf::from("/etc/lorebrief.toml")
        );
    }
}
