pub mod keys;
pub mod theme;

use crate::{
    branch::{GeneratorConfig, validate_ref_name},
    state::BranchTypeItem,
};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub use keys::{Command, KeysConfig};
pub use theme::{NamedColor, ThemeColor, ThemeConfig};

pub const APP_NAME: &str = "jiraflow";

pub const DEFAULT_MAX_BRANCH_LENGTH: i64 = 60;
pub const MIN_BRANCH_LENGTH: i64 = 10;
pub const MAX_BRANCH_LENGTH: i64 = 200;
pub const DEFAULT_BRANCH_TYPE: &str = "feature";
pub const DEFAULT_SEPARATOR: &str = "-";

/// Characters a separator may not contain, on top of whitespace
const FORBIDDEN_SEPARATOR_CHARS: &[char] = &['/', '\\', '~', '^', ':', '?', '*', '[', '<', '>', '|'];

const DEFAULT_CONFIG: &str = r#"# jiraflow configuration

# Maximum length of generated branch names (10-200)
max_branch_length = 60

# Branch type preselected on the first screen
default_branch_type = "feature"

# Branch types offered by the wizard: key = display label
[branch_types]
feature = "feature"
hotfix = "hotfix"
refactor = "refactor"
support = "support"

[sanitization]
# Joins words in the title part of the branch name
separator = "-"
lowercase = true
# Replace accented letters with ASCII (ä -> ae, ß -> ss, é -> e)
remove_umlauts = false

# Colors: black, red, green, yellow, blue, magenta, cyan, white, gray, or #rrggbb
# [theme]
# accent = "magenta"

# Key bindings per screen; assign "noop" to unbind an inherited key
# [keys.branch_browse]
# "s" = "start_search"
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to determine the config directory")]
    NoConfigDir,
    #[error("config file not found at {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write default config to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config validation error for field '{field}': {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    /// Name of the offending setting, when known
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Invalid { field, .. } => Some(field),
            _ => None,
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config_home.is_empty()
    {
        return Some(PathBuf::from(xdg_config_home).join(APP_NAME));
    }
    // ~/.config on macOS too, not ~/Library/Application Support
    dirs::home_dir().map(|home| home.join(".config").join(APP_NAME))
}

pub fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

fn default_max_branch_length() -> i64 {
    DEFAULT_MAX_BRANCH_LENGTH
}

fn default_branch_type() -> String {
    DEFAULT_BRANCH_TYPE.to_string()
}

fn default_branch_types() -> BTreeMap<String, String> {
    ["feature", "hotfix", "refactor", "support"]
        .into_iter()
        .map(|key| (key.to_string(), key.to_string()))
        .collect()
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Upper bound for generated branch names. Values outside 10..=200 fall back to 60.
    #[serde(default = "default_max_branch_length")]
    pub max_branch_length: i64,

    /// Key of the branch type highlighted on the first screen.
    #[serde(default = "default_branch_type")]
    pub default_branch_type: String,

    /// Branch type key (used in the branch name) to display label. For example:
    /// ```toml
    /// [branch_types]
    /// feature = "Feature"
    /// chore = "Chore"
    /// ```
    #[serde(default = "default_branch_types")]
    pub branch_types: BTreeMap<String, String>,

    #[serde(default)]
    pub sanitization: SanitizationConfig,

    /// Color theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Key binding configuration.
    /// To unbind an inherited key mapping, assign it to `noop`.
    #[serde(default)]
    pub keys: KeysConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SanitizationConfig {
    pub separator: String,
    pub lowercase: bool,
    pub remove_umlauts: bool,
}

impl Default for SanitizationConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            lowercase: true,
            remove_umlauts: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_branch_length: DEFAULT_MAX_BRANCH_LENGTH,
            default_branch_type: default_branch_type(),
            branch_types: default_branch_types(),
            sanitization: SanitizationConfig::default(),
            theme: ThemeConfig::default(),
            keys: KeysConfig::default(),
        }
    }
}

impl Config {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            max_branch_length: usize::try_from(self.max_branch_length).unwrap_or(60),
            separator: self.sanitization.separator.clone(),
            lowercase: self.sanitization.lowercase,
            fold_diacritics: self.sanitization.remove_umlauts,
        }
    }

    /// Branch types in key order, with the default one marked.
    pub fn branch_type_items(&self) -> Vec<BranchTypeItem> {
        self.branch_types
            .iter()
            .map(|(key, label)| BranchTypeItem::new(key, label, *key == self.default_branch_type))
            .collect()
    }

    pub fn branch_type_keys(&self) -> Vec<&str> {
        self.branch_types.keys().map(String::as_str).collect()
    }
}

fn separator_is_valid(separator: &str) -> bool {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => !c.is_whitespace() && !FORBIDDEN_SEPARATOR_CHARS.contains(&c),
        _ => false,
    }
}

/// Repair out-of-range settings, returning the effective config and one warning per fix.
///
/// An empty branch type key cannot be repaired and is an error.
pub fn validate_and_fix(mut config: Config) -> Result<(Config, Vec<String>), ConfigError> {
    let mut warnings = Vec::new();

    if !(MIN_BRANCH_LENGTH..=MAX_BRANCH_LENGTH).contains(&config.max_branch_length) {
        warnings.push(format!(
            "max_branch_length {} is outside {MIN_BRANCH_LENGTH}-{MAX_BRANCH_LENGTH}, using {DEFAULT_MAX_BRANCH_LENGTH}",
            config.max_branch_length
        ));
        config.max_branch_length = DEFAULT_MAX_BRANCH_LENGTH;
    }

    for key in config.branch_types.keys() {
        let message = if key.trim().is_empty() {
            "branch type keys cannot be empty".to_string()
        } else if let Err(e) = validate_ref_name(key) {
            format!("branch type '{key}' cannot be used in a branch name: {e}")
        } else {
            continue;
        };
        return Err(ConfigError::Invalid {
            field: "branch_types".to_string(),
            message,
        });
    }

    if config.branch_types.is_empty() {
        warnings.push("branch_types is empty, using the default branch types".to_string());
        config.branch_types = default_branch_types();
    }

    for (key, label) in &mut config.branch_types {
        if label.trim().is_empty() {
            warnings.push(format!("branch type '{key}' has an empty label, using '{key}'"));
            label.clone_from(key);
        }
    }

    if !config.branch_types.contains_key(&config.default_branch_type) {
        let fallback = if config.branch_types.contains_key(DEFAULT_BRANCH_TYPE) {
            DEFAULT_BRANCH_TYPE.to_string()
        } else {
            // Non-empty after the fixes above
            config.branch_types.keys().next().cloned().unwrap_or_default()
        };
        warnings.push(format!(
            "default_branch_type '{}' is not a configured branch type, using '{fallback}'",
            config.default_branch_type
        ));
        config.default_branch_type = fallback;
    }

    if !separator_is_valid(&config.sanitization.separator) {
        warnings.push(format!(
            "separator {:?} is not a single branch-safe character, using '{DEFAULT_SEPARATOR}'",
            config.sanitization.separator
        ));
        config.sanitization.separator = DEFAULT_SEPARATOR.to_string();
    }

    for warning in &warnings {
        log::warn!("config: {warning}");
    }
    Ok((config, warnings))
}

pub fn load_config_from_str(s: &str) -> Result<(Config, Vec<String>), ConfigError> {
    let config: Config = toml::from_str(s)?;
    validate_and_fix(config)
}

fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, DEFAULT_CONFIG).map_err(write_err)?;
    log::info!("wrote default config to {}", path.display());
    Ok(())
}

/// Load the effective config. Without an override, a missing file is created with defaults.
pub fn load_config(config_override: Option<&Path>) -> Result<(Config, Vec<String>), ConfigError> {
    let config_file = match config_override {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let path = default_config_file().ok_or(ConfigError::NoConfigDir)?;
            if !path.exists() {
                write_default_config(&path)?;
            }
            path
        }
    };
    let contents = fs::read_to_string(&config_file).map_err(|source| ConfigError::Read {
        path: config_file.clone(),
        source,
    })?;
    load_config_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let (config, warnings) = load_config_from_str("").unwrap();
        assert!(warnings.is_empty());
        assert_eq!(config.max_branch_length, 60);
        assert_eq!(config.default_branch_type, "feature");
        assert_eq!(
            config.branch_type_keys(),
            vec!["feature", "hotfix", "refactor", "support"]
        );
        assert_eq!(config.generator_config(), GeneratorConfig::default());
    }

    #[test]
    fn test_default_file_parses_cleanly() {
        let (config, warnings) = load_config_from_str(DEFAULT_CONFIG).unwrap();
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.sanitization, SanitizationConfig::default());
    }

    #[test]
    fn test_full_config() {
        let (config, warnings) = load_config_from_str(
            r#"
max_branch_length = 80
default_branch_type = "bugfix"

[branch_types]
bugfix = "Bug fix"
feature = "Feature"

[sanitization]
separator = "_"
lowercase = false
remove_umlauts = true
"#,
        )
        .unwrap();
        assert!(warnings.is_empty());
        let generator = config.generator_config();
        assert_eq!(generator.max_branch_length, 80);
        assert_eq!(generator.separator, "_");
        assert!(!generator.lowercase);
        assert!(generator.fold_diacritics);

        let items = config.branch_type_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].key, "bugfix");
        assert_eq!(items[0].label, "Bug fix");
        assert!(items[0].is_default);
        assert!(!items[1].is_default);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(load_config_from_str("unknown_field = true").is_err());
        assert!(load_config_from_str("[sanitization]\nseperator = \"-\"").is_err());
    }

    #[test]
    fn test_out_of_range_length_fixed() {
        for value in ["5", "201", "-1"] {
            let (config, warnings) =
                load_config_from_str(&format!("max_branch_length = {value}")).unwrap();
            assert_eq!(config.max_branch_length, 60);
            assert_eq!(warnings.len(), 1, "{value}");
        }
        let (config, warnings) = load_config_from_str("max_branch_length = 10").unwrap();
        assert_eq!(config.max_branch_length, 10);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_branch_types_fixed() {
        let (config, warnings) = load_config_from_str("[branch_types]").unwrap();
        assert_eq!(config.branch_types.len(), 4);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_empty_label_uses_key() {
        let (config, warnings) = load_config_from_str("[branch_types]\nfeature = \"\"").unwrap();
        assert_eq!(config.branch_types["feature"], "feature");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_empty_key_is_an_error() {
        let err = load_config_from_str("[branch_types]\n\"\" = \"blank\"").unwrap_err();
        assert_eq!(err.field(), Some("branch_types"));
    }

    #[test]
    fn test_unsafe_key_is_an_error() {
        let err = load_config_from_str("[branch_types]\n\"big feature\" = \"x\"").unwrap_err();
        assert!(err.to_string().contains("big feature"), "{err}");
    }

    #[test]
    fn test_unknown_default_type_falls_back() {
        let (config, warnings) =
            load_config_from_str("default_branch_type = \"epic\"").unwrap();
        assert_eq!(config.default_branch_type, "feature");
        assert_eq!(warnings.len(), 1);

        let (config, _) = load_config_from_str(
            "default_branch_type = \"\"\n[branch_types]\nchore = \"chore\"\nspike = \"spike\"",
        )
        .unwrap();
        assert_eq!(config.default_branch_type, "chore");
    }

    #[test]
    fn test_bad_separator_fixed() {
        for separator in ["", "--", "/", " ", "~", "|"] {
            let (config, warnings) = load_config_from_str(&format!(
                "[sanitization]\nseparator = {separator:?}"
            ))
            .unwrap();
            assert_eq!(config.sanitization.separator, "-", "{separator:?}");
            assert_eq!(warnings.len(), 1);
        }
        let (config, warnings) = load_config_from_str("[sanitization]\nseparator = \".\"").unwrap();
        assert_eq!(config.sanitization.separator, ".");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_load_config_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", dir.path()) };
        let result = load_config(None);
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        let (config, warnings) = result.unwrap();
        assert!(warnings.is_empty());
        assert_eq!(config.default_branch_type, "feature");
        assert!(dir.path().join(APP_NAME).join("config.toml").exists());
    }

    #[test]
    fn test_load_config_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::NotFound(_))
        ));
        fs::write(&path, "max_branch_length = 40").unwrap();
        let (config, _) = load_config(Some(&path)).unwrap();
        assert_eq!(config.max_branch_length, 40);
    }
}
