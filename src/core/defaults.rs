use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::utils::io;

/// Root configuration structure for goman.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GomanConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via goman.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Author placed in the copyright line of generated files
    #[serde(default = "default_author")]
    pub author: String,

    /// Name of a built-in license (see `license::builtin_names`)
    #[serde(default = "default_license")]
    pub license: String,

    /// Custom license header; takes precedence over `license`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_header: Option<String>,

    /// Parent command variable used when --parent is not given
    #[serde(default = "default_parent")]
    pub parent: String,

    /// Directories searched when resolving --package names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_roots: Vec<String>,

    /// Path to a template file replacing the built-in command skeleton
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_template: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            author: default_author(),
            license: default_license(),
            license_header: None,
            parent: default_parent(),
            source_roots: Vec::new(),
            command_template: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_author() -> String {
    "NAME HERE <EMAIL ADDRESS>".to_string()
}

fn default_license() -> String {
    "Apache-2.0".to_string()
}

fn default_parent() -> String {
    "rootCmd".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load config from `path`; a missing or invalid file yields built-in defaults.
pub fn load_config_or_default(path: &Path) -> GomanConfig {
    if !path.exists() {
        return GomanConfig::default();
    }
    load_config_from(path).unwrap_or_default()
}

/// Load config for modification: a missing file yields built-in defaults,
/// but an existing file must parse so its settings are never discarded.
pub fn load_config_for_update(path: &Path) -> crate::Result<GomanConfig> {
    if !path.exists() {
        return Ok(GomanConfig::default());
    }
    load_config_from(path)
}

/// Load config from an explicit file.
pub fn load_config_from(path: &Path) -> crate::Result<GomanConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}

/// Save config to `path` (creates parent directories if missing).
pub fn save_config(config: &GomanConfig, path: &Path) -> crate::Result<()> {
    let content = serde_json::to_string_pretty(config).map_err(|e| {
        crate::Error::internal_json(e.to_string(), Some("serialize goman.json".to_string()))
    })?;

    io::write_file(path, &content, &format!("write {}", path.display()))
}

/// Delete the config file (reset to defaults). Returns whether a file was removed.
pub fn reset_config(path: &Path) -> crate::Result<bool> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Set one key of `defaults`. The value is parsed as JSON, else taken as a string.
pub fn set_default(config: &mut GomanConfig, key: &str, raw: &str) -> crate::Result<Value> {
    let mut defaults = serde_json::to_value(&config.defaults).map_err(|e| {
        crate::Error::internal_json(e.to_string(), Some("serialize defaults".to_string()))
    })?;

    let known = serde_json::to_value(Defaults {
        license_header: Some(String::new()),
        command_template: Some(String::new()),
        source_roots: vec![String::new()],
        ..Defaults::default()
    })
    .ok()
    .and_then(|v| v.as_object().map(|o| o.keys().cloned().collect::<Vec<_>>()))
    .unwrap_or_default();

    if !known.iter().any(|k| k == key) {
        return Err(crate::Error::validation_invalid_argument(
            "key",
            format!("Unknown config key '{}'", key),
            Some(key.to_string()),
            Some(known),
        ));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    if let Value::Object(map) = &mut defaults {
        map.insert(key.to_string(), value.clone());
    }

    config.defaults = serde_json::from_value(defaults).map_err(|e| {
        crate::Error::config_invalid_value(key, Some(raw.to_string()), e.to_string())
    })?;

    Ok(value)
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_object_yields_builtin_defaults() {
        let config: GomanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.defaults.parent, "rootCmd");
        assert_eq!(config.defaults.license, "Apache-2.0");
        assert_eq!(config.defaults.author, "NAME HERE <EMAIL ADDRESS>");
        assert!(config.defaults.source_roots.is_empty());
    }

    #[test]
    fn partial_defaults_keep_remaining_fields() {
        let config: GomanConfig =
            serde_json::from_str(r#"{"defaults":{"author":"Jane <jane@example.com>"}}"#).unwrap();
        assert_eq!(config.defaults.author, "Jane <jane@example.com>");
        assert_eq!(config.defaults.parent, "rootCmd");
    }

    #[test]
    fn load_config_from_reports_invalid_json() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "{{ not json").unwrap();

        let err = load_config_from(temp.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = load_config_or_default(&dir.path().join("goman.json"));
        assert_eq!(config.defaults.parent, "rootCmd");
    }

    #[test]
    fn load_for_update_keeps_invalid_file_intact() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("goman.json");
        assert_eq!(load_config_for_update(&path).unwrap().defaults.parent, "rootCmd");

        let broken = r#"{"defaults":{"author":"Jane","license":"MIT",}}"#;
        fs::write(&path, broken).unwrap();

        let err = load_config_for_update(&path).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
        assert_eq!(fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn save_then_reset() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("goman.json");

        let mut config = GomanConfig::default();
        config.defaults.author = "Jane".to_string();
        save_config(&config, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap().defaults.author, "Jane");

        assert!(reset_config(&path).unwrap());
        assert!(!reset_config(&path).unwrap());
    }

    #[test]
    fn set_default_parses_json_or_string() {
        let mut config = GomanConfig::default();

        let value = set_default(&mut config, "source_roots", r#"["/src","~/go/src"]"#).unwrap();
        assert!(value.is_array());
        assert_eq!(config.defaults.source_roots.len(), 2);

        set_default(&mut config, "author", "Jane Doe <jane@example.com>").unwrap();
        assert_eq!(config.defaults.author, "Jane Doe <jane@example.com>");

        set_default(&mut config, "license_header", "Internal").unwrap();
        assert_eq!(config.defaults.license_header.as_deref(), Some("Internal"));
    }

    #[test]
    fn set_default_rejects_unknown_key() {
        let mut config = GomanConfig::default();
        let err = set_default(&mut config, "colour", "blue").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[test]
    fn set_default_rejects_wrong_type() {
        let mut config = GomanConfig::default();
        let err = set_default(&mut config, "source_roots", "42").unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
        assert!(config.defaults.source_roots.is_empty());
    }

    #[test]
    fn load_config_from_reads_file() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(
            temp,
            r#"{{"defaults":{{"license":"MIT","parent":"serveCmd","source_roots":["~/src"]}}}}"#
        )
        .unwrap();

        let config = load_config_from(temp.path()).unwrap();
        assert_eq!(config.defaults.license, "MIT");
        assert_eq!(config.defaults.parent, "serveCmd");
        assert_eq!(config.defaults.source_roots, vec!["~/src".to_string()]);
    }
}
