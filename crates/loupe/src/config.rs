//! Configuration file loading for loupe.
//!
//! Reads `loupe.config.json` from the current working directory, or the file
//! passed with `--config`. Also provides the JSON Schema of the file for
//! editor autocompletion.

use crate::error::{CliError, CliResult};
use loupe_lexicon::Framework;
use loupe_scout::ScanConfig;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "loupe.config.json";

pub const DEFAULT_COMPONENTS_FILE: &str = "./components.d.ts";
pub const DEFAULT_PROJECT_PATH: &str = "./src";
pub const DEFAULT_USER_GENERATED_PATH: &str = "./node_modules/.cache/loupe";

/// Top-level loupe configuration.
///
/// Every key is optional; CLI flags win over the file, the file wins over
/// the built-in defaults.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoupeConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_generated_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_html: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_svg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_vue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_vue_router: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frameworks: Option<Vec<Framework>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<Vec<String>>,
    /// An empty string means no file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_tags_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,
}

impl LoupeConfig {
    /// Scan options from this file, with built-in defaults for missing keys.
    ///
    /// A relative `basePath` resolves against `cwd`; a missing one is `cwd`.
    pub fn to_scan_config(&self, cwd: &Path) -> ScanConfig {
        let base_path = match &self.base_path {
            Some(base) if base.is_absolute() => base.clone(),
            Some(base) => cwd.join(base),
            None => cwd.to_path_buf(),
        };

        ScanConfig {
            components_file: self
                .components_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPONENTS_FILE)),
            project_path: self
                .project_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_PATH)),
            user_generated_path: Some(
                self.user_generated_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_USER_GENERATED_PATH)),
            ),
            no_html: self.no_html.unwrap_or_default(),
            no_svg: self.no_svg.unwrap_or_default(),
            no_vue: self.no_vue.unwrap_or_default(),
            no_vue_router: self.no_vue_router.unwrap_or_default(),
            frameworks: self.frameworks.clone().unwrap_or_default(),
            custom_tags: self.custom_tags.clone().unwrap_or_default(),
            custom_tags_file: self
                .custom_tags_file
                .as_deref()
                .map(str::trim)
                .filter(|file| !file.is_empty())
                .map(PathBuf::from),
            quiet: self.quiet.unwrap_or_default(),
            base_path,
        }
    }
}

/// Load the config file.
///
/// An explicit `path` must exist and parse. Without one,
/// `<cwd>/loupe.config.json` is used if present; a broken default file is
/// reported as a warning and ignored.
pub fn load_config(path: Option<&Path>, cwd: &Path) -> CliResult<LoupeConfig> {
    if let Some(path) = path {
        let path = cwd.join(path);
        tracing::debug!("loading config from {}", path.display());
        return read_config(&path);
    }

    let config_path = cwd.join(CONFIG_FILE_NAME);
    match read_config(&config_path) {
        Ok(config) => {
            tracing::debug!("loaded config from {}", config_path.display());
            Ok(config)
        }
        Err(CliError::ReadConfig { source, .. }) if source.kind() == ErrorKind::NotFound => {
            tracing::debug!("no {} in {}", CONFIG_FILE_NAME, cwd.display());
            Ok(LoupeConfig::default())
        }
        Err(e) => {
            eprintln!("\x1b[33mWarning:\x1b[0m {}", e);
            Ok(LoupeConfig::default())
        }
    }
}

fn read_config(path: &Path) -> CliResult<LoupeConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

/// JSON Schema for `loupe.config.json`.
pub const LOUPE_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Loupe Configuration",
  "description": "Configuration file for loupe - find unknown component tags in Vue projects",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "componentsFile": {
      "type": "string",
      "description": "Generated component registry, relative to basePath",
      "default": "./components.d.ts"
    },
    "projectPath": {
      "type": "string",
      "description": "Directory with the Vue sources to scan, relative to basePath",
      "default": "./src"
    },
    "userGeneratedPath": {
      "type": "string",
      "description": "Directory holding framework tag caches written by `loupe import`",
      "default": "./node_modules/.cache/loupe"
    },
    "noHtml": {
      "type": "boolean",
      "description": "Report HTML elements instead of ignoring them",
      "default": false
    },
    "noSvg": {
      "type": "boolean",
      "description": "Report SVG elements instead of ignoring them",
      "default": false
    },
    "noVue": {
      "type": "boolean",
      "description": "Report Vue built-in components instead of ignoring them",
      "default": false
    },
    "noVueRouter": {
      "type": "boolean",
      "description": "Report Vue Router components instead of ignoring them",
      "default": false
    },
    "frameworks": {
      "type": "array",
      "description": "Component libraries whose tags are ignored",
      "items": {
        "type": "string",
        "enum": ["vuetify", "vueUse", "quasar"]
      },
      "uniqueItems": true
    },
    "customTags": {
      "type": "array",
      "description": "Additional tags to ignore",
      "items": { "type": "string" },
      "examples": [["v-date-input", "my-widget"]]
    },
    "customTagsFile": {
      "type": "string",
      "description": "JSON file with an array of additional tags to ignore, relative to basePath. An empty string means none."
    },
    "quiet": {
      "type": "boolean",
      "description": "Only print the final line and skip unreadable files",
      "default": false
    },
    "basePath": {
      "type": "string",
      "description": "Directory other paths are resolved against. Defaults to the working directory."
    }
  },
  "additionalProperties": false
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LoupeConfig::default().to_scan_config(Path::new("/work/app"));

        assert_eq!(config.components_file, PathBuf::from("./components.d.ts"));
        assert_eq!(config.project_path, PathBuf::from("./src"));
        assert_eq!(
            config.user_generated_path,
            Some(PathBuf::from("./node_modules/.cache/loupe"))
        );
        assert_eq!(config.base_path, PathBuf::from("/work/app"));
        assert!(!config.no_html && !config.quiet);
        assert!(config.frameworks.is_empty());
        assert_eq!(config.custom_tags_file, None);
    }

    #[test]
    fn test_parse_full_config() {
        let config: LoupeConfig = serde_json::from_str(
            r#"{
                "$schema": "./node_modules/loupe/loupe.config.schema.json",
                "componentsFile": "types/components.d.ts",
                "projectPath": "app",
                "noVueRouter": true,
                "frameworks": ["vuetify", "quasar"],
                "customTags": ["v-date-input"],
                "customTagsFile": "",
                "basePath": "frontend"
            }"#,
        )
        .unwrap();
        let scan = config.to_scan_config(Path::new("/work"));

        assert_eq!(scan.components_path(), PathBuf::from("/work/frontend/types/components.d.ts"));
        assert_eq!(scan.project_root(), PathBuf::from("/work/frontend/app"));
        assert!(scan.no_vue_router);
        assert_eq!(scan.frameworks, [Framework::Vuetify, Framework::Quasar]);
        assert_eq!(scan.custom_tags, ["v-date-input"]);
        assert_eq!(scan.custom_tags_file, None);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = serde_json::from_str::<LoupeConfig>(r#"{ "componentFile": "x.d.ts" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_default_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let config = load_config(None, dir.path()).unwrap();
        assert!(config.components_file.is_none());
    }

    #[test]
    fn test_default_file_is_picked_up() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "quiet": true }"#).unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.quiet, Some(true));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(Path::new("nope.json")), dir.path()).unwrap_err();
        assert!(matches!(err, CliError::ReadConfig { .. }));
    }

    #[test]
    fn test_explicit_file_must_parse() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("custom.json"), "{ not json").unwrap();

        let err = load_config(Some(Path::new("custom.json")), dir.path()).unwrap_err();
        assert!(matches!(err, CliError::ParseConfig { .. }));
    }

    #[test]
    fn test_schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(LOUPE_CONFIG_SCHEMA).unwrap();
        let properties = schema["properties"].as_object().unwrap();

        // Every config key is described.
        let config = serde_json::to_value(LoupeConfig {
            schema: Some(String::new()),
            components_file: Some(PathBuf::new()),
            project_path: Some(PathBuf::new()),
            user_generated_path: Some(PathBuf::new()),
            no_html: Some(false),
            no_svg: Some(false),
            no_vue: Some(false),
            no_vue_router: Some(false),
            frameworks: Some(Vec::new()),
            custom_tags: Some(Vec::new()),
            custom_tags_file: Some(String::new()),
            quiet: Some(false),
            base_path: Some(PathBuf::new()),
        })
        .unwrap();
        for key in config.as_object().unwrap().keys() {
            assert!(properties.contains_key(key), "{key} missing from schema");
        }
    }
}
