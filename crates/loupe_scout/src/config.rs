//! Run configuration.

use loupe_lexicon::{Framework, IgnoreListConfig};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Options of a single scan.
///
/// Relative paths are resolved against `base_path`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanConfig {
    /// Generated `components.d.ts`.
    pub components_file: PathBuf,
    /// Directory to walk.
    pub project_path: PathBuf,
    /// Directory holding framework tag caches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_generated_path: Option<PathBuf>,
    /// Report HTML elements instead of ignoring them.
    pub no_html: bool,
    /// Report SVG elements instead of ignoring them.
    pub no_svg: bool,
    /// Report Vue built-ins instead of ignoring them.
    pub no_vue: bool,
    /// Report Vue Router components instead of ignoring them.
    pub no_vue_router: bool,
    pub frameworks: Vec<Framework>,
    pub custom_tags: Vec<String>,
    /// JSON array of additional tags to ignore. An empty string means none.
    #[serde(
        deserialize_with = "empty_path_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_tags_file: Option<PathBuf>,
    /// Skip unreadable files and directories instead of failing.
    pub quiet: bool,
    pub base_path: PathBuf,
}

impl ScanConfig {
    /// Resolve `path` against `base_path` unless it is absolute.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    pub fn components_path(&self) -> PathBuf {
        self.resolve_path(&self.components_file)
    }

    pub fn project_root(&self) -> PathBuf {
        self.resolve_path(&self.project_path)
    }

    /// The ignore list switches of this run, with paths resolved.
    pub fn ignore_list_config(&self) -> IgnoreListConfig {
        IgnoreListConfig {
            no_html: self.no_html,
            no_svg: self.no_svg,
            no_vue: self.no_vue,
            no_vue_router: self.no_vue_router,
            frameworks: self.frameworks.clone(),
            custom_tags: self.custom_tags.clone(),
            custom_tags_file: self.custom_tags_file.as_deref().map(|p| self.resolve_path(p)),
            user_generated_path: self
                .user_generated_path
                .as_deref()
                .map(|p| self.resolve_path(p)),
        }
    }
}

fn empty_path_as_none<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let path = Option::<String>::deserialize(deserializer)?;
    Ok(path.filter(|p| !p.trim().is_empty()).map(PathBuf::from))
}
