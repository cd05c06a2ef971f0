//! Component registry loader.
//!
//! Reads the `components.d.ts` declaration generated by
//! `unplugin-vue-components` and lists the components it registers:
//!
//! ```ts
//! declare module 'vue' {
//!   export interface GlobalComponents {
//!     HelloWorld: typeof import('./src/components/HelloWorld.vue')['default']
//!     RouterLink: typeof import('vue-router')['RouterLink']
//!   }
//! }
//! ```

use crate::error::{ScoutError, ScoutResult};
use loupe_lexicon::TagName;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::Serialize;
use std::path::Path;

static GLOBAL_COMPONENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+interface\s+GlobalComponents\s*\{([^}]*)\}").expect("Invalid regex")
});

static TYPE_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*:\s*typeof\s+import\(.*$").expect("Invalid regex"));

/// A component registered in the declaration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    pub tag: TagName,
    pub raw_tag: String,
}

impl ComponentEntry {
    pub fn new(raw_tag: impl Into<String>) -> Self {
        let raw_tag = raw_tag.into();
        Self {
            tag: TagName::new(&raw_tag),
            raw_tag,
        }
    }
}

/// Load the registered components from a declaration file.
///
/// A file without a `GlobalComponents` interface yields an empty list.
pub fn load_components(path: &Path) -> ScoutResult<Vec<ComponentEntry>> {
    let source = std::fs::read_to_string(path).map_err(|source| ScoutError::Registry {
        path: path.to_path_buf(),
        source,
    })?;

    let components = parse_components(&source);
    tracing::debug!(
        "{} components registered in {}",
        components.len(),
        path.display()
    );

    Ok(components)
}

/// Parse the `GlobalComponents` interface body, one entry per member line.
pub fn parse_components(source: &str) -> Vec<ComponentEntry> {
    let Some(body) = GLOBAL_COMPONENTS
        .captures(source)
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    body.as_str()
        .lines()
        .filter_map(member_name)
        .map(ComponentEntry::new)
        .collect()
}

/// Strip a member line down to its key.
fn member_name(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("//") || line.starts_with("/*") || line.starts_with('*')
    {
        return None;
    }

    let name = match TYPE_ANNOTATION.find(line) {
        Some(annotation) => &line[..annotation.start()],
        None => line,
    };
    let name = name
        .trim_end_matches([';', ','])
        .trim()
        .trim_matches(['\'', '"']);

    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const COMPONENTS_D_TS: &str = r#"/* eslint-disable */
// @ts-nocheck
// Generated by unplugin-vue-components
// Read more: https://github.com/vuejs/core/pull/3399
export {}

/* prettier-ignore */
declare module 'vue' {
  export interface GlobalComponents {
    HelloWorld: typeof import('./src/components/HelloWorld.vue')['default']
    IconCommunity: typeof import('./src/components/icons/IconCommunity.vue')['default']
    RouterLink: typeof import('vue-router')['RouterLink']
    'legacy-widget': typeof import('./src/components/LegacyWidget.vue')['default'];

    WelcomeItem: typeof import('./src/components/WelcomeItem.vue')['default']
  }
}
"#;

    #[test]
    fn test_parse_components() {
        let components = parse_components(COMPONENTS_D_TS);
        let raw: Vec<&str> = components.iter().map(|c| c.raw_tag.as_str()).collect();

        assert_eq!(
            raw,
            [
                "HelloWorld",
                "IconCommunity",
                "RouterLink",
                "legacy-widget",
                "WelcomeItem"
            ]
        );
        assert_eq!(components[0].tag.as_str(), "helloworld");
        assert_eq!(components[3].tag, TagName::new("LegacyWidget"));
    }

    #[test]
    fn test_missing_interface_is_empty() {
        assert!(parse_components("export {}\n").is_empty());
        assert!(parse_components("").is_empty());
    }

    #[test]
    fn test_empty_interface() {
        let source = "declare module 'vue' {\n  export interface GlobalComponents {\n  }\n}\n";
        assert!(parse_components(source).is_empty());
    }

    #[test]
    fn test_load_components() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("components.d.ts");
        std::fs::write(&path, COMPONENTS_D_TS).unwrap();

        let components = load_components(&path).unwrap();
        assert_eq!(components.len(), 5);
    }

    #[test]
    fn test_load_components_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("components.d.ts");

        let err = load_components(&path).unwrap_err();
        assert!(matches!(err, ScoutError::Registry { .. }));
        assert!(err.to_string().contains("components.d.ts"));
    }
}
