//! Vuetify importer.
//!
//! Every component directory `lib/components/V*/` of the installed package
//! re-exports its components from `index.d.ts`, one `export { VName }` line
//! each.

use super::read_source;
use crate::error::{CliError, CliResult};
use loupe_lexicon::Framework;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::path::Path;

const COMPONENTS_DIR: &str = "node_modules/vuetify/lib/components";

static COMPONENT_DIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^V[A-Z][a-zA-Z0-9]+").expect("Invalid regex"));

static EXPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"export \{ (\w+) \} [ ./a-zA-Z';]*").expect("Invalid regex"));

pub(super) fn import(base_path: &Path) -> CliResult<Vec<String>> {
    let components_dir = base_path.join(COMPONENTS_DIR);
    let entries = std::fs::read_dir(&components_dir).map_err(|_| {
        CliError::ImporterSourceMissing {
            framework: Framework::Vuetify,
            path: components_dir.clone(),
        }
    })?;

    let mut dirs: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| COMPONENT_DIR.is_match(name))
        .collect();
    dirs.sort_unstable();

    let mut tags = Vec::new();
    for dir in dirs {
        let index = components_dir.join(&dir).join("index.d.ts");
        let source = read_source(Framework::Vuetify, &index)?;
        tags.extend(parse_exports(&source));
    }

    Ok(tags)
}

fn parse_exports(source: &str) -> impl Iterator<Item = String> + '_ {
    source
        .lines()
        .filter_map(|line| EXPORT.captures(line))
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_exports() {
        let source = "export { VDataTable } from './VDataTable.mjs';\n\
                      export { VDataTableRow } from './VDataTableRow.mjs';\n\
                      export type { DataTableHeader } from './types.mjs';\n\
                      export * from './composables';\n";

        let tags: Vec<String> = parse_exports(source).collect();
        assert_eq!(tags, ["VDataTable", "VDataTableRow"]);
    }

    #[test]
    fn test_import_component_directories() {
        let dir = TempDir::new().unwrap();
        let components = dir.path().join(COMPONENTS_DIR);
        for (name, index) in [
            ("VBtn", "export { VBtn } from './VBtn.mjs';\n"),
            (
                "VCard",
                "export { VCard } from './VCard.mjs';\nexport { VCardText } from './VCardText.mjs';\n",
            ),
            ("transitions", "export { VFadeTransition } from './index.mjs';\n"),
        ] {
            fs::create_dir_all(components.join(name)).unwrap();
            fs::write(components.join(name).join("index.d.ts"), index).unwrap();
        }
        fs::write(components.join("index.d.ts"), "export * from './VBtn';\n").unwrap();

        let tags = import(dir.path()).unwrap();
        assert_eq!(tags, ["VBtn", "VCard", "VCardText"]);
    }

    #[test]
    fn test_component_directory_without_index_fails() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(COMPONENTS_DIR).join("VBtn")).unwrap();

        let err = import(dir.path()).unwrap_err();
        assert!(matches!(err, CliError::Import { .. }));
    }
}
