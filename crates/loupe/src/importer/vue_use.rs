//! VueUse importer.
//!
//! `@vueuse/components` declares every component in a single type
//! declaration file, whose location moved between releases.

use super::read_source;
use crate::error::{CliError, CliResult};
use loupe_lexicon::Framework;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::path::Path;

/// Declaration files, newest layout last.
const DECLARATION_FILES: [&str; 2] = [
    "node_modules/@vueuse/components/index.d.mts",
    "node_modules/@vueuse/components/dist/index.d.ts",
];

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"declare const (\w+): vue\d*\.(?:DefineComponent|DefineSetupFnComponent)")
        .expect("Invalid regex")
});

pub(super) fn import(base_path: &Path) -> CliResult<Vec<String>> {
    let Some(path) = DECLARATION_FILES
        .iter()
        .map(|file| base_path.join(file))
        .find(|path| path.is_file())
    else {
        return Err(CliError::ImporterSourceMissing {
            framework: Framework::VueUse,
            path: base_path.join(DECLARATION_FILES[0]),
        });
    };

    let source = read_source(Framework::VueUse, &path)?;
    Ok(parse_declarations(&source))
}

fn parse_declarations(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| DECLARATION.captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DECLARATIONS: &str = r#"import * as vue from 'vue';
declare const OnClickOutside: vue.DefineComponent<OnClickOutsideProps>;
declare const UseMouse: vue.DefineComponent<UseMouseOptions>;
declare const UseImage: vue1.DefineSetupFnComponent<UseImageProps>;
declare const vOnClickOutside: ObjectDirective<HTMLElement, OnClickOutsideHandler>;
export { OnClickOutside, UseImage, UseMouse, vOnClickOutside };
"#;

    #[test]
    fn test_parse_declarations() {
        assert_eq!(
            parse_declarations(DECLARATIONS),
            ["OnClickOutside", "UseMouse", "UseImage"]
        );
    }

    #[test]
    fn test_prefers_legacy_layout() {
        let dir = TempDir::new().unwrap();
        let package = dir.path().join("node_modules/@vueuse/components");
        fs::create_dir_all(package.join("dist")).unwrap();
        fs::write(package.join("index.d.mts"), DECLARATIONS).unwrap();
        fs::write(
            package.join("dist/index.d.ts"),
            "declare const UseDark: vue.DefineComponent<UseDarkOptions>;\n",
        )
        .unwrap();

        assert_eq!(import(dir.path()).unwrap().len(), 3);
    }

    #[test]
    fn test_falls_back_to_dist_layout() {
        let dir = TempDir::new().unwrap();
        let dist = dir.path().join("node_modules/@vueuse/components/dist");
        fs::create_dir_all(&dist).unwrap();
        fs::write(
            dist.join("index.d.ts"),
            "declare const UseDark: vue.DefineComponent<UseDarkOptions>;\n",
        )
        .unwrap();

        assert_eq!(import(dir.path()).unwrap(), ["UseDark"]);
    }
}
