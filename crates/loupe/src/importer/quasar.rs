//! Quasar importer.
//!
//! Quasar's `src/components.js` re-exports each component directory; the
//! directory name is the tag without its `q-` prefix.

use super::read_source;
use crate::error::{CliError, CliResult};
use loupe_lexicon::Framework;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::path::Path;

const COMPONENTS_FILE: &str = "node_modules/quasar/src/components.js";

static EXPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export \* from \W\./components/([\w-]+)/index\.js\W").expect("Invalid regex")
});

pub(super) fn import(base_path: &Path) -> CliResult<Vec<String>> {
    let path = base_path.join(COMPONENTS_FILE);
    if !path.is_file() {
        return Err(CliError::ImporterSourceMissing {
            framework: Framework::Quasar,
            path,
        });
    }

    let source = read_source(Framework::Quasar, &path)?;
    Ok(parse_exports(&source))
}

fn parse_exports(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| EXPORT.captures(line))
        .map(|caps| format!("q-{}", &caps[1]))
        .collect()
}
