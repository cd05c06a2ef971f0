//! Framework importers.
//!
//! Each importer scrapes the component names of one library out of its
//! installed package below `node_modules` and writes them to the cache file
//! `IgnoreSet` resolution reads (`<user_generated_path>/<stem>Tags.json`).

mod quasar;
mod vue_use;
mod vuetify;

use crate::error::{CliError, CliResult};
use loupe_lexicon::Framework;
use std::path::{Path, PathBuf};

/// Collect the component tags of `framework` installed below `base_path`.
pub fn import(framework: Framework, base_path: &Path) -> CliResult<Vec<String>> {
    let tags = match framework {
        Framework::Vuetify => vuetify::import(base_path)?,
        Framework::VueUse => vue_use::import(base_path)?,
        Framework::Quasar => quasar::import(base_path)?,
    };
    tracing::debug!("{}: imported {} tags", framework, tags.len());
    Ok(tags)
}

/// Write `tags` as the cache file of `framework`, creating the directory.
///
/// The file is pretty-printed JSON with a trailing newline and replaces any
/// previous cache.
pub fn write_cache(
    framework: Framework,
    tags: &[String],
    user_generated_path: &Path,
) -> CliResult<PathBuf> {
    let path = framework.cache_path(user_generated_path);
    let io_error = |source| CliError::Import {
        framework,
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(user_generated_path).map_err(io_error)?;

    let mut content = serde_json::to_string_pretty(tags)?;
    content.push('\n');
    std::fs::write(&path, content).map_err(io_error)?;

    tracing::debug!("{}: wrote {}", framework, path.display());
    Ok(path)
}

fn read_source(framework: Framework, path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Import {
        framework,
        path: path.to_path_buf(),
        source,
    })
}
