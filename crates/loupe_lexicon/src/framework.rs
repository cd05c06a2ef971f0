//! Third-party component library vocabularies.
//!
//! Each [`Framework`] has a bundled default vocabulary compiled into the
//! binary and an optional cache file produced by `loupe import`, stored at
//! `<user_generated_path>/<cache_stem>.json`. The cache wins when present.

use crate::error::{LexiconError, LexiconResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Extension of framework cache files.
pub const TAGS_FILE_EXT: &str = "json";

/// Component libraries with a known tag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Framework {
    Vuetify,
    VueUse,
    Quasar,
}

/// Static description of a framework vocabulary.
#[derive(Debug)]
pub struct FrameworkDescriptor {
    pub framework: Framework,
    /// Canonical name, as written in config files.
    pub name: &'static str,
    /// File stem of the cache file.
    pub cache_stem: &'static str,
    /// Name of the importer that populates the cache.
    pub importer: &'static str,
    bundled: &'static str,
}

/// Descriptor table, indexed by `Framework as usize`.
pub static FRAMEWORKS: [FrameworkDescriptor; 3] = [
    FrameworkDescriptor {
        framework: Framework::Vuetify,
        name: "vuetify",
        cache_stem: "vuetifyTags",
        importer: "vuetify-importer",
        bundled: include_str!("../vocab/vuetifyTags.json"),
    },
    FrameworkDescriptor {
        framework: Framework::VueUse,
        name: "vueUse",
        cache_stem: "vueUseTags",
        importer: "vueuse-importer",
        bundled: include_str!("../vocab/vueUseTags.json"),
    },
    FrameworkDescriptor {
        framework: Framework::Quasar,
        name: "quasar",
        cache_stem: "quasarTags",
        importer: "quasar-importer",
        bundled: include_str!("../vocab/quasarTags.json"),
    },
];

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::Vuetify, Framework::VueUse, Framework::Quasar];

    #[inline]
    pub fn descriptor(self) -> &'static FrameworkDescriptor {
        &FRAMEWORKS[self as usize]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Location of this framework's cache file below `user_generated_path`.
    pub fn cache_path(self, user_generated_path: &Path) -> PathBuf {
        user_generated_path
            .join(self.descriptor().cache_stem)
            .with_extension(TAGS_FILE_EXT)
    }

    /// The vocabulary shipped with Loupe.
    pub fn bundled_tags(self) -> LexiconResult<Vec<String>> {
        let descriptor = self.descriptor();
        serde_json::from_str(descriptor.bundled).map_err(|source| LexiconError::ParseTagFile {
            path: PathBuf::from(format!("<bundled {}>", descriptor.name)),
            source,
        })
    }

    /// Resolve this framework's vocabulary.
    ///
    /// Reads the cache file directly and treats `NotFound` as the signal to
    /// fall back to [`Framework::bundled_tags`]. Any other read failure, or a
    /// cache that is not a JSON array of strings, is an error.
    pub fn load_tags(self, user_generated_path: Option<&Path>) -> LexiconResult<Vec<String>> {
        let Some(dir) = user_generated_path else {
            tracing::debug!("{}: no cache directory configured, using bundled tags", self);
            return self.bundled_tags();
        };

        let cache = self.cache_path(dir);
        match read_tag_file(&cache) {
            Ok(tags) => {
                tracing::debug!("{}: {} tags from {}", self, tags.len(), cache.display());
                Ok(tags)
            }
            Err(LexiconError::ReadTagFile { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!("{}: no cache at {}, using bundled tags", self, cache.display());
                self.bundled_tags()
            }
            Err(err) => Err(err),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Framework {
    type Err = LexiconError;

    /// Accepts the canonical name in any casing, with or without hyphens
    /// (`vueUse`, `vue-use`, `vueuse`), and the importer name
    /// (`vuetify-importer`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .trim()
            .trim_end_matches("-importer")
            .replace('-', "")
            .to_ascii_lowercase();

        Framework::ALL
            .into_iter()
            .find(|framework| framework.name().to_ascii_lowercase() == key)
            .ok_or_else(|| LexiconError::UnknownFramework(s.to_string()))
    }
}

/// Read a JSON array of tag names.
pub fn read_tag_file(path: &Path) -> LexiconResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| LexiconError::ReadTagFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LexiconError::ParseTagFile {
        path: path.to_path_buf(),
        source,
    })
}
