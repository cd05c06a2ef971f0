//! Ignore list resolution.
//!
//! An [`IgnoreSet`] is the union of every vocabulary enabled for a run.
//! Entries are normalized on insertion ([`TagName`]), so membership is
//! independent of spelling and of the order in which sources were merged.

use crate::error::LexiconResult;
use crate::framework::{read_tag_file, Framework};
use crate::tag::TagName;
use crate::vocab::{HTML_TAGS, SVG_TAGS, VUE_ROUTER_TAGS, VUE_TAGS};
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::PathBuf;

/// Per-run switches for building an [`IgnoreSet`].
///
/// The `no_*` switches read as "do not ignore": setting `no_html` means HTML
/// elements are no longer treated as known and will be reported.
#[derive(Debug, Clone, Default)]
pub struct IgnoreListConfig {
    pub no_html: bool,
    pub no_svg: bool,
    pub no_vue: bool,
    pub no_vue_router: bool,
    pub frameworks: Vec<Framework>,
    pub custom_tags: Vec<String>,
    pub custom_tags_file: Option<PathBuf>,
    /// Directory holding framework caches written by `loupe import`.
    pub user_generated_path: Option<PathBuf>,
}

/// Where a group of ignored tags came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreSource {
    Html,
    Svg,
    Vue,
    VueRouter,
    Framework(Framework),
    CustomTags,
    CustomTagsFile(PathBuf),
}

impl fmt::Display for IgnoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreSource::Html => f.write_str("html"),
            IgnoreSource::Svg => f.write_str("svg"),
            IgnoreSource::Vue => f.write_str("vue"),
            IgnoreSource::VueRouter => f.write_str("vue-router"),
            IgnoreSource::Framework(framework) => write!(f, "{}", framework),
            IgnoreSource::CustomTags => f.write_str("custom tags"),
            IgnoreSource::CustomTagsFile(path) => write!(f, "custom tags file {}", path.display()),
        }
    }
}

/// Normalized set of tag names that are never reported.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    tags: FxHashSet<TagName>,
    sources: Vec<IgnoreSource>,
}

impl IgnoreSet {
    /// An empty set; nothing is ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set for a run.
    ///
    /// Fails only when the custom tag file cannot be read or parsed, or when
    /// a framework cache exists but is invalid. A missing framework cache
    /// falls back to the bundled vocabulary.
    pub fn resolve(config: &IgnoreListConfig) -> LexiconResult<Self> {
        let mut set = Self::new();

        if !config.no_html {
            set.extend(IgnoreSource::Html, HTML_TAGS.iter().copied());
        }
        if !config.no_svg {
            set.extend(IgnoreSource::Svg, SVG_TAGS.iter().copied());
        }
        if !config.no_vue {
            set.extend(IgnoreSource::Vue, VUE_TAGS.iter().copied());
        }
        if !config.no_vue_router {
            set.extend(IgnoreSource::VueRouter, VUE_ROUTER_TAGS.iter().copied());
        }

        for &framework in &config.frameworks {
            let tags = framework.load_tags(config.user_generated_path.as_deref())?;
            set.extend(IgnoreSource::Framework(framework), tags.iter().map(String::as_str));
        }

        if !config.custom_tags.is_empty() {
            set.extend(
                IgnoreSource::CustomTags,
                config.custom_tags.iter().map(String::as_str),
            );
        }

        if let Some(path) = &config.custom_tags_file {
            let tags = read_tag_file(path)?;
            set.extend(
                IgnoreSource::CustomTagsFile(path.clone()),
                tags.iter().map(String::as_str),
            );
        }

        tracing::debug!(
            "ignore set: {} tags from [{}]",
            set.len(),
            set.sources
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(set)
    }

    /// Add a source's tags to the set.
    pub fn extend<'a>(&mut self, source: IgnoreSource, tags: impl IntoIterator<Item = &'a str>) {
        self.tags.extend(
            tags.into_iter()
                .map(TagName::new)
                .filter(|tag| !tag.is_empty()),
        );
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
    }

    /// Check a raw tag name; normalized before lookup.
    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(&TagName::new(tag))
    }

    /// Check an already normalized tag name.
    #[inline]
    pub fn contains_normalized(&self, tag: &TagName) -> bool {
        self.tags.contains(tag)
    }

    /// Sources merged into this set, in merge order.
    pub fn sources(&self) -> &[IgnoreSource] {
        &self.sources
    }

    /// Number of distinct normalized names.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
