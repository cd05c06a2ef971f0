//! Scan statistics and results.

use crate::registry::ComponentEntry;
use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// One line of context around an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContextLine {
    pub text: String,
    /// 1-based line number.
    pub index: usize,
}

/// A tag that is neither ignored nor registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownTagHit {
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// Tag name as written in the template.
    pub tag_name: String,
    /// Previous, current and next line, where they exist.
    pub context: Vec<ContextLine>,
}

/// Counters collected while walking a project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub file_counter: usize,
    pub dir_counter: usize,
    pub template_file_counter: usize,
    #[serde(serialize_with = "serialize_epoch_millis")]
    pub start_time: SystemTime,
    #[serde(serialize_with = "serialize_epoch_millis")]
    pub end_time: SystemTime,
}

impl ScanStats {
    /// Zeroed counters with the clock started now.
    pub fn start() -> Self {
        let now = SystemTime::now();
        Self {
            file_counter: 0,
            dir_counter: 0,
            template_file_counter: 0,
            start_time: now,
            end_time: now,
        }
    }

    /// Stop the clock.
    pub fn finish(&mut self) {
        self.end_time = SystemTime::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.end_time
            .duration_since(self.start_time)
            .unwrap_or_default()
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::start()
    }
}

fn serialize_epoch_millis<S: Serializer>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
    let millis = time
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    serializer.serialize_u64(millis)
}

/// Mutable state of a run in progress: counters and hits.
///
/// Owned by [`crate::scan`] and lent to the walker and scanner by `&mut`.
#[derive(Debug, Default)]
pub struct ScanAccumulator {
    pub stats: ScanStats,
    pub unknown_tags: Vec<UnknownTagHit>,
}

impl ScanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the clock and hand over the result.
    pub fn finish(mut self, components_list: Vec<ComponentEntry>) -> RunResult {
        self.stats.finish();
        RunResult {
            stats: self.stats,
            unknown_tags: self.unknown_tags,
            components_list,
        }
    }
}

/// Everything a scan produces.
///
/// `unknown_tags` follows directory listing order, which the platform does
/// not guarantee to be sorted or stable; compare hits as a set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub stats: ScanStats,
    pub unknown_tags: Vec<UnknownTagHit>,
    pub components_list: Vec<ComponentEntry>,
}

impl RunResult {
    #[inline]
    pub fn has_unknown_tags(&self) -> bool {
        !self.unknown_tags.is_empty()
    }

    /// Distinct tag names as written, in first-seen order.
    pub fn unique_tags(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.unknown_tags
            .iter()
            .map(|hit| hit.tag_name.as_str())
            .filter(|tag| seen.insert(*tag))
            .collect()
    }

    /// Distinct files with at least one hit, in first-seen order.
    pub fn unique_files(&self) -> Vec<&Path> {
        let mut seen = FxHashSet::default();
        self.unknown_tags
            .iter()
            .map(|hit| hit.file.as_path())
            .filter(|file| seen.insert(*file))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(file: &str, line: usize, tag: &str) -> UnknownTagHit {
        UnknownTagHit {
            file: PathBuf::from(file),
            line,
            tag_name: tag.to_string(),
            context: Vec::new(),
        }
    }

    #[test]
    fn test_unique_tags_and_files() {
        let mut acc = ScanAccumulator::new();
        acc.unknown_tags.extend([
            hit("a.vue", 3, "FooBar"),
            hit("a.vue", 5, "foo-bar"),
            hit("b.vue", 1, "FooBar"),
            hit("c.vue", 9, "Baz"),
        ]);
        let result = acc.finish(Vec::new());

        assert!(result.has_unknown_tags());
        assert_eq!(result.unique_tags(), ["FooBar", "foo-bar", "Baz"]);
        assert_eq!(
            result.unique_files(),
            [Path::new("a.vue"), Path::new("b.vue"), Path::new("c.vue")]
        );
    }

    #[test]
    fn test_finish_stops_the_clock() {
        let result = ScanAccumulator::new().finish(Vec::new());

        assert!(!result.has_unknown_tags());
        assert!(result.stats.end_time >= result.stats.start_time);
        assert!(result.stats.elapsed() < Duration::from_secs(60));
    }

    #[test]
    fn test_json_shape() {
        let mut acc = ScanAccumulator::new();
        acc.stats.file_counter = 2;
        acc.unknown_tags.push(UnknownTagHit {
            file: PathBuf::from("src/App.vue"),
            line: 2,
            tag_name: "MissingCard".to_string(),
            context: vec![ContextLine {
                text: "  <MissingCard />".to_string(),
                index: 2,
            }],
        });
        let result = acc.finish(vec![ComponentEntry::new("HelloWorld")]);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["stats"]["fileCounter"], 2);
        assert!(json["stats"]["startTime"].is_u64());
        assert_eq!(json["unknownTags"][0]["tagName"], "MissingCard");
        assert_eq!(json["unknownTags"][0]["context"][0]["index"], 2);
        assert_eq!(json["componentsList"][0]["rawTag"], "HelloWorld");
        assert_eq!(json["componentsList"][0]["tag"], "helloworld");
    }
}
