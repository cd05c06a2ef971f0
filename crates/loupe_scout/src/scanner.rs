//! File scanner.
//!
//! Walks one component file line by line, skipping `<script>` and `<style>`
//! blocks, and reports every tag the classifier finds that is neither in the
//! ignore set nor in the component registry.

use crate::classifier::classify_line;
use crate::error::{ScoutError, ScoutResult};
use crate::registry::ComponentEntry;
use crate::result::{ContextLine, ScanAccumulator, UnknownTagHit};
use loupe_lexicon::{IgnoreSet, TagName};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Marker that makes a file a template file.
pub const TEMPLATE_MARKER: &str = "<template>";

/// Block state of the file being scanned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    pub in_script: bool,
    pub in_style: bool,
}

impl ScanState {
    /// Update the block state for `line` and report whether the line belongs
    /// to the template (i.e. should be classified).
    ///
    /// Opening a script block closes an open style block and vice versa.
    pub fn advance(&mut self, line: &str) -> bool {
        if line.contains("<script") {
            self.in_script = true;
            self.in_style = false;
        }
        if line.contains("</script>") {
            self.in_script = false;
        }
        if line.contains("<style") {
            self.in_style = true;
            self.in_script = false;
        }
        if line.contains("</style>") {
            self.in_style = false;
        }

        !(self.in_script || self.in_style)
    }
}

/// Context lines around the 0-based line `index`.
///
/// Neighbours outside the file, or empty, are left out.
pub fn context_window(lines: &[&str], index: usize) -> Vec<ContextLine> {
    let mut context = Vec::with_capacity(3);

    if let Some(prev) = index.checked_sub(1).and_then(|i| lines.get(i)) {
        if !prev.is_empty() {
            context.push(ContextLine {
                text: prev.to_string(),
                index,
            });
        }
    }

    if let Some(current) = lines.get(index) {
        context.push(ContextLine {
            text: current.to_string(),
            index: index + 1,
        });
    }

    if let Some(next) = lines.get(index + 1) {
        if !next.is_empty() {
            context.push(ContextLine {
                text: next.to_string(),
                index: index + 2,
            });
        }
    }

    context
}

/// Scans files against a fixed ignore set and component registry.
#[derive(Debug)]
pub struct Scanner {
    ignore: IgnoreSet,
    registry: FxHashSet<TagName>,
}

impl Scanner {
    pub fn new(ignore: IgnoreSet, components: &[ComponentEntry]) -> Self {
        Self {
            ignore,
            registry: components.iter().map(|c| c.tag.clone()).collect(),
        }
    }

    /// Whether a tag (as written) is neither ignored nor registered.
    pub fn is_unknown(&self, tag: &str) -> bool {
        let key = TagName::new(tag);
        !self.ignore.contains_normalized(&key) && !self.registry.contains(&key)
    }

    /// Scan one file into the accumulator.
    ///
    /// Counts the file before reading it. Files without a
    /// [`TEMPLATE_MARKER`] are counted but not scanned. Content that is not
    /// valid UTF-8 is decoded lossily.
    pub fn scan_file(&self, path: &Path, acc: &mut ScanAccumulator) -> ScoutResult<()> {
        acc.stats.file_counter += 1;

        let bytes = std::fs::read(path).map_err(|source| ScoutError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);

        if !source.contains(TEMPLATE_MARKER) {
            tracing::trace!("{}: not a template file", path.display());
            return Ok(());
        }

        acc.stats.template_file_counter += 1;

        let hits = self.scan_source(path, &source);
        tracing::debug!("{}: {} unknown tags", path.display(), hits.len());
        acc.unknown_tags.extend(hits);

        Ok(())
    }

    /// Scan template source already in memory.
    pub fn scan_source(&self, file: &Path, source: &str) -> Vec<UnknownTagHit> {
        let lines: Vec<&str> = source.lines().collect();
        let mut state = ScanState::default();
        let mut hits = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            if !state.advance(line) {
                continue;
            }

            for tag in classify_line(line) {
                if !self.is_unknown(&tag) {
                    continue;
                }

                hits.push(UnknownTagHit {
                    file: file.to_path_buf(),
                    line: index + 1,
                    tag_name: tag,
                    context: context_window(&lines, index),
                });
            }
        }

        hits
    }
}
