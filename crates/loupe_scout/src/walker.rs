//! Project walker.
//!
//! Recurses a directory tree and scans every regular file. Entries are
//! visited in the order the platform lists them, so the order of hits is not
//! stable across machines; counters and the set of hits are.

use crate::error::{ScoutError, ScoutResult};
use crate::result::ScanAccumulator;
use crate::scanner::Scanner;
use std::path::Path;

/// What to do when a file or subdirectory cannot be read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the run with the error.
    #[default]
    Propagate,
    /// Log the error, skip the entry and keep walking (quiet mode).
    Skip,
}

impl ErrorPolicy {
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::Propagate
        }
    }

    fn handle(self, err: ScoutError) -> ScoutResult<()> {
        match self {
            ErrorPolicy::Propagate => Err(err),
            ErrorPolicy::Skip => {
                tracing::warn!("skipped: {}", err);
                Ok(())
            }
        }
    }
}

/// Recursive directory walker feeding a [`Scanner`].
#[derive(Debug)]
pub struct Walker<'s> {
    scanner: &'s Scanner,
    policy: ErrorPolicy,
}

impl<'s> Walker<'s> {
    pub fn new(scanner: &'s Scanner, policy: ErrorPolicy) -> Self {
        Self { scanner, policy }
    }

    /// Walk `root`.
    ///
    /// Failing to list `root` itself always aborts; failures below it follow
    /// the [`ErrorPolicy`].
    pub fn walk(&self, root: &Path, acc: &mut ScanAccumulator) -> ScoutResult<()> {
        self.walk_dir(root, acc)
    }

    fn walk_dir(&self, dir: &Path, acc: &mut ScanAccumulator) -> ScoutResult<()> {
        acc.stats.dir_counter += 1;
        tracing::trace!("entering {}", dir.display());

        let read_dir_error = |source| ScoutError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    self.policy.handle(read_dir_error(source))?;
                    continue;
                }
            };

            let path = entry.path();
            // `DirEntry::file_type` does not follow symlinks.
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(source) => {
                    self.policy.handle(ScoutError::ReadDir { path, source })?;
                    continue;
                }
            };

            let outcome = if file_type.is_file() {
                self.scanner.scan_file(&path, acc)
            } else if file_type.is_dir() {
                self.walk_dir(&path, acc)
            } else {
                tracing::trace!("ignoring {}", path.display());
                Ok(())
            };

            if let Err(err) = outcome {
                self.policy.handle(err)?;
            }
        }

        Ok(())
    }
}
