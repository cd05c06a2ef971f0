//! # loupe_scout
//!
//! Scout - The unknown tag detection engine of Loupe.
//!
//! ## Name Origin
//!
//! A **scout** goes ahead of the party and reports what it finds. This crate
//! walks a Vue project ahead of the runtime and reports every tag in a
//! template that nothing will resolve: not an HTML or SVG element, not a
//! framework component, not a component registered in `components.d.ts`.
//!
//! ## Pipeline
//!
//! ```text
//! Walker ──▶ Scanner ──▶ classify_line
//!                │
//!                └──▶ IgnoreSet / component registry ──▶ UnknownTagHit
//! ```
//!
//! Everything runs sequentially on the calling thread; counters and hits are
//! collected in a [`ScanAccumulator`] owned by [`scan`].
//!
//! ## Usage
//!
//! ```no_run
//! use loupe_scout::{scan, ScanConfig};
//!
//! let config = ScanConfig {
//!     components_file: "components.d.ts".into(),
//!     project_path: "src".into(),
//!     ..Default::default()
//! };
//!
//! let result = scan(&config).unwrap();
//! for hit in &result.unknown_tags {
//!     println!("{}:{} <{}>", hit.file.display(), hit.line, hit.tag_name);
//! }
//! ```

mod classifier;
mod config;
mod error;
mod registry;
mod result;
mod scanner;
mod walker;

pub use classifier::classify_line;
pub use config::ScanConfig;
pub use error::{ScoutError, ScoutResult};
pub use registry::{load_components, parse_components, ComponentEntry};
pub use result::{ContextLine, RunResult, ScanAccumulator, ScanStats, UnknownTagHit};
pub use scanner::{context_window, ScanState, Scanner, TEMPLATE_MARKER};
pub use walker::{ErrorPolicy, Walker};

use loupe_lexicon::IgnoreSet;

/// Scan a project for unknown tags.
///
/// Fails if the component registry or the custom tag file cannot be read,
/// if the project root cannot be listed, or (unless `quiet`) if any file or
/// directory below it cannot be read.
pub fn scan(config: &ScanConfig) -> ScoutResult<RunResult> {
    let mut acc = ScanAccumulator::new();

    let components = load_components(&config.components_path())?;
    let ignore = IgnoreSet::resolve(&config.ignore_list_config())?;
    let scanner = Scanner::new(ignore, &components);

    let root = config.project_root();
    tracing::debug!("scanning {}", root.display());
    Walker::new(&scanner, ErrorPolicy::from_quiet(config.quiet)).walk(&root, &mut acc)?;

    let result = acc.finish(components);
    tracing::info!(
        "{} unknown tags in {} template files ({} files, {} directories) in {:?}",
        result.unknown_tags.len(),
        result.stats.template_file_counter,
        result.stats.file_counter,
        result.stats.dir_counter,
        result.stats.elapsed()
    );

    Ok(result)
}
