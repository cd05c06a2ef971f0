//! Console rendering of scan results.
//!
//! Every formatter returns a `String`; the commands decide where it goes.

use loupe_scout::{ComponentEntry, RunResult};
use std::fmt::Write;
use std::time::Duration;

/// Output format for scan results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

#[inline]
fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Hits grouped by file, each with its numbered context lines.
pub fn format_result(result: &RunResult) -> String {
    let mut out = String::new();
    let mut current_file = None;

    for hit in &result.unknown_tags {
        if current_file != Some(hit.file.as_path()) {
            let _ = write!(out, "\nFile: {}\n", hit.file.display());
            current_file = Some(hit.file.as_path());
        }

        out.push('\n');
        for line in &hit.context {
            let _ = writeln!(out, "{:02}: {}", line.index, line.text);
        }
        let _ = write!(out, "\nLine: {}, Tag: <{}>\n", hit.line, hit.tag_name);
    }

    out.push('\n');
    out
}

/// Counters, unique tags and registered components.
pub fn format_stats(result: &RunResult) -> String {
    let files = result.unique_files();
    let tags = result.unique_tags();
    let stats = &result.stats;
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<20}: {}", format!("Found file{}", plural(files.len())), files.len());
    let _ = writeln!(
        out,
        "{:<20}: {}",
        format!("Found position{}", plural(result.unknown_tags.len())),
        result.unknown_tags.len()
    );
    let _ = writeln!(out, "{:<20}: {}", format!("Found unknown tag{}", plural(tags.len())), tags.len());

    if !tags.is_empty() {
        let _ = writeln!(out);
        for tag in &tags {
            let _ = writeln!(out, "- {}", tag);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<20}: {}", "It took me", format_duration(stats.elapsed()));
    let _ = writeln!(out, "{:<20}: {}", format!("to scan file{}", plural(stats.file_counter)), stats.file_counter);
    let _ = writeln!(
        out,
        "{:<20}: {}",
        format!("in director{}", if stats.dir_counter == 1 { "y" } else { "ies" }),
        stats.dir_counter
    );
    let _ = writeln!(
        out,
        "{:<20}: {}",
        format!("with template file{}", plural(stats.template_file_counter)),
        stats.template_file_counter
    );

    let _ = writeln!(out);
    let names: Vec<&str> = result.components_list.iter().map(|c| c.raw_tag.as_str()).collect();
    let _ = writeln!(
        out,
        "Registered component{}: ({}) {}",
        plural(names.len()),
        names.len(),
        names.join(", ")
    );

    out
}

/// Milliseconds below one second, seconds above.
pub fn format_duration(elapsed: Duration) -> String {
    if elapsed >= Duration::from_secs(1) {
        format!("{:.2}s", elapsed.as_secs_f64())
    } else {
        format!("{}ms", elapsed.as_millis())
    }
}

/// The component registry, one raw tag per line.
pub fn format_components(components: &[ComponentEntry]) -> String {
    let mut out = String::new();

    let _ = write!(out, "\nFound component{}:\n\n", plural(components.len()));
    for component in components {
        let _ = writeln!(out, "{}", component.raw_tag);
    }
    out.push('\n');

    out
}

/// Tags produced by a framework importer.
pub fn format_imported(framework: &str, tags: &[String]) -> String {
    let mut out = String::new();

    let _ = write!(out, "\nFound {} {} tag{}:\n\n", tags.len(), framework, plural(tags.len()));
    for tag in tags {
        let _ = writeln!(out, "{}", tag);
    }
    out.push('\n');

    out
}

/// The whole result as pretty-printed JSON.
pub fn format_json(result: &RunResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Final line of a `check` run
pub fn format_summary(unknown_tag_count: usize) -> String {
    if unknown_tag_count == 0 {
        "No unknown tags found".to_string()
    } else {
        format!("Found {} unknown tags.", unknown_tag_count)
    }
}
