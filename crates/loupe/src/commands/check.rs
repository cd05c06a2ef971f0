//! Check command - Find unknown tags in a Vue project

use super::{resolve_scan_config, GlobalArgs, ScanArgs};
use crate::error::CliResult;
use crate::report::{format_json, format_result, format_stats, format_summary, OutputFormat};
use clap::Args;

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Print statistics after the check
    #[arg(short, long)]
    pub stats: bool,

    /// Print every unknown tag with its surrounding lines
    #[arg(short, long)]
    pub result: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run the scan and print the report.
///
/// Returns whether the project is free of unknown tags.
pub fn run(args: CheckArgs, global: &GlobalArgs) -> CliResult<bool> {
    let config = resolve_scan_config(global, &args.scan)?;
    let result = loupe_scout::scan(&config)?;

    match args.format {
        OutputFormat::Json => println!("{}", format_json(&result)?),
        OutputFormat::Text if !config.quiet => {
            if args.result {
                print!("{}", format_result(&result));
            }
            if args.stats {
                print!("{}", format_stats(&result));
            }
        }
        OutputFormat::Text => {}
    }

    let summary = format_summary(result.unknown_tags.len());
    if result.has_unknown_tags() {
        eprintln!("{}", summary);
        return Ok(false);
    }

    if args.format == OutputFormat::Text {
        println!("{}", summary);
    }
    Ok(true)
}
