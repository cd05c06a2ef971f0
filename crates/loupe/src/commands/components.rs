//! Components command - List the component registry

use super::{resolve_scan_config, GlobalArgs, ScanArgs};
use crate::error::CliResult;
use crate::report::{format_components, OutputFormat};
use clap::Args;
use loupe_scout::load_components;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ComponentsArgs {
    /// Generated component registry, relative to the base path [default: ./components.d.ts]
    #[arg(short, long)]
    pub components_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: ComponentsArgs, global: &GlobalArgs) -> CliResult<()> {
    let scan_args = ScanArgs {
        components_file: args.components_file,
        ..Default::default()
    };
    let config = resolve_scan_config(global, &scan_args)?;
    let components = load_components(&config.components_path())?;

    match args.format {
        OutputFormat::Text => print!("{}", format_components(&components)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&components)?),
    }

    Ok(())
}
