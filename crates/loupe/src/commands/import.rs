//! Import command - Refresh a framework tag cache from `node_modules`

use super::{resolve_scan_config, GlobalArgs, ScanArgs};
use crate::config::DEFAULT_USER_GENERATED_PATH;
use crate::error::CliResult;
use crate::importer;
use crate::report::format_imported;
use clap::Args;
use loupe_lexicon::Framework;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Framework to import (vuetify, vue-use, quasar)
    pub framework: Framework,

    /// Directory to write the cache to [default: ./node_modules/.cache/loupe]
    #[arg(long)]
    pub user_generated_path: Option<PathBuf>,

    /// Only print where the cache was written
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: ImportArgs, global: &GlobalArgs) -> CliResult<()> {
    let scan_args = ScanArgs {
        user_generated_path: args.user_generated_path,
        ..Default::default()
    };
    let config = resolve_scan_config(global, &scan_args)?;

    let cache_dir = config.resolve_path(
        config
            .user_generated_path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_USER_GENERATED_PATH)),
    );

    let tags = importer::import(args.framework, &config.base_path)?;
    let path = importer::write_cache(args.framework, &tags, &cache_dir)?;

    if !args.quiet {
        print!("{}", format_imported(args.framework.name(), &tags));
    }
    println!("Wrote {}", path.display());

    Ok(())
}
