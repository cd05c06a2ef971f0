//! # loupe
//!
//! Loupe - Find unknown component tags in Vue projects.
//!
//! ## Name Origin
//!
//! A **loupe** is the small magnifier a jeweller screws into one eye to
//! inspect a stone up close. This binary holds every template of a project
//! up to it and points out the tags nothing will resolve at runtime, usually
//! a component `unplugin-vue-components` never picked up.

mod commands;
mod config;
mod error;
mod importer;
mod report;

use clap::{Parser, Subcommand};
use commands::GlobalArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "loupe")]
#[command(about = "Find unknown component tags in Vue projects", long_about = None)]
#[command(version, disable_version_flag = true)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = clap::ArgAction::Version)]
    version: (),

    /// Config file [default: ./loupe.config.json]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    check: commands::check::CheckArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Find unknown tags (default command)
    Check(commands::check::CheckArgs),

    /// List the components registered in components.d.ts
    Components(commands::components::ComponentsArgs),

    /// Refresh a framework tag cache from node_modules
    Import(commands::import::ImportArgs),

    /// Print the JSON Schema of loupe.config.json
    Schema,
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    if debug {
        subscriber.init();
    } else {
        subscriber.without_time().with_target(false).init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let global = GlobalArgs { config: cli.config };

    let outcome = match cli.command {
        Some(Commands::Check(args)) => commands::check::run(args, &global),
        Some(Commands::Components(args)) => {
            commands::components::run(args, &global).map(|()| true)
        }
        Some(Commands::Import(args)) => commands::import::run(args, &global).map(|()| true),
        Some(Commands::Schema) => {
            commands::schema::run();
            Ok(true)
        }
        None => commands::check::run(cli.check, &global),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            std::process::exit(1);
        }
    }
}
