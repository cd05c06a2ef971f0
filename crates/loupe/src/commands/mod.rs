//! CLI command implementations

pub mod check;
pub mod components;
pub mod import;
pub mod schema;

use crate::config::load_config;
use crate::error::{CliError, CliResult};
use clap::Args;
use loupe_lexicon::Framework;
use loupe_scout::ScanConfig;
use std::path::PathBuf;

/// Options shared by every command.
#[derive(Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Explicit config file, relative to the working directory.
    pub config: Option<PathBuf>,
}

/// Scan options that override `loupe.config.json`.
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Generated component registry, relative to the base path [default: ./components.d.ts]
    #[arg(short, long)]
    pub components_file: Option<PathBuf>,

    /// Directory with the Vue sources, relative to the base path [default: ./src]
    #[arg(short, long)]
    pub project_path: Option<PathBuf>,

    /// Directory holding framework tag caches [default: ./node_modules/.cache/loupe]
    #[arg(long)]
    pub user_generated_path: Option<PathBuf>,

    /// Report HTML elements instead of ignoring them
    #[arg(long)]
    pub no_html: bool,

    /// Report SVG elements instead of ignoring them
    #[arg(long)]
    pub no_svg: bool,

    /// Report Vue built-in components instead of ignoring them
    #[arg(long)]
    pub no_vue: bool,

    /// Report Vue Router components instead of ignoring them
    #[arg(long)]
    pub no_vue_router: bool,

    /// Ignore Vuetify components
    #[arg(long)]
    pub vuetify: bool,

    /// Ignore VueUse components
    #[arg(long)]
    pub vue_use: bool,

    /// Ignore Quasar components
    #[arg(long)]
    pub quasar: bool,

    /// Additional tags to ignore (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub custom_tags: Vec<String>,

    /// JSON file with an array of additional tags to ignore
    #[arg(long)]
    pub custom_tags_file: Option<PathBuf>,

    /// Quiet mode - only print the final line and skip unreadable files
    #[arg(short, long)]
    pub quiet: bool,
}

impl ScanArgs {
    fn frameworks(&self) -> Vec<Framework> {
        [
            (self.vuetify, Framework::Vuetify),
            (self.vue_use, Framework::VueUse),
            (self.quasar, Framework::Quasar),
        ]
        .into_iter()
        .filter_map(|(enabled, framework)| enabled.then_some(framework))
        .collect()
    }

    /// Apply the flags that were given on top of `config`.
    ///
    /// Switches can only be turned on; list flags replace the configured
    /// list when present.
    pub fn apply(&self, config: &mut ScanConfig) {
        if let Some(file) = &self.components_file {
            config.components_file = file.clone();
        }
        if let Some(path) = &self.project_path {
            config.project_path = path.clone();
        }
        if let Some(path) = &self.user_generated_path {
            config.user_generated_path = Some(path.clone());
        }
        if let Some(file) = &self.custom_tags_file {
            config.custom_tags_file = Some(file.clone());
        }

        config.no_html |= self.no_html;
        config.no_svg |= self.no_svg;
        config.no_vue |= self.no_vue;
        config.no_vue_router |= self.no_vue_router;
        config.quiet |= self.quiet;

        let frameworks = self.frameworks();
        if !frameworks.is_empty() {
            config.frameworks = frameworks;
        }

        let custom_tags: Vec<String> = self
            .custom_tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        if !custom_tags.is_empty() {
            config.custom_tags = custom_tags;
        }
    }
}

/// Working directory, config file, then flags.
pub fn resolve_scan_config(global: &GlobalArgs, args: &ScanArgs) -> CliResult<ScanConfig> {
    let cwd = std::env::current_dir().map_err(CliError::CurrentDir)?;
    let mut config = load_config(global.config.as_deref(), &cwd)?.to_scan_config(&cwd);
    args.apply(&mut config);

    tracing::debug!(
        "components: {}, project: {}",
        config.components_path().display(),
        config.project_root().display()
    );

    Ok(config)
}
