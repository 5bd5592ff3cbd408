// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `run` and `list`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, bool, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::run_use_case::RunConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the corpus, run the selected feature generators, print samples
    Run(RunArgs),

    /// List the feature generators available in the registry
    List,
}

/// All arguments for the `run` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory containing question .xml files
    #[arg(long, default_value = "data/questions")]
    pub data_dir: String,

    /// Path of the corpus cache written after loading + preprocessing
    #[arg(long, default_value = "cache/questions.json")]
    pub cache_file: String,

    /// Reuse the cached corpus instead of loading + preprocessing again
    #[arg(long)]
    pub cached: bool,

    /// Comma-separated generator names to run, in order.
    /// Omit to run every registered generator.
    #[arg(long, value_delimiter = ',')]
    pub features: Vec<String>,

    /// Maximum width of values printed in the sample report
    #[arg(long, default_value_t = 80)]
    pub sample_width: usize,
}

/// Convert CLI RunArgs into the application-layer RunConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<RunArgs> for RunConfig {
    fn from(a: RunArgs) -> Self {
        RunConfig {
            data_dir:   a.data_dir,
            cache_file: a.cache_file,
            use_cache:  a.cached,
            features:   a.features,
        }
    }
}
