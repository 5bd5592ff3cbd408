// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `run`  — runs the feature-generation pipeline
//   2. `list` — prints the registered feature generators
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands and reporting submodules
pub mod commands;
pub mod report;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, RunArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "question-feature-lab",
    version = "0.1.0",
    about = "Run pluggable feature generators over a question corpus and inspect the vectors."
)]
pub struct Cli {
    /// The subcommand to run (run or list)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run(args) => Self::run_pipeline(args),
            Commands::List      => Self::run_list(),
        }
    }

    /// Handles the `run` subcommand.
    /// Converts CLI args into a RunConfig and hands off to Layer 2.
    fn run_pipeline(args: RunArgs) -> Result<()> {
        use crate::application::run_use_case::RunUseCase;

        let width = args.sample_width;

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = RunUseCase::new(args.into());
        let corpus   = use_case.execute()?;

        report::print_sample_structure(&corpus, width);
        report::print_sample_vectors(&corpus, width);

        println!("\nFinished");
        Ok(())
    }

    /// Handles the `list` subcommand.
    /// Prints every registered generator name, in registration order.
    fn run_list() -> Result<()> {
        use crate::features::registry::FeatureRegistry;

        let registry = FeatureRegistry::with_builtins();
        println!("Available feature generators:");
        for name in registry.available() {
            println!("  {name}");
        }
        Ok(())
    }
}
