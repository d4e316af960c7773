use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::CATALOGUE_ENV;

#[derive(Debug, Parser)]
#[command(name = "symcheck")]
#[command(about = "Match symptoms to possible conditions (informational only)")]
pub struct Cli {
    /// Catalogue JSON file to use instead of the built-in data
    #[arg(long, global = true, env = CATALOGUE_ENV)]
    pub catalogue: Option<PathBuf>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List symptoms that can be selected
    Symptoms {
        /// Only show symptoms whose name contains this text (case-insensitive)
        #[arg(long, short)]
        search: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List every condition in the catalogue
    Conditions {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Rank conditions against the given symptom ids
    Check {
        /// Symptom ids, e.g. `fever cough fatigue`
        #[arg(required = true)]
        symptoms: Vec<String>,
        /// Show match counts and percentages
        #[arg(long)]
        verbose_scores: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Catalogue file tools
    Catalogue {
        #[command(subcommand)]
        command: CatalogueCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum CatalogueCommands {
    /// Load a catalogue file and report every problem in it
    Validate {
        path: PathBuf,
    },
    /// Write the built-in catalogue as JSON
    Export {
        /// Destination file (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, Args)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
