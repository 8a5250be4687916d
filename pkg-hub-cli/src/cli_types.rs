//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pkg_hub_catalog::Language;

#[derive(Parser)]
#[command(name = "pkg-hub")]
#[command(about = "Browse a package catalog by name and target language", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the `search` command.
#[derive(Args, Clone)]
pub(crate) struct SearchArgs {
    /// Catalog file (.json, .yaml or .yml); defaults to the configured catalog
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Start from a URL query string, e.g. "q=aws-iot&lang=python&offset=2"
    #[arg(long)]
    pub url: Option<String>,

    /// Text to look for in package names (case-insensitive)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only show packages published for this language
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Page index (not an item count); malformed values mean page 0
    #[arg(short, long, allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// Packages per page; defaults to the configured page size
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Print the page as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Search the catalog and show one page of results
    Search(SearchArgs),

    /// List the target languages that can be filtered on
    Languages,

    /// Manage pkg-hub settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Write a settings file with default values if none exists
    Init,

    /// Print the settings file path
    Path,
}
