//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::resolve::{OutputFormat, UrlPolicy};

/// Resolve environment and site metadata into a site configuration document
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve and emit the configuration document
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write the document to a file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Resolve and validate without writing anything
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Write a commented site.toml template into the current directory
    #[command(visible_alias = "i")]
    Init,
}

/// Shared resolution arguments for Resolve and Check commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Override TARGET_ADDRESS.
    ///
    /// Example: sitecfg resolve --target-address "https://staging.example.com"
    #[arg(short = 'U', long, value_hint = clap::ValueHint::Url)]
    pub target_address: Option<String>,

    /// What to do when the target address is set but invalid
    #[arg(long, value_enum)]
    pub url_policy: Option<UrlPolicy>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
