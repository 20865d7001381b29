//! sitecfg - resolves environment and site metadata into the configuration
//! document consumed by a static-site build pipeline.

mod cli;
mod config;
mod env;
mod logger;
mod resolve;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, ResolveArgs};
use config::SiteConfig;
use env::Environment;
use resolve::ResolvedSite;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Init => {
            let cwd = std::env::current_dir()?;
            cli::init::init_config(&cwd, &cli.config)
        }
        Commands::Resolve {
            args,
            format,
            output,
        } => {
            let (_, site) = load_and_resolve(&cli, args)?;
            cli::resolve::write_document(&site, *format, output.as_deref())
        }
        Commands::Check { args } => {
            let (config, site) = load_and_resolve(&cli, args)?;
            cli::check::report(&site, &config);
            Ok(())
        }
    }
}

/// Load site.toml, resolve once and freeze the result for the rest of the
/// process.
fn load_and_resolve(cli: &Cli, args: &ResolveArgs) -> Result<(SiteConfig, Arc<ResolvedSite>)> {
    logger::set_verbose(args.verbose);
    let config = SiteConfig::load(&cli.config)?;
    let site = cli::common::resolve_site(args, &config, Environment::from_process())?;
    Ok((config, resolve::publish(site)))
}
