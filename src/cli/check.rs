//! `check` command: resolve and report, write nothing.

use owo_colors::OwoColorize;

use crate::config::SiteConfig;
use crate::log;
use crate::resolve::{AddressSource, ResolvedSite};

/// Print a short summary of the resolved site to stderr.
pub fn report(site: &ResolvedSite, config: &SiteConfig) {
    for line in summary(site, config) {
        eprintln!("  {line}");
    }
    log!("check"; "{}", "configuration ok".green());
}

fn summary(site: &ResolvedSite, config: &SiteConfig) -> Vec<String> {
    let source = match site.source {
        AddressSource::Environment => "TARGET_ADDRESS",
        AddressSource::Default => "default",
        AddressSource::Fallback => "fallback",
    };
    let deployment = &site.deployment;
    let plugins: Vec<&str> = site.document.plugin_names().collect();

    let mut lines = vec![
        format!("config    {}", config_label(config)),
        format!("url       {} ({source})", site.target),
        format!("protocol  {}", deployment.protocol),
        format!("hostname  {}", deployment.hostname),
        format!("bucket    {}", deployment.bucket_name),
    ];
    if let Some(region) = &deployment.region {
        lines.push(format!("region    {region}"));
    }
    lines.push(format!("plugins   {}", plugins.join(" → ")));
    lines
}

fn config_label(config: &SiteConfig) -> String {
    config
        .config_path
        .as_deref()
        .map_or_else(|| "(built-in)".to_string(), |p| p.display().to_string())
}
