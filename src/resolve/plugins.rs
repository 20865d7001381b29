//! Plugin list assembly.
//!
//! Options are opaque to the resolver: it only fills in derived values
//! (canonical URL, deployment target, icon path, CSP directives).

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::{DeploymentTarget, TargetUrl};
use crate::config::SiteConfig;

pub const THEME: &str = "gatsby-theme-amsterdam";
pub const MANIFEST: &str = "gatsby-plugin-manifest";
pub const CANONICAL_URLS: &str = "gatsby-plugin-canonical-urls";
pub const GOOGLE_ANALYTICS: &str = "gatsby-plugin-google-analytics";
pub const S3: &str = "gatsby-plugin-s3";
pub const CSP: &str = "gatsby-plugin-csp";

const GOOGLE_ANALYTICS_HOST: &str = "www.google-analytics.com";
const GOOGLE_TAG_MANAGER_HOST: &str = "www.googletagmanager.com";

/// One entry of the plugin list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugin {
    pub name: String,
    pub options: Map<String, Value>,
}

impl Plugin {
    fn new<'a>(name: &str, options: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        Self {
            name: name.to_string(),
            options: options
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }
}

/// Build the plugin list in its fixed order:
/// theme, manifest, canonical-urls, analytics (when enabled), s3, csp.
pub fn build(config: &SiteConfig, target: &TargetUrl, deployment: &DeploymentTarget) -> Vec<Plugin> {
    let mut plugins = vec![
        theme(config),
        manifest(config),
        Plugin::new(CANONICAL_URLS, [("siteUrl", Value::from(target.canonical()))]),
    ];

    if config.analytics.enable {
        plugins.push(analytics(config));
    }

    plugins.push(s3(config, deployment));
    plugins.push(csp(config));
    plugins
}

fn theme(config: &SiteConfig) -> Plugin {
    let theme = &config.theme;
    Plugin::new(
        &theme.name,
        [
            ("colorToggle", Value::from(theme.color_toggle)),
            ("grid", Value::from(theme.grid.as_str())),
        ],
    )
}

fn manifest(config: &SiteConfig) -> Plugin {
    let manifest = &config.manifest;
    let icon = config.root_join(&manifest.icon);
    Plugin::new(
        MANIFEST,
        [
            ("name", Value::from(manifest.name.as_str())),
            ("short_name", Value::from(manifest.short_name.as_str())),
            ("background_color", Value::from(manifest.background_color.as_str())),
            ("theme_color", Value::from(manifest.theme_color.as_str())),
            ("start_url", Value::from(manifest.start_url.as_str())),
            ("display", Value::from(manifest.display.as_str())),
            ("icon", Value::from(icon.to_string_lossy())),
        ],
    )
}

fn analytics(config: &SiteConfig) -> Plugin {
    let analytics = &config.analytics;
    Plugin::new(
        GOOGLE_ANALYTICS,
        [
            ("trackingId", Value::from(analytics.tracking_id.as_str())),
            ("head", Value::from(analytics.head)),
            ("anonymize", Value::from(analytics.anonymize)),
            ("respectDNT", Value::from(analytics.respect_dnt)),
        ],
    )
}

/// Region is left out when unset.
fn s3(config: &SiteConfig, deployment: &DeploymentTarget) -> Plugin {
    let mut options = vec![("bucketName", Value::from(deployment.bucket_name.as_str()))];
    if let Some(region) = &deployment.region {
        options.push(("region", Value::from(region.as_str())));
    }
    options.extend([
        ("protocol", Value::from(deployment.protocol.as_str())),
        ("hostname", Value::from(deployment.hostname.as_str())),
        (
            "removeNonexistentObjects",
            Value::from(config.deploy.remove_nonexistent_objects),
        ),
    ]);
    Plugin::new(S3, options)
}

fn csp(config: &SiteConfig) -> Plugin {
    let csp = &config.csp;
    let mut directives = CspDirectives::base(config.analytics.enable);
    directives.extend(&csp.extra);

    Plugin::new(
        CSP,
        [
            ("disableOnDev", Value::from(csp.disable_on_dev)),
            ("mergeScriptHashes", Value::from(csp.merge_script_hashes)),
            ("mergeStyleHashes", Value::from(csp.merge_style_hashes)),
            ("mergeDefaultDirectives", Value::from(csp.merge_default_directives)),
            ("directives", Value::Object(directives.to_json())),
        ],
    )
}

// ============================================================================
// CSP directives
// ============================================================================

/// Ordered directive table. Sources within a directive are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CspDirectives {
    entries: Vec<(String, Vec<String>)>,
}

impl CspDirectives {
    pub fn base(analytics: bool) -> Self {
        let mut directives = Self::default();
        directives.add("default-src", ["'self'"]);
        directives.add("script-src", ["'self'"]);
        directives.add("style-src", ["'self'", "'unsafe-inline'"]);
        directives.add("img-src", ["'self'", "data:"]);
        directives.add("font-src", ["'self'", "data:"]);
        directives.add("connect-src", ["'self'"]);

        if analytics {
            directives.add("script-src", [GOOGLE_ANALYTICS_HOST, GOOGLE_TAG_MANAGER_HOST]);
            directives.add("img-src", [GOOGLE_ANALYTICS_HOST]);
            directives.add("connect-src", [GOOGLE_ANALYTICS_HOST]);
        }
        directives
    }

    /// Append sources, creating the directive at the end if it is new.
    pub fn add<I, S>(&mut self, name: &str, sources: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = match self.entries.iter().position(|(n, _)| n == name) {
            Some(index) => index,
            None => {
                self.entries.push((name.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };

        let existing = &mut self.entries[index].1;
        for source in sources {
            let source = source.as_ref();
            if !existing.iter().any(|s| s == source) {
                existing.push(source.to_string());
            }
        }
    }

    /// Merge user-supplied directives; new names come after the built-in
    /// ones, sorted.
    pub fn extend(&mut self, extra: &BTreeMap<String, Vec<String>>) {
        for (name, sources) in extra {
            self.add(name, sources);
        }
    }

    /// `{"script-src": "'self' www.google-analytics.com", ...}`
    pub fn to_json(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(name, sources)| (name.clone(), Value::String(sources.join(" "))))
            .collect()
    }
}
