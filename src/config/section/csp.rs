//! `[csp]` section configuration.
//!
//! The directive set itself is derived at resolve time; this section only
//! carries plugin switches and user additions.
//!
//! # Example
//!
//! ```toml
//! [csp]
//! disable_on_dev = true
//!
//! [csp.extra]
//! img-src = ["https://images.example.com"]
//! frame-src = ["https://www.youtube.com"]
//! ```

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static DIRECTIVE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(?:-[a-z]+)*$").expect("valid directive regex"));

/// Content-Security-Policy plugin settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "csp")]
pub struct CspConfig {
    #[config(inline_doc = "Skip the CSP header in development builds.")]
    pub disable_on_dev: bool,

    #[config(inline_doc = "Add hashes of inline scripts to script-src.")]
    pub merge_script_hashes: bool,

    #[config(inline_doc = "Add hashes of inline styles to style-src.")]
    pub merge_style_hashes: bool,

    #[config(inline_doc = "Keep the plugin's own default directives.")]
    pub merge_default_directives: bool,

    /// Extra sources per directive, appended after the built-in ones.
    /// Unknown directives are added after the built-in set, sorted by name.
    pub extra: BTreeMap<String, Vec<String>>,
}

impl Default for CspConfig {
    fn default() -> Self {
        Self {
            disable_on_dev: true,
            merge_script_hashes: true,
            merge_style_hashes: false,
            merge_default_directives: true,
            extra: BTreeMap::new(),
        }
    }
}

impl CspConfig {
    /// # Checks
    /// - directive names are lowercase, dash separated
    /// - sources are non-empty and contain no whitespace
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        for (name, sources) in &self.extra {
            if !DIRECTIVE_NAME.is_match(name) {
                diag.error_with_hint(
                    Self::FIELDS.extra,
                    format!("'{name}' is not a directive name"),
                    "directive names look like \"img-src\"",
                );
            }
            for source in sources {
                if source.is_empty() || source.chars().any(char::is_whitespace) {
                    diag.error(
                        Self::FIELDS.extra,
                        format!("source '{source}' of {name} must be a single non-empty token"),
                    );
                }
            }
        }
    }
}
