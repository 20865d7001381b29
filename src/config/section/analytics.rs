//! `[analytics]` section configuration.
//!
//! When enabled, the analytics plugin is emitted and the CSP directives are
//! widened to allow the analytics hosts.

use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "analytics")]
pub struct AnalyticsConfig {
    #[config(inline_doc = "Emit the analytics plugin.")]
    pub enable: bool,

    #[config(inline_doc = "Tracking id, e.g. \"UA-12345678-1\".")]
    pub tracking_id: String,

    #[config(inline_doc = "Put the tracking script in <head>.")]
    pub head: bool,

    #[config(inline_doc = "Anonymize visitor IPs.")]
    pub anonymize: bool,

    #[config(inline_doc = "Honour the Do Not Track header.")]
    pub respect_dnt: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enable: false,
            tracking_id: String::new(),
            head: true,
            anonymize: true,
            respect_dnt: true,
        }
    }
}

impl AnalyticsConfig {
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.enable && self.tracking_id.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.tracking_id,
                format!("{} is set but {} is empty", Self::FIELDS.enable, Self::FIELDS.tracking_id),
                "set tracking_id or disable analytics",
            );
        }
    }
}
