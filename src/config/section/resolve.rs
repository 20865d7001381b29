//! `[resolve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [resolve]
//! url_policy = "fail-fast"            # fail-fast | fallback
//! default_address = "https://blog.com"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::resolve::{DEFAULT_TARGET_ADDRESS, DEFAULT_URL_POLICY, TargetUrl, UrlPolicy};

/// Target address resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "resolve")]
pub struct ResolveConfig {
    /// What to do when TARGET_ADDRESS is set but invalid: fail-fast | fallback.
    #[config(default = "fail-fast", inline_doc)]
    pub url_policy: UrlPolicy,

    /// Address used when TARGET_ADDRESS is unset (or invalid under fallback).
    #[config(default = "https://blog.com")]
    pub default_address: String,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            url_policy: DEFAULT_URL_POLICY,
            default_address: DEFAULT_TARGET_ADDRESS.to_string(),
        }
    }
}

impl ResolveConfig {
    /// The default address must itself be a valid target, otherwise a
    /// fallback could still hand a malformed URL downstream.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if let Err(reason) = TargetUrl::parse(&self.default_address) {
            diag.error_with_hint(
                Self::FIELDS.default_address,
                format!("'{}' is not a usable address: {}", self.default_address, reason),
                "use an absolute http(s) URL, e.g. \"https://blog.com\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.resolve.url_policy, UrlPolicy::FailFast);
        assert_eq!(config.resolve.default_address, "https://blog.com");
    }

    #[test]
    fn test_fallback_policy() {
        let config = test_parse_config("[resolve]\nurl_policy = \"fallback\"");
        assert_eq!(config.resolve.url_policy, UrlPolicy::Fallback);
    }

    #[test]
    fn test_invalid_default_address() {
        let config = test_parse_config("[resolve]\ndefault_address = \"ftp://files.example.com\"");
        let mut diag = ConfigDiagnostics::new();
        config.resolve.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "resolve.default_address");
    }
}
