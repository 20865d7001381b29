//! Configuration file generation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::{
    AnalyticsConfig, CspConfig, DeployConfig, ManifestConfig, ResolveConfig, SiteSectionConfig,
    ThemeConfig,
};

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# sitecfg configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Every value below is the built-in default.\n\n");

    // [site], [site.info]
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    // [theme] section
    out.push_str(&ThemeConfig::template_with_header());
    out.push('\n');

    // [manifest] section
    out.push_str(&ManifestConfig::template_with_header());
    out.push('\n');

    // [analytics] section
    out.push_str(&AnalyticsConfig::template_with_header());
    out.push('\n');

    // [csp] section
    out.push_str(&CspConfig::template_with_header());
    out.push('\n');

    // [deploy] section
    out.push_str(&DeployConfig::template_with_header());
    out.push('\n');

    // [resolve] section
    out.push_str(&ResolveConfig::template_with_header());

    out
}

/// Write the template to `path`
pub fn write_config(path: &Path) -> Result<()> {
    let content = generate_config_template();
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};
    use tempfile::TempDir;

    #[test]
    fn test_template_has_every_section() {
        let template = generate_config_template();
        for header in [
            "[site]", "[site.info]", "[theme]", "[manifest]", "[analytics]", "[csp]", "[deploy]",
            "[resolve]",
        ] {
            assert!(template.contains(header), "missing {header}");
        }
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config = test_parse_config(&generate_config_template());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        write_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("title = \"Alex Miranda\""));
        assert!(content.contains("url_policy = \"fail-fast\""));
    }
}
