//! The emitted configuration document.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use super::{Plugin, ResolveError, TargetUrl};
use crate::config::{FooterLink, MenuLink, SiteSectionConfig};

/// `metadata` block consumed by the theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub url: String,
    pub author: String,
    pub image: String,
    pub intro: String,
    pub menu_links: Vec<MenuLink>,
    pub footer_links: Vec<FooterLink>,
}

impl SiteMetadata {
    pub fn new(site: &SiteSectionConfig, target: &TargetUrl) -> Result<Self, ResolveError> {
        let info = &site.info;
        let image = target
            .absolutize(&info.image)
            .map_err(|reason| ResolveError::InvalidConfiguration {
                var: "site.info.image",
                value: info.image.clone(),
                reason,
            })?;

        Ok(Self {
            title: info.title.clone(),
            description: info.description.clone(),
            url: target.canonical().to_string(),
            author: info.author.clone(),
            image,
            intro: info.intro.clone(),
            menu_links: site.menu.clone(),
            footer_links: site.footer.clone(),
        })
    }
}

/// `{ metadata, plugins }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigDocument {
    pub metadata: SiteMetadata,
    pub plugins: Vec<Plugin>,
}

/// Serialization format of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

impl ConfigDocument {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let mut out = match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize document as JSON")?
            }
            OutputFormat::Toml => {
                toml::to_string_pretty(self).context("Failed to serialize document as TOML")?
            }
        };
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }

    pub fn plugin_names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::env::Environment;
    use crate::resolve::{DeploymentTarget, plugins};

    fn document(content: &str, address: &str) -> ConfigDocument {
        let config = test_parse_config(content);
        let target = TargetUrl::parse(address).unwrap();
        let deployment = DeploymentTarget::derive(&target, &Environment::default(), &config.deploy);
        ConfigDocument {
            metadata: SiteMetadata::new(&config.site, &target).unwrap(),
            plugins: plugins::build(&config, &target, &deployment),
        }
    }

    #[test]
    fn test_metadata_from_defaults() {
        let doc = document("", "https://example.com/");
        let metadata = &doc.metadata;
        assert_eq!(metadata.title, "Alex Miranda");
        assert_eq!(metadata.url, "https://example.com");
        assert_eq!(metadata.image, "https://example.com/og-image.jpg");
        assert_eq!(metadata.menu_links.len(), 3);
        assert_eq!(metadata.menu_links[1], MenuLink::new("About", "/about/"));
        assert_eq!(metadata.footer_links.len(), 4);
    }

    #[test]
    fn test_image_below_target_path() {
        let doc = document("", "https://example.com/blog/?ref=feed");
        assert_eq!(doc.metadata.url, "https://example.com/blog/?ref=feed");
        assert_eq!(doc.metadata.image, "https://example.com/blog/og-image.jpg");
    }

    #[test]
    fn test_protocol_relative_image_is_error() {
        let mut config = test_parse_config("");
        config.site.info.image = "//cdn.example.com/og.jpg".into();
        let target = TargetUrl::parse("https://example.com").unwrap();

        let err = SiteMetadata::new(&config.site, &target).unwrap_err();
        assert!(err.to_string().contains("site.info.image"));
    }

    #[test]
    fn test_links_pass_through_in_order() {
        let content = r#"
[[site.menu]]
name = "Zeta"
slug = "/z/"

[[site.menu]]
name = "Alpha"
slug = "/a/"

[[site.footer]]
name = "Mastodon"
url = "https://mastodon.social/@alex"
"#;
        let doc = document(content, "https://example.com");
        let names: Vec<&str> = doc.metadata.menu_links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
        assert_eq!(doc.metadata.footer_links, [FooterLink::new("Mastodon", "https://mastodon.social/@alex")]);
    }

    #[test]
    fn test_json_shape() {
        let doc = document("", "https://example.com");
        let json: serde_json::Value =
            serde_json::from_str(&doc.render(OutputFormat::Json).unwrap()).unwrap();

        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["metadata", "plugins"]);
        assert_eq!(json["metadata"]["menuLinks"][1]["slug"], "/about/");
        assert_eq!(json["metadata"]["footerLinks"][0]["url"], "mailto:alexandermichaelmiranda@gmail.com");
        assert_eq!(json["plugins"][0]["name"], "gatsby-theme-amsterdam");
        assert_eq!(json["plugins"][4]["options"]["directives"]["style-src"], "'self' 'unsafe-inline'");
    }

    #[test]
    fn test_toml_render() {
        let doc = document("", "https://example.com");
        let out = doc.render(OutputFormat::Toml).unwrap();
        assert!(out.contains("url = \"https://example.com\""));
        assert!(out.ends_with('\n'));

        let parsed: toml::Value = toml::from_str(&out).unwrap();
        assert_eq!(parsed["plugins"].as_array().unwrap().len(), 5);
    }
}
