//! `[site]` section configuration.
//!
//! Site metadata and the link lists handed to the theme.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "My Site"
//! description = "A personal site"
//! author = "Alice"
//! intro = "Alice writes software."
//! image = "/og-image.jpg"
//!
//! [[site.menu]]
//! name = "About"
//! slug = "/about/"
//!
//! [[site.footer]]
//! name = "Github"
//! url = "https://github.com/alice"
//! ```

mod info;
mod links;

pub use info::SiteInfoConfig;
pub use links::{FooterLink, MenuLink};

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site section configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Header menu entries, in display order. Slugs must be unique.
    pub menu: Vec<MenuLink>,

    /// Footer entries, in display order.
    pub footer: Vec<FooterLink>,

    /// Site metadata (title, author, description, etc.)
    #[config(sub)]
    pub info: SiteInfoConfig,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            menu: links::default_menu(),
            footer: links::default_footer(),
            info: SiteInfoConfig::default(),
        }
    }
}

impl SiteSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.info.validate(diag);
        links::validate_menu(&self.menu, Self::FIELDS.menu, diag);
        links::validate_footer(&self.footer, Self::FIELDS.footer, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_links() {
        let config = test_parse_config("");
        let slugs: Vec<_> = config.site.menu.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs, ["/", "/about/", "/contact/"]);
        let names: Vec<_> = config.site.footer.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Email", "Linkedin", "Github", "Instagram"]);
    }

    #[test]
    fn test_menu_replaces_defaults_in_order() {
        let config = test_parse_config(
            r#"[[site.menu]]
name = "Blog"
slug = "/blog/"

[[site.menu]]
name = "Home"
slug = "/"
"#,
        );
        assert_eq!(
            config.site.menu,
            vec![MenuLink::new("Blog", "/blog/"), MenuLink::new("Home", "/")]
        );
        // Footer untouched
        assert_eq!(config.site.footer.len(), 4);
    }

    #[test]
    fn test_validate_reports_all_sections() {
        let config = test_parse_config(
            r#"[site.info]
title = ""

[[site.menu]]
name = "A"
slug = "/a/"

[[site.menu]]
name = "B"
slug = "/a/"

[[site.footer]]
name = "Broken"
url = "not a url"
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.info.title", "site.menu", "site.footer"]);
    }

    #[test]
    fn test_template_lists_links_before_info() {
        let template = SiteSectionConfig::template_with_header();
        let menu = template.find("menu = ").unwrap();
        let info = template.find("[site.info]").unwrap();
        assert!(template.starts_with("# Site section configuration."));
        assert!(menu < info);
        assert!(template.contains("/about/"));
    }
}
