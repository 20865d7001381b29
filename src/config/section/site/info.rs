//! `[site.info]` configuration.
//!
//! Basic site information. The site URL is not configured here: it comes
//! from `TARGET_ADDRESS` at resolve time.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Site metadata passed verbatim to the theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.info")]
pub struct SiteInfoConfig {
    /// Site title.
    #[config(inline_doc)]
    pub title: String,

    /// Site description (used for SEO meta tags).
    #[config(inline_doc)]
    pub description: String,

    /// Author name.
    #[config(inline_doc)]
    pub author: String,

    /// Intro text shown on the home page.
    #[config(inline_doc)]
    pub intro: String,

    /// Social preview image: a path rooted at `/` (joined onto the site URL)
    /// or an absolute URL.
    #[config(default = "/og-image.jpg")]
    pub image: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "Alex Miranda".into(),
            description: "Alex Miranda is a software engineer based in Seattle, WA.".into(),
            author: "Alex Miranda".into(),
            intro: "Alex Miranda is a software engineer based in Seattle, WA.".into(),
            image: "/og-image.jpg".into(),
        }
    }
}

impl SiteInfoConfig {
    /// # Checks
    /// - `title` is not empty
    /// - `image` is a rooted path (not `//host/...`) or an absolute URL
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "title must not be empty");
        }

        let hint = "use \"/og-image.jpg\" or \"https://cdn.example.com/og.jpg\"";
        if self.image.starts_with("//") {
            diag.error_with_hint(
                Self::FIELDS.image,
                format!("'{}' is protocol-relative", self.image),
                hint,
            );
        } else if !self.image.starts_with('/')
            && let Err(e) = url::Url::parse(&self.image)
        {
            diag.error_with_hint(
                Self::FIELDS.image,
                format!("'{}' is neither a rooted path nor a URL: {}", self.image, e),
                hint,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.info.title, "Alex Miranda");
        assert_eq!(config.site.info.author, "Alex Miranda");
        assert_eq!(config.site.info.image, "/og-image.jpg");
    }

    #[test]
    fn test_image_validation() {
        let mut config = test_parse_config("[site.info]\nimage = \"og.jpg\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.info.image");

        config.site.info.image = "https://cdn.example.com/og.jpg".into();
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_protocol_relative_image_rejected() {
        let config = test_parse_config("[site.info]\nimage = \"//cdn.example.com/og.jpg\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.info.image");
    }

    #[test]
    fn test_empty_title() {
        let config = test_parse_config("[site.info]\ntitle = \"  \"");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "site.info.title");
    }
}
