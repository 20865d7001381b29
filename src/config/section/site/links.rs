//! Menu and footer links.
//!
//! Both lists are passed through to the document verbatim and in order;
//! validation only rejects entries the theme could not render.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Header menu entry, rendered by the theme as an internal link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub name: String,
    pub slug: String,
}

impl MenuLink {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// Footer entry, an arbitrary absolute URL (`mailto:` included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub name: String,
    pub url: String,
}

impl FooterLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

pub fn default_menu() -> Vec<MenuLink> {
    vec![
        MenuLink::new("Alex Miranda", "/"),
        MenuLink::new("About", "/about/"),
        MenuLink::new("Contact", "/contact/"),
    ]
}

pub fn default_footer() -> Vec<FooterLink> {
    vec![
        FooterLink::new("Email", "mailto:alexandermichaelmiranda@gmail.com"),
        FooterLink::new("Linkedin", "https://linkedin.com/in/alexmmiranda"),
        FooterLink::new("Github", "https://github.com/ammiranda"),
        FooterLink::new("Instagram", "https://instagram.com/alexandermmir"),
    ]
}

/// Slugs must be non-empty, rooted at `/` and unique.
pub fn validate_menu(links: &[MenuLink], field: FieldPath, diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();
    for (i, link) in links.iter().enumerate() {
        if link.name.trim().is_empty() {
            diag.error(field, format!("entry #{} has an empty name", i + 1));
        }
        if !link.slug.starts_with('/') {
            diag.error_with_hint(
                field,
                format!("slug '{}' of '{}' is not rooted", link.slug, link.name),
                "slugs start with '/', e.g. \"/about/\"",
            );
        }
        if !seen.insert(link.slug.as_str()) {
            diag.error(
                field,
                format!("duplicate slug '{}' ('{}')", link.slug, link.name),
            );
        }
    }
}

pub fn validate_footer(links: &[FooterLink], field: FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, link) in links.iter().enumerate() {
        if link.name.trim().is_empty() {
            diag.error(field, format!("entry #{} has an empty name", i + 1));
        }
        if let Err(e) = url::Url::parse(&link.url) {
            diag.error_with_hint(
                field,
                format!("url '{}' of '{}' is invalid: {}", link.url, link.name, e),
                "use an absolute URL such as https://github.com/user or mailto:me@example.com",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: FieldPath = FieldPath::new("site.menu");

    #[test]
    fn test_defaults_are_valid() {
        let mut diag = ConfigDiagnostics::new();
        validate_menu(&default_menu(), FIELD, &mut diag);
        validate_footer(&default_footer(), FieldPath::new("site.footer"), &mut diag);
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_duplicate_slug() {
        let links = vec![MenuLink::new("Home", "/"), MenuLink::new("Again", "/")];
        let mut diag = ConfigDiagnostics::new();
        validate_menu(&links, FIELD, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("duplicate slug '/'"));
    }

    #[test]
    fn test_unrooted_slug_and_empty_name() {
        let links = vec![MenuLink::new("", "about/")];
        let mut diag = ConfigDiagnostics::new();
        validate_menu(&links, FIELD, &mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_footer_relative_url_rejected() {
        let links = vec![
            FooterLink::new("Github", "github.com/ammiranda"),
            FooterLink::new("Email", "mailto:me@example.com"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_footer(&links, FieldPath::new("site.footer"), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("github.com/ammiranda"));
    }
}
