//! `[manifest]` section configuration.
//!
//! Web app manifest options. `icon` is relative to the project root and is
//! resolved against it when the document is assembled.
//!
//! # Example
//!
//! ```toml
//! [manifest]
//! name = "Gatsby Theme Amsterdam"
//! short_name = "Amsterdam"
//! background_color = "#f5f0eb"
//! theme_color = "#f5f0eb"
//! start_url = "/"
//! display = "standalone"
//! icon = "src/images/favicon.png"
//! ```

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::config::{ConfigDiagnostics, FieldPath};

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex color regex")
});

/// Manifest `display` mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    #[default]
    Standalone,
    MinimalUi,
    Browser,
}

impl DisplayMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fullscreen => "fullscreen",
            Self::Standalone => "standalone",
            Self::MinimalUi => "minimal-ui",
            Self::Browser => "browser",
        }
    }
}

/// Web app manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "manifest")]
pub struct ManifestConfig {
    #[config(default = "Gatsby Theme Amsterdam")]
    pub name: String,

    #[config(default = "Amsterdam")]
    pub short_name: String,

    /// Splash screen background (#rgb or #rrggbb).
    #[config(default = "#f5f0eb", inline_doc)]
    pub background_color: String,

    /// Browser UI color (#rgb or #rrggbb).
    #[config(default = "#f5f0eb", inline_doc)]
    pub theme_color: String,

    #[config(default = "/")]
    pub start_url: String,

    /// fullscreen | standalone | minimal-ui | browser.
    #[config(default = "standalone", inline_doc)]
    pub display: DisplayMode,

    /// Icon source image, relative to the project root.
    #[config(default = "src/images/favicon.png", inline_doc)]
    pub icon: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: "Gatsby Theme Amsterdam".into(),
            short_name: "Amsterdam".into(),
            background_color: "#f5f0eb".into(),
            theme_color: "#f5f0eb".into(),
            start_url: "/".into(),
            display: DisplayMode::Standalone,
            icon: "src/images/favicon.png".into(),
        }
    }
}

impl ManifestConfig {
    /// # Checks
    /// - colors are `#rgb` or `#rrggbb`
    /// - `start_url` is rooted
    /// - `icon` is relative
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_color(&self.background_color, Self::FIELDS.background_color, diag);
        check_color(&self.theme_color, Self::FIELDS.theme_color, diag);

        if !self.start_url.starts_with('/') {
            diag.error(
                Self::FIELDS.start_url,
                format!("start_url '{}' must start with '/'", self.start_url),
            );
        }

        if self.icon.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.icon,
                format!("icon '{}' must be relative to the project root", self.icon.display()),
                "e.g. \"src/images/favicon.png\"",
            );
        }
    }
}

fn check_color(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if !HEX_COLOR.is_match(value) {
        diag.error_with_hint(
            field,
            format!("'{value}' is not a hex color"),
            "use #rgb or #rrggbb, e.g. \"#f5f0eb\"",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults_valid() {
        let config = test_parse_config("");
        let mut diag = ConfigDiagnostics::new();
        config.manifest.validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(config.manifest.display, DisplayMode::Standalone);
        assert_eq!(config.manifest.icon, PathBuf::from("src/images/favicon.png"));
    }

    #[test]
    fn test_display_modes() {
        let config = test_parse_config("[manifest]\ndisplay = \"minimal-ui\"");
        assert_eq!(config.manifest.display, DisplayMode::MinimalUi);
        assert_eq!(config.manifest.display.as_str(), "minimal-ui");
    }

    #[test]
    fn test_invalid_values() {
        let config = test_parse_config(
            "[manifest]\ntheme_color = \"beige\"\nbackground_color = \"#fff\"\nstart_url = \"home\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.manifest.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["manifest.theme_color", "manifest.start_url"]);
    }
}
