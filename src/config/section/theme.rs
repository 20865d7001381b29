//! `[theme]` section configuration.
//!
//! Options for the site theme plugin, always emitted first in the plugin list.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! name = "gatsby-theme-amsterdam"
//! color_toggle = false
//! grid = "list"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

/// Post grid layout offered by the theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grid {
    Basic,
    #[default]
    List,
}

impl Grid {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::List => "list",
        }
    }
}

/// Theme plugin settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeConfig {
    /// Theme package name.
    #[config(default = "gatsby-theme-amsterdam", inline_doc)]
    pub name: String,

    /// Show the light/dark color toggle.
    #[config(inline_doc)]
    pub color_toggle: bool,

    /// Post grid layout: basic | list.
    #[config(default = "list", inline_doc)]
    pub grid: Grid,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: crate::resolve::plugins::THEME.into(),
            color_toggle: false,
            grid: Grid::List,
        }
    }
}

impl ThemeConfig {
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::FIELDS.name, "theme name must not be empty");
        }
    }
}
