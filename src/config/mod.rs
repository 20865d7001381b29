//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site/      # [site], [site.info], [[site.menu]], [[site.footer]]
//! │   ├── theme      # [theme]
//! │   ├── manifest   # [manifest]
//! │   ├── analytics  # [analytics]
//! │   ├── csp        # [csp]
//! │   ├── deploy     # [deploy]
//! │   └── resolve    # [resolve]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every field has a built-in default, so `site.toml` is optional: without
//! it the site's own metadata constants are used unchanged.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, normalize_path};

pub use section::{
    AnalyticsConfig, CspConfig, DeployConfig, FooterLink, ManifestConfig, MenuLink, ResolveConfig,
    SiteSectionConfig, ThemeConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory: parent of config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata and links
    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub analytics: AnalyticsConfig,

    #[serde(default)]
    pub csp: CspConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    /// Target address policy
    #[serde(default)]
    pub resolve: ResolveConfig,
}

impl SiteConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(&cwd, config_name)
    }

    /// Load configuration, searching upward from `start`.
    ///
    /// Falls back to the built-in defaults when no file is found.
    pub fn load_from(start: &Path, config_name: &Path) -> Result<Self> {
        let mut config = match find_config_file(start, config_name) {
            Some(path) => {
                debug!("config"; "using config file `{}`", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(normalize_path(&path));
                config
            }
            None => {
                log!(
                    "warning";
                    "no {} found, using built-in site metadata",
                    config_name.display()
                );
                Self::default()
            }
        };

        config.root = match config.config_path.as_deref().and_then(Path::parent) {
            Some(parent) => parent.to_path_buf(),
            None => normalize_path(start),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .map_err(ConfigError::Toml)
            .with_context(|| format!("in `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, returning all collected errors at once.
    pub fn validate(&self) -> Result<()> {
        self.diagnostics()
            .into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run all checks without printing or failing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.manifest.validate(&mut diag);
        self.analytics.validate(&mut diag);
        self.csp.validate(&mut diag);
        self.deploy.validate(&mut diag);
        self.resolve.validate(&mut diag);

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from `content`.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_invalid_toml() {
        let result = SiteConfig::parse_with_ignored("[site.info\ntitle = \"My Site\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_valid() {
        let config = SiteConfig::default();
        assert!(config.diagnostics().is_empty());
        assert!(config.config_path.is_none());
        assert_eq!(config.site.info.title, "Alex Miranda");
    }

    #[test]
    fn test_empty_file_equals_default() {
        assert_eq!(test_parse_config(""), SiteConfig::default());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site.info]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.info.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_load_from_file_sets_root() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join("site.toml"),
            "[site.info]\ntitle = \"From File\"",
        )
        .unwrap();

        let config = SiteConfig::load_from(&nested, Path::new("site.toml")).unwrap();
        let root = temp.path().canonicalize().unwrap();
        assert_eq!(config.site.info.title, "From File");
        assert_eq!(config.root, root);
        assert_eq!(config.config_path, Some(root.join("site.toml")));
        assert_eq!(config.root_join("src/images"), root.join("src/images"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = SiteConfig::load_from(temp.path(), Path::new("missing-a81c.toml")).unwrap();
        assert_eq!(config.site, SiteSectionConfig::default());
        assert_eq!(config.root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_load_reports_all_errors() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("site.toml"),
            "[manifest]\ntheme_color = \"red\"\n\n[analytics]\nenable = true",
        )
        .unwrap();

        let err = SiteConfig::load_from(temp.path(), Path::new("site.toml")).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_load_syntax_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("site.toml"), "[theme\n").unwrap();
        let err = SiteConfig::load_from(temp.path(), Path::new("site.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("site.toml"));
    }
}
