//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module      | TOML Section   | Purpose                                  |
//! |-------------|----------------|------------------------------------------|
//! | `site`      | `[site]`       | Metadata, menu and footer links          |
//! | `theme`     | `[theme]`      | Theme plugin options                     |
//! | `manifest`  | `[manifest]`   | Web app manifest                         |
//! | `analytics` | `[analytics]`  | Analytics plugin                         |
//! | `csp`       | `[csp]`        | Content-Security-Policy plugin           |
//! | `deploy`    | `[deploy]`     | S3 deployment fallbacks                  |
//! | `resolve`   | `[resolve]`    | Target address policy                    |

mod analytics;
mod csp;
mod deploy;
mod manifest;
mod resolve;
pub mod site;
pub mod theme;

pub use analytics::AnalyticsConfig;
pub use csp::CspConfig;
pub use deploy::DeployConfig;
pub use manifest::ManifestConfig;
pub use resolve::ResolveConfig;
pub use site::{FooterLink, MenuLink, SiteSectionConfig};
pub use theme::ThemeConfig;
