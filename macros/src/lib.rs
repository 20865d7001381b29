//! Proc macros for sitecfg.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site.info")]
//! /// Site metadata.
//! pub struct SiteInfoConfig {
//!     /// Site title.
//!     #[config(inline_doc)]
//!     pub title: String,
//!
//!     /// Preview image (rooted path or absolute URL).
//!     #[config(default = "/og-image.jpg")]
//!     pub image: String,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.title -> FieldPath("site.info.title")
//! // - SiteInfoConfig::template() / template_with_header()
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(sub)]` - Nested section (own template block)
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(inline_doc)]` / `#[config(inline_doc = "x")]` - Trailing comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `ManifestConfig` → `manifest`
//! - `SiteInfoConfig` → `site_info`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
