//! `[deploy]` section configuration.
//!
//! Object-storage deployment. The bucket and region themselves come from
//! `AWS_S3_BUCKET` / `AWS_REGION`; this section only holds the fallbacks
//! and plugin switches used when those are missing.
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! bucket_placeholder = "fake-bucket"   # used when AWS_S3_BUCKET is unset
//! remove_nonexistent_objects = true    # delete remote files missing locally
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::resolve::is_valid_bucket_name;

/// S3 deployment plugin settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "deploy")]
pub struct DeployConfig {
    /// Bucket name emitted when `AWS_S3_BUCKET` is unset.
    #[config(default = "fake-bucket", inline_doc)]
    pub bucket_placeholder: String,

    /// Delete objects in the bucket that the build no longer produces.
    #[config(default = "true", inline_doc)]
    pub remove_nonexistent_objects: bool,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            bucket_placeholder: "fake-bucket".to_string(),
            remove_nonexistent_objects: true,
        }
    }
}

impl DeployConfig {
    /// # Checks
    /// - `bucket_placeholder` is a syntactically valid bucket name
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if !is_valid_bucket_name(&self.bucket_placeholder) {
            diag.error_with_hint(
                Self::FIELDS.bucket_placeholder,
                format!("'{}' is not a valid bucket name", self.bucket_placeholder),
                "3-63 characters: lowercase letters, digits, '.' and '-'",
            );
        }
    }
}
