//! Site configuration resolution.
//!
//! Environment + static metadata in, `{ metadata, plugins }` out:
//!
//! ```text
//! TARGET_ADDRESS ──► TargetUrl ──┬──► protocol / hostname ──► DeploymentTarget
//!                                └──► canonical URL ───────► SiteMetadata.url
//! SiteConfig ───────────────────────► SiteMetadata + plugin list
//! ```
//!
//! A present-but-invalid `TARGET_ADDRESS` is handled according to a
//! [`UrlPolicy`].

mod deploy;
mod document;
mod error;
mod handle;
pub mod plugins;
mod target;

pub use deploy::{DeploymentTarget, is_valid_bucket_name};
pub use document::{ConfigDocument, OutputFormat, SiteMetadata};
pub use error::{InvalidUrl, ResolveError};
pub use handle::publish;
pub use plugins::Plugin;
pub use target::{Protocol, TargetUrl};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::env::Environment;
use crate::log;

/// Address used when `TARGET_ADDRESS` is unset.
pub const DEFAULT_TARGET_ADDRESS: &str = "https://blog.com";

/// Policy used unless `[resolve] url_policy` or `--url-policy` says otherwise.
pub const DEFAULT_URL_POLICY: UrlPolicy = UrlPolicy::FailFast;

/// What to do with a `TARGET_ADDRESS` that is set but not a valid address.
///
/// An unset variable always yields the default address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UrlPolicy {
    /// Abort with `InvalidConfiguration`.
    FailFast,
    /// Log a warning and use the default address.
    Fallback,
}

/// Where the target address came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSource {
    Environment,
    /// `TARGET_ADDRESS` unset.
    Default,
    /// `TARGET_ADDRESS` invalid, replaced under [`UrlPolicy::Fallback`].
    Fallback,
}

/// Everything derived in one resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSite {
    pub target: TargetUrl,
    pub source: AddressSource,
    pub deployment: DeploymentTarget,
    pub document: ConfigDocument,
}

/// Resolve `config` against `env`.
///
/// Pure apart from the fallback warning: identical input gives an
/// identical document.
pub fn resolve(
    config: &SiteConfig,
    env: &Environment,
    policy: UrlPolicy,
) -> Result<ResolvedSite, ResolveError> {
    let (target, source) = resolve_target(env, &config.resolve.default_address, policy)?;

    let deployment = DeploymentTarget::derive(&target, env, &config.deploy);
    let document = ConfigDocument {
        metadata: SiteMetadata::new(&config.site, &target)?,
        plugins: plugins::build(config, &target, &deployment),
    };

    Ok(ResolvedSite {
        target,
        source,
        deployment,
        document,
    })
}

fn resolve_target(
    env: &Environment,
    default_address: &str,
    policy: UrlPolicy,
) -> Result<(TargetUrl, AddressSource), ResolveError> {
    let default = || {
        TargetUrl::parse(default_address).map_err(|reason| ResolveError::InvalidConfiguration {
            var: "resolve.default_address",
            value: default_address.to_string(),
            reason,
        })
    };

    let Some(address) = env.target_address.as_deref() else {
        return Ok((default()?, AddressSource::Default));
    };

    match TargetUrl::parse(address) {
        Ok(target) => Ok((target, AddressSource::Environment)),
        Err(reason) => match policy {
            UrlPolicy::FailFast => Err(ResolveError::InvalidConfiguration {
                var: env.target_address_origin,
                value: address.to_string(),
                reason,
            }),
            UrlPolicy::Fallback => {
                log!(
                    "warning";
                    "{}=`{}` is {}, using {}",
                    env.target_address_origin, address, reason, default_address
                );
                Ok((default()?, AddressSource::Fallback))
            }
        },
    }
}
