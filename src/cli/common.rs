//! Common utilities shared across CLI commands.

use anyhow::Result;

use super::ResolveArgs;
use crate::config::SiteConfig;
use crate::env::{AWS_S3_BUCKET, Environment};
use crate::resolve::{AddressSource, ResolvedSite, UrlPolicy, is_valid_bucket_name, resolve};
use crate::{debug, log};

/// Command-line policy wins over `[resolve] url_policy`.
pub fn effective_policy(args: &ResolveArgs, config: &SiteConfig) -> UrlPolicy {
    args.url_policy.unwrap_or(config.resolve.url_policy)
}

/// Resolve the site from `env` with command-line overrides applied.
pub fn resolve_site(args: &ResolveArgs, config: &SiteConfig, env: Environment) -> Result<ResolvedSite> {
    let env = env.with_target_address(args.target_address.as_deref());
    let policy = effective_policy(args, config);
    debug!("resolve"; "url policy: {:?}", policy);

    if let Some(bucket) = &env.s3_bucket
        && !is_valid_bucket_name(bucket)
    {
        log!("warning"; "{}=`{}` does not look like a valid bucket name", AWS_S3_BUCKET, bucket);
    }

    let site = resolve(config, &env, policy)?;

    match site.source {
        AddressSource::Environment => debug!("resolve"; "target address {}", site.target),
        AddressSource::Default => {
            debug!("resolve"; "target address unset, using {}", site.target)
        }
        AddressSource::Fallback => {}
    }

    Ok(site)
}
