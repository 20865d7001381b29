//! Process-wide resolved site.
//!
//! Set once after resolution and read-only afterwards, so readers on any
//! thread can hold an `Arc` without locking.

use std::sync::{Arc, OnceLock};

use super::ResolvedSite;

static RESOLVED: OnceLock<Arc<ResolvedSite>> = OnceLock::new();

/// Store `site` unless one was already published; returns the stored value.
pub fn publish(site: ResolvedSite) -> Arc<ResolvedSite> {
    Arc::clone(RESOLVED.get_or_init(|| Arc::new(site)))
}
