//! Typed access to the process environment.
//!
//! The resolver never calls `std::env` directly; it reads an [`Environment`]
//! built from any [`EnvSource`], so tests can inject a plain map.

use std::collections::HashMap;
use std::env::VarError;
use std::hash::BuildHasher;

/// Base URL the site will be served from.
pub const TARGET_ADDRESS: &str = "TARGET_ADDRESS";
/// Deployment bucket for the build output.
pub const AWS_S3_BUCKET: &str = "AWS_S3_BUCKET";
/// Deployment region.
pub const AWS_REGION: &str = "AWS_REGION";
/// Command-line flag that overrides [`TARGET_ADDRESS`].
pub const TARGET_ADDRESS_FLAG: &str = "--target-address";

/// Something that can answer "what is the value of variable X".
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        var_value(std::env::var(name))
    }
}

/// A non-unicode value is still a set value: keep it lossily so that
/// validation rejects it instead of treating it as unset.
fn var_value(result: Result<String, VarError>) -> Option<String> {
    match result {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<S: BuildHasher> EnvSource for HashMap<&str, &str, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| (*v).to_string())
    }
}

/// Snapshot of the variables the resolver cares about.
///
/// Values are trimmed; empty or whitespace-only values count as unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub target_address: Option<String>,
    /// Variable or flag `target_address` was taken from.
    pub target_address_origin: &'static str,
    pub s3_bucket: Option<String>,
    pub region: Option<String>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            target_address: None,
            target_address_origin: TARGET_ADDRESS,
            s3_bucket: None,
            region: None,
        }
    }
}

impl Environment {
    pub fn read(source: &impl EnvSource) -> Self {
        let get = |name: &str| {
            source
                .var(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            target_address: get(TARGET_ADDRESS),
            target_address_origin: TARGET_ADDRESS,
            s3_bucket: get(AWS_S3_BUCKET),
            region: get(AWS_REGION),
        }
    }

    /// Read from the current process.
    pub fn from_process() -> Self {
        Self::read(&ProcessEnv)
    }

    /// Build from `(name, value)` pairs.
    #[cfg(test)]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map: rustc_hash::FxHashMap<&str, &str> = pairs.into_iter().collect();
        Self::read(&map)
    }

    /// Replace the target address with a `--target-address` override.
    pub fn with_target_address(mut self, address: Option<&str>) -> Self {
        if let Some(address) = address.map(str::trim).filter(|a| !a.is_empty()) {
            self.target_address = Some(address.to_string());
            self.target_address_origin = TARGET_ADDRESS_FLAG;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_all_set() {
        let env = Environment::from_pairs([
            (TARGET_ADDRESS, "https://example.com"),
            (AWS_S3_BUCKET, "my-site"),
            (AWS_REGION, "us-west-2"),
        ]);
        assert_eq!(env.target_address.as_deref(), Some("https://example.com"));
        assert_eq!(env.s3_bucket.as_deref(), Some("my-site"));
        assert_eq!(env.region.as_deref(), Some("us-west-2"));
    }

    #[test]
    fn test_read_nothing_set() {
        assert_eq!(Environment::from_pairs([]), Environment::default());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let env = Environment::from_pairs([(TARGET_ADDRESS, "   "), (AWS_REGION, "")]);
        assert!(env.target_address.is_none());
        assert!(env.region.is_none());
    }

    #[test]
    fn test_values_are_trimmed() {
        let env = Environment::from_pairs([(AWS_S3_BUCKET, "  my-site\n")]);
        assert_eq!(env.s3_bucket.as_deref(), Some("my-site"));
    }

    #[test]
    fn test_owned_map_source() {
        let mut map = HashMap::new();
        map.insert(AWS_REGION.to_string(), "eu-central-1".to_string());
        assert_eq!(Environment::read(&map).region.as_deref(), Some("eu-central-1"));
    }

    #[test]
    fn test_target_address_override() {
        let env = Environment::from_pairs([(TARGET_ADDRESS, "https://a.com")]);
        assert_eq!(env.target_address_origin, TARGET_ADDRESS);
        let env = env.with_target_address(Some("https://b.com"));
        assert_eq!(env.target_address.as_deref(), Some("https://b.com"));
        assert_eq!(env.target_address_origin, TARGET_ADDRESS_FLAG);

        let env = env.with_target_address(Some(" "));
        assert_eq!(env.target_address.as_deref(), Some("https://b.com"));

        let env = env.with_target_address(None);
        assert_eq!(env.target_address.as_deref(), Some("https://b.com"));
    }

    #[test]
    fn test_blank_override_keeps_origin() {
        let env = Environment::from_pairs([(TARGET_ADDRESS, "https://a.com")]).with_target_address(Some(""));
        assert_eq!(env.target_address_origin, TARGET_ADDRESS);
    }

    #[test]
    fn test_unset_var_value() {
        assert_eq!(var_value(Err(VarError::NotPresent)), None);
        assert_eq!(var_value(Ok("x".to_string())).as_deref(), Some("x"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_kept() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"https://ex\xffample.com".to_vec());
        let value = var_value(Err(VarError::NotUnicode(raw))).unwrap();
        assert_eq!(value, "https://ex\u{FFFD}ample.com");

        let env = Environment::from_pairs([(TARGET_ADDRESS, value.as_str())]);
        assert!(env.target_address.is_some());
    }
}
