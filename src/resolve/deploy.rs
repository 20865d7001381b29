//! Object-storage deployment target.

use super::{Protocol, TargetUrl};
use crate::config::DeployConfig;
use crate::env::Environment;

/// Where and how the build output is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTarget {
    pub bucket_name: String,
    pub region: Option<String>,
    pub protocol: Protocol,
    pub hostname: String,
}

impl DeploymentTarget {
    /// Missing bucket or region never fail: they only matter once the
    /// deployment plugin actually runs.
    pub fn derive(target: &TargetUrl, env: &Environment, deploy: &DeployConfig) -> Self {
        Self {
            bucket_name: env
                .s3_bucket
                .clone()
                .unwrap_or_else(|| deploy.bucket_placeholder.clone()),
            region: env.region.clone(),
            protocol: target.protocol(),
            hostname: target.hostname().to_string(),
        }
    }
}

/// 3-63 characters of lowercase letters, digits, `.` and `-`, starting and
/// ending with a letter or digit.
pub fn is_valid_bucket_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    let edge_ok = |b: Option<&u8>| b.is_some_and(|b| b.is_ascii_lowercase() || b.is_ascii_digit());

    (3..=63).contains(&bytes.len())
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'.' | b'-'))
        && edge_ok(bytes.first())
        && edge_ok(bytes.last())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AWS_REGION, AWS_S3_BUCKET};

    fn target() -> TargetUrl {
        TargetUrl::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_placeholder_when_unset() {
        let deployment =
            DeploymentTarget::derive(&target(), &Environment::default(), &DeployConfig::default());
        assert_eq!(deployment.bucket_name, "fake-bucket");
        assert_eq!(deployment.region, None);
        assert_eq!(deployment.protocol, Protocol::Https);
        assert_eq!(deployment.hostname, "example.com");
    }

    #[test]
    fn test_from_environment() {
        let env = Environment::from_pairs([(AWS_S3_BUCKET, "alex-site"), (AWS_REGION, "us-west-2")]);
        let deployment = DeploymentTarget::derive(&target(), &env, &DeployConfig::default());
        assert_eq!(deployment.bucket_name, "alex-site");
        assert_eq!(deployment.region.as_deref(), Some("us-west-2"));
    }

    #[test]
    fn test_bucket_names() {
        for name in ["fake-bucket", "abc", "my.site.2024", "a".repeat(63).as_str()] {
            assert!(is_valid_bucket_name(name), "{name}");
        }
        for name in ["ab", "My_Bucket", "-bucket", "bucket-", "", "a".repeat(64).as_str(), "has space"] {
            assert!(!is_valid_bucket_name(name), "{name}");
        }
    }
}
