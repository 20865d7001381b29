//! Resolver error types.

use thiserror::Error;

/// Why a string is not a usable address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUrl {
    #[error("not an absolute URL ({0})")]
    Parse(#[from] url::ParseError),

    #[error("unsupported scheme `{0}`, expected http or https")]
    UnsupportedScheme(String),

    #[error("missing host")]
    MissingHost,

    #[error("not valid unicode")]
    NotUnicode,

    #[error("protocol-relative, expected a rooted path or an absolute URL")]
    ProtocolRelative,
}

/// The only way resolution can fail.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid configuration: {var}=`{value}` is {reason}")]
    InvalidConfiguration {
        /// Environment variable, command-line flag or config key holding
        /// the bad value.
        var: &'static str,
        value: String,
        #[source]
        reason: InvalidUrl,
    },
}
