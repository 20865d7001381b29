//! Target address parsing and the values derived from it.

use std::fmt;
use url::Url;

use super::InvalidUrl;

/// Scheme of the target address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "http" => Some(Self::Http),
            "https" => Some(Self::Https),
            _ => None,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated absolute http(s) address.
///
/// Everything derived from it (canonical URL, protocol, hostname) comes from
/// the parsed form, never from the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl {
    url: Url,
    protocol: Protocol,
    canonical: String,
}

impl TargetUrl {
    pub fn parse(raw: &str) -> Result<Self, InvalidUrl> {
        let raw = raw.trim();
        if raw.contains(char::REPLACEMENT_CHARACTER) {
            return Err(InvalidUrl::NotUnicode);
        }
        let url = Url::parse(raw)?;

        let protocol = Protocol::from_scheme(url.scheme())
            .ok_or_else(|| InvalidUrl::UnsupportedScheme(url.scheme().to_string()))?;

        if url.host_str().is_none_or(str::is_empty) {
            return Err(InvalidUrl::MissingHost);
        }

        let serialized = url.as_str();
        let canonical = serialized.strip_suffix('/').unwrap_or(serialized).to_string();

        Ok(Self {
            url,
            protocol,
            canonical,
        })
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Host without port.
    pub fn hostname(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// The address with a single trailing `/` stripped.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Absolute form of `reference`.
    ///
    /// A rooted path is resolved below the target's path, dropping the
    /// target's query and fragment. Anything else is returned as-is.
    pub fn absolutize(&self, reference: &str) -> Result<String, InvalidUrl> {
        let Some(relative) = reference.strip_prefix('/') else {
            return Ok(reference.to_string());
        };
        if relative.starts_with('/') {
            return Err(InvalidUrl::ProtocolRelative);
        }

        let mut base = self.url.clone();
        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(&format!("./{relative}"))?.to_string())
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}
