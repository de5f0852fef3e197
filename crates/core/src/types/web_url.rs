//! Absolute web URL type.

use core::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Errors that can occur when parsing a [`WebUrl`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WebUrlError {
    /// The input is not a URL at all.
    #[error("invalid URL: {0}")]
    Malformed(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("URL scheme must be http or https, got {0}")]
    UnsupportedScheme(String),
    /// The URL has no host.
    #[error("URL must have a host")]
    MissingHost,
}

/// An absolute `http`/`https` URL, used for images and avatars.
///
/// The original input string is preserved on output; only validity is
/// checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct WebUrl(String);

impl WebUrl {
    /// Parse a `WebUrl` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not an absolute URL, does not use
    /// `http` or `https`, or has no host.
    pub fn parse(s: &str) -> Result<Self, WebUrlError> {
        let url = Url::parse(s)?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(WebUrlError::UnsupportedScheme(url.scheme().to_owned()));
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(WebUrlError::MissingHost);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WebUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WebUrl {
    type Error = WebUrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WebUrl> for String {
    fn from(url: WebUrl) -> Self {
        url.0
    }
}
