//! Client configuration

use crate::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Address of the local analysis backend
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Build an endpoint URL, percent-encoding each path segment
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}
