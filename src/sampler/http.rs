//! Sampler fetching profile documents from an HTTP endpoint.
//!
//! Endpoint layout:
//! - `GET <base>/<kind>` returns the current snapshot of an always-on kind
//! - `GET <base>/profile?seconds=<n>` samples CPU for `n` seconds
//!
//! The endpoint owns CPU session exclusion; a busy endpoint answers with a
//! non-success status.

use super::Sampler;
use crate::profile::ProfileKind;
use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::SamplerError;
use log::{debug, info};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use std::time::Duration;

/// HTTP-backed sampler
pub struct HttpSampler {
    client: Client,
    base_url: String,
}

impl HttpSampler {
    /// Create a sampler for the endpoint rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, SamplerError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(SamplerError::Http)?;

        Ok(Self::with_client(client, base_url))
    }

    /// Use a preconfigured client (proxy, TLS or timeout settings)
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn fetch(&self, kind: ProfileKind, request: RequestBuilder) -> Result<Vec<u8>, SamplerError> {
        let response = request.send()?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(SamplerError::Unregistered(kind.to_string()));
        }
        if !status.is_success() {
            return Err(SamplerError::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        debug!("Fetched {} profile ({} bytes)", kind, body.len());
        Ok(body.to_vec())
    }
}

impl Sampler for HttpSampler {
    fn snapshot(&self, kind: ProfileKind) -> Result<Vec<u8>, SamplerError> {
        let url = snapshot_url(&self.base_url, kind);
        debug!("GET {}", url);
        self.fetch(kind, self.client.get(url))
    }

    fn sample_cpu(&self, duration: Duration) -> Result<Vec<u8>, SamplerError> {
        let url = cpu_url(&self.base_url, duration);
        info!("Requesting {}s CPU profile from {}", duration.as_secs(), self.base_url);
        let request = self.client.get(url).timeout(duration + DEFAULT_HTTP_TIMEOUT);
        self.fetch(ProfileKind::Cpu, request)
    }
}

/// Strip trailing slashes so paths can be appended directly
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// URL of the snapshot document for `kind`
pub fn snapshot_url(base_url: &str, kind: ProfileKind) -> String {
    format!("{}/{}", base_url, kind)
}

/// URL that samples CPU for the whole seconds of `duration`
pub fn cpu_url(base_url: &str, duration: Duration) -> String {
    format!("{}/profile?seconds={}", base_url, duration.as_secs())
}
