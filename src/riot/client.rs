use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::riot::region::Platform;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client bound to one platform host and its regional routing host.
pub struct RiotClient {
    http: reqwest::Client,
    /// Riot API Key
    api_key: String,
    platform_url: String,
    region_url: String,
}

impl RiotClient {
    pub fn new(api_key: String, platform: Platform) -> Self {
        Self::with_base_urls(
            api_key,
            platform.base_url(),
            platform.to_region().base_url(),
        )
    }

    /// Build a client that talks to explicit hosts instead of the well-known
    /// Riot routing hosts.
    pub fn with_base_urls(api_key: String, platform_url: String, region_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            api_key,
            platform_url,
            region_url,
        }
    }

    pub(crate) fn platform_url(&self) -> &str {
        &self.platform_url
    }

    pub(crate) fn region_url(&self) -> &str {
        &self.region_url
    }

    /// Helper which wraps the shared request logic.
    ///
    /// The key rides along as the `api_key` query parameter on every call.
    /// Anything other than 200 becomes an [`AppError::RiotApi`] carrying the
    /// numeric status code.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        tracing::trace!("GET {url}");

        let res = self
            .http
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;
        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => Err(AppError::RiotApi {
                status: status.as_u16(),
                message: res.text().await.unwrap_or_default(),
            }),
        }
    }
}
