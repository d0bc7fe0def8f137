//! 阿里云 CDN Provider

mod error;
mod http;
mod provider;
mod sign;
mod types;

use std::fmt;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::utils::log_sanitizer::mask_access_key;

pub(crate) use types::{AcsResponse, serialize_to_query_string};

pub(crate) const ALIYUN_CDN_HOST: &str = "cdn.aliyuncs.com";
pub(crate) const ALIYUN_CDN_VERSION: &str = "2018-05-10";
pub(crate) const ALIYUN_DEFAULT_REGION: &str = "cn-hangzhou";
/// 空 body 的 SHA256 hash (固定值)
pub(crate) const EMPTY_BODY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Aliyun CDN provider implementation.
///
/// Authenticates via HMAC-SHA256 V3 signing with Access Key ID/Secret.
///
/// # Construction
///
/// ```rust,no_run
/// use cdn_orchestrator_provider::AliyunCdnProvider;
///
/// let provider = AliyunCdnProvider::builder(
///     "your-access-key-id".to_string(),
///     "your-access-key-secret".to_string(),
/// )
/// .region_id("cn-shanghai")
/// .build()?;
/// # Ok::<(), cdn_orchestrator_provider::ProviderError>(())
/// ```
pub struct AliyunCdnProvider {
    pub(crate) client: Client,
    pub(crate) access_key_id: String,
    pub(crate) access_key_secret: String,
    pub(crate) region_id: String,
    pub(crate) endpoint: String,
}

impl fmt::Debug for AliyunCdnProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AliyunCdnProvider")
            .field("access_key_id", &mask_access_key(&self.access_key_id))
            .field("access_key_secret", &"***")
            .field("region_id", &self.region_id)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AliyunCdnProvider`].
pub struct AliyunCdnProviderBuilder {
    access_key_id: String,
    access_key_secret: String,
    region_id: String,
    endpoint: String,
}

impl AliyunCdnProviderBuilder {
    fn new(access_key_id: String, access_key_secret: String) -> Self {
        Self {
            access_key_id,
            access_key_secret,
            region_id: ALIYUN_DEFAULT_REGION.to_string(),
            endpoint: ALIYUN_CDN_HOST.to_string(),
        }
    }

    /// Set the region id (default: `cn-hangzhou`).
    #[must_use]
    pub fn region_id(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = region_id.into();
        self
    }

    /// Override the API endpoint host (default: `cdn.aliyuncs.com`).
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build the [`AliyunCdnProvider`] instance.
    pub fn build(self) -> Result<AliyunCdnProvider> {
        let client = create_http_client("aliyun")?;
        log::info!(
            "Aliyun CDN provider ready: endpoint={}, region={}, access_key={}",
            self.endpoint,
            self.region_id,
            mask_access_key(&self.access_key_id)
        );
        Ok(AliyunCdnProvider {
            client,
            access_key_id: self.access_key_id,
            access_key_secret: self.access_key_secret,
            region_id: self.region_id,
            endpoint: self.endpoint,
        })
    }
}

impl AliyunCdnProvider {
    /// Creates a new Aliyun CDN provider with default region and endpoint.
    pub fn new(access_key_id: String, access_key_secret: String) -> Result<Self> {
        Self::builder(access_key_id, access_key_secret).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(access_key_id: String, access_key_secret: String) -> AliyunCdnProviderBuilder {
        AliyunCdnProviderBuilder::new(access_key_id, access_key_secret)
    }

    /// Region this provider was configured with.
    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    /// API endpoint host.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
