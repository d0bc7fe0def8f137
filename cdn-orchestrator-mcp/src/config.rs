//! Process-wide configuration, read once from the environment at startup.

use std::env;
use std::fmt;

use cdn_orchestrator_core::extract::DEFAULT_DOMAIN_SUFFIX;
use cdn_orchestrator_provider::log_sanitizer::mask_access_key;

pub const ENV_ACCESS_KEY_ID: &str = "ALIBABA_CLOUD_ACCESS_KEY_ID";
pub const ENV_ACCESS_KEY_SECRET: &str = "ALIBABA_CLOUD_ACCESS_KEY_SECRET";
pub const ENV_REGION_ID: &str = "ALIBABA_CLOUD_REGION_ID";
pub const ENV_CDN_ENDPOINT: &str = "ALIBABA_CLOUD_CDN_ENDPOINT";
pub const ENV_DOMAIN_SUFFIXES: &str = "CDN_DOMAIN_SUFFIXES";

const DEFAULT_REGION_ID: &str = "cn-hangzhou";
const DEFAULT_CDN_ENDPOINT: &str = "cdn.aliyuncs.com";

/// Server configuration.
///
/// Credentials are not validated here; an empty key is sent as-is and the
/// control plane rejects it.
#[derive(Clone)]
pub struct AppConfig {
    pub access_key_id: String,
    pub access_key_secret: String,
    pub region_id: String,
    pub endpoint: String,
    /// Markers that identify the domain line in natural-language instructions.
    pub domain_suffixes: Vec<String>,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let domain_suffixes = non_empty(ENV_DOMAIN_SUFFIXES)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|suffixes| !suffixes.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_DOMAIN_SUFFIX.to_string()]);

        Self {
            access_key_id: lookup(ENV_ACCESS_KEY_ID).unwrap_or_default(),
            access_key_secret: lookup(ENV_ACCESS_KEY_SECRET).unwrap_or_default(),
            region_id: non_empty(ENV_REGION_ID).unwrap_or_else(|| DEFAULT_REGION_ID.to_string()),
            endpoint: non_empty(ENV_CDN_ENDPOINT)
                .unwrap_or_else(|| DEFAULT_CDN_ENDPOINT.to_string()),
            domain_suffixes,
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.access_key_id.is_empty() && !self.access_key_secret.is_empty()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("access_key_id", &mask_access_key(&self.access_key_id))
            .field("access_key_secret", &"***")
            .field("region_id", &self.region_id)
            .field("endpoint", &self.endpoint)
            .field("domain_suffixes", &self.domain_suffixes)
            .finish()
    }
}
