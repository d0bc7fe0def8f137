//! 阿里云 CDN HTTP 请求

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{ALIYUN_CDN_VERSION, AliyunCdnProvider, EMPTY_BODY_SHA256, serialize_to_query_string};

impl AliyunCdnProvider {
    /// Execute an Aliyun API request (RPC style: parameters travel in the query string).
    pub(crate) async fn request<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        action: &str,
        params: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let query_string = serialize_to_query_string(params)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = uuid::Uuid::new_v4().to_string();

        let authorization = self.sign(action, &query_string, &timestamp, &nonce);

        let host = &self.endpoint;
        let url = if query_string.is_empty() {
            format!("https://{host}/")
        } else {
            format!("https://{host}/?{query_string}")
        };

        let request = self
            .client
            .post(&url)
            .header("Host", host.as_str())
            .header("x-acs-action", action)
            .header("x-acs-version", ALIYUN_CDN_VERSION)
            .header("x-acs-date", &timestamp)
            .header("x-acs-signature-nonce", &nonce)
            .header("x-acs-content-sha256", EMPTY_BODY_SHA256)
            .header("Authorization", authorization);

        let (status, response_text) = HttpUtils::execute_request(
            request,
            self.provider_name(),
            "POST",
            &format!("https://{host}/ (Action: {action})"),
        )
        .await?;

        let value: serde_json::Value = match HttpUtils::parse_json(&response_text, self.provider_name())
        {
            Ok(value) => value,
            Err(e) if status >= 400 => {
                log::debug!("[{}] unparsable error body: {e}", self.provider_name());
                return Err(ProviderError::NetworkError {
                    provider: self.provider_name().to_string(),
                    detail: format!("HTTP {status}: {response_text}"),
                });
            }
            Err(e) => return Err(e),
        };

        if let Some(raw) = extract_api_error(&value) {
            log::warn!(
                "[{}] {action} failed: {} - {}",
                self.provider_name(),
                raw.code.as_deref().unwrap_or_default(),
                raw.message
            );
            return Err(self.map_error(raw, ctx));
        }

        if status >= 400 {
            return Err(ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: format!("HTTP {status}: {response_text}"),
            });
        }

        serde_json::from_value(value).map_err(|e| ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: e.to_string(),
        })
    }
}

/// 错误响应体形如 `{"RequestId": "...", "Code": "...", "Message": "..."}`
fn extract_api_error(value: &serde_json::Value) -> Option<RawApiError> {
    let code = value.get("Code").and_then(serde_json::Value::as_str)?;
    let message = value
        .get("Message")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    Some(RawApiError::with_code(code, message))
}
