use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{AddDomainRequest, BatchSetConfigRequest, ModifyDomainRequest};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 加速域名（用于 `DomainNotFound` / `DomainExists` 等错误）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// CDN control plane (the domain configuration service).
///
/// Accepts fully-normalized requests; every method issues exactly one
/// logical request and returns the provider's failure unchanged.
#[async_trait]
pub trait CdnProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 添加加速域名
    async fn add_domain(&self, req: &AddDomainRequest) -> Result<()>;

    /// 删除加速域名
    async fn delete_domain(&self, domain_name: &str) -> Result<()>;

    /// 修改源站
    async fn modify_domain(&self, req: &ModifyDomainRequest) -> Result<()>;

    /// 批量设置域名功能配置
    async fn batch_set_domain_config(&self, req: &BatchSetConfigRequest) -> Result<()>;
}
