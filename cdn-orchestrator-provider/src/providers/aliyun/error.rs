//! 阿里云 CDN 错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::AliyunCdnProvider;

/// 阿里云 CDN 错误码映射
/// 参考: <https://api.aliyun.com/document/Cdn/2018-05-10/errorCode>
impl ProviderErrorMapper for AliyunCdnProvider {
    fn provider_name(&self) -> &'static str {
        "aliyun"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        let code = raw.code.as_deref().unwrap_or_default();

        match code {
            // ============ 认证错误 ============
            "InvalidAccessKeyId.NotFound"
            | "InvalidAccessKeyId.Inactive"
            | "SignatureDoesNotMatch"
            | "IncompleteSignature" => ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(raw.message),
            },

            // ============ 域名已存在 ============
            "DomainAlreadyExist" | "Domain.AlreadyExist" | "DomainAlreadyExistInOtherProduct" => {
                ProviderError::DomainExists {
                    provider,
                    domain: context.domain.unwrap_or_default(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ 域名不存在 ============
            "InvalidDomain.NotFound" | "DomainNotFound" | "Domain.NotFound" => {
                ProviderError::DomainNotFound {
                    provider,
                    domain: context.domain.unwrap_or_default(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ 域名状态不允许操作 ============
            "InvalidDomain.Offline"
            | "DomainInProtectedStatus"
            | "InvalidDomainStatus"
            | "Domain.StatusNotSupport"
            | "DomainConfiguring" => ProviderError::DomainUnavailable {
                provider,
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 配额限制 ============
            "DomainOverLimit" | "QuotaExceeded" | "Domain.OverLimit" => {
                ProviderError::QuotaExceeded {
                    provider,
                    raw_message: Some(raw.message),
                }
            }

            // ============ 频率限流 ============
            "Throttling" | "Throttling.User" | "Throttling.Api" => ProviderError::RateLimited {
                provider,
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // ============ 权限/操作被拒绝 ============
            "Forbidden"
            | "Forbidden.RAM"
            | "NoPermission"
            | "InvalidUserStatus"
            | "ServiceNotActivated" => ProviderError::PermissionDenied {
                provider,
                raw_message: Some(raw.message),
            },

            // ============ 参数无效 ============
            "InvalidSources.Malformed" | "InvalidSource.Malformed" | "InvalidSources" => {
                invalid_parameter(provider, "Sources", raw.message)
            }
            "InvalidCdnType.Malformed" | "InvalidCdnType" => {
                invalid_parameter(provider, "CdnType", raw.message)
            }
            "InvalidDomainName.Malformed" | "InvalidDomainName" | "InvalidDomainName.TooLong" => {
                invalid_parameter(provider, "DomainName", raw.message)
            }
            "InvalidFunctions.Malformed"
            | "InvalidFunctionName"
            | "InvalidFunctionArgs"
            | "Function.ArgsNotValid" => invalid_parameter(provider, "Functions", raw.message),
            "InvalidParameter" | "MissingParameter" => {
                invalid_parameter(provider, "request", raw.message)
            }

            // ============ 其他错误 fallback ============
            _ => self.unknown_error(raw),
        }
    }
}

fn invalid_parameter(provider: String, param: &str, detail: String) -> ProviderError {
    ProviderError::InvalidParameter {
        provider,
        param: param.to_string(),
        detail,
    }
}
