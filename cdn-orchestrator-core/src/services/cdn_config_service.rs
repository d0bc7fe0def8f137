//! CDN 域名配置服务
//!
//! 每个操作先规范化输入，再发起恰好一次 provider 调用；失败原样向上传递，不重试。
//! 唯一的例外是 [`CdnConfigService::setup_with_text`]：先添加域名，再按需设置缓存，
//! 两次写入之间不做回滚。

use std::sync::Arc;

use cdn_orchestrator_provider::CdnProvider;

use crate::actions::{self, OriginProtocol};
use crate::error::{CoreError, CoreResult};
use crate::extract::InstructionExtractor;
use crate::normalize::{normalize_cache_rules, normalize_headers, normalize_origins};
use crate::types::{
    AddDomainRequest, CacheRule, CdnType, ConfigInput, FunctionConfig, HeaderRecord,
    ModifyDomainRequest, OneOrMany, OriginDescriptor,
};

/// CDN 域名配置服务
pub struct CdnConfigService {
    provider: Arc<dyn CdnProvider>,
    extractor: InstructionExtractor,
}

impl CdnConfigService {
    /// 创建配置服务实例
    #[must_use]
    pub fn new(provider: Arc<dyn CdnProvider>, extractor: InstructionExtractor) -> Self {
        Self {
            provider,
            extractor,
        }
    }

    pub fn extractor(&self) -> &InstructionExtractor {
        &self.extractor
    }

    /// 添加加速域名
    pub async fn add_domain(
        &self,
        domain_name: &str,
        sources: OneOrMany<ConfigInput<OriginDescriptor>>,
        cdn_type: CdnType,
    ) -> CoreResult<String> {
        let request = AddDomainRequest {
            domain_name: domain_name.to_string(),
            sources: normalize_origins(sources)?,
            cdn_type,
        };

        self.provider
            .add_domain(&request)
            .await
            .map_err(|e| log_failure("add domain", domain_name, e.into()))?;

        log::info!("Added CDN domain {domain_name} ({cdn_type})");
        Ok(format!("Domain {domain_name} added"))
    }

    /// 删除加速域名
    pub async fn delete_domain(&self, domain_name: &str) -> CoreResult<String> {
        self.provider
            .delete_domain(domain_name)
            .await
            .map_err(|e| log_failure("delete domain", domain_name, e.into()))?;

        log::info!("Deleted CDN domain {domain_name}");
        Ok(format!("Domain {domain_name} deleted"))
    }

    /// 替换源站
    pub async fn modify_origin(
        &self,
        domain_name: &str,
        sources: OneOrMany<ConfigInput<OriginDescriptor>>,
    ) -> CoreResult<String> {
        let request = ModifyDomainRequest {
            domain_name: domain_name.to_string(),
            sources: normalize_origins(sources)?,
        };

        self.provider
            .modify_domain(&request)
            .await
            .map_err(|e| log_failure("modify origin", domain_name, e.into()))?;

        Ok(format!("Origin of domain {domain_name} updated"))
    }

    /// 设置回源端口
    pub async fn set_origin_port(&self, domain_name: &str, port: u16) -> CoreResult<String> {
        self.apply(domain_name, actions::origin_port(port)).await?;
        Ok(format!("Origin port of domain {domain_name} set to {port}"))
    }

    /// 设置回源协议（HTTP / HTTPS / FOLLOW，大小写不敏感）
    pub async fn set_protocol(&self, domain_name: &str, protocol: &str) -> CoreResult<String> {
        let protocol: OriginProtocol = protocol.parse()?;
        self.apply(domain_name, actions::back_to_origin_protocol(protocol))
            .await?;
        Ok(format!(
            "Back-to-origin protocol of domain {domain_name} set to {protocol}"
        ))
    }

    /// 设置缓存规则
    pub async fn set_cache(
        &self,
        domain_name: &str,
        rules: OneOrMany<ConfigInput<CacheRule>>,
    ) -> CoreResult<String> {
        let rules = normalize_cache_rules(rules)?;
        self.apply(domain_name, actions::cache_ttl(&rules)).await?;
        Ok(format!(
            "Cache rules of domain {domain_name} updated ({} rules)",
            rules.len()
        ))
    }

    /// 设置 HTTPS 证书
    pub async fn set_https(
        &self,
        domain_name: &str,
        ssl_protocol: &str,
        cert_name: &str,
        cert_type: &str,
    ) -> CoreResult<String> {
        self.apply(
            domain_name,
            actions::https(ssl_protocol, cert_name, cert_type),
        )
        .await?;
        Ok(format!("HTTPS configuration of domain {domain_name} updated"))
    }

    /// 设置自定义响应头
    pub async fn set_headers(
        &self,
        domain_name: &str,
        headers: OneOrMany<ConfigInput<HeaderRecord>>,
    ) -> CoreResult<String> {
        let headers = normalize_headers(headers)?;
        self.apply(domain_name, actions::custom_response_header(&headers))
            .await?;
        Ok(format!(
            "Response headers of domain {domain_name} updated ({} headers)",
            headers.len()
        ))
    }

    /// 通过自然语言文本配置 CDN
    ///
    /// 找不到域名时返回 [`CoreError::MissingRequiredField`]，不发起任何调用。
    /// 添加域名成功但缓存设置失败时，返回缓存设置的错误，已添加的域名保留。
    pub async fn setup_with_text(&self, text: &str) -> CoreResult<String> {
        let instruction = self.extractor.extract(text).inspect_err(|e| {
            log::warn!("Failed to extract CDN instruction: {e}");
        })?;

        log::debug!("Extracted CDN instruction: {instruction:?}");

        let added = self
            .add_domain(
                &instruction.domain_name,
                OneOrMany::One(ConfigInput::Canonical(instruction.origin)),
                instruction.acceleration_type,
            )
            .await?;

        let mut summary = format!("CDN configuration completed:\n{added}");

        if !instruction.cache_rules.is_empty() {
            let rules = instruction
                .cache_rules
                .into_iter()
                .map(ConfigInput::Shorthand)
                .collect::<Vec<_>>();
            let cached = self
                .set_cache(&instruction.domain_name, OneOrMany::Many(rules))
                .await?;
            summary.push('\n');
            summary.push_str(&cached);
        }

        Ok(summary)
    }

    /// 单个函数配置 → `BatchSetCdnDomainConfig`
    async fn apply(&self, domain_name: &str, function: FunctionConfig) -> CoreResult<()> {
        let function_name = function.function_name.clone();
        let request = actions::batch_request(domain_name, function);

        self.provider
            .batch_set_domain_config(&request)
            .await
            .map_err(|e| log_failure(&function_name, domain_name, e.into()))?;

        log::info!("Applied {function_name} to CDN domain {domain_name}");
        Ok(())
    }
}

fn log_failure(action: &str, domain_name: &str, err: CoreError) -> CoreError {
    if err.is_expected() {
        log::warn!("{action} failed for {domain_name}: {err}");
    } else {
        log::error!("{action} failed for {domain_name}: {err}");
    }
    err
}
