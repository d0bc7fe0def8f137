//! 测试辅助模块
//!
//! 提供记录调用的 mock provider。

use std::sync::Arc;

use async_trait::async_trait;
use cdn_orchestrator_provider::{
    AddDomainRequest, BatchSetConfigRequest, CdnProvider, ModifyDomainRequest, ProviderError,
    Result,
};
use tokio::sync::RwLock;

use crate::extract::InstructionExtractor;
use crate::services::CdnConfigService;

/// mock provider 收到的一次调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    AddDomain(AddDomainRequest),
    DeleteDomain(String),
    ModifyDomain(ModifyDomainRequest),
    BatchSetDomainConfig(BatchSetConfigRequest),
}

// ===== MockCdnProvider =====

#[derive(Default)]
pub struct MockCdnProvider {
    calls: RwLock<Vec<ProviderCall>>,
    /// 如果 Some，`batch_set_domain_config` 返回此错误（用于测试非事务路径）
    batch_error: RwLock<Option<ProviderError>>,
    /// 如果 Some，所有调用都返回此错误
    error: RwLock<Option<ProviderError>>,
}

impl MockCdnProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_error(&self, err: Option<ProviderError>) {
        *self.error.write().await = err;
    }

    pub async fn set_batch_error(&self, err: Option<ProviderError>) {
        *self.batch_error.write().await = err;
    }

    pub async fn calls(&self) -> Vec<ProviderCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: ProviderCall) -> Result<()> {
        let is_batch = matches!(call, ProviderCall::BatchSetDomainConfig(_));
        self.calls.write().await.push(call);

        if let Some(err) = self.error.read().await.clone() {
            return Err(err);
        }
        if is_batch {
            if let Some(err) = self.batch_error.read().await.clone() {
                return Err(err);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CdnProvider for MockCdnProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn add_domain(&self, request: &AddDomainRequest) -> Result<()> {
        self.record(ProviderCall::AddDomain(request.clone())).await
    }

    async fn delete_domain(&self, domain_name: &str) -> Result<()> {
        self.record(ProviderCall::DeleteDomain(domain_name.to_string()))
            .await
    }

    async fn modify_domain(&self, request: &ModifyDomainRequest) -> Result<()> {
        self.record(ProviderCall::ModifyDomain(request.clone())).await
    }

    async fn batch_set_domain_config(&self, request: &BatchSetConfigRequest) -> Result<()> {
        self.record(ProviderCall::BatchSetDomainConfig(request.clone()))
            .await
    }
}

pub fn domain_not_found(domain: &str) -> ProviderError {
    ProviderError::DomainNotFound {
        provider: "mock".to_string(),
        domain: domain.to_string(),
        raw_message: Some("The specified domain does not exist.".to_string()),
    }
}

/// 创建 service 与其背后的 mock provider
pub fn create_test_service() -> (CdnConfigService, Arc<MockCdnProvider>) {
    let provider = Arc::new(MockCdnProvider::new());
    let service = CdnConfigService::new(provider.clone(), InstructionExtractor::default());
    (service, provider)
}
