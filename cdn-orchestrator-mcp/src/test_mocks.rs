use super::*;

use async_trait::async_trait;
use cdn_orchestrator_core::InstructionExtractor;
use cdn_orchestrator_provider::{
    AddDomainRequest, BatchSetConfigRequest, CdnProvider, ModifyDomainRequest, ProviderError,
    Result as ProviderResult,
};
use tokio::sync::Mutex;

/// Test-only provider that records every request.
#[derive(Default)]
pub struct MockCdnProvider {
    added: Mutex<Vec<AddDomainRequest>>,
    deleted: Mutex<Vec<String>>,
    modified: Mutex<Vec<ModifyDomainRequest>>,
    batches: Mutex<Vec<BatchSetConfigRequest>>,
    error: Mutex<Option<ProviderError>>,
}

impl MockCdnProvider {
    pub async fn set_error(&self, error: Option<ProviderError>) {
        *self.error.lock().await = error;
    }

    pub async fn added(&self) -> Vec<AddDomainRequest> {
        self.added.lock().await.clone()
    }

    pub async fn deleted(&self) -> Vec<String> {
        self.deleted.lock().await.clone()
    }

    pub async fn modified(&self) -> Vec<ModifyDomainRequest> {
        self.modified.lock().await.clone()
    }

    pub async fn batches(&self) -> Vec<BatchSetConfigRequest> {
        self.batches.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.added.lock().await.len()
            + self.deleted.lock().await.len()
            + self.modified.lock().await.len()
            + self.batches.lock().await.len()
    }

    async fn outcome(&self) -> ProviderResult<()> {
        match self.error.lock().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CdnProvider for MockCdnProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn add_domain(&self, request: &AddDomainRequest) -> ProviderResult<()> {
        self.added.lock().await.push(request.clone());
        self.outcome().await
    }

    async fn delete_domain(&self, domain_name: &str) -> ProviderResult<()> {
        self.deleted.lock().await.push(domain_name.to_string());
        self.outcome().await
    }

    async fn modify_domain(&self, request: &ModifyDomainRequest) -> ProviderResult<()> {
        self.modified.lock().await.push(request.clone());
        self.outcome().await
    }

    async fn batch_set_domain_config(&self, request: &BatchSetConfigRequest) -> ProviderResult<()> {
        self.batches.lock().await.push(request.clone());
        self.outcome().await
    }
}

pub fn quota_exceeded() -> ProviderError {
    ProviderError::QuotaExceeded {
        provider: "aliyun".to_string(),
        raw_message: Some("The number of domains exceeds the limit.".to_string()),
    }
}

pub(super) fn build_server(provider: Arc<MockCdnProvider>) -> CdnOrchestratorMcp {
    let service = CdnConfigService::new(provider, InstructionExtractor::default());
    CdnOrchestratorMcp::new(Arc::new(service))
}
