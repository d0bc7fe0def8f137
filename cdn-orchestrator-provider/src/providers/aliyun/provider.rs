//! 阿里云 CdnProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{CdnProvider, ErrorContext};
use crate::types::{AddDomainRequest, BatchSetConfigRequest, ModifyDomainRequest};

use super::types::{
    AddCdnDomainParams, BatchSetCdnDomainConfigParams, DeleteCdnDomainParams,
    ModifyCdnDomainParams, sources_param,
};
use super::{AcsResponse, AliyunCdnProvider};

impl AliyunCdnProvider {
    fn log_accepted(action: &str, domain: &str, response: &AcsResponse) {
        log::info!(
            "[aliyun] {action} accepted for {domain} (RequestId: {})",
            response.request_id.as_deref().unwrap_or("-")
        );
    }
}

#[async_trait]
impl CdnProvider for AliyunCdnProvider {
    fn id(&self) -> &'static str {
        "aliyun"
    }

    async fn add_domain(&self, req: &AddDomainRequest) -> Result<()> {
        let params = AddCdnDomainParams {
            domain_name: req.domain_name.clone(),
            cdn_type: req.cdn_type.as_str().to_string(),
            sources: sources_param(&req.sources)?,
        };

        let response: AcsResponse = self
            .request(
                "AddCdnDomain",
                &params,
                ErrorContext::domain(&req.domain_name),
            )
            .await?;
        Self::log_accepted("AddCdnDomain", &req.domain_name, &response);
        Ok(())
    }

    async fn delete_domain(&self, domain_name: &str) -> Result<()> {
        let params = DeleteCdnDomainParams {
            domain_name: domain_name.to_string(),
        };

        let response: AcsResponse = self
            .request("DeleteCdnDomain", &params, ErrorContext::domain(domain_name))
            .await?;
        Self::log_accepted("DeleteCdnDomain", domain_name, &response);
        Ok(())
    }

    async fn modify_domain(&self, req: &ModifyDomainRequest) -> Result<()> {
        let params = ModifyCdnDomainParams {
            domain_name: req.domain_name.clone(),
            sources: sources_param(&req.sources)?,
        };

        let response: AcsResponse = self
            .request(
                "ModifyCdnDomain",
                &params,
                ErrorContext::domain(&req.domain_name),
            )
            .await?;
        Self::log_accepted("ModifyCdnDomain", &req.domain_name, &response);
        Ok(())
    }

    async fn batch_set_domain_config(&self, req: &BatchSetConfigRequest) -> Result<()> {
        let params = BatchSetCdnDomainConfigParams::new(&req.domain_names, &req.functions)?;

        let response: AcsResponse = self
            .request(
                "BatchSetCdnDomainConfig",
                &params,
                ErrorContext::domain(&req.domain_names),
            )
            .await?;
        Self::log_accepted("BatchSetCdnDomainConfig", &req.domain_names, &response);
        Ok(())
    }
}
