//! MCP Server implementation for CDN Orchestrator.
//!
//! Exposes 9 tools for AI agents to configure accelerated CDN domains.

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

use cdn_orchestrator_core::{CdnConfigService, CoreError, CoreResult};

use crate::schemas::{
    AddCdnDomainParams, DeleteCdnDomainParams, ModifyCdnSourceParams, SetCdnCacheParams,
    SetCdnHeadersParams, SetCdnHttpsParams, SetCdnProtocolParams, SetCdnSourcePortParams,
    SetupCdnWithTextParams,
};

/// Map a core error onto the MCP surface.
///
/// - malformed shorthand → `invalid_params`
/// - missing domain in free text → error-flagged tool result, so the agent can rephrase
/// - provider failure → `internal_error` carrying the provider message unchanged
fn map_core_error(
    tool_name: &str,
    error: CoreError,
    domain_suffixes: &[String],
) -> Result<CallToolResult, McpError> {
    match error {
        CoreError::InvalidFormat { .. } => {
            log::warn!("{tool_name} rejected input: {error}");
            Err(McpError::invalid_params(error.to_string(), None))
        }
        CoreError::MissingRequiredField(field) => {
            log::warn!("{tool_name} missing required field: {field}");
            Ok(CallToolResult::error(vec![Content::text(format!(
                "Could not find the accelerated domain in the text. \
                 Put the domain on its own line; it must contain one of: {}",
                domain_suffixes.join(", ")
            ))]))
        }
        CoreError::Provider(_) | CoreError::SerializationError(_) => {
            if error.is_expected() {
                log::warn!("{tool_name} failed: {error}");
            } else {
                log::error!("{tool_name} failed: {error}");
            }
            Err(McpError::internal_error(error.to_string(), None))
        }
    }
}

/// MCP Server for CDN Orchestrator.
///
/// Every tool is a thin wrapper over [`CdnConfigService`]; parameter
/// shapes are converted to core input types before the call.
#[derive(Clone)]
pub struct CdnOrchestratorMcp {
    /// Configuration service shared by all tools.
    service: Arc<CdnConfigService>,
    /// Tool router generated by macro.
    tool_router: ToolRouter<Self>,
}

impl CdnOrchestratorMcp {
    /// Create a new MCP server instance.
    #[must_use]
    pub fn new(service: Arc<CdnConfigService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    fn respond(
        &self,
        tool_name: &str,
        result: CoreResult<String>,
    ) -> Result<CallToolResult, McpError> {
        match result {
            Ok(message) => Ok(CallToolResult::success(vec![Content::text(message)])),
            Err(e) => map_core_error(tool_name, e, self.service.extractor().domain_suffixes()),
        }
    }
}

#[tool_router]
impl CdnOrchestratorMcp {
    /// Add an accelerated domain.
    #[tool(
        description = "Add a CDN accelerated domain with one or more origin servers. Origins accept shorthand (\"1.2.3.4:80\", \"origin.example.com:8080\", \"oss://bucket-host\") or {type, content, port}"
    )]
    async fn add_cdn_domain(
        &self,
        Parameters(params): Parameters<AddCdnDomainParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .service
            .add_domain(
                &params.domain_name,
                params.sources.into(),
                params.cdn_type.into(),
            )
            .await;
        self.respond("add_cdn_domain", result)
    }

    /// Delete an accelerated domain.
    #[tool(description = "Delete a CDN accelerated domain")]
    async fn delete_cdn_domain(
        &self,
        Parameters(params): Parameters<DeleteCdnDomainParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.service.delete_domain(&params.domain_name).await;
        self.respond("delete_cdn_domain", result)
    }

    /// Replace the origin servers of a domain.
    #[tool(description = "Replace the origin servers of a CDN accelerated domain")]
    async fn modify_cdn_source(
        &self,
        Parameters(params): Parameters<ModifyCdnSourceParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .service
            .modify_origin(&params.domain_name, params.sources.into())
            .await;
        self.respond("modify_cdn_source", result)
    }

    /// Set the back-to-origin port.
    #[tool(description = "Set the back-to-origin port of a CDN accelerated domain")]
    async fn set_cdn_source_port(
        &self,
        Parameters(params): Parameters<SetCdnSourcePortParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .service
            .set_origin_port(&params.domain_name, params.port)
            .await;
        self.respond("set_cdn_source_port", result)
    }

    /// Set the back-to-origin protocol.
    #[tool(
        description = "Set the back-to-origin protocol of a CDN accelerated domain (HTTP, HTTPS or FOLLOW)"
    )]
    async fn set_cdn_protocol(
        &self,
        Parameters(params): Parameters<SetCdnProtocolParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .service
            .set_protocol(&params.domain_name, &params.protocol)
            .await;
        self.respond("set_cdn_protocol", result)
    }

    /// Set cache TTL rules.
    #[tool(
        description = "Set cache TTL rules of a CDN accelerated domain. Rules accept shorthand \"*.jpg:3600\" or {path_pattern, ttl}"
    )]
    async fn set_cdn_cache(
        &self,
        Parameters(params): Parameters<SetCdnCacheParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .service
            .set_cache(&params.domain_name, params.cache_rules.into())
            .await;
        self.respond("set_cdn_cache", result)
    }

    /// Configure HTTPS.
    #[tool(description = "Configure the HTTPS certificate of a CDN accelerated domain")]
    async fn set_cdn_https(
        &self,
        Parameters(params): Parameters<SetCdnHttpsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .service
            .set_https(
                &params.domain_name,
                &params.ssl_protocol,
                &params.cert_name,
                &params.cert_type,
            )
            .await;
        self.respond("set_cdn_https", result)
    }

    /// Set custom response headers.
    #[tool(
        description = "Set custom HTTP response headers of a CDN accelerated domain. Headers accept shorthand \"Key: Value\" or {key, value}"
    )]
    async fn set_cdn_headers(
        &self,
        Parameters(params): Parameters<SetCdnHeadersParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .service
            .set_headers(&params.domain_name, params.headers.into())
            .await;
        self.respond("set_cdn_headers", result)
    }

    /// Configure a domain from natural-language text.
    #[tool(
        description = "Add a CDN accelerated domain from line-oriented Chinese instructions (domain line, 加速类型, 源站类型, IP地址, 端口, 缓存), then apply any cache rules found"
    )]
    async fn setup_cdn_with_text(
        &self,
        Parameters(params): Parameters<SetupCdnWithTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.service.setup_with_text(&params.text).await;
        self.respond("setup_cdn_with_text", result)
    }
}

#[tool_handler]
impl ServerHandler for CdnOrchestratorMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "CDN Orchestrator MCP Server - Configure Aliyun CDN accelerated domains. \
                 Use add_cdn_domain / delete_cdn_domain to manage domains, modify_cdn_source and \
                 set_cdn_source_port for origins, set_cdn_protocol, set_cdn_cache, set_cdn_https and \
                 set_cdn_headers for domain settings. \
                 setup_cdn_with_text accepts free-form instructions and performs the same operations."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
#[path = "test_mocks.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
pub(crate) mod test_mocks;

#[cfg(test)]
#[path = "server_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;

#[cfg(test)]
#[path = "client_integration_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod client_integration_tests;
