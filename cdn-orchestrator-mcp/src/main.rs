//! MCP Server entry point for CDN Orchestrator
//!
//! Reads Aliyun credentials from the environment once, builds the CDN
//! provider and serves the configuration tools over stdio.

mod config;
mod schemas;
mod server;

use std::process::ExitCode;
use std::sync::Arc;

use cdn_orchestrator_core::{CdnConfigService, InstructionExtractor};
use cdn_orchestrator_provider::AliyunCdnProvider;
use config::AppConfig;
use rmcp::ServiceExt;
use server::CdnOrchestratorMcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (MCP uses stdout for protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting CDN Orchestrator MCP Server");

    let config = AppConfig::from_env();
    tracing::debug!("Loaded configuration: {config:?}");
    if !config.has_credentials() {
        tracing::warn!(
            "{} / {} not set; control-plane calls will be rejected",
            config::ENV_ACCESS_KEY_ID,
            config::ENV_ACCESS_KEY_SECRET
        );
    }

    let provider = match AliyunCdnProvider::builder(
        config.access_key_id.clone(),
        config.access_key_secret.clone(),
    )
    .region_id(config.region_id.clone())
    .endpoint(config.endpoint.clone())
    .build()
    {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to create CDN provider: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let extractor = InstructionExtractor::new(config.domain_suffixes.clone());
    let service = Arc::new(CdnConfigService::new(Arc::new(provider), extractor));

    // Create MCP server
    let mcp_server = CdnOrchestratorMcp::new(service);

    tracing::info!(
        "MCP server initialized with 9 tools (region {}, endpoint {})",
        config.region_id,
        config.endpoint
    );

    // Start serving via stdio
    tracing::info!("Starting MCP server on stdio transport");
    let service = match mcp_server.serve(rmcp::transport::stdio()).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start MCP server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Wait for the server to complete
    if let Err(e) = service.waiting().await {
        tracing::error!("MCP server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
