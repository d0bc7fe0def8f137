//! # cdn-orchestrator-provider
//!
//! The control-plane boundary of the CDN orchestrator: a [`CdnProvider`] trait
//! that accepts fully-normalized requests, plus concrete provider clients.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Aliyun CDN](https://www.aliyun.com/product/cdn) | `aliyun` | HMAC-SHA256 (V3) |
//!
//! ## Feature Flags
//!
//! - **`aliyun`** *(default)*: Enable the Aliyun CDN provider.
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cdn_orchestrator_provider::{
//!     AddDomainRequest, AliyunCdnProvider, CdnProvider, CdnType, OriginDescriptor, OriginKind,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = AliyunCdnProvider::new("key-id".into(), "key-secret".into())?;
//!
//!     provider
//!         .add_domain(&AddDomainRequest {
//!             domain_name: "static.example.com".into(),
//!             sources: vec![OriginDescriptor::new(OriginKind::IpAddr, "1.2.3.4", 80)],
//!             cdn_type: CdnType::Web,
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Requests are issued exactly once; nothing is retried.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use traits::CdnProvider;

pub use types::{
    AddDomainRequest, BatchSetConfigRequest, CdnType, FunctionArg, FunctionConfig,
    ModifyDomainRequest, OriginDescriptor, OriginKind,
};

pub use utils::log_sanitizer;

#[cfg(feature = "aliyun")]
pub use providers::{AliyunCdnProvider, AliyunCdnProviderBuilder};
