//! CDN Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "aliyun")]
mod aliyun;

#[cfg(feature = "aliyun")]
pub use aliyun::{AliyunCdnProvider, AliyunCdnProviderBuilder};
