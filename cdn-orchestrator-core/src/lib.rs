//! CDN Orchestrator Core Library
//!
//! Turns loosely-structured CDN configuration input into validated requests
//! for a [`CdnProvider`](cdn_orchestrator_provider::CdnProvider):
//! - shorthand / canonical input normalization ([`normalize`])
//! - named function configuration building ([`actions`])
//! - line-oriented natural-language extraction ([`extract`])
//! - the [`CdnConfigService`] that composes them
//!
//! The provider boundary is a trait, so the service can be driven by the
//! Aliyun client in production and by a recording mock in tests.

pub mod actions;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use extract::{ExtractedInstruction, InstructionDraft, InstructionExtractor};
pub use services::CdnConfigService;
