//! 类型定义模块

mod input;
mod records;

pub use input::{ConfigInput, OneOrMany};
pub use records::{CacheRule, HeaderRecord};

// Re-export provider 库的公共类型
pub use cdn_orchestrator_provider::{
    AddDomainRequest, BatchSetConfigRequest, CdnType, FunctionArg, FunctionConfig,
    ModifyDomainRequest, OriginDescriptor, OriginKind,
};
