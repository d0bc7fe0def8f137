//! 业务逻辑服务层

mod cdn_config_service;

pub use cdn_config_service::CdnConfigService;
