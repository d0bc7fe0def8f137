//! 配置动作构建
//!
//! 把规范化后的记录组装为 `BatchSetCdnDomainConfig` 所需的具名函数配置。
//! 参数顺序有意义：缓存规则按 `ttl`, `path` 成对展开，HTTP 头按 `key`, `value` 成对展开。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{BatchSetConfigRequest, CacheRule, FunctionArg, FunctionConfig, HeaderRecord};

/// 回源协议
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginProtocol {
    Http,
    Https,
    /// 跟随客户端请求协议
    Follow,
}

impl OriginProtocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Follow => "follow",
        }
    }
}

impl fmt::Display for OriginProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OriginProtocol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HTTP" => Ok(Self::Http),
            "HTTPS" => Ok(Self::Https),
            "FOLLOW" => Ok(Self::Follow),
            _ => Err(CoreError::invalid_format(
                "protocol",
                format!("'{s}': expected HTTP, HTTPS or FOLLOW"),
            )),
        }
    }
}

/// `origin_port`：回源端口
pub fn origin_port(port: u16) -> FunctionConfig {
    FunctionConfig::new("origin_port", vec![FunctionArg::new("port", port.to_string())])
}

/// `back_to_origin_protocol`：回源协议
pub fn back_to_origin_protocol(protocol: OriginProtocol) -> FunctionConfig {
    FunctionConfig::new(
        "back_to_origin_protocol",
        vec![FunctionArg::new("protocol", protocol.as_str())],
    )
}

/// `cache_ttl`：每条规则依次展开为 `ttl`, `path`
pub fn cache_ttl(rules: &[CacheRule]) -> FunctionConfig {
    let args = rules
        .iter()
        .flat_map(|rule| {
            [
                FunctionArg::new("ttl", rule.ttl_seconds.to_string()),
                FunctionArg::new("path", rule.path_pattern.clone()),
            ]
        })
        .collect();
    FunctionConfig::new("cache_ttl", args)
}

/// `https`：参数原样透传
pub fn https(ssl_protocol: &str, cert_name: &str, cert_type: &str) -> FunctionConfig {
    FunctionConfig::new(
        "https",
        vec![
            FunctionArg::new("ssl_protocol", ssl_protocol),
            FunctionArg::new("cert_name", cert_name),
            FunctionArg::new("cert_type", cert_type),
        ],
    )
}

/// `custom_response_header`：每个头依次展开为 `key`, `value`
pub fn custom_response_header(headers: &[HeaderRecord]) -> FunctionConfig {
    let args = headers
        .iter()
        .flat_map(|header| {
            [
                FunctionArg::new("key", header.key.clone()),
                FunctionArg::new("value", header.value.clone()),
            ]
        })
        .collect();
    FunctionConfig::new("custom_response_header", args)
}

/// 单个函数配置也要包装成列表，接口只接受函数配置数组
pub fn batch_request(domain_name: &str, function: FunctionConfig) -> BatchSetConfigRequest {
    BatchSetConfigRequest {
        domain_names: domain_name.to_string(),
        functions: vec![function],
    }
}
