//! 缓存规则与 HTTP 头记录

use serde::{Deserialize, Serialize};

/// 规范化的缓存规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRule {
    /// 路径模式，简写解析后总以 `/` 开头
    pub path_pattern: String,
    /// 缓存时长（秒）
    #[serde(alias = "ttl")]
    pub ttl_seconds: u64,
}

impl CacheRule {
    pub fn new(path_pattern: impl Into<String>, ttl_seconds: u64) -> Self {
        Self {
            path_pattern: path_pattern.into(),
            ttl_seconds,
        }
    }
}

/// 规范化的 HTTP 响应头
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    pub key: String,
    pub value: String,
}

impl HeaderRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
