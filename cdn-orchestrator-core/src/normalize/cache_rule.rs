//! 缓存规则解析
//!
//! 简写: `"*.jpg:3600"` → `{ path_pattern: "/*.jpg", ttl_seconds: 3600 }`

use crate::error::{CoreError, CoreResult};
use crate::types::{CacheRule, ConfigInput, OneOrMany};

const FIELD: &str = "cache rule";

/// 解析缓存规则简写
pub fn parse_cache_rule(rule: &str) -> CoreResult<CacheRule> {
    let parts: Vec<&str> = rule.split(':').collect();
    let [pattern, ttl] = parts.as_slice() else {
        return Err(CoreError::invalid_format(
            FIELD,
            format!("'{rule}': expected '<pattern>:<ttl>'"),
        ));
    };

    let ttl_seconds = ttl.trim().parse::<u64>().map_err(|_| {
        CoreError::invalid_format(FIELD, format!("'{rule}': ttl '{ttl}' is not a non-negative integer"))
    })?;

    let path_pattern = if pattern.starts_with('/') {
        (*pattern).to_string()
    } else {
        format!("/{pattern}")
    };

    Ok(CacheRule {
        path_pattern,
        ttl_seconds,
    })
}

/// 解析单个缓存规则输入，完整记录原样返回
pub fn normalize_cache_rule(input: ConfigInput<CacheRule>) -> CoreResult<CacheRule> {
    super::resolve(input, parse_cache_rule)
}

/// 解析一个或多个缓存规则，保持输入顺序
pub fn normalize_cache_rules(input: OneOrMany<ConfigInput<CacheRule>>) -> CoreResult<Vec<CacheRule>> {
    super::normalize_all(input, parse_cache_rule)
}
