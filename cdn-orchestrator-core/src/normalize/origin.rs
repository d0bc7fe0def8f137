//! 源站信息解析
//!
//! 支持的简写:
//! - `"1.2.3.4:80"` / `"1.2.3.4"` → IP 源站
//! - `"origin.example.com:8080"` → 域名源站
//! - `"oss://bucket.oss-cn-hangzhou.aliyuncs.com"` → OSS 源站，端口固定 80

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CoreError, CoreResult};
use crate::types::{ConfigInput, OneOrMany, OriginDescriptor, OriginKind};

const OSS_PREFIX: &str = "oss://";
const FIELD: &str = "origin";

#[allow(clippy::expect_used)]
static IPV4_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("valid IPv4 regex"));

/// 四组 1-3 位数字（不校验每组是否 ≤ 255）
pub fn is_ipv4_literal(content: &str) -> bool {
    IPV4_LITERAL.is_match(content)
}

/// 解析源站简写
pub fn parse_origin(source: &str) -> CoreResult<OriginDescriptor> {
    if let Some(bucket) = source.strip_prefix(OSS_PREFIX) {
        if bucket.is_empty() {
            return Err(CoreError::invalid_format(FIELD, "empty OSS bucket host"));
        }
        return Ok(OriginDescriptor::new(
            OriginKind::Oss,
            bucket,
            OriginDescriptor::DEFAULT_PORT,
        ));
    }

    let mut parts = source.split(':');
    let content = parts.next().unwrap_or_default();
    let port = parts.next();
    if parts.next().is_some() {
        return Err(CoreError::invalid_format(
            FIELD,
            format!("'{source}': expected '<host>[:<port>]'"),
        ));
    }
    if content.is_empty() {
        return Err(CoreError::invalid_format(
            FIELD,
            format!("'{source}': missing host"),
        ));
    }

    let port = match port {
        Some(port) => port.trim().parse::<u16>().map_err(|_| {
            CoreError::invalid_format(FIELD, format!("'{source}': port '{port}' is not a valid port"))
        })?,
        None => OriginDescriptor::DEFAULT_PORT,
    };

    let kind = if is_ipv4_literal(content) {
        OriginKind::IpAddr
    } else {
        OriginKind::Domain
    };

    Ok(OriginDescriptor::new(kind, content, port))
}

/// 解析单个源站输入，完整记录原样返回
pub fn normalize_origin(input: ConfigInput<OriginDescriptor>) -> CoreResult<OriginDescriptor> {
    super::resolve(input, parse_origin)
}

/// 解析一个或多个源站
pub fn normalize_origins(
    input: OneOrMany<ConfigInput<OriginDescriptor>>,
) -> CoreResult<Vec<OriginDescriptor>> {
    super::normalize_all(input, parse_origin)
}
