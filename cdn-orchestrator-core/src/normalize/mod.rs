//! 输入规范化
//!
//! 把简写字符串或完整记录统一转换为规范记录。完整记录原样透传；
//! 简写不符合格式时返回 [`CoreError::InvalidFormat`](crate::CoreError::InvalidFormat)。

mod cache_rule;
mod header;
mod origin;

pub use cache_rule::{normalize_cache_rule, normalize_cache_rules, parse_cache_rule};
pub use header::{normalize_header, normalize_headers, parse_header};
pub use origin::{is_ipv4_literal, normalize_origin, normalize_origins, parse_origin};

use crate::error::CoreResult;
use crate::types::{ConfigInput, OneOrMany};

/// 先统一数量（单个 → 列表），再逐个解析；任一项失败则整体失败
fn normalize_all<T>(
    input: OneOrMany<ConfigInput<T>>,
    parse: fn(&str) -> CoreResult<T>,
) -> CoreResult<Vec<T>> {
    input
        .into_vec()
        .into_iter()
        .map(|item| resolve(item, parse))
        .collect()
}

fn resolve<T>(input: ConfigInput<T>, parse: fn(&str) -> CoreResult<T>) -> CoreResult<T> {
    match input {
        ConfigInput::Canonical(record) => Ok(record),
        ConfigInput::Shorthand(text) => parse(&text),
    }
}
