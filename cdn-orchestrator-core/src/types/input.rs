//! 边界输入适配
//!
//! 工具参数既可以是简写字符串，也可以是完整结构；既可以是单个值，也可以是列表。
//! 这里在边界处一次性区分形态，下游只处理确定的类型。

use serde::{Deserialize, Serialize};

/// 简写字符串或完整记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigInput<T> {
    /// 分隔符编码的简写，例如 `"1.2.3.4:80"`
    Shorthand(String),
    /// 已经规范化的记录，原样透传
    Canonical(T),
}

impl<T> From<T> for ConfigInput<T> {
    fn from(value: T) -> Self {
        Self::Canonical(value)
    }
}

/// 单个值或列表
///
/// `Many` 必须排在前面：serde 允许用数组反序列化结构体，
/// 否则 `["K:V", "K2:V2"]` 会被误读成一个 `HeaderRecord`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// 统一为列表，单个值包装成单元素列表
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items)
    }
}
