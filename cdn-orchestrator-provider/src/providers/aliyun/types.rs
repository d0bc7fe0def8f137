//! 阿里云 CDN API 类型定义和辅助函数

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ProviderError, Result};
use crate::types::{FunctionConfig, OriginDescriptor};

// ============ Query string ============

/// 将扁平结构体序列化为按 key 排序、RFC3986 编码的 query string
///
/// `None` 字段被跳过；嵌套值（数组/对象）会被拒绝，需要先编码为 JSON 字符串。
pub fn serialize_to_query_string<T: Serialize>(params: &T) -> Result<String> {
    let serialization_error = |detail: String| ProviderError::SerializationError {
        provider: "aliyun".to_string(),
        detail,
    };

    let value = serde_json::to_value(params).map_err(|e| serialization_error(e.to_string()))?;
    let serde_json::Value::Object(map) = value else {
        return Err(serialization_error(
            "query parameters must serialize to an object".to_string(),
        ));
    };

    let mut sorted = BTreeMap::new();
    for (key, value) in map {
        let text = match value {
            serde_json::Value::Null => continue,
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                return Err(serialization_error(format!(
                    "parameter '{key}' must be a scalar"
                )));
            }
        };
        sorted.insert(key, text);
    }

    Ok(sorted
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&"))
}

/// `Sources` / `Functions` 参数是 JSON 字符串
pub fn to_json_param<T: Serialize + ?Sized>(param: &str, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| ProviderError::SerializationError {
        provider: "aliyun".to_string(),
        detail: format!("{param}: {e}"),
    })
}

// ============ Request 参数 ============

#[derive(Debug, Serialize)]
pub struct AddCdnDomainParams {
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    #[serde(rename = "CdnType")]
    pub cdn_type: String,
    #[serde(rename = "Sources")]
    pub sources: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteCdnDomainParams {
    #[serde(rename = "DomainName")]
    pub domain_name: String,
}

#[derive(Debug, Serialize)]
pub struct ModifyCdnDomainParams {
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    #[serde(rename = "Sources")]
    pub sources: String,
}

#[derive(Debug, Serialize)]
pub struct BatchSetCdnDomainConfigParams {
    #[serde(rename = "DomainNames")]
    pub domain_names: String,
    #[serde(rename = "Functions")]
    pub functions: String,
}

impl BatchSetCdnDomainConfigParams {
    pub fn new(domain_names: &str, functions: &[FunctionConfig]) -> Result<Self> {
        Ok(Self {
            domain_names: domain_names.to_string(),
            functions: to_json_param("Functions", functions)?,
        })
    }
}

pub fn sources_param(sources: &[OriginDescriptor]) -> Result<String> {
    to_json_param("Sources", sources)
}

// ============ Response ============

/// 写操作的通用响应, 只带 `RequestId`
#[derive(Debug, Deserialize)]
pub struct AcsResponse {
    #[serde(rename = "RequestId")]
    pub request_id: Option<String>,
}
