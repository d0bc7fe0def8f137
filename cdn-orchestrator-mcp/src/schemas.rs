//! MCP tool parameter schemas
//!
//! Defines the input parameter structures for all MCP tools.
//! All structs derive `Debug`, `Deserialize`, and `JsonSchema` as required by rmcp.
//!
//! The shorthand / record / list shapes mirror the core input adapters and are
//! converted into them with `From` before any parsing happens.

use cdn_orchestrator_core::types::{
    CacheRule, CdnType, ConfigInput, HeaderRecord, OneOrMany, OriginDescriptor, OriginKind,
};
use schemars::JsonSchema;
use serde::Deserialize;

// ============ Input shapes ============

/// A single value or a list of values.
///
/// `Many` is tried first so that a list of shorthand strings is never read as
/// one record.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum OneOrList<T> {
    Many(Vec<T>),
    One(T),
}

impl<T, U> From<OneOrList<T>> for OneOrMany<U>
where
    T: Into<U>,
{
    fn from(value: OneOrList<T>) -> Self {
        match value {
            OneOrList::Many(items) => OneOrMany::Many(items.into_iter().map(Into::into).collect()),
            OneOrList::One(item) => OneOrMany::One(item.into()),
        }
    }
}

/// Origin server kind.
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OriginKindParam {
    #[serde(alias = "ip")]
    Ipaddr,
    Domain,
    Oss,
}

impl From<OriginKindParam> for OriginKind {
    fn from(value: OriginKindParam) -> Self {
        match value {
            OriginKindParam::Ipaddr => Self::IpAddr,
            OriginKindParam::Domain => Self::Domain,
            OriginKindParam::Oss => Self::Oss,
        }
    }
}

const fn default_port() -> u16 {
    OriginDescriptor::DEFAULT_PORT
}

/// Fully specified origin server.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct OriginRecordParam {
    /// Origin kind: ipaddr, domain or oss.
    #[serde(rename = "type")]
    pub kind: OriginKindParam,
    /// IP address, hostname or OSS bucket host.
    pub content: String,
    /// Back-to-origin port (default: 80).
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Origin as shorthand (`"1.2.3.4:80"`, `"origin.example.com"`,
/// `"oss://bucket.oss-cn-hangzhou.aliyuncs.com"`) or as a record.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum OriginParam {
    Shorthand(String),
    Record(OriginRecordParam),
}

impl From<OriginParam> for ConfigInput<OriginDescriptor> {
    fn from(value: OriginParam) -> Self {
        match value {
            OriginParam::Shorthand(s) => Self::Shorthand(s),
            OriginParam::Record(r) => {
                Self::Canonical(OriginDescriptor::new(r.kind.into(), r.content, r.port))
            }
        }
    }
}

/// Fully specified cache rule.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CacheRuleRecordParam {
    /// Path pattern, e.g. `/*.jpg`.
    pub path_pattern: String,
    /// Cache duration in seconds.
    #[serde(alias = "ttl")]
    pub ttl_seconds: u64,
}

/// Cache rule as shorthand (`"*.jpg:3600"`) or as a record.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CacheRuleParam {
    Shorthand(String),
    Record(CacheRuleRecordParam),
}

impl From<CacheRuleParam> for ConfigInput<CacheRule> {
    fn from(value: CacheRuleParam) -> Self {
        match value {
            CacheRuleParam::Shorthand(s) => Self::Shorthand(s),
            CacheRuleParam::Record(r) => Self::Canonical(CacheRule::new(r.path_pattern, r.ttl_seconds)),
        }
    }
}

/// Fully specified response header.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct HeaderRecordParam {
    pub key: String,
    pub value: String,
}

/// Header as shorthand (`"Content-Type: text/html"`) or as a record.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum HeaderParam {
    Shorthand(String),
    Record(HeaderRecordParam),
}

impl From<HeaderParam> for ConfigInput<HeaderRecord> {
    fn from(value: HeaderParam) -> Self {
        match value {
            HeaderParam::Shorthand(s) => Self::Shorthand(s),
            HeaderParam::Record(r) => Self::Canonical(HeaderRecord::new(r.key, r.value)),
        }
    }
}

/// CDN acceleration type.
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CdnTypeParam {
    #[default]
    Web,
    Download,
    Video,
    Live,
}

impl From<CdnTypeParam> for CdnType {
    fn from(value: CdnTypeParam) -> Self {
        match value {
            CdnTypeParam::Web => Self::Web,
            CdnTypeParam::Download => Self::Download,
            CdnTypeParam::Video => Self::Video,
            CdnTypeParam::Live => Self::Live,
        }
    }
}

// ============ Tool parameters ============

/// Parameters for `add_cdn_domain` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddCdnDomainParams {
    /// Accelerated domain name.
    #[schemars(description = "Accelerated domain name, e.g. cdn.example.com")]
    pub domain_name: String,

    /// One origin or a list of origins.
    #[schemars(
        description = "Origin server(s): shorthand like \"1.2.3.4:80\", \"origin.example.com:8080\", \"oss://bucket.oss-cn-hangzhou.aliyuncs.com\", or {type, content, port}; a single value or a list"
    )]
    pub sources: OneOrList<OriginParam>,

    /// Acceleration type (default: web).
    #[schemars(description = "Acceleration type: web, download, video or live (default: web)")]
    #[serde(default)]
    pub cdn_type: CdnTypeParam,
}

/// Parameters for `delete_cdn_domain` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteCdnDomainParams {
    #[schemars(description = "Accelerated domain name to delete")]
    pub domain_name: String,
}

/// Parameters for `modify_cdn_source` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ModifyCdnSourceParams {
    #[schemars(description = "Accelerated domain name")]
    pub domain_name: String,

    #[schemars(
        description = "New origin server(s), replacing the current ones; same forms as add_cdn_domain"
    )]
    pub sources: OneOrList<OriginParam>,
}

/// Parameters for `set_cdn_source_port` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetCdnSourcePortParams {
    #[schemars(description = "Accelerated domain name")]
    pub domain_name: String,

    #[schemars(description = "Back-to-origin port (1-65535)")]
    pub port: u16,
}

/// Parameters for `set_cdn_protocol` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetCdnProtocolParams {
    #[schemars(description = "Accelerated domain name")]
    pub domain_name: String,

    #[schemars(description = "Back-to-origin protocol: HTTP, HTTPS or FOLLOW")]
    pub protocol: String,
}

/// Parameters for `set_cdn_cache` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetCdnCacheParams {
    #[schemars(description = "Accelerated domain name")]
    pub domain_name: String,

    #[schemars(
        description = "Cache rule(s): shorthand \"<pattern>:<ttl seconds>\" like \"*.jpg:3600\", or {path_pattern, ttl}; a single value or a list"
    )]
    pub cache_rules: OneOrList<CacheRuleParam>,
}

/// Parameters for `set_cdn_https` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetCdnHttpsParams {
    #[schemars(description = "Accelerated domain name")]
    pub domain_name: String,

    #[schemars(description = "SSL protocol switch, e.g. on or off")]
    pub ssl_protocol: String,

    #[schemars(description = "Certificate name")]
    pub cert_name: String,

    #[schemars(description = "Certificate type, e.g. upload, cas or free")]
    pub cert_type: String,
}

/// Parameters for `set_cdn_headers` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetCdnHeadersParams {
    #[schemars(description = "Accelerated domain name")]
    pub domain_name: String,

    #[schemars(
        description = "Response header(s): shorthand \"Key: Value\" or {key, value}; a single value or a list"
    )]
    pub headers: OneOrList<HeaderParam>,
}

/// Parameters for `setup_cdn_with_text` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetupCdnWithTextParams {
    #[schemars(
        description = "Line-oriented instruction text: a line with the accelerated domain, plus optional lines for 加速类型, 源站类型, IP地址, 端口 and 缓存"
    )]
    pub text: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use schemars::schema_for;
    use serde_json::json;

    fn origins(value: serde_json::Value) -> Vec<ConfigInput<OriginDescriptor>> {
        let params: AddCdnDomainParams =
            serde_json::from_value(json!({"domain_name": "cdn.example.com", "sources": value}))
                .unwrap();
        OneOrMany::from(params.sources).into_vec()
    }

    #[test]
    fn sources_accept_single_shorthand() {
        assert_eq!(
            origins(json!("1.2.3.4:80")),
            vec![ConfigInput::Shorthand("1.2.3.4:80".to_string())]
        );
    }

    #[test]
    fn sources_accept_mixed_list() {
        assert_eq!(
            origins(json!(["1.2.3.4:80", {"type": "domain", "content": "origin.example.com"}])),
            vec![
                ConfigInput::Shorthand("1.2.3.4:80".to_string()),
                ConfigInput::Canonical(OriginDescriptor::new(
                    OriginKind::Domain,
                    "origin.example.com",
                    80
                )),
            ]
        );
    }

    #[test]
    fn cdn_type_defaults_to_web() {
        let params: AddCdnDomainParams =
            serde_json::from_value(json!({"domain_name": "a.example.com", "sources": "1.2.3.4"}))
                .unwrap();
        assert_eq!(CdnType::from(params.cdn_type), CdnType::Web);
    }

    #[test]
    fn unknown_cdn_type_fails() {
        let result: serde_json::Result<AddCdnDomainParams> = serde_json::from_value(json!({
            "domain_name": "a.example.com",
            "sources": "1.2.3.4",
            "cdn_type": "edge"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn header_list_of_strings_is_a_list() {
        let params: SetCdnHeadersParams = serde_json::from_value(json!({
            "domain_name": "a.example.com",
            "headers": ["Content-Type:text/html", "Cache-Control:no-cache"]
        }))
        .unwrap();
        assert_eq!(OneOrMany::<ConfigInput<HeaderRecord>>::from(params.headers).into_vec().len(), 2);
    }

    #[test]
    fn cache_record_accepts_ttl_alias() {
        let params: SetCdnCacheParams = serde_json::from_value(json!({
            "domain_name": "a.example.com",
            "cache_rules": {"path_pattern": "/img/*", "ttl": 60}
        }))
        .unwrap();
        assert_eq!(
            OneOrMany::<ConfigInput<CacheRule>>::from(params.cache_rules).into_vec(),
            vec![ConfigInput::Canonical(CacheRule::new("/img/*", 60))]
        );
    }

    #[test]
    fn port_out_of_range_fails() {
        let result: serde_json::Result<SetCdnSourcePortParams> =
            serde_json::from_value(json!({"domain_name": "a.example.com", "port": 70000}));
        assert!(result.is_err());
    }

    #[test]
    fn schema_marks_required_fields_for_https() {
        let schema = schema_for!(SetCdnHttpsParams);
        let json = serde_json::to_value(&schema).unwrap();
        let required = json
            .get("required")
            .and_then(serde_json::Value::as_array)
            .unwrap();

        for field in ["domain_name", "ssl_protocol", "cert_name", "cert_type"] {
            assert!(required.iter().any(|v| v == field), "missing {field}");
        }
    }

    #[test]
    fn schema_leaves_cdn_type_optional() {
        let schema = schema_for!(AddCdnDomainParams);
        let json = serde_json::to_value(&schema).unwrap();
        let required = json
            .get("required")
            .and_then(serde_json::Value::as_array)
            .unwrap();

        assert!(required.iter().any(|v| v == "sources"));
        assert!(!required.iter().any(|v| v == "cdn_type"));
    }
}
