//! Request types accepted by a [`CdnProvider`](crate::CdnProvider).
//!
//! These are fully-normalized records: nothing here parses shorthand input.

use serde::{Deserialize, Serialize};

// ============ Origin ============

/// Kind of origin server behind an accelerated domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginKind {
    /// IPv4 address literal.
    #[serde(rename = "ipaddr", alias = "ip")]
    IpAddr,
    /// Hostname.
    Domain,
    /// Object storage bucket host.
    Oss,
}

impl OriginKind {
    /// Wire name used by the control-plane API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IpAddr => "ipaddr",
            Self::Domain => "domain",
            Self::Oss => "oss",
        }
    }
}

impl std::fmt::Display for OriginKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_origin_port() -> u16 {
    80
}

/// Canonical origin descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginDescriptor {
    /// Origin kind.
    #[serde(rename = "type")]
    pub kind: OriginKind,
    /// IP literal, hostname or bucket host.
    pub content: String,
    /// Back-to-origin port.
    #[serde(default = "default_origin_port")]
    pub port: u16,
}

impl OriginDescriptor {
    /// Default back-to-origin port.
    pub const DEFAULT_PORT: u16 = 80;

    pub fn new(kind: OriginKind, content: impl Into<String>, port: u16) -> Self {
        Self {
            kind,
            content: content.into(),
            port,
        }
    }
}

// ============ Acceleration type ============

/// CDN acceleration type of a domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CdnType {
    /// Images and small files.
    #[default]
    Web,
    /// Large file download.
    Download,
    /// Audio/video on demand.
    Video,
    /// Live streaming.
    Live,
}

impl CdnType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Download => "download",
            Self::Video => "video",
            Self::Live => "live",
        }
    }
}

impl std::fmt::Display for CdnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Named function configuration ============

/// One `{argName, argValue}` pair of a function configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionArg {
    pub arg_name: String,
    pub arg_value: String,
}

impl FunctionArg {
    pub fn new(arg_name: impl Into<String>, arg_value: impl Into<String>) -> Self {
        Self {
            arg_name: arg_name.into(),
            arg_value: arg_value.into(),
        }
    }
}

/// A configuration directive: a function name plus ordered arguments.
///
/// Argument order is significant; some functions expect repeated groups
/// (e.g. `ttl`, `path`, `ttl`, `path`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionConfig {
    pub function_args: Vec<FunctionArg>,
    pub function_name: String,
}

impl FunctionConfig {
    pub fn new(function_name: impl Into<String>, function_args: Vec<FunctionArg>) -> Self {
        Self {
            function_args,
            function_name: function_name.into(),
        }
    }
}

// ============ Requests ============

/// Register a new accelerated domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDomainRequest {
    pub domain_name: String,
    pub sources: Vec<OriginDescriptor>,
    pub cdn_type: CdnType,
}

/// Replace the origin servers of an accelerated domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyDomainRequest {
    pub domain_name: String,
    pub sources: Vec<OriginDescriptor>,
}

/// Apply function configurations to one or more domains.
///
/// `domain_names` is a comma-separated list, as the control plane expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSetConfigRequest {
    pub domain_names: String,
    pub functions: Vec<FunctionConfig>,
}
