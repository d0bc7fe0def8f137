use serde::{Deserialize, Serialize};

/// Unified error type for all CDN control-plane operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Requests are never retried: every variant is returned to the caller as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The provided credentials are invalid or expired.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The accelerated domain is already registered.
    DomainExists {
        /// Provider that produced the error.
        provider: String,
        /// Domain name that already exists.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified accelerated domain was not found.
    DomainNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Domain name that was not found.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The domain is in a state that does not allow this operation
    /// (offline, under review, locked).
    DomainUnavailable {
        /// Provider that produced the error.
        provider: String,
        /// Domain name in the blocking state.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected (malformed sources, unknown function, bad TTL).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The account's resource quota has been exceeded.
    QuotaExceeded {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The authenticated user lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::DomainExists { .. }
                | Self::DomainNotFound { .. }
                | Self::DomainUnavailable { .. }
                | Self::InvalidParameter { .. }
                | Self::QuotaExceeded { .. }
                | Self::PermissionDenied { .. }
        )
    }
}

fn write_with_raw(
    f: &mut std::fmt::Formatter<'_>,
    head: std::fmt::Arguments<'_>,
    raw_message: Option<&String>,
) -> std::fmt::Result {
    match raw_message {
        Some(msg) => write!(f, "{head}: {msg}"),
        None => write!(f, "{head}"),
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => write_with_raw(
                f,
                format_args!("[{provider}] Invalid credentials"),
                raw_message.as_ref(),
            ),
            Self::DomainExists {
                provider,
                domain,
                raw_message,
            } => write_with_raw(
                f,
                format_args!("[{provider}] Domain '{domain}' already exists"),
                raw_message.as_ref(),
            ),
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => write_with_raw(
                f,
                format_args!("[{provider}] Domain '{domain}' not found"),
                raw_message.as_ref(),
            ),
            Self::DomainUnavailable {
                provider,
                domain,
                raw_message,
            } => write_with_raw(
                f,
                format_args!("[{provider}] Domain '{domain}' is unavailable"),
                raw_message.as_ref(),
            ),
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::QuotaExceeded { provider, .. } => {
                write!(f, "[{provider}] Quota exceeded")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => write_with_raw(
                f,
                format_args!("[{provider}] Permission denied"),
                raw_message.as_ref(),
            ),
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => match raw_code {
                Some(code) => write!(f, "[{provider}] {code}: {raw_message}"),
                None => write!(f, "[{provider}] {raw_message}"),
            },
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
