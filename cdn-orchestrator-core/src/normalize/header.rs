//! HTTP 头解析
//!
//! 简写: `"Content-Type: text/html"`，只按第一个冒号切分，值里可以再含冒号。

use crate::error::{CoreError, CoreResult};
use crate::types::{ConfigInput, HeaderRecord, OneOrMany};

const FIELD: &str = "header";

/// 解析 HTTP 头简写
pub fn parse_header(header: &str) -> CoreResult<HeaderRecord> {
    let Some((key, value)) = header.split_once(':') else {
        return Err(CoreError::invalid_format(
            FIELD,
            format!("'{header}': expected '<key>:<value>'"),
        ));
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(CoreError::invalid_format(
            FIELD,
            format!("'{header}': empty header name"),
        ));
    }

    Ok(HeaderRecord::new(key, value.trim()))
}

/// 解析单个 HTTP 头输入，完整记录原样返回
pub fn normalize_header(input: ConfigInput<HeaderRecord>) -> CoreResult<HeaderRecord> {
    super::resolve(input, parse_header)
}

/// 解析一个或多个 HTTP 头，保持输入顺序
pub fn normalize_headers(
    input: OneOrMany<ConfigInput<HeaderRecord>>,
) -> CoreResult<Vec<HeaderRecord>> {
    super::normalize_all(input, parse_header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            parse_header("Content-Type: text/html").unwrap(),
            HeaderRecord::new("Content-Type", "text/html")
        );
        assert_eq!(
            parse_header("  X-Foo :bar  ").unwrap(),
            HeaderRecord::new("X-Foo", "bar")
        );
    }

    #[test]
    fn value_may_contain_colons() {
        assert_eq!(
            parse_header("Link: <https://example.com:8443/a>; rel=preload").unwrap(),
            HeaderRecord::new("Link", "<https://example.com:8443/a>; rel=preload")
        );
    }

    #[test]
    fn empty_value_allowed() {
        assert_eq!(
            parse_header("X-Empty:").unwrap(),
            HeaderRecord::new("X-Empty", "")
        );
    }

    #[test]
    fn missing_colon_or_key_rejected() {
        assert!(matches!(
            parse_header("Content-Type text/html"),
            Err(CoreError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_header(" : value"),
            Err(CoreError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn canonical_passes_through_unchanged() {
        let canonical = HeaderRecord::new(" Untrimmed ", " kept ");
        assert_eq!(
            normalize_header(ConfigInput::Canonical(canonical.clone())).unwrap(),
            canonical
        );
    }
}
