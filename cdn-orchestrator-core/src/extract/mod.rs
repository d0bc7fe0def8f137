//! 自然语言指令提取
//!
//! 面向固定的逐行模板，例如:
//!
//! ```text
//! 帮我添加一个加速域名
//! 加速类型为 大文件下载
//! mygslb04.xiangyuncdn.com
//! 源站类型，ipaddr
//! 源站的IP地址 211.131.56.91
//! 回源端口 81
//! 设置图片缓存1小时
//! ```
//!
//! 每行只归入一个字段（见 [`LINE_RULES`]），不跨行推断。缺失的字段使用默认值，
//! 只有找不到域名时才失败。

mod rules;

pub use rules::{LineField, LINE_RULES};

use crate::error::{CoreError, CoreResult};
use crate::types::{CdnType, OriginDescriptor, OriginKind};

/// 默认识别的加速域名后缀
pub const DEFAULT_DOMAIN_SUFFIX: &str = ".xiangyuncdn.com";

/// 逐行扫描得到的中间结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionDraft {
    pub domain_name: Option<String>,
    pub acceleration_type: Option<CdnType>,
    pub origin_type: Option<OriginKind>,
    pub origin_ip: Option<String>,
    pub origin_port: Option<u16>,
    /// `"<ext>:<ttl>"` 简写，按出现顺序
    pub cache_rules: Vec<String>,
}

impl InstructionDraft {
    /// 补齐默认值；没有域名时返回 [`CoreError::MissingRequiredField`]
    pub fn finalize(self) -> CoreResult<ExtractedInstruction> {
        let domain_name = self
            .domain_name
            .ok_or_else(|| CoreError::MissingRequiredField("domain_name".to_string()))?;

        let origin = OriginDescriptor::new(
            self.origin_type.unwrap_or(OriginKind::IpAddr),
            self.origin_ip.unwrap_or_default(),
            self.origin_port.unwrap_or(OriginDescriptor::DEFAULT_PORT),
        );

        Ok(ExtractedInstruction {
            domain_name,
            acceleration_type: self.acceleration_type.unwrap_or_default(),
            origin,
            cache_rules: self.cache_rules,
        })
    }
}

/// 补齐默认值后的完整指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedInstruction {
    pub domain_name: String,
    pub acceleration_type: CdnType,
    pub origin: OriginDescriptor,
    pub cache_rules: Vec<String>,
}

/// 自然语言指令提取器
#[derive(Debug, Clone)]
pub struct InstructionExtractor {
    domain_suffixes: Vec<String>,
}

impl Default for InstructionExtractor {
    fn default() -> Self {
        Self {
            domain_suffixes: vec![DEFAULT_DOMAIN_SUFFIX.to_string()],
        }
    }
}

impl InstructionExtractor {
    /// 使用自定义域名后缀；为空时退回默认后缀
    #[must_use]
    pub fn new(domain_suffixes: Vec<String>) -> Self {
        let domain_suffixes: Vec<String> = domain_suffixes
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if domain_suffixes.is_empty() {
            return Self::default();
        }
        Self { domain_suffixes }
    }

    pub fn domain_suffixes(&self) -> &[String] {
        &self.domain_suffixes
    }

    /// 返回该行命中的第一条规则
    pub fn classify(&self, line: &str) -> Option<LineField> {
        LINE_RULES
            .into_iter()
            .find(|rule| rule.matches(line, &self.domain_suffixes))
    }

    /// 扫描全部非空行，构建草稿
    pub fn scan(&self, text: &str) -> InstructionDraft {
        let mut draft = InstructionDraft::default();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(field) = self.classify(line) {
                field.apply(line, &mut draft);
            }
        }
        draft
    }

    /// 扫描并补齐默认值
    pub fn extract(&self, text: &str) -> CoreResult<ExtractedInstruction> {
        self.scan(text).finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "帮我添加一个加速域名
        加速类型为 大文件下载
        mygslb04.xiangyuncdn.com
        源站类型，ipaddr
        源站的IP地址 211.131.56.91
        回源端口 81
        设置图片缓存1小时";

    #[test]
    fn extracts_full_template() {
        let instruction = InstructionExtractor::default().extract(SAMPLE).unwrap();
        assert_eq!(instruction.domain_name, "mygslb04.xiangyuncdn.com");
        assert_eq!(instruction.acceleration_type, CdnType::Download);
        assert_eq!(
            instruction.origin,
            OriginDescriptor::new(OriginKind::IpAddr, "211.131.56.91", 81)
        );
        assert_eq!(
            instruction.cache_rules,
            vec!["*.jpg:3600", "*.jpeg:3600", "*.png:3600", "*.gif:3600"]
        );
    }

    #[test]
    fn missing_domain_is_terminal() {
        let result = InstructionExtractor::default().extract("加速类型为 大文件下载\n回源端口 81");
        assert!(matches!(result, Err(CoreError::MissingRequiredField(_))));
    }

    #[test]
    fn defaults_fill_absent_fields() {
        let instruction = InstructionExtractor::default()
            .extract("cdn.xiangyuncdn.com")
            .unwrap();
        assert_eq!(instruction.acceleration_type, CdnType::Web);
        assert_eq!(
            instruction.origin,
            OriginDescriptor::new(OriginKind::IpAddr, "", 80)
        );
        assert!(instruction.cache_rules.is_empty());
    }

    #[test]
    fn day_unit_multiplies_by_24() {
        let draft = InstructionExtractor::default().scan("缓存2天");
        assert_eq!(draft.cache_rules, vec![format!("*:{}", 2 * 24 * 3600)]);
    }

    #[test]
    fn first_matching_rule_wins() {
        let extractor = InstructionExtractor::default();
        // 同时含"缓存"和"端口"的行按端口处理
        assert_eq!(extractor.classify("端口 8080 的缓存"), Some(LineField::OriginPort));
        // 含域名后缀的行不会再被当作 IP 行
        assert_eq!(
            extractor.classify("IP地址 1.2.3.4 a.xiangyuncdn.com"),
            Some(LineField::Domain)
        );
        assert_eq!(extractor.classify("随便说点什么"), None);

        let draft = extractor.scan("端口 8080 的缓存");
        assert_eq!(draft.origin_port, Some(8080));
        assert!(draft.cache_rules.is_empty());
    }

    #[test]
    fn later_lines_overwrite_earlier_values() {
        let draft = InstructionExtractor::default().scan("回源端口 81\n回源端口 8080");
        assert_eq!(draft.origin_port, Some(8080));
    }

    #[test]
    fn cache_lines_accumulate_in_order() {
        let draft = InstructionExtractor::default().scan("图片缓存1小时\n视频缓存1天");
        assert_eq!(draft.cache_rules.len(), 7);
        assert_eq!(draft.cache_rules[0], "*.jpg:3600");
        assert_eq!(draft.cache_rules[4], "*.mp4:86400");
    }

    #[test]
    fn custom_suffixes() {
        let extractor = InstructionExtractor::new(vec![" .example-cdn.net ".to_string()]);
        assert_eq!(extractor.domain_suffixes(), [".example-cdn.net".to_string()]);
        assert!(extractor.extract("static.example-cdn.net").is_ok());
        assert!(extractor.extract("static.xiangyuncdn.com").is_err());

        let fallback = InstructionExtractor::new(vec![String::new()]);
        assert_eq!(fallback.domain_suffixes(), [DEFAULT_DOMAIN_SUFFIX.to_string()]);
    }
}
