//! 行分类规则表
//!
//! 每行按 [`LINE_RULES`] 的顺序逐条匹配，第一条命中的规则生效，其余规则不再检查。

use std::sync::LazyLock;

use regex::Regex;

use super::InstructionDraft;
use crate::types::{CdnType, OriginKind};

#[allow(clippy::expect_used)]
static DOTTED_QUAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+\.\d+").expect("valid dotted-quad regex"));

#[allow(clippy::expect_used)]
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9０-９]+").expect("valid digit-run regex"));

const IMAGE_EXTENSIONS: &[&str] = &["*.jpg", "*.jpeg", "*.png", "*.gif"];
const VIDEO_EXTENSIONS: &[&str] = &["*.mp4", "*.flv", "*.m3u8"];
const ANY_EXTENSION: &[&str] = &["*"];

const SECONDS_PER_HOUR: u64 = 3600;
const HOURS_PER_DAY: u64 = 24;

/// 一行文本可以填充的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    /// 含域名后缀的整行
    Domain,
    /// `加速类型`
    AccelerationType,
    /// `源站类型`
    OriginType,
    /// `IP地址`
    OriginIp,
    /// `端口`
    OriginPort,
    /// `缓存`
    Cache,
}

/// 匹配优先级，从高到低
pub const LINE_RULES: [LineField; 6] = [
    LineField::Domain,
    LineField::AccelerationType,
    LineField::OriginType,
    LineField::OriginIp,
    LineField::OriginPort,
    LineField::Cache,
];

impl LineField {
    /// 该行是否属于此字段
    pub(super) fn matches(self, line: &str, domain_suffixes: &[String]) -> bool {
        match self {
            Self::Domain => domain_suffixes
                .iter()
                .any(|suffix| line.contains(suffix.as_str())),
            Self::AccelerationType => line.contains("加速类型"),
            Self::OriginType => line.contains("源站类型"),
            Self::OriginIp => line.contains("IP地址"),
            Self::OriginPort => line.contains("端口"),
            Self::Cache => line.contains("缓存"),
        }
    }

    /// 从已分类的行中提取值写入草稿；提取不到时保持草稿不变
    pub(super) fn apply(self, line: &str, draft: &mut InstructionDraft) {
        match self {
            Self::Domain => draft.domain_name = Some(line.to_string()),
            Self::AccelerationType => {
                if let Some(cdn_type) = classify_acceleration(line) {
                    draft.acceleration_type = Some(cdn_type);
                }
            }
            Self::OriginType => {
                if let Some(kind) = classify_origin_kind(line) {
                    draft.origin_type = Some(kind);
                }
            }
            Self::OriginIp => match DOTTED_QUAD.find(line) {
                Some(ip) => draft.origin_ip = Some(ip.as_str().to_string()),
                None => log::debug!("No IPv4 address found in line: {line}"),
            },
            Self::OriginPort => match first_number::<u16>(line) {
                Some(port) => draft.origin_port = Some(port),
                None => log::debug!("No port found in line: {line}"),
            },
            Self::Cache => draft.cache_rules.extend(cache_shorthands(line)),
        }
    }
}

fn classify_acceleration(line: &str) -> Option<CdnType> {
    if line.contains("大文件下载") {
        Some(CdnType::Download)
    } else if line.contains("图片小文件") || line.contains("小文件") {
        Some(CdnType::Web)
    } else if line.contains("视音频") && line.contains("直播") {
        Some(CdnType::Live)
    } else if line.contains("视音频") {
        Some(CdnType::Video)
    } else {
        None
    }
}

fn classify_origin_kind(line: &str) -> Option<OriginKind> {
    if line.contains("ipaddr") {
        Some(OriginKind::IpAddr)
    } else if line.contains("domain") {
        Some(OriginKind::Domain)
    } else if line.contains("oss") {
        Some(OriginKind::Oss)
    } else {
        None
    }
}

/// 第一段数字，全角数字（中文输入法常见）按半角解析
fn first_number<T: std::str::FromStr>(line: &str) -> Option<T> {
    let run = DIGIT_RUN.find(line)?.as_str();
    let ascii: String = run.chars().map(fold_fullwidth_digit).collect();
    ascii.parse().ok()
}

fn fold_fullwidth_digit(c: char) -> char {
    match c {
        '０'..='９' => {
            char::from_u32(u32::from(c) - u32::from('０') + u32::from('0')).unwrap_or(c)
        }
        _ => c,
    }
}

/// 一条缓存描述展开为每个扩展名一条 `"<ext>:<ttl>"` 简写
fn cache_shorthands(line: &str) -> Vec<String> {
    let extensions = if line.contains("图片") {
        IMAGE_EXTENSIONS
    } else if line.contains("视频") {
        VIDEO_EXTENSIONS
    } else {
        ANY_EXTENSION
    };

    let mut hours = first_number::<u64>(line).unwrap_or(1);
    if line.contains('天') {
        hours = hours.saturating_mul(HOURS_PER_DAY);
    }
    let ttl = hours.saturating_mul(SECONDS_PER_HOUR);

    extensions.iter().map(|ext| format!("{ext}:{ttl}")).collect()
}
