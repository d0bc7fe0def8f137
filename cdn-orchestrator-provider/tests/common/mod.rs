//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use cdn_orchestrator_provider::{AliyunCdnProvider, CdnProvider, OriginDescriptor, OriginKind};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文
pub struct TestContext {
    pub provider: Arc<dyn CdnProvider>,
    /// 测试用加速域名（会被添加然后删除）
    pub domain: String,
    /// 测试用源站 IP
    pub origin_ip: String,
}

impl TestContext {
    /// 从环境变量创建阿里云测试上下文
    pub fn aliyun() -> Option<Self> {
        let access_key_id = env::var("ALIBABA_CLOUD_ACCESS_KEY_ID").ok()?;
        let access_key_secret = env::var("ALIBABA_CLOUD_ACCESS_KEY_SECRET").ok()?;
        let domain = env::var("TEST_CDN_DOMAIN").ok()?;
        let origin_ip = env::var("TEST_ORIGIN_IP").unwrap_or_else(|_| "192.0.2.10".to_string());

        let provider = AliyunCdnProvider::new(access_key_id, access_key_secret).ok()?;
        Some(Self {
            provider: Arc::new(provider),
            domain,
            origin_ip,
        })
    }

    pub fn origin(&self, port: u16) -> OriginDescriptor {
        OriginDescriptor::new(OriginKind::IpAddr, self.origin_ip.clone(), port)
    }
}
