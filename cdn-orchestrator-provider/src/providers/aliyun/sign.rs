//! 阿里云 ACS3-HMAC-SHA256 签名

use sha2::{Digest, Sha256};

use crate::providers::common::hmac_sha256;

use super::{ALIYUN_CDN_VERSION, AliyunCdnProvider, EMPTY_BODY_SHA256};

const SIGNED_HEADERS: &str =
    "host;x-acs-action;x-acs-content-sha256;x-acs-date;x-acs-signature-nonce;x-acs-version";

impl AliyunCdnProvider {
    /// 生成 ACS3-HMAC-SHA256 签名
    /// 参考: <https://www.alibabacloud.com/help/zh/sdk/product-overview/v3-request-structure-and-signature>
    pub(crate) fn sign(
        &self,
        action: &str,
        query_string: &str,
        timestamp: &str,
        nonce: &str,
    ) -> String {
        let host = &self.endpoint;
        let canonical_headers = format!(
            "host:{host}\nx-acs-action:{action}\nx-acs-content-sha256:{EMPTY_BODY_SHA256}\nx-acs-date:{timestamp}\nx-acs-signature-nonce:{nonce}\nx-acs-version:{ALIYUN_CDN_VERSION}\n"
        );

        // RPC 风格: 参数全部在 query string 中, body 为空
        let canonical_request = format!(
            "POST\n/\n{query_string}\n{canonical_headers}\n{SIGNED_HEADERS}\n{EMPTY_BODY_SHA256}"
        );

        log::debug!("CanonicalRequest:\n{canonical_request}");

        let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
        let string_to_sign = format!("ACS3-HMAC-SHA256\n{hashed_canonical_request}");

        log::debug!("StringToSign:\n{string_to_sign}");

        let signature = hex::encode(hmac_sha256(
            self.access_key_secret.as_bytes(),
            string_to_sign.as_bytes(),
        ));

        format!(
            "ACS3-HMAC-SHA256 Credential={},SignedHeaders={SIGNED_HEADERS},Signature={signature}",
            self.access_key_id
        )
    }
}
