/*
[INPUT]:  Ordered request parameters and the account private key
[OUTPUT]: Form-encoded body bytes plus hex HMAC-SHA512 signature
[POS]:    HTTP layer - request signing for every API command
[UPDATE]: When changing signing algorithm or body encoding
*/

use crate::http::{CoinPaymentsError, Result};
use crate::types::RequestParams;
use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Encoded body together with the signature computed over it
///
/// The dispatcher sends `body` verbatim, so the signed bytes and the
/// transmitted bytes are always the same buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    body: Vec<u8>,
    signature: String,
}

impl SignedRequest {
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Lowercase hex HMAC-SHA512 digest
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// Signs request bodies with the account private key
pub struct RequestSigner<'a> {
    secret: &'a [u8],
}

impl<'a> RequestSigner<'a> {
    /// The key is used as raw UTF-8 bytes, not decoded.
    pub fn new(private_key: &'a str) -> Self {
        Self {
            secret: private_key.as_bytes(),
        }
    }

    /// Hex HMAC-SHA512 of `payload`
    pub fn sign_bytes(&self, payload: &[u8]) -> Result<String> {
        let mut mac = HmacSha512::new_from_slice(self.secret)
            .map_err(|e| CoinPaymentsError::Signature(format!("HMAC init failed: {}", e)))?;
        mac.update(payload);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Encode `params` and sign the encoded bytes
    pub fn sign(&self, params: &RequestParams) -> Result<SignedRequest> {
        let body = params.encode();
        let signature = self.sign_bytes(&body)?;
        Ok(SignedRequest { body, signature })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiCommand, CommonParams};
    use rstest::rstest;

    const COMMON: CommonParams<'static> = CommonParams {
        key: "pub-key",
        version: 1,
        format: "json",
    };

    fn sample_params() -> RequestParams {
        ApiCommand::GetTxInfo {
            txid: "T1".to_string(),
            limit: 10,
        }
        .to_params(COMMON)
    }

    #[test]
    fn test_rfc4231_vector() {
        // RFC 4231 test case 2
        let signer = RequestSigner::new("Jefe");
        let digest = signer
            .sign_bytes(b"what do ya want for nothing?")
            .unwrap();
        assert_eq!(
            digest,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = RequestSigner::new("private-key");
        let first = signer.sign(&sample_params()).unwrap();
        let second = signer.sign(&sample_params()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.signature().len(), 128);
        assert!(first.signature().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signature_covers_encoded_body() {
        let signer = RequestSigner::new("private-key");
        let signed = signer.sign(&sample_params()).unwrap();
        assert_eq!(signed.body(), sample_params().encode().as_slice());
        assert_eq!(
            signed.signature(),
            signer.sign_bytes(signed.body()).unwrap()
        );
    }

    #[test]
    fn test_private_key_changes_digest() {
        let a = RequestSigner::new("key-a").sign(&sample_params()).unwrap();
        let b = RequestSigner::new("key-b").sign(&sample_params()).unwrap();
        assert_eq!(a.body(), b.body());
        assert_ne!(a.signature(), b.signature());
    }

    #[rstest]
    #[case("cmd", "get_tx_ids")]
    #[case("key", "other-key")]
    #[case("version", "2")]
    #[case("format", "xml")]
    #[case("limit", "11")]
    #[case("txid", "T2")]
    fn test_single_value_change_changes_digest(#[case] name: &str, #[case] replacement: &str) {
        let signer = RequestSigner::new("private-key");
        let baseline = signer.sign(&sample_params()).unwrap();

        let mut changed = RequestParams::new();
        for (key, value) in sample_params().iter() {
            if key == name {
                changed.push(key, replacement);
            } else {
                changed.push(key, value.clone());
            }
        }
        let altered = signer.sign(&changed).unwrap();
        assert_ne!(baseline.signature(), altered.signature());
    }

    #[test]
    fn test_empty_key_is_accepted() {
        let signed = RequestSigner::new("").sign(&sample_params()).unwrap();
        assert_eq!(signed.signature().len(), 128);
    }
}
