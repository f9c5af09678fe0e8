//! Request signing.
//!
//! The gateway authenticates a request by a digest over its sorted fields wrapped in the
//! shared secret. The digest lives behind [`SignatureScheme`] so a client can switch
//! schemes without touching parameter building.

use std::fmt::Debug;

use sha2::{Digest, Sha256};

use crate::domain::{ParameterSet, SmsKey};

/// Computes the `signature` field for a parameter set.
///
/// Implementations must be pure: the same key and parameters always give the same output.
pub trait SignatureScheme: Debug + Send + Sync {
    fn sign(&self, key: &SmsKey, params: &ParameterSet) -> String;
}

/// Concatenate `key` + `value` for every pair in key order, with no separators.
pub fn canonical_string(params: &ParameterSet) -> String {
    params.iter().fold(String::new(), |mut acc, (key, value)| {
        acc.push_str(key);
        acc.push_str(value);
        acc
    })
}

#[derive(Debug, Clone, Copy, Default)]
/// The gateway's legacy scheme: `hex(sha256(hex(sha256(key + canonical + key))))`.
///
/// The digest is applied twice; the inner digest is hex-encoded before hashing again.
pub struct DoubleSha256;

impl SignatureScheme for DoubleSha256 {
    fn sign(&self, key: &SmsKey, params: &ParameterSet) -> String {
        let canonical = canonical_string(params);
        log::debug!("signing {} parameters", params.len());

        let mut inner = Sha256::new();
        inner.update(key.as_str().as_bytes());
        inner.update(canonical.as_bytes());
        inner.update(key.as_str().as_bytes());
        let inner = hex::encode(inner.finalize());

        hex::encode(Sha256::digest(inner.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ParameterSet {
        let mut params = ParameterSet::new();
        params.insert("templateId", "1");
        params.insert("smsUser", "user");
        params.insert("vars", r#"{"code":"1234"}"#);
        params.insert("phone", "13800138000");
        params.insert("msgType", "0");
        params
    }

    fn key() -> SmsKey {
        SmsKey::new("secret").unwrap()
    }

    #[test]
    fn canonical_string_joins_sorted_pairs_without_separators() {
        assert_eq!(
            canonical_string(&params()),
            r#"msgType0phone13800138000smsUserusertemplateId1vars{"code":"1234"}"#
        );
        assert_eq!(canonical_string(&ParameterSet::new()), "");
    }

    #[test]
    fn signature_is_lowercase_hex_of_double_digest() {
        let signature = DoubleSha256.sign(&key(), &params());
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );

        let wrapped = format!("secret{}secret", canonical_string(&params()));
        let inner = hex::encode(Sha256::digest(wrapped.as_bytes()));
        let expected = hex::encode(Sha256::digest(inner.as_bytes()));
        assert_eq!(signature, expected);
        assert_ne!(signature, inner);
    }

    #[test]
    fn signature_is_deterministic() {
        assert_eq!(
            DoubleSha256.sign(&key(), &params()),
            DoubleSha256.sign(&key(), &params())
        );
    }

    #[test]
    fn signature_changes_with_any_value_or_key() {
        let base = DoubleSha256.sign(&key(), &params());

        let mut changed = params();
        changed.insert("phone", "13800138001");
        assert_ne!(DoubleSha256.sign(&key(), &changed), base);

        let mut changed = params();
        changed.insert("msgType", "2");
        assert_ne!(DoubleSha256.sign(&key(), &changed), base);

        let other_key = SmsKey::new("secret2").unwrap();
        assert_ne!(DoubleSha256.sign(&other_key, &params()), base);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let mut reversed = ParameterSet::new();
        for (key, value) in params().iter().collect::<Vec<_>>().into_iter().rev() {
            reversed.insert(key, value);
        }
        assert_eq!(
            DoubleSha256.sign(&key(), &reversed),
            DoubleSha256.sign(&key(), &params())
        );
    }
}
