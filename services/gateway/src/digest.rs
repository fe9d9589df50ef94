//! Request digest verification
//!
//! A digest is the hex-encoded HMAC of the exact raw request body, keyed by
//! the process-wide shared secret. Requests without a body hash the empty
//! byte sequence.

use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use std::fmt;
use subtle::ConstantTimeEq;

/// Hash function underlying the HMAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DigestAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

/// Verifies request bodies against caller-supplied digests
#[derive(Clone)]
pub struct DigestVerifier {
    key: Vec<u8>,
    algorithm: DigestAlgorithm,
}

impl DigestVerifier {
    pub fn new(secret: impl AsRef<[u8]>, algorithm: DigestAlgorithm) -> Self {
        Self {
            key: secret.as_ref().to_vec(),
            algorithm,
        }
    }

    fn mac(&self, body: &[u8]) -> Result<Vec<u8>, InvalidLength> {
        let tag = match self.algorithm {
            DigestAlgorithm::Sha1 => {
                let mut mac = Hmac::<Sha1>::new_from_slice(&self.key)?;
                mac.update(body);
                mac.finalize().into_bytes().to_vec()
            }
            DigestAlgorithm::Sha256 => {
                let mut mac = Hmac::<Sha256>::new_from_slice(&self.key)?;
                mac.update(body);
                mac.finalize().into_bytes().to_vec()
            }
        };
        Ok(tag)
    }

    /// Lowercase hex digest of `body`
    pub fn sign(&self, body: &[u8]) -> Result<String, InvalidLength> {
        self.mac(body).map(hex::encode)
    }

    /// Check a supplied hex digest against `body` in constant time.
    ///
    /// Malformed hex, wrong length, or any mismatch yields `false`.
    pub fn verify(&self, body: &[u8], supplied: &str) -> bool {
        let Ok(supplied) = hex::decode(supplied.trim()) else {
            return false;
        };
        match self.mac(body) {
            Ok(expected) => expected.ct_eq(&supplied).into(),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for DigestVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestVerifier")
            .field("key", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known HMAC vectors for key "key" over the pangram below
    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_sha1_known_vector() {
        let verifier = DigestVerifier::new("key", DigestAlgorithm::Sha1);
        assert_eq!(
            verifier.sign(FOX).unwrap(),
            "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9"
        );
    }

    #[test]
    fn test_sha256_known_vector() {
        let verifier = DigestVerifier::new("key", DigestAlgorithm::Sha256);
        assert_eq!(
            verifier.sign(FOX).unwrap(),
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[test]
    fn test_verify_accepts_matching_digest() {
        let verifier = DigestVerifier::new("your-secret-key", DigestAlgorithm::Sha1);
        let body = br#"{"amount": 100}"#;
        let digest = verifier.sign(body).unwrap();
        assert!(verifier.verify(body, &digest));
        assert!(verifier.verify(body, &digest.to_uppercase()));
    }

    #[test]
    fn test_verify_rejects_altered_body() {
        let verifier = DigestVerifier::new("your-secret-key", DigestAlgorithm::Sha256);
        let digest = verifier.sign(br#"{"amount": 100}"#).unwrap();
        assert!(!verifier.verify(br#"{"amount": 1000}"#, &digest));
    }

    #[test]
    fn test_verify_rejects_other_key() {
        let signer = DigestVerifier::new("other-key", DigestAlgorithm::Sha1);
        let verifier = DigestVerifier::new("your-secret-key", DigestAlgorithm::Sha1);
        let digest = signer.sign(b"").unwrap();
        assert!(!verifier.verify(b"", &digest));
    }

    #[test]
    fn test_empty_body() {
        let verifier = DigestVerifier::new("your-secret-key", DigestAlgorithm::Sha1);
        let empty_digest = verifier.sign(b"").unwrap();
        assert!(verifier.verify(b"", &empty_digest));
        assert!(!verifier.verify(b"", ""));
        assert!(!verifier.verify(b"", "deadbeef"));
    }

    #[test]
    fn test_malformed_hex_rejected() {
        let verifier = DigestVerifier::new("your-secret-key", DigestAlgorithm::Sha1);
        assert!(!verifier.verify(b"", "not-hex-at-all"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let verifier = DigestVerifier::new("super-secret", DigestAlgorithm::Sha1);
        let rendered = format!("{:?}", verifier);
        assert!(!rendered.contains("super-secret"));
    }
}
