//! Gateway configuration
//!
//! Every option can be given as a flag or through its environment variable.

use crate::digest::DigestAlgorithm;
use clap::Parser;
use std::fmt;
use std::net::SocketAddr;

#[derive(Clone, Parser)]
#[command(name = "gateway", version, about = "Authenticated HTTP gateway for the wallet ledger")]
pub struct GatewayConfig {
    /// Address to listen on
    #[arg(long, env = "LEDGER_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Shared secret keying the request digest
    #[arg(long, env = "LEDGER_SECRET_KEY", hide_env_values = true)]
    pub secret_key: String,

    /// Hash function used for the request digest HMAC
    #[arg(long, env = "LEDGER_DIGEST_ALGORITHM", value_enum, default_value_t = DigestAlgorithm::Sha1)]
    pub digest_algorithm: DigestAlgorithm,

    /// Emit logs as JSON lines
    #[arg(long, env = "LEDGER_LOG_JSON")]
    pub log_json: bool,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("bind", &self.bind)
            .field("secret_key", &"<redacted>")
            .field("digest_algorithm", &self.digest_algorithm)
            .field("log_json", &self.log_json)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let config = GatewayConfig::try_parse_from([
            "gateway",
            "--bind",
            "127.0.0.1:9000",
            "--secret-key",
            "s3cret",
            "--digest-algorithm",
            "sha256",
            "--log-json",
        ])
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.secret_key, "s3cret");
        assert_eq!(config.digest_algorithm, DigestAlgorithm::Sha256);
        assert!(config.log_json);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config =
            GatewayConfig::try_parse_from(["gateway", "--secret-key", "s3cret"]).unwrap();
        assert!(!format!("{:?}", config).contains("s3cret"));
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        let result = GatewayConfig::try_parse_from([
            "gateway",
            "--secret-key",
            "s3cret",
            "--digest-algorithm",
            "md5",
        ]);
        assert!(result.is_err());
    }
}
