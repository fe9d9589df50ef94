//! Error types for the wallet ledger
//!
//! Error taxonomy using thiserror

use thiserror::Error;

/// Ledger operation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Wallet not found: {wallet_id}")]
    WalletNotFound { wallet_id: String },

    #[error("Wallet already exists: {wallet_id}")]
    WalletAlreadyExists { wallet_id: String },

    #[error("Exceeded maximum balance {cap} for wallet {wallet_id}: balance {balance}, deposit {amount}")]
    CapExceeded {
        wallet_id: String,
        balance: f64,
        amount: f64,
        cap: f64,
    },

    #[error("Invalid deposit amount: {amount}")]
    InvalidAmount { amount: f64 },
}

impl LedgerError {
    pub fn not_found(wallet_id: impl ToString) -> Self {
        Self::WalletNotFound {
            wallet_id: wallet_id.to_string(),
        }
    }

    pub fn already_exists(wallet_id: impl ToString) -> Self {
        Self::WalletAlreadyExists {
            wallet_id: wallet_id.to_string(),
        }
    }
}
