//! Wallet state and identification tier caps
//!
//! A wallet's balance is bounded by the cap of its identification tier.
//! Balances only ever grow through deposits.

use crate::errors::LedgerError;
use crate::ids::WalletId;
use serde::{Deserialize, Serialize};

/// Maximum balance for a wallet whose owner has been identified
pub const MAX_BALANCE_IDENTIFIED: f64 = 100_000.0;

/// Maximum balance for an unidentified wallet
pub const MAX_BALANCE_UNIDENTIFIED: f64 = 10_000.0;

/// Balance cap for an identification tier.
pub fn cap_for(identified: bool) -> f64 {
    if identified {
        MAX_BALANCE_IDENTIFIED
    } else {
        MAX_BALANCE_UNIDENTIFIED
    }
}

/// Wallet balance record
///
/// Invariant: 0 <= balance <= cap_for(identified)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub balance: f64,
    pub identified: bool,
}

impl Wallet {
    /// Create an empty, unidentified wallet
    pub fn new(id: WalletId) -> Self {
        Self {
            id,
            balance: 0.0,
            identified: false,
        }
    }

    /// Mark the wallet as belonging to an identified owner
    pub fn with_identified(mut self, identified: bool) -> Self {
        self.identified = identified;
        self
    }

    /// Set an opening balance (used when seeding a store)
    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    /// Cap for this wallet's current tier
    pub fn cap(&self) -> f64 {
        cap_for(self.identified)
    }

    pub fn check_invariant(&self) -> bool {
        self.balance >= 0.0 && self.balance <= self.cap()
    }

    /// Credit a deposit, enforcing the tier cap.
    ///
    /// Landing exactly on the cap is allowed; only exceeding it is rejected.
    /// On error the wallet is left unchanged.
    pub fn credit(&mut self, amount: f64) -> Result<f64, LedgerError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount { amount });
        }

        let new_balance = self.balance + amount;
        let cap = self.cap();
        if new_balance > cap {
            return Err(LedgerError::CapExceeded {
                wallet_id: self.id.to_string(),
                balance: self.balance,
                amount,
                cap,
            });
        }

        self.balance = new_balance;
        Ok(new_balance)
    }
}
