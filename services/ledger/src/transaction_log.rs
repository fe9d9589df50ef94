//! Transaction Log
//!
//! Append-only, per-wallet ordered sequence of deposit records. Reads return
//! a copy of the sequence so concurrent appends never disturb a caller that
//! is iterating a previous snapshot.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use types::ids::WalletId;
use types::transaction::Transaction;

#[derive(Debug, Default)]
pub struct TransactionLog {
    entries: DashMap<WalletId, Vec<Transaction>>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Append a deposit record with a freshly generated id.
    ///
    /// Insertion order is preserved per wallet.
    pub fn append(&self, wallet_id: &WalletId, amount: f64, timestamp: DateTime<Utc>) -> Transaction {
        let transaction = Transaction::new(wallet_id.clone(), amount, timestamp);
        self.entries
            .entry(wallet_id.clone())
            .or_default()
            .push(transaction.clone());
        transaction
    }

    /// Snapshot of every record for a wallet, oldest first.
    ///
    /// Empty when nothing has been recorded.
    pub fn list_for_wallet(&self, wallet_id: &WalletId) -> Vec<Transaction> {
        self.entries
            .get(wallet_id)
            .map(|txs| txs.value().clone())
            .unwrap_or_default()
    }
}
