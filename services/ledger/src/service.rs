//! Ledger Service — orchestrator
//!
//! Composes the wallet store and transaction log into the five ledger
//! operations: create, check, balance, deposit and monthly summary.

use std::sync::Arc;

use tracing::{debug, info, warn};
use types::errors::LedgerError;
use types::ids::WalletId;
use types::transaction::{MonthlySummary, Transaction};
use types::wallet::Wallet;

use crate::clock::{Clock, SystemClock};
use crate::transaction_log::TransactionLog;
use crate::wallet_store::WalletStore;

/// Process-wide ledger state.
///
/// Constructed once at startup and shared by handle with request handlers.
#[derive(Debug)]
pub struct Ledger {
    wallets: WalletStore,
    transactions: TransactionLog,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    /// Create an empty ledger on the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty ledger reading time from `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            wallets: WalletStore::new(),
            transactions: TransactionLog::new(),
            clock,
        }
    }

    /// Seed existing wallets. Seeded balances have no transaction history.
    pub fn with_wallets(mut self, wallets: impl IntoIterator<Item = Wallet>) -> Self {
        self.wallets = WalletStore::with_wallets(wallets);
        self
    }

    pub fn create_wallet(&self, id: WalletId) -> Result<Wallet, LedgerError> {
        let wallet = self.wallets.create(id)?;
        info!(wallet_id = %wallet.id, "wallet created");
        Ok(wallet)
    }

    pub fn check_wallet(&self, id: &WalletId) -> Result<Wallet, LedgerError> {
        self.wallets.get(id).inspect_err(|_| {
            debug!(wallet_id = %id, "wallet lookup missed");
        })
    }

    pub fn balance(&self, id: &WalletId) -> Result<f64, LedgerError> {
        self.check_wallet(id).map(|w| w.balance)
    }

    /// Deposit funds and record the transaction.
    ///
    /// The transaction is appended inside the wallet's commit, so a record
    /// exists if and only if the balance change was stored.
    pub fn deposit(&self, id: &WalletId, amount: f64) -> Result<Wallet, LedgerError> {
        if !amount.is_finite() || amount <= 0.0 {
            warn!(wallet_id = %id, amount, "deposit rejected: invalid amount");
            return Err(LedgerError::InvalidAmount { amount });
        }

        let timestamp = self.clock.now();
        let result = self.wallets.deposit_and_commit(id, amount, |_| {
            self.transactions.append(id, amount, timestamp);
        });

        match &result {
            Ok(wallet) => {
                info!(wallet_id = %id, amount, balance = wallet.balance, "deposit committed");
            }
            Err(LedgerError::CapExceeded { cap, balance, .. }) => {
                warn!(wallet_id = %id, amount, balance, cap, "deposit rejected: cap exceeded");
            }
            Err(err) => {
                debug!(wallet_id = %id, amount, error = %err, "deposit rejected");
            }
        }
        result
    }

    /// Deposit count and sum for the current UTC calendar month.
    ///
    /// Unknown wallets and wallets without deposits yield a zero summary.
    pub fn monthly_summary(&self, id: &WalletId) -> MonthlySummary {
        let now = self.clock.now();
        let transactions = self.transactions.list_for_wallet(id);
        MonthlySummary::for_month(&transactions, now)
    }

    /// Full deposit history of a wallet, oldest first
    pub fn transactions(&self, id: &WalletId) -> Vec<Transaction> {
        self.transactions.list_for_wallet(id)
    }

    pub fn wallet_count(&self) -> usize {
        self.wallets.len()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
