//! Wallet Store
//!
//! Concurrency-safe mapping from wallet id to wallet state. Each key is
//! guarded by its shard's reader/writer lock: concurrent reads proceed
//! together, a write on a wallet excludes every other access to it.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use types::errors::LedgerError;
use types::ids::WalletId;
use types::wallet::Wallet;

/// Store of wallet balances keyed by wallet id
#[derive(Debug, Default)]
pub struct WalletStore {
    wallets: DashMap<WalletId, Wallet>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self {
            wallets: DashMap::new(),
        }
    }

    /// Create a store pre-populated with existing wallets.
    ///
    /// Later entries with a duplicate id replace earlier ones. Every seed must
    /// already satisfy `0 <= balance <= cap`.
    pub fn with_wallets(wallets: impl IntoIterator<Item = Wallet>) -> Self {
        Self {
            wallets: wallets
                .into_iter()
                .map(|w| {
                    debug_assert!(
                        w.check_invariant(),
                        "seeded wallet {} violates balance invariant",
                        w.id
                    );
                    (w.id.clone(), w)
                })
                .collect(),
        }
    }

    /// Get a snapshot of a wallet
    pub fn get(&self, id: &WalletId) -> Result<Wallet, LedgerError> {
        self.wallets
            .get(id)
            .map(|w| w.value().clone())
            .ok_or_else(|| LedgerError::not_found(id))
    }

    /// Create an empty, unidentified wallet.
    ///
    /// The existence check and insert happen under the same entry lock, so of
    /// any number of concurrent calls for one id exactly one succeeds.
    pub fn create(&self, id: WalletId) -> Result<Wallet, LedgerError> {
        match self.wallets.entry(id) {
            Entry::Occupied(occupied) => Err(LedgerError::already_exists(occupied.key())),
            Entry::Vacant(vacant) => {
                let wallet = Wallet::new(vacant.key().clone());
                vacant.insert(wallet.clone());
                Ok(wallet)
            }
        }
    }

    /// Credit `amount` to a wallet, enforcing its tier cap.
    ///
    /// The cap check, `within_commit` and the balance write all run while the
    /// wallet's exclusive guard is held. `within_commit` sees the updated wallet
    /// before it is stored; if it panics the stored balance is untouched.
    pub fn deposit_and_commit<F>(
        &self,
        id: &WalletId,
        amount: f64,
        within_commit: F,
    ) -> Result<Wallet, LedgerError>
    where
        F: FnOnce(&Wallet),
    {
        let mut entry = self
            .wallets
            .get_mut(id)
            .ok_or_else(|| LedgerError::not_found(id))?;

        let mut updated = entry.value().clone();
        updated.credit(amount)?;

        within_commit(&updated);

        *entry = updated.clone();
        Ok(updated)
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }
}
