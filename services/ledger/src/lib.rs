//! Wallet Ledger
//!
//! Concurrency-safe in-memory ledger tracking per-user wallet balances and the
//! deposit transactions that produced them.
//!
//! # Architecture
//!
//! ```text
//!        Ledger
//!          │
//!    ┌─────┴──────┐
//!    │            │
//! ┌──▼────────┐ ┌─▼──────────────┐
//! │WalletStore│ │TransactionLog  │
//! └───────────┘ └────────────────┘
//! ```
//!
//! A deposit holds the wallet's exclusive entry guard while the balance is
//! checked against the tier cap, the transaction is appended, and the new
//! balance is written. Lock order is always wallet store, then transaction log.

pub mod clock;
pub mod wallet_store;
pub mod transaction_log;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use service::Ledger;
pub use transaction_log::TransactionLog;
pub use wallet_store::WalletStore;
