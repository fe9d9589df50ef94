//! Types library for the wallet ledger
//!
//! Shared type definitions used by the ledger core and the HTTP gateway.
//!
//! # Modules
//! - `ids`: Identifiers (WalletId, TransactionId)
//! - `wallet`: Wallet state and identification tier caps
//! - `transaction`: Deposit records and monthly aggregation
//! - `errors`: Error taxonomy

pub mod ids;
pub mod wallet;
pub mod transaction;
pub mod errors;
