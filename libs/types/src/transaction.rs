//! Deposit transaction records and monthly aggregation
//!
//! Transactions are immutable once created and reference their wallet by id only.

use crate::ids::{TransactionId, WalletId};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A committed deposit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub wallet_id: WalletId,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a new deposit record with a fresh id
    pub fn new(wallet_id: WalletId, amount: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            wallet_id,
            amount,
            timestamp,
        }
    }

    /// True when the record falls in the same UTC calendar year and month as `now`
    pub fn in_month_of(&self, now: DateTime<Utc>) -> bool {
        self.timestamp.year() == now.year() && self.timestamp.month() == now.month()
    }
}

/// Count and sum of deposits over a calendar month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub count: u64,
    pub sum: f64,
}

impl MonthlySummary {
    /// Aggregate the records falling in the calendar month of `now`.
    pub fn for_month<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
        now: DateTime<Utc>,
    ) -> Self {
        transactions
            .into_iter()
            .filter(|tx| tx.in_month_of(now))
            .fold(Self::default(), |acc, tx| Self {
                count: acc.count + 1,
                sum: acc.sum + tx.amount,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_transaction_json_uses_camel_case() {
        let tx = Transaction::new(WalletId::new("u1"), 10.0, at(2026, 10, 1));
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["walletId"], "u1");
        assert_eq!(value["amount"], 10.0);
        assert!(value.get("wallet_id").is_none());
    }

    #[test]
    fn test_in_month_of_compares_year_and_month() {
        let now = at(2026, 10, 16);
        let wid = WalletId::new("u1");
        assert!(Transaction::new(wid.clone(), 1.0, at(2026, 10, 1)).in_month_of(now));
        assert!(!Transaction::new(wid.clone(), 1.0, at(2026, 9, 30)).in_month_of(now));
        // Same month, previous year
        assert!(!Transaction::new(wid, 1.0, at(2025, 10, 16)).in_month_of(now));
    }

    #[test]
    fn test_monthly_summary_empty() {
        let summary = MonthlySummary::for_month(&Vec::<Transaction>::new(), at(2026, 10, 16));
        assert_eq!(summary, MonthlySummary { count: 0, sum: 0.0 });
    }

    #[test]
    fn test_monthly_summary_filters_other_months() {
        let wid = WalletId::new("u1");
        let txs = vec![
            Transaction::new(wid.clone(), 100.0, at(2026, 10, 2)),
            Transaction::new(wid.clone(), 50.0, at(2026, 10, 15)),
            Transaction::new(wid.clone(), 75.0, at(2026, 9, 28)),
            Transaction::new(wid, 25.0, at(2025, 10, 3)),
        ];
        let summary = MonthlySummary::for_month(&txs, at(2026, 10, 16));
        assert_eq!(summary.count, 2);
        assert_eq!(summary.sum, 150.0);
    }
}
