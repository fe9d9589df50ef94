use serde::{Deserialize, Serialize};

/// Deposit payload: either a bare JSON number or `{"amount": number}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DepositRequest {
    Bare(f64),
    Object { amount: f64 },
}

impl DepositRequest {
    pub fn amount(&self) -> f64 {
        match *self {
            DepositRequest::Bare(amount) | DepositRequest::Object { amount } => amount,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BalanceResponse {
    pub balance: f64,
}
