use crate::auth::SignedRequest;
use crate::error::AppError;
use crate::handlers::json_response;
use crate::models::{BalanceResponse, DepositRequest};
use crate::state::AppState;
use axum::{extract::State, response::Response};

pub async fn create_wallet(
    State(state): State<AppState>,
    request: SignedRequest,
) -> Result<Response, AppError> {
    let wallet = state.ledger.create_wallet(request.wallet_id)?;
    json_response(&wallet)
}

pub async fn check_wallet(
    State(state): State<AppState>,
    request: SignedRequest,
) -> Result<Response, AppError> {
    let wallet = state.ledger.check_wallet(&request.wallet_id)?;
    json_response(&wallet)
}

pub async fn deposit(
    State(state): State<AppState>,
    request: SignedRequest,
) -> Result<Response, AppError> {
    let payload: DepositRequest = serde_json::from_slice(&request.body)
        .map_err(|_| AppError::BadRequest("Invalid request body".to_string()))?;

    let wallet = state.ledger.deposit(&request.wallet_id, payload.amount())?;
    json_response(&wallet)
}

pub async fn get_balance(
    State(state): State<AppState>,
    request: SignedRequest,
) -> Result<Response, AppError> {
    let balance = state.ledger.balance(&request.wallet_id)?;
    json_response(&BalanceResponse { balance })
}

pub async fn monthly_operations(
    State(state): State<AppState>,
    request: SignedRequest,
) -> Result<Response, AppError> {
    let summary = state.ledger.monthly_summary(&request.wallet_id);
    json_response(&summary)
}
