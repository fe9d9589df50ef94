use crate::error::AppError;
use crate::handlers::wallet;
use crate::state::AppState;
use axum::{http::Uri, routing::any, Router};
use tower_http::trace::TraceLayer;

/// Routes match on path alone; clients may use any HTTP method.
pub fn create_router(state: AppState) -> Router {
    let wallet_routes = Router::new()
        .route("/create", any(wallet::create_wallet))
        .route("/check", any(wallet::check_wallet))
        .route("/deposit", any(wallet::deposit))
        .route("/balance", any(wallet::get_balance))
        .route("/operations", any(wallet::monthly_operations));

    Router::new()
        .nest("/wallets", wallet_routes)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
