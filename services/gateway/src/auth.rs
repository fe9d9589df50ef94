use crate::error::AppError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, HeaderName},
};
use types::ids::WalletId;

pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-userid");
pub const DIGEST_HEADER: HeaderName = HeaderName::from_static("x-digest");

/// A request whose body matched its `X-Digest`.
///
/// The body is read exactly once during verification and carried here so
/// handlers can decode it afterwards.
#[derive(Debug)]
pub struct SignedRequest {
    pub wallet_id: WalletId,
    pub body: Bytes,
}

fn header_value(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

fn invalid_digest() -> AppError {
    AppError::Unauthorized("Invalid digest".to_string())
}

impl FromRequest<AppState> for SignedRequest {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let user_id = header_value(req.headers(), &USER_ID_HEADER);
        let digest = header_value(req.headers(), &DIGEST_HEADER);

        // A body that cannot be read is reported as a digest failure, never as
        // a distinct error.
        let body = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::warn!(error = %err, "failed to read request body");
            invalid_digest()
        })?;

        let Some(digest) = digest else {
            tracing::warn!("request rejected: missing digest");
            return Err(invalid_digest());
        };

        if !state.verifier.verify(&body, &digest) {
            tracing::warn!(
                user_id = user_id.as_deref().unwrap_or(""),
                "request rejected: digest mismatch"
            );
            return Err(invalid_digest());
        }

        let wallet_id = user_id
            .and_then(WalletId::try_new)
            .ok_or_else(|| AppError::BadRequest("Missing X-UserId header".to_string()))?;

        Ok(SignedRequest { wallet_id, body })
    }
}
