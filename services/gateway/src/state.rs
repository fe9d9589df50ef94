use crate::digest::DigestVerifier;
use ledger::Ledger;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Ledger>,
    pub verifier: Arc<DigestVerifier>,
}

impl AppState {
    pub fn new(ledger: Ledger, verifier: DigestVerifier) -> Self {
        Self {
            ledger: Arc::new(ledger),
            verifier: Arc::new(verifier),
        }
    }
}
