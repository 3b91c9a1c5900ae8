//! Shared application state handed to every handler.

use std::sync::Arc;

use adapters::CredentialStore;

use crate::auth::{AuthResult, AuthService, PasswordHasher, TokenIssuer};
use crate::config::AuthConfig;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub store: Arc<dyn CredentialStore>,
}

impl AppState {
    /// Fails when the signing secret is empty or the bcrypt cost is out of
    /// range.
    pub fn new(store: Arc<dyn CredentialStore>, config: &AuthConfig) -> AuthResult<Self> {
        let hasher = PasswordHasher::new(config.bcrypt_cost)?;
        let tokens = TokenIssuer::new(&config.jwt_secret)?;
        let auth = AuthService::new(store.clone(), hasher, tokens)?;

        Ok(Self {
            auth: Arc::new(auth),
            store,
        })
    }
}
